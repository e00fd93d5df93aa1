//! Association edges: inferred structural references between entities.

use serde::{Deserialize, Serialize};

/// A FROM HAS-A TO edge derived from a member's resolved type identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    /// Owning entity id
    pub from: String,
    /// Owning entity display name
    pub from_name: String,
    /// Referenced entity id
    pub to: String,
    /// Referenced entity display name
    pub to_name: String,
    /// Name of the member that carries the reference
    pub label: String,
    pub cardinality: Cardinality,
    pub kind: AssociationKind,
}

/// How many instances of the target one owner holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

impl Cardinality {
    /// Cardinality implied by a member's display type.
    pub fn of_type(type_name: Option<&str>) -> Self {
        match type_name {
            Some(t) if t.ends_with("[]") => Self::Many,
            _ => Self::One,
        }
    }
}

/// Which part of the owner's signature carries the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// Property type
    Property,
    /// Method return type
    ReturnType,
    /// Method parameter type
    Argument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_of_type() {
        assert_eq!(Cardinality::of_type(Some("Wheel[]")), Cardinality::Many);
        assert_eq!(Cardinality::of_type(Some("[]")), Cardinality::Many);
        assert_eq!(Cardinality::of_type(Some("Engine")), Cardinality::One);
        assert_eq!(Cardinality::of_type(None), Cardinality::One);
    }
}

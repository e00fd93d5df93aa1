//! Entity nodes: Classes, Interfaces, Enums, Type aliases, and their members.

use serde::{Deserialize, Serialize};

use super::ModifierFlags;

// =============================================================================
// CLASS ENTITY
// =============================================================================

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntity {
    /// Display name, e.g. `Repository<T>`
    pub name: String,

    /// Fully-qualified symbol path, empty if unresolvable
    pub id: String,

    /// Declared properties followed by constructor parameter properties
    pub properties: Vec<PropertyDetail>,

    /// Declared methods
    pub methods: Vec<MethodDetail>,
}

impl ClassEntity {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// INTERFACE ENTITY
// =============================================================================

/// An interface declaration, possibly merged from several declarations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceEntity {
    pub name: String,
    pub id: String,
    pub properties: Vec<PropertyDetail>,
    pub methods: Vec<MethodDetail>,
}

impl InterfaceEntity {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// ENUM ENTITY
// =============================================================================

/// An enum declaration. Only member names are kept, never values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumEntity {
    pub name: String,
    pub id: String,
    pub enum_items: Vec<String>,
}

// =============================================================================
// TYPE ALIAS ENTITY
// =============================================================================

/// A type alias whose target is an object type literal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasEntity {
    pub name: String,
    pub id: String,
    pub properties: Vec<PropertyDetail>,
    pub methods: Vec<MethodDetail>,
}

// =============================================================================
// MEMBERS
// =============================================================================

/// A property, property signature, or promoted constructor parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    /// Property name
    pub name: String,

    /// Combined modifiers, interpreted by the renderer
    pub modifier_flags: ModifierFlags,

    /// Display string of the declared type
    #[serde(rename = "type")]
    pub type_name: Option<String>,

    /// Identities the type references; empty for primitives and type parameters
    pub type_ids: Vec<String>,
}

/// A method or method signature.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDetail {
    pub name: String,

    pub modifier_flags: ModifierFlags,

    /// Display string of the return type
    pub return_type: Option<String>,

    /// Present only when the return type carries a symbol
    pub return_type_ids: Option<Vec<String>>,

    /// Parameter type display strings in declaration order, blanks removed
    pub arguments: Vec<String>,

    /// Present only when at least one parameter type carries a symbol
    pub argument_ids: Option<Vec<ArgumentIds>>,
}

/// Resolved identities of a single method parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgumentIds {
    pub name: String,
    pub ids: Vec<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_serializes_type_field() {
        let prop = PropertyDetail {
            name: "engine".to_string(),
            modifier_flags: ModifierFlags::PRIVATE,
            type_name: Some("Engine".to_string()),
            type_ids: vec!["\"car\".Engine".to_string()],
        };

        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "Engine");
        assert_eq!(json["typeIds"][0], "\"car\".Engine");
        assert_eq!(json["modifierFlags"], ModifierFlags::PRIVATE.bits());
    }

    #[test]
    fn test_method_serializes_argument_ids() {
        let method = MethodDetail {
            name: "drive".to_string(),
            return_type: Some("void".to_string()),
            arguments: vec!["Driver".to_string(), "number".to_string()],
            argument_ids: Some(vec![ArgumentIds {
                name: "driver".to_string(),
                ids: vec!["Driver".to_string()],
                type_name: Some("Driver".to_string()),
            }]),
            ..Default::default()
        };

        let json = serde_json::to_value(&method).unwrap();
        assert!(json["returnTypeIds"].is_null());
        assert_eq!(json["argumentIds"][0]["name"], "driver");
        assert_eq!(json["argumentIds"][0]["type"], "Driver");
        assert_eq!(json["arguments"][1], "number");
    }
}

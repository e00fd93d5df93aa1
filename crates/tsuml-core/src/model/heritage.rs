//! Heritage edges: declared inheritance between entities.
//!
//! - EXTENDS: class extends base class, or class applies a mixin
//! - IMPLEMENTS: class implements interface, interface extends interface

use serde::{Deserialize, Serialize};

/// Direction-carrying relation type of a heritage clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeritageClauseType {
    Extends,
    Implements,
}

/// A CLASS_NAME (EXTENDS|IMPLEMENTS) CLAUSE edge.
///
/// Interface inheritance is recorded as `Implements` so that all
/// interface-to-interface edges render the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeritageClause {
    /// Target display name
    pub clause: String,
    /// Target identity, if the target type resolved to a symbol
    pub clause_type_id: Option<String>,
    /// Source display name
    pub class_name: String,
    /// Source identity
    pub class_type_id: String,
    #[serde(rename = "type")]
    pub clause_type: HeritageClauseType,
}

impl HeritageClause {
    pub fn extends(
        class_name: impl Into<String>,
        class_type_id: impl Into<String>,
        clause: impl Into<String>,
        clause_type_id: Option<String>,
    ) -> Self {
        Self {
            clause: clause.into(),
            clause_type_id,
            class_name: class_name.into(),
            class_type_id: class_type_id.into(),
            clause_type: HeritageClauseType::Extends,
        }
    }

    pub fn implements(
        class_name: impl Into<String>,
        class_type_id: impl Into<String>,
        clause: impl Into<String>,
        clause_type_id: Option<String>,
    ) -> Self {
        Self {
            clause_type: HeritageClauseType::Implements,
            ..Self::extends(class_name, class_type_id, clause, clause_type_id)
        }
    }
}

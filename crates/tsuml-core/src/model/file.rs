//! Per source unit bundle of translated declarations.

use serde::{Deserialize, Serialize};

use super::{
    Association, ClassEntity, Entity, EnumEntity, HeritageClause, InterfaceEntity,
    TypeAliasEntity,
};

/// Everything translated from one source file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDeclaration {
    /// Path of the source unit as reported by the frontend.
    pub file_name: String,

    pub classes: Vec<ClassEntity>,

    pub interfaces: Vec<InterfaceEntity>,

    pub enums: Vec<EnumEntity>,

    pub types: Vec<TypeAliasEntity>,

    /// One inner list per class, then per interface, that declared any heritage.
    pub heritage_clauses: Vec<Vec<HeritageClause>>,

    /// Filled by the association pass; empty when it is disabled.
    pub member_associations: Vec<Association>,
}

impl FileDeclaration {
    /// Create an empty bundle for the given file.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Number of entities of any kind.
    pub fn entity_count(&self) -> usize {
        self.classes.len() + self.interfaces.len() + self.enums.len() + self.types.len()
    }

    /// Owned copies of every entity, in class, interface, enum, type order.
    pub fn entities(&self) -> Vec<Entity> {
        self.classes
            .iter()
            .cloned()
            .map(Entity::from)
            .chain(self.interfaces.iter().cloned().map(Entity::from))
            .chain(self.enums.iter().cloned().map(Entity::from))
            .chain(self.types.iter().cloned().map(Entity::from))
            .collect()
    }

    /// All heritage clauses, flattened.
    pub fn heritage(&self) -> impl Iterator<Item = &HeritageClause> {
        self.heritage_clauses.iter().flatten()
    }
}

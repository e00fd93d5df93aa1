//! Diagram model produced by the translation layer.
//!
//! The model is what the renderer consumes. It holds no handles into the
//! frontend: every entity, member and edge is plain owned data.
//!
//! ## Modules
//!
//! - `entity` - Node types: Class, Interface, Enum, TypeAlias and their members
//! - `modifiers` - Opaque modifier bitset passed through from the frontend
//! - `heritage` - Declared inheritance edges (EXTENDS, IMPLEMENTS)
//! - `association` - Inferred "has-a" edges between entities
//! - `file` - Per source unit bundle handed to the renderer

mod association;
mod entity;
mod file;
mod heritage;
mod modifiers;

pub use association::{Association, AssociationKind, Cardinality};
pub use entity::{
    ArgumentIds, ClassEntity, EnumEntity, InterfaceEntity, MethodDetail, PropertyDetail,
    TypeAliasEntity,
};
pub use file::FileDeclaration;
pub use heritage::{HeritageClause, HeritageClauseType};
pub use modifiers::ModifierFlags;

use serde::{Deserialize, Serialize};

/// Kinds of diagram entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    Interface,
    Enum,
    TypeAlias,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Interface => write!(f, "interface"),
            Self::Enum => write!(f, "enum"),
            Self::TypeAlias => write!(f, "type"),
        }
    }
}

/// A named diagram node of any kind.
///
/// Shares `name` and `id` across variants; the payload decides which member
/// lists exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Class(ClassEntity),
    Interface(InterfaceEntity),
    Enum(EnumEntity),
    TypeAlias(TypeAliasEntity),
}

impl Entity {
    /// Get the kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Class(_) => EntityKind::Class,
            Self::Interface(_) => EntityKind::Interface,
            Self::Enum(_) => EntityKind::Enum,
            Self::TypeAlias(_) => EntityKind::TypeAlias,
        }
    }

    /// Get the display name (may include a generic parameter list).
    pub fn name(&self) -> &str {
        match self {
            Self::Class(e) => &e.name,
            Self::Interface(e) => &e.name,
            Self::Enum(e) => &e.name,
            Self::TypeAlias(e) => &e.name,
        }
    }

    /// Get the identity; empty when the symbol path was unavailable.
    pub fn id(&self) -> &str {
        match self {
            Self::Class(e) => &e.id,
            Self::Interface(e) => &e.id,
            Self::Enum(e) => &e.id,
            Self::TypeAlias(e) => &e.id,
        }
    }
}

impl From<ClassEntity> for Entity {
    fn from(e: ClassEntity) -> Self {
        Self::Class(e)
    }
}

impl From<InterfaceEntity> for Entity {
    fn from(e: InterfaceEntity) -> Self {
        Self::Interface(e)
    }
}

impl From<EnumEntity> for Entity {
    fn from(e: EnumEntity) -> Self {
        Self::Enum(e)
    }
}

impl From<TypeAliasEntity> for Entity {
    fn from(e: TypeAliasEntity) -> Self {
        Self::TypeAlias(e)
    }
}

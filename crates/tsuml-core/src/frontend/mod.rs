//! Type-checking frontend interface.
//!
//! The translation layer never parses source itself. It reads an already
//! type-checked program through the [`Frontend`] trait, which exposes
//! declarations, types and symbols as opaque `Copy` handles.
//!
//! ## Components
//!
//! - `Frontend` trait - The query surface a checker bridge implements
//! - `MemoryProgram` - Arena-backed implementation, loadable from JSON
//! - `FrontendError` - Snapshot loading failures

mod error;
mod memory;
mod traits;

pub use error::FrontendError;
pub use memory::{DeclKind, DeclRecord, FileRecord, MemoryProgram, SymbolRecord, TypeRecord};
pub use traits::{AliasShape, DeclRef, FileRef, Frontend, SymbolRef, TypeRef, TypeShape};

//! tsuml-core: translation of type-checked TypeScript declarations into a
//! UML-style diagram model.
//!
//! The crate reads a program through the [`Frontend`] trait and produces a
//! [`Translation`]: one [`FileDeclaration`] per source unit holding classes,
//! interfaces, enums and object-literal type aliases, their heritage edges,
//! and optionally inferred member associations.
//!
//! ```
//! use tsuml_core::{translate, MemoryProgram, TranslateConfig};
//!
//! let mut program = MemoryProgram::new();
//! let file = program.add_file("src/zoo.ts");
//! program.declare_class(file, "Dog");
//!
//! let translation = translate(&program, &TranslateConfig::default());
//! assert_eq!(translation.files[0].classes[0].name, "Dog");
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod frontend;
pub mod model;
pub mod translate;

pub use config::{Config, ConfigError, TranslateConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{Result, TsumlError};
pub use frontend::{Frontend, FrontendError, MemoryProgram};
pub use model::{
    Association, ClassEntity, Entity, EntityKind, EnumEntity, FileDeclaration, HeritageClause,
    HeritageClauseType, InterfaceEntity, TypeAliasEntity,
};
pub use translate::{translate, Translation, TranslationStats, Translator};

/// Translate a JSON program snapshot file with the configuration found on disk.
pub fn translate_snapshot(path: impl AsRef<std::path::Path>) -> Result<Translation> {
    let config = Config::load()?;
    let program = MemoryProgram::from_file(path)?;
    Ok(translate(&program, &config.translate))
}

//! Translation from a type-checked program to the diagram model.
//!
//! ## Pipeline
//!
//! For every source unit, in frontend order:
//! 1. Classes are built and their heritage resolved
//! 2. Interfaces are built, merged by name, and their heritage resolved
//! 3. Type aliases of object literals are built
//! 4. Enums are built
//!
//! After the last unit, merged interfaces are written back into every file
//! and, if enabled, member associations are inferred over the whole set.

mod associations;
mod context;
mod declarations;
mod heritage;
mod members;
mod registry;
mod result;
mod types;

pub use associations::infer_associations;
pub use context::TranslationContext;
pub use declarations::{build_class, build_enum, build_interface, build_type_alias, UNRESOLVED_NAME};
pub use heritage::{class_heritage, interface_heritage};
pub use members::{extract_method, extract_property};
pub use registry::InterfaceRegistry;
pub use result::{Translation, TranslationStats};
pub use types::{display_name, display_type, resolve_type_ids, strip_import_qualifiers, NameSource};

use crate::config::TranslateConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::frontend::{FileRef, Frontend};
use crate::model::{ClassEntity, FileDeclaration};

/// Failure message reported when a run yields no entity at all.
pub const EMPTY_RESULT_MESSAGE: &str = "Could not process any class / interface / enum / type";

/// Drives one translation run over a frontend.
pub struct Translator<'a> {
    frontend: &'a dyn Frontend,
    config: TranslateConfig,
}

impl<'a> Translator<'a> {
    pub fn new(frontend: &'a dyn Frontend, config: TranslateConfig) -> Self {
        Self { frontend, config }
    }

    /// Translate every source unit.
    ///
    /// Never fails: problems with single declarations become diagnostics and
    /// an empty run is reported through [`Translation::failure`].
    pub fn translate(&self) -> Translation {
        let mut ctx = TranslationContext::new(self.frontend);

        let sources = self.frontend.source_files();
        if sources.is_empty() {
            log::warn!("no declarations found");
            ctx.report(DiagnosticKind::NoSourceFiles, "no declarations found");
        }

        let mut files: Vec<FileDeclaration> = sources
            .into_iter()
            .map(|file| self.translate_file(&mut ctx, file))
            .collect();

        let (interfaces, mut diagnostics) = ctx.into_parts();
        interfaces.rebind(&mut files);

        if self.config.member_associations {
            infer_associations(&mut files);
        }

        let mut failure = None;
        if files.iter().all(|f| f.entity_count() == 0) {
            log::error!("{}", EMPTY_RESULT_MESSAGE);
            diagnostics.push(Diagnostic::new(DiagnosticKind::EmptyResult, EMPTY_RESULT_MESSAGE));
            let mut placeholder = FileDeclaration::new("");
            placeholder.classes.push(ClassEntity::new(EMPTY_RESULT_MESSAGE, ""));
            files.push(placeholder);
            failure = Some(EMPTY_RESULT_MESSAGE.to_string());
        }

        Translation {
            files,
            diagnostics,
            failure,
        }
    }

    fn translate_file(&self, ctx: &mut TranslationContext<'a>, file: FileRef) -> FileDeclaration {
        let frontend = self.frontend;
        let path = frontend.file_path(file);
        log::info!("parsing source file {}", path);
        ctx.enter_file(path.clone());

        let mut declaration = FileDeclaration::new(path);
        let mut interface_heritage_clauses = Vec::new();

        for decl in frontend.classes(file) {
            declaration.classes.push(build_class(ctx, decl));
            let clauses = class_heritage(frontend, decl);
            if !clauses.is_empty() {
                declaration.heritage_clauses.push(clauses);
            }
        }

        for decl in frontend.interfaces(file) {
            let interface = build_interface(ctx, decl);
            declaration.interfaces.push(ctx.interfaces.merge(interface));
            let clauses = interface_heritage(frontend, decl);
            if !clauses.is_empty() {
                interface_heritage_clauses.push(clauses);
            }
        }
        declaration.heritage_clauses.extend(interface_heritage_clauses);

        declaration.types = frontend
            .type_aliases(file)
            .into_iter()
            .filter_map(|decl| build_type_alias(ctx, decl))
            .collect();

        declaration.enums = frontend
            .enums(file)
            .into_iter()
            .map(|decl| build_enum(ctx, decl))
            .collect();

        log::debug!(
            "translated {} entities from {}",
            declaration.entity_count(),
            declaration.file_name
        );
        declaration
    }
}

/// Translate a program with the given settings.
pub fn translate(frontend: &dyn Frontend, config: &TranslateConfig) -> Translation {
    Translator::new(frontend, config.clone()).translate()
}

//! Per-run translation state.

use super::registry::InterfaceRegistry;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::frontend::Frontend;

/// State shared by the builders during one translation run.
///
/// Created by the [`Translator`](super::Translator) at the start of a run and
/// dropped at its end, so nothing leaks between runs.
pub struct TranslationContext<'a> {
    pub(crate) frontend: &'a dyn Frontend,
    pub(crate) interfaces: InterfaceRegistry,
    diagnostics: Vec<Diagnostic>,
    current_file: Option<String>,
}

impl<'a> TranslationContext<'a> {
    pub fn new(frontend: &'a dyn Frontend) -> Self {
        Self {
            frontend,
            interfaces: InterfaceRegistry::new(),
            diagnostics: Vec::new(),
            current_file: None,
        }
    }

    pub fn frontend(&self) -> &'a dyn Frontend {
        self.frontend
    }

    /// Attribute subsequent diagnostics to a source unit.
    pub fn enter_file(&mut self, path: impl Into<String>) {
        self.current_file = Some(path.into());
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Record a finding against the current file.
    pub fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let mut diagnostic = Diagnostic::new(kind, message);
        diagnostic.file = self.current_file.clone();
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (InterfaceRegistry, Vec<Diagnostic>) {
        (self.interfaces, self.diagnostics)
    }
}

//! Non-fatal findings collected during translation.
//!
//! Nothing in the translation layer aborts a run. Problems with individual
//! declarations are recorded here, logged, and processing continues.

use serde::{Deserialize, Serialize};

/// Category of a translation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Declaration has no fully-qualified symbol path; entity kept with an empty id.
    MissingIdentity,
    /// Display name could not be computed.
    UnresolvableName,
    /// Type alias does not point at an object type literal; alias dropped.
    UnconvertibleAlias,
    /// The whole run produced no entity.
    EmptyResult,
    /// The frontend reported no source files.
    NoSourceFiles,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdentity => write!(f, "missing identity"),
            Self::UnresolvableName => write!(f, "unresolvable name"),
            Self::UnconvertibleAlias => write!(f, "unconvertible type alias"),
            Self::EmptyResult => write!(f, "empty result"),
            Self::NoSourceFiles => write!(f, "no source files"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Source unit the finding belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file: None,
        }
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}: {}: {}", file, self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

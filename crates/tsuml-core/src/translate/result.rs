//! Translation result types.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::model::{Entity, FileDeclaration, HeritageClauseType};

/// Result of translating one program.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// One bundle per source unit, in frontend order.
    pub files: Vec<FileDeclaration>,

    /// Non-fatal findings.
    pub diagnostics: Vec<Diagnostic>,

    /// Set when nothing could be translated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl Translation {
    /// Whether the run produced at least one entity.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Every entity across all files.
    pub fn entities(&self) -> Vec<Entity> {
        self.files.iter().flat_map(|f| f.entities()).collect()
    }

    /// Find the bundle for a source path.
    pub fn file(&self, file_name: &str) -> Option<&FileDeclaration> {
        self.files.iter().find(|f| f.file_name == file_name)
    }

    /// Serialize the file bundles for the renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.files)
    }

    /// Get statistics about the translation.
    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats::default();

        for file in &self.files {
            stats.files += 1;
            stats.classes += file.classes.len();
            stats.interfaces += file.interfaces.len();
            stats.enums += file.enums.len();
            stats.types += file.types.len();

            for clause in file.heritage() {
                match clause.clause_type {
                    HeritageClauseType::Extends => stats.extends += 1,
                    HeritageClauseType::Implements => stats.implements += 1,
                }
            }
            stats.associations += file.member_associations.len();
        }

        stats.diagnostics = self.diagnostics.len();
        stats
    }
}

/// Counts of translated entities and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslationStats {
    pub files: usize,
    pub classes: usize,
    pub interfaces: usize,
    pub enums: usize,
    pub types: usize,
    pub extends: usize,
    pub implements: usize,
    pub associations: usize,
    pub diagnostics: usize,
}

impl TranslationStats {
    pub fn entities(&self) -> usize {
        self.classes + self.interfaces + self.enums + self.types
    }
}

impl std::fmt::Display for TranslationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Files:        {}", self.files)?;
        writeln!(f, "Entities:")?;
        writeln!(f, "  Classes:    {}", self.classes)?;
        writeln!(f, "  Interfaces: {}", self.interfaces)?;
        writeln!(f, "  Enums:      {}", self.enums)?;
        writeln!(f, "  Types:      {}", self.types)?;
        writeln!(f, "Edges:")?;
        writeln!(f, "  Extends:    {}", self.extends)?;
        writeln!(f, "  Implements: {}", self.implements)?;
        writeln!(f, "  Associations: {}", self.associations)?;
        if self.diagnostics > 0 {
            writeln!(f, "Diagnostics: {}", self.diagnostics)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassEntity, HeritageClause};

    fn sample() -> Translation {
        let mut file = FileDeclaration::new("src/dog.ts");
        file.classes.push(ClassEntity::new("Animal", "\"src/dog\".Animal"));
        file.classes.push(ClassEntity::new("Dog", "\"src/dog\".Dog"));
        file.heritage_clauses.push(vec![HeritageClause::extends(
            "Dog",
            "\"src/dog\".Dog",
            "Animal",
            Some("\"src/dog\".Animal".to_string()),
        )]);
        Translation {
            files: vec![file],
            ..Default::default()
        }
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.files, 1);
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.entities(), 2);
        assert_eq!(stats.extends, 1);
        assert_eq!(stats.implements, 0);

        let text = stats.to_string();
        assert!(text.contains("Classes:    2"));
        assert!(!text.contains("Diagnostics"));
    }

    #[test]
    fn test_to_json_uses_camel_case() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"fileName\": \"src/dog.ts\""));
        assert!(json.contains("\"heritageClauses\""));
        assert!(json.contains("\"classTypeId\""));
        assert!(json.contains("\"memberAssociations\": []"));
    }

    #[test]
    fn test_file_lookup() {
        let translation = sample();
        assert!(translation.file("src/dog.ts").is_some());
        assert!(translation.file("src/cat.ts").is_none());
        assert!(translation.is_success());
    }
}

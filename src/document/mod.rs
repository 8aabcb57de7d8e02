//! Parsed app-config document
//!
//! Per CONFIG.md §1:
//! - One immutable JSON tree per validation pass
//! - Required sections: rows, cells, translations, theme, controls
//! - translations must contain `en`; theme must contain colors and fonts
//! - Missing sections are reported but never halt the walk
//!
//! The document doubles as the resolution arena for alias and `$extends`
//! references: dotted paths are indices into it (`value_at`).

use serde_json::Value;

use crate::diagnostics::Diagnostic;

/// Top-level sections that must be present and object-typed.
pub const REQUIRED_SECTIONS: &[&str] = &["rows", "cells", "translations", "theme", "controls"];

/// One parsed configuration document, read-only for the pass.
#[derive(Debug)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parses the raw configuration text.
    ///
    /// A parse failure is the only fatal condition for a pass; the error
    /// carries the serde_json detail for the diagnostic message.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let root = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walks a dot-separated path from the document root.
    ///
    /// Returns `None` if any segment is missing or the walk passes through
    /// a non-object. Arrays are deliberately not traversed: reference
    /// paths address named structure, never positions.
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        value_at(&self.root, path)
    }

    /// Checks the required top-level sections per CONFIG.md §1.
    ///
    /// Emits zero or more diagnostics and never halts; the tree walk runs
    /// afterwards regardless so secondary findings are still reported.
    pub fn check_required_sections(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(root) = self.root.as_object() else {
            for section in REQUIRED_SECTIONS {
                diagnostics.push(Diagnostic::missing_section(section));
            }
            return diagnostics;
        };

        for section in REQUIRED_SECTIONS {
            if !root.get(*section).is_some_and(Value::is_object) {
                diagnostics.push(Diagnostic::missing_section(section));
            }
        }

        if let Some(translations) = root.get("translations").and_then(Value::as_object) {
            if !translations.contains_key("en") {
                diagnostics.push(Diagnostic::missing_translation_en());
            }
        }

        if let Some(theme) = root.get("theme").and_then(Value::as_object) {
            if !theme.get("colors").is_some_and(Value::is_object) {
                diagnostics.push(Diagnostic::missing_theme_colors());
            }
            if !theme.get("fonts").is_some_and(Value::is_object) {
                diagnostics.push(Diagnostic::missing_theme_fonts());
            }
        }

        diagnostics
    }
}

/// Dot-path lookup against an arbitrary subtree.
pub fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// JSON type name for diagnostic messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document {
            root: value,
        }
    }

    #[test]
    fn test_complete_document_emits_nothing() {
        let d = doc(json!({
            "rows": {},
            "cells": {},
            "translations": { "en": {} },
            "theme": { "colors": {}, "fonts": {} },
            "controls": {}
        }));
        assert!(d.check_required_sections().is_empty());
    }

    #[test]
    fn test_missing_section_reported_per_section() {
        let d = doc(json!({ "rows": {} }));
        let diags = d.check_required_sections();
        let missing: Vec<_> = diags
            .iter()
            .filter(|d| d.kind == DiagnosticKind::MissingSection)
            .map(|d| d.path.as_str())
            .collect();
        assert_eq!(missing, vec!["cells", "translations", "theme", "controls"]);
    }

    #[test]
    fn test_mistyped_section_counts_as_missing() {
        let d = doc(json!({
            "rows": [],
            "cells": {},
            "translations": { "en": {} },
            "theme": { "colors": {}, "fonts": {} },
            "controls": {}
        }));
        let diags = d.check_required_sections();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].path, "rows");
    }

    #[test]
    fn test_translations_without_en() {
        let d = doc(json!({
            "rows": {},
            "cells": {},
            "translations": { "fr": {} },
            "theme": { "colors": {}, "fonts": {} },
            "controls": {}
        }));
        let diags = d.check_required_sections();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::MissingTranslationEn);
    }

    #[test]
    fn test_theme_missing_colors_and_fonts() {
        let d = doc(json!({
            "rows": {},
            "cells": {},
            "translations": { "en": {} },
            "theme": { "colors": [] },
            "controls": {}
        }));
        let kinds: Vec<_> = d.check_required_sections().iter().map(|d| d.kind).collect();
        assert!(kinds.contains(&DiagnosticKind::MissingThemeColors));
        assert!(kinds.contains(&DiagnosticKind::MissingThemeFonts));
    }

    #[test]
    fn test_value_at_walks_nested_objects() {
        let d = doc(json!({ "theme": { "colors": { "primary": "#fff" } } }));
        assert_eq!(d.value_at("theme.colors.primary"), Some(&json!("#fff")));
    }

    #[test]
    fn test_value_at_fails_through_non_object() {
        let d = doc(json!({ "rows": { "home": { "cellSize": [100, 60] } } }));
        assert!(d.value_at("rows.home.cellSize.0").is_none());
        assert!(d.value_at("rows.missing.height").is_none());
    }
}

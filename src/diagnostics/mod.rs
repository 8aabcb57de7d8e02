//! Diagnostic records emitted by the validator
//!
//! Per CONFIG.md §7:
//! - Every finding carries a stable string code (SGC_*)
//! - Findings are collected and returned as a batch, never thrown
//! - Only a JSON parse failure is fatal for a pass
//! - Positions are best-effort source coordinates, absent when unknown

mod kinds;

pub use kinds::DiagnosticKind;

use serde::Serialize;
use std::fmt;

/// Best-effort source coordinates, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// One validation finding.
///
/// The validator never mutates the document; a pass produces only a
/// `Vec<Diagnostic>`. The caller is responsible for aggregation and
/// presentation; no single diagnostic implies rejection of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic kind
    pub kind: DiagnosticKind,
    /// Dotted document path the finding applies to (array indices as `name[i]`)
    pub path: String,
    /// Human-readable message embedding the offending key/value/path text
    pub message: String,
    /// Source coordinates when a textual match was found
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
            position: None,
        }
    }

    /// Fatal parse failure; the only diagnostic that halts the pass.
    pub fn json_parse_error(detail: impl fmt::Display) -> Self {
        Self::new(
            DiagnosticKind::JsonParseError,
            "$root",
            format!("Document is not valid JSON: {}", detail),
        )
    }

    pub fn missing_section(section: &str) -> Self {
        Self::new(
            DiagnosticKind::MissingSection,
            section,
            format!("Required top-level section '{}' is missing or not an object", section),
        )
    }

    pub fn missing_translation_en() -> Self {
        Self::new(
            DiagnosticKind::MissingTranslationEn,
            "translations",
            "Section 'translations' must contain an 'en' subtree",
        )
    }

    pub fn missing_theme_colors() -> Self {
        Self::new(
            DiagnosticKind::MissingThemeColors,
            "theme.colors",
            "Section 'theme' must contain a 'colors' object",
        )
    }

    pub fn missing_theme_fonts() -> Self {
        Self::new(
            DiagnosticKind::MissingThemeFonts,
            "theme.fonts",
            "Section 'theme' must contain a 'fonts' object",
        )
    }

    pub fn invalid_property_key(path: &str, key: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidPropertyKey,
            path,
            format!("Unknown property '{}'", key),
        )
    }

    pub fn invalid_property_value(path: &str, key: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            DiagnosticKind::InvalidPropertyValue,
            path,
            format!("Invalid value for '{}': {}", key, reason),
        )
    }

    pub fn missing_required_field(path: &str, field: &str) -> Self {
        Self::new(
            DiagnosticKind::MissingRequiredField,
            path,
            format!("Missing required field '{}'", field),
        )
    }

    pub fn invalid_view_id_reference(path: &str, view_id: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidViewIdReference,
            path,
            format!("State override '{}' has no matching view id in 'views.base'", view_id),
        )
    }

    pub fn invalid_json_reference(path: &str, reference: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidJsonReference,
            path,
            format!("Alias reference '{}' does not resolve", reference),
        )
    }

    pub fn extends_with_tilde(path: &str, value: &str) -> Self {
        Self::new(
            DiagnosticKind::ExtendsWithTilde,
            path,
            format!("'$extends' value '{}' must not begin with '~'", value),
        )
    }

    pub fn invalid_extends_reference(path: &str, value: &str) -> Self {
        Self::new(
            DiagnosticKind::InvalidExtendsReference,
            path,
            format!("'$extends' path '{}' does not resolve", value),
        )
    }

    pub fn invalid_pkg_path(path: &str, reason: impl fmt::Display) -> Self {
        Self::new(DiagnosticKind::InvalidPkgPath, path, reason.to_string())
    }

    pub fn invalid_font_key(path: &str, reason: impl fmt::Display) -> Self {
        Self::new(DiagnosticKind::InvalidFontKeyFormat, path, reason.to_string())
    }

    /// Attach best-effort coordinates.
    pub fn at(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.code(), self.path, self.message)?;
        if let Some(pos) = self.position {
            write!(f, " ({}:{})", pos.line, pos.column)?;
        }
        Ok(())
    }
}

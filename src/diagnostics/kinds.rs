//! Diagnostic kind taxonomy per CONFIG.md §7
//!
//! Codes:
//! - SGC_JSON_PARSE_ERROR (fatal for the pass)
//! - SGC_MISSING_SECTION / SGC_MISSING_TRANSLATION_EN
//! - SGC_MISSING_THEME_COLORS / SGC_MISSING_THEME_FONTS
//! - SGC_INVALID_PROPERTY_KEY / SGC_INVALID_PROPERTY_VALUE
//! - SGC_MISSING_REQUIRED_FIELD / SGC_INVALID_VIEW_ID_REFERENCE
//! - SGC_INVALID_JSON_REFERENCE / SGC_EXTENDS_WITH_TILDE
//! - SGC_INVALID_EXTENDS_REFERENCE / SGC_INVALID_PKG_PATH
//! - SGC_INVALID_FONT_KEY_FORMAT

use serde::Serialize;
use std::fmt;

/// Diagnostic kinds as defined in CONFIG.md
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Malformed document text; halts structural checks for this pass
    JsonParseError,
    /// Required top-level section absent or mistyped
    MissingSection,
    /// `translations` present but has no `en` subtree
    MissingTranslationEn,
    /// `theme.colors` absent or mistyped
    MissingThemeColors,
    /// `theme.fonts` absent or mistyped
    MissingThemeFonts,
    /// Key not in the applicable field set for its context
    InvalidPropertyKey,
    /// Key recognized but value fails type/enum/tuple/array checks
    InvalidPropertyValue,
    /// Scene-graph base node missing `id`, `subType`, or a required field
    MissingRequiredField,
    /// State-override key has no matching base-view `id`
    InvalidViewIdReference,
    /// `~path` does not resolve
    InvalidJsonReference,
    /// `$extends` value begins with `~`
    ExtendsWithTilde,
    /// `$extends` path does not resolve
    InvalidExtendsReference,
    /// Malformed `pkg:/` prefix or asset file not found
    InvalidPkgPath,
    /// Font key grammar violation
    InvalidFontKeyFormat,
}

impl DiagnosticKind {
    /// Returns the stable string code as defined in CONFIG.md
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::JsonParseError => "SGC_JSON_PARSE_ERROR",
            DiagnosticKind::MissingSection => "SGC_MISSING_SECTION",
            DiagnosticKind::MissingTranslationEn => "SGC_MISSING_TRANSLATION_EN",
            DiagnosticKind::MissingThemeColors => "SGC_MISSING_THEME_COLORS",
            DiagnosticKind::MissingThemeFonts => "SGC_MISSING_THEME_FONTS",
            DiagnosticKind::InvalidPropertyKey => "SGC_INVALID_PROPERTY_KEY",
            DiagnosticKind::InvalidPropertyValue => "SGC_INVALID_PROPERTY_VALUE",
            DiagnosticKind::MissingRequiredField => "SGC_MISSING_REQUIRED_FIELD",
            DiagnosticKind::InvalidViewIdReference => "SGC_INVALID_VIEW_ID_REFERENCE",
            DiagnosticKind::InvalidJsonReference => "SGC_INVALID_JSON_REFERENCE",
            DiagnosticKind::ExtendsWithTilde => "SGC_EXTENDS_WITH_TILDE",
            DiagnosticKind::InvalidExtendsReference => "SGC_INVALID_EXTENDS_REFERENCE",
            DiagnosticKind::InvalidPkgPath => "SGC_INVALID_PKG_PATH",
            DiagnosticKind::InvalidFontKeyFormat => "SGC_INVALID_FONT_KEY_FORMAT",
        }
    }

    /// Returns whether this kind halts the pass
    pub fn is_fatal(&self) -> bool {
        matches!(self, DiagnosticKind::JsonParseError)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Font key mini-grammar per CONFIG.md §6
//!
//! A literal font key is `<FontSource>,<PositiveInteger>` with exactly one
//! comma. The source is either a `pkg:/assets/fonts/` path or one of the
//! enumerated system font stems. The size must re-render to its own
//! trimmed text, which rejects leading zeros, signs-with-garbage, and
//! floats in one rule.
//!
//! Alias-form keys (`~theme.fonts.X`) are resolved elsewhere; the only
//! grammar rule they carry here is "no comma allowed".

use thiserror::Error;

/// Closed system font stem list. There is deliberately no `*Regular`
/// variant and no `Huge*` tier.
pub const SYSTEM_FONTS: &[&str] = &[
    "Tiny",
    "TinyBold",
    "Smaller",
    "SmallerBold",
    "Smallest",
    "SmallestBold",
    "Small",
    "SmallBold",
    "Medium",
    "MediumBold",
    "Large",
    "LargeBold",
    "Largest",
    "ExtraLarge",
    "ExtraLargeBold",
    "Badge",
];

const FONT_ASSET_PREFIX: &str = "pkg:/assets/fonts/";

/// Font key grammar violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontKeyError {
    #[error("font key '{value}' must contain exactly one comma (found {found}), expected '<font>,<size>'")]
    CommaCount { value: String, found: usize },
    #[error("font key size '{size}' must be a positive base-10 integer")]
    InvalidSize { size: String },
    #[error("font key source '{font}' must be a '{FONT_ASSET_PREFIX}' path")]
    InvalidAssetSource { font: String },
    #[error("font key source '{font}' is not a known system font")]
    UnknownSystemFont { font: String },
    #[error("font key alias '{value}' must not contain a comma")]
    AliasWithComma { value: String },
}

/// Validates a literal (non-alias) font key value.
pub fn validate_font_key(value: &str) -> Result<(), FontKeyError> {
    match value.split_once(',') {
        Some((font_part, size_part)) if !size_part.contains(',') => {
            validate_size(size_part)?;
            validate_source(font_part)
        }
        _ => Err(FontKeyError::CommaCount {
            value: value.to_string(),
            found: value.matches(',').count(),
        }),
    }
}

/// Validates an alias-form font key value (`~...`): the alias itself is
/// resolved by the reference resolver; here it only must be comma-free.
pub fn validate_font_key_alias(value: &str) -> Result<(), FontKeyError> {
    if value.contains(',') {
        return Err(FontKeyError::AliasWithComma {
            value: value.to_string(),
        });
    }
    Ok(())
}

fn validate_size(size_part: &str) -> Result<(), FontKeyError> {
    let trimmed = size_part.trim();
    let err = || FontKeyError::InvalidSize {
        size: size_part.to_string(),
    };
    let parsed: i64 = trimmed.parse().map_err(|_| err())?;
    // Round-trip equality rejects leading zeros and "+n" forms.
    if parsed.to_string() != trimmed || parsed <= 0 {
        return Err(err());
    }
    Ok(())
}

fn validate_source(font_part: &str) -> Result<(), FontKeyError> {
    if font_part.contains("pkg:/") {
        if font_part.starts_with(FONT_ASSET_PREFIX) {
            Ok(())
        } else {
            Err(FontKeyError::InvalidAssetSource {
                font: font_part.to_string(),
            })
        }
    } else if SYSTEM_FONTS.contains(&font_part) {
        Ok(())
    } else {
        Err(FontKeyError::UnknownSystemFont {
            font: font_part.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_system_font_accepted() {
        for font in SYSTEM_FONTS {
            assert!(
                validate_font_key(&format!("{},14", font)).is_ok(),
                "{} should be a valid source",
                font
            );
        }
    }

    #[test]
    fn test_comma_count_must_be_one() {
        assert_eq!(
            validate_font_key("Small"),
            Err(FontKeyError::CommaCount { value: "Small".into(), found: 0 })
        );
        assert_eq!(
            validate_font_key("Small,14,bold"),
            Err(FontKeyError::CommaCount { value: "Small,14,bold".into(), found: 2 })
        );
    }

    #[test]
    fn test_size_must_be_strictly_positive_integer() {
        assert!(validate_font_key("Small, 14").is_ok(), "trimmed size accepted");
        for bad in ["Small,0", "Small,-3", "Small,014", "Small,14.5", "Small,big", "Small,"] {
            assert!(
                matches!(validate_font_key(bad), Err(FontKeyError::InvalidSize { .. })),
                "{} should have an invalid size",
                bad
            );
        }
    }

    #[test]
    fn test_unlisted_font_stems_rejected() {
        // Plausible-looking names outside the closed set.
        for bad in ["SmallRegular", "HugeBold", "Huge", "small", "MediumBoldItalic"] {
            assert!(
                matches!(
                    validate_font_key(&format!("{},14", bad)),
                    Err(FontKeyError::UnknownSystemFont { .. })
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_font_asset_paths() {
        assert!(validate_font_key("pkg:/assets/fonts/Roboto.ttf,24").is_ok());
        assert_eq!(
            validate_font_key("pkg:/assets/images/Roboto.ttf,24"),
            Err(FontKeyError::InvalidAssetSource {
                font: "pkg:/assets/images/Roboto.ttf".into()
            })
        );
        assert!(matches!(
            validate_font_key("fonts/pkg:/x.ttf,24"),
            Err(FontKeyError::InvalidAssetSource { .. })
        ));
    }

    #[test]
    fn test_source_errors_render_offending_font() {
        let bad_path = FontKeyError::InvalidAssetSource {
            font: "pkg:/images/a.ttf".into(),
        };
        assert_eq!(
            bad_path.to_string(),
            "font key source 'pkg:/images/a.ttf' must be a 'pkg:/assets/fonts/' path"
        );
        let bad_stem = FontKeyError::UnknownSystemFont { font: "Huge".into() };
        assert_eq!(
            bad_stem.to_string(),
            "font key source 'Huge' is not a known system font"
        );
        assert!(std::error::Error::source(&bad_stem).is_none());
    }

    #[test]
    fn test_alias_form_rejects_comma() {
        assert!(validate_font_key_alias("~theme.fonts.body").is_ok());
        assert_eq!(
            validate_font_key_alias("~theme.fonts.body,12"),
            Err(FontKeyError::AliasWithComma { value: "~theme.fonts.body,12".into() })
        );
    }
}

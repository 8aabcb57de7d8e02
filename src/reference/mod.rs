//! Reference resolution per CONFIG.md §5
//!
//! Three independent reference forms appear as string values anywhere in
//! the document:
//! - Alias: `~<dot.path>`, resolved against the document root
//! - Inheritance: `"$extends": "<dot.path>"`, never `~`-prefixed
//! - Asset path: `pkg:/assets/<rel>`, with `@res` rewritten to `-fhd`
//!   before the on-disk existence check
//!
//! Resolution never mutates the document. Asset existence results are
//! memoized per pass keyed by the unresolved relative path, so repeat
//! checks are observably pure and I/O is bounded to one probe per
//! distinct path.

use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

use crate::document::Document;

const ASSET_PREFIX: &str = "pkg:/assets/";
const RES_TOKEN: &str = "@res";
const RES_SUFFIX: &str = "-fhd";

/// Host-supplied filesystem seam.
///
/// The validator never discovers paths on its own; it only joins
/// `project_root()` with `assets/<rel>` and asks `exists`. A filesystem
/// error during the probe counts as "not found".
pub trait AssetHost {
    fn project_root(&self) -> &Path;
    fn exists(&self, absolute: &Path) -> bool;
}

/// Filesystem-backed host rooted at a project directory.
pub struct FsAssetHost {
    root: PathBuf,
}

impl FsAssetHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetHost for FsAssetHost {
    fn project_root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, absolute: &Path) -> bool {
        // try_exists maps permission/IO failures to a failed check.
        absolute.try_exists().unwrap_or(false)
    }
}

/// Reference check failures, mapped onto diagnostics by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("alias '{reference}' does not resolve against the document")]
    UnresolvedAlias { reference: String },
    #[error("'$extends' value '{value}' must be a direct path, not a '~' alias")]
    ExtendsWithTilde { value: String },
    #[error("'$extends' path '{value}' does not resolve against the document")]
    UnresolvedExtends { value: String },
    #[error("'{value}' is not a valid asset path: expected '{ASSET_PREFIX}' prefix")]
    BadAssetPrefix { value: String },
    #[error("asset '{reference}' not found at '{attempted}'")]
    AssetNotFound { reference: String, attempted: String },
}

/// Per-pass reference resolver over one read-only document.
///
/// Owns the asset-existence cache; callers validating documents
/// concurrently must each hold their own resolver.
pub struct ReferenceResolver<'a> {
    document: &'a Document,
    host: &'a dyn AssetHost,
    asset_cache: HashMap<String, bool>,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(document: &'a Document, host: &'a dyn AssetHost) -> Self {
        Self {
            document,
            host,
            asset_cache: HashMap::new(),
        }
    }

    /// Checks a `~path` alias. Resolution always starts at the document
    /// root and never follows another alias, so no cycle is possible.
    pub fn check_alias(&self, value: &str) -> Result<(), ReferenceError> {
        let path = value.strip_prefix('~').unwrap_or(value);
        if self.document.value_at(path).is_some() {
            Ok(())
        } else {
            Err(ReferenceError::UnresolvedAlias {
                reference: value.to_string(),
            })
        }
    }

    /// Checks a `$extends` value: a direct structural path, never
    /// re-aliased.
    pub fn check_extends(&self, value: &str) -> Result<(), ReferenceError> {
        if value.starts_with('~') {
            return Err(ReferenceError::ExtendsWithTilde {
                value: value.to_string(),
            });
        }
        if self.document.value_at(value).is_some() {
            Ok(())
        } else {
            Err(ReferenceError::UnresolvedExtends {
                value: value.to_string(),
            })
        }
    }

    /// Checks a `pkg:/assets/` path against the host filesystem.
    ///
    /// The `@res` token is rewritten to the platform suffix before the
    /// probe; the unresolved token form is never itself checked.
    pub fn check_asset(&mut self, value: &str) -> Result<(), ReferenceError> {
        let Some(rel) = value.strip_prefix(ASSET_PREFIX) else {
            return Err(ReferenceError::BadAssetPrefix {
                value: value.to_string(),
            });
        };

        let resolved = rel.replace(RES_TOKEN, RES_SUFFIX);
        let attempted = self.host.project_root().join("assets").join(&resolved);

        let found = match self.asset_cache.get(rel) {
            Some(cached) => *cached,
            None => {
                let probed = self.host.exists(&attempted);
                self.asset_cache.insert(rel.to_string(), probed);
                probed
            }
        };

        if found {
            Ok(())
        } else {
            Err(ReferenceError::AssetNotFound {
                reference: value.to_string(),
                attempted: attempted.display().to_string(),
            })
        }
    }
}

/// Extracts an embedded `pkg:/...` occurrence out of an arbitrary string
/// value (a font key like `"pkg:/assets/fonts/x.ttf,24"` yields only the
/// path part).
pub fn find_asset_reference(value: &str) -> Option<&str> {
    static PKG_RE: OnceLock<Regex> = OnceLock::new();
    let re = PKG_RE
        .get_or_init(|| Regex::new(r#"pkg:/[^",\s]*"#).expect("pkg reference pattern is valid"));
    re.find(value).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    struct FakeHost {
        root: PathBuf,
        files: HashSet<PathBuf>,
    }

    impl FakeHost {
        fn with_assets(rel_paths: &[&str]) -> Self {
            let root = PathBuf::from("/project");
            let files = rel_paths
                .iter()
                .map(|rel| root.join("assets").join(rel))
                .collect();
            Self { root, files }
        }
    }

    impl AssetHost for FakeHost {
        fn project_root(&self) -> &Path {
            &self.root
        }

        fn exists(&self, absolute: &Path) -> bool {
            self.files.contains(absolute)
        }
    }

    fn document() -> Document {
        Document::parse(
            &json!({
                "theme": { "fonts": { "body": "Small,14" } },
                "controls": { "Button": { "default": { "color": "#fff" } } }
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_alias_round_trip() {
        let doc = document();
        let host = FakeHost::with_assets(&[]);
        let resolver = ReferenceResolver::new(&doc, &host);
        assert!(resolver.check_alias("~theme.fonts.body").is_ok());
        assert!(resolver.check_alias("~controls.Button.default").is_ok());
        assert!(matches!(
            resolver.check_alias("~theme.fonts.missing"),
            Err(ReferenceError::UnresolvedAlias { .. })
        ));
    }

    #[test]
    fn test_alias_fails_through_non_object() {
        let doc = document();
        let host = FakeHost::with_assets(&[]);
        let resolver = ReferenceResolver::new(&doc, &host);
        assert!(matches!(
            resolver.check_alias("~theme.fonts.body.deeper"),
            Err(ReferenceError::UnresolvedAlias { .. })
        ));
    }

    #[test]
    fn test_extends_rejects_tilde_even_when_target_resolves() {
        let doc = document();
        let host = FakeHost::with_assets(&[]);
        let resolver = ReferenceResolver::new(&doc, &host);
        assert!(matches!(
            resolver.check_extends("~theme.fonts.body"),
            Err(ReferenceError::ExtendsWithTilde { .. })
        ));
        assert!(resolver.check_extends("theme.fonts.body").is_ok());
        assert!(matches!(
            resolver.check_extends("controls.Label.missing"),
            Err(ReferenceError::UnresolvedExtends { .. })
        ));
    }

    #[test]
    fn test_asset_res_token_rewritten_before_probe() {
        let doc = document();
        let host = FakeHost::with_assets(&["images/x-fhd.png"]);
        let mut resolver = ReferenceResolver::new(&doc, &host);
        assert!(resolver.check_asset("pkg:/assets/images/x@res.png").is_ok());
        assert!(matches!(
            resolver.check_asset("pkg:/assets/images/y@res.png"),
            Err(ReferenceError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_asset_prefix_must_be_exact() {
        let doc = document();
        let host = FakeHost::with_assets(&[]);
        let mut resolver = ReferenceResolver::new(&doc, &host);
        assert!(matches!(
            resolver.check_asset("pkg:/images/x.png"),
            Err(ReferenceError::BadAssetPrefix { .. })
        ));
    }

    #[test]
    fn test_asset_cache_keyed_by_unresolved_path() {
        let doc = document();
        let host = FakeHost::with_assets(&["images/x-fhd.png"]);
        let mut resolver = ReferenceResolver::new(&doc, &host);
        resolver.check_asset("pkg:/assets/images/x@res.png").unwrap();
        assert!(resolver.asset_cache.contains_key("images/x@res.png"));
        // Second check answers from the cache with the same result.
        assert!(resolver.check_asset("pkg:/assets/images/x@res.png").is_ok());
    }

    #[test]
    fn test_find_asset_reference_extracts_embedded_path() {
        assert_eq!(
            find_asset_reference("pkg:/assets/fonts/x.ttf,24"),
            Some("pkg:/assets/fonts/x.ttf")
        );
        assert_eq!(
            find_asset_reference("see pkg:/assets/images/a.png here"),
            Some("pkg:/assets/images/a.png")
        );
        assert_eq!(find_asset_reference("no reference"), None);
    }
}

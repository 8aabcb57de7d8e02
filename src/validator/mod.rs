//! Document validator orchestration
//!
//! One synchronous pass per document:
//! parse → required sections → depth-first walk → scene-graph pass.
//!
//! A JSON parse failure is fatal for the pass; every other finding is
//! additive. The walk classifies each path (context), checks keys and
//! values against the catalog in recognized regions, and scans every
//! string value for alias, asset, and font-key grammars regardless of
//! context. The scene-graph pass then cross-checks `views.base` ids and
//! state-override back-references, which needs the whole tree and cannot
//! be done node-locally.

mod positions;

pub use positions::PositionFinder;

use serde_json::Value;
use std::collections::HashSet;

use crate::catalog::{self, FieldSet};
use crate::context::{PathContext, ViewState};
use crate::diagnostics::{Diagnostic, Position};
use crate::document::Document;
use crate::font::{validate_font_key, validate_font_key_alias};
use crate::reference::{find_asset_reference, AssetHost, ReferenceError, ReferenceResolver};

/// Validator over one host environment; `validate` runs one pass.
pub struct DocumentValidator<'h> {
    host: &'h dyn AssetHost,
}

impl<'h> DocumentValidator<'h> {
    pub fn new(host: &'h dyn AssetHost) -> Self {
        Self { host }
    }

    /// Runs one full validation pass over the raw document text.
    ///
    /// Deterministic: the same text and filesystem state yield the same
    /// diagnostic list, order included.
    pub fn validate(&self, source: &str) -> Vec<Diagnostic> {
        let document = match Document::parse(source) {
            Ok(document) => document,
            Err(err) => {
                let position = (err.line() > 0).then(|| Position {
                    line: err.line(),
                    column: err.column().max(1),
                });
                return vec![Diagnostic::json_parse_error(&err).at(position)];
            }
        };

        let mut pass = Pass {
            document: &document,
            resolver: ReferenceResolver::new(&document, self.host),
            finder: PositionFinder::new(source),
            diagnostics: Vec::new(),
        };
        pass.run();
        pass.diagnostics
    }
}

/// State for one validation pass. The resolver owns the per-pass asset
/// cache and the finder owns the claimed-position set; both are discarded
/// with the pass.
struct Pass<'a> {
    document: &'a Document,
    resolver: ReferenceResolver<'a>,
    finder: PositionFinder<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Pass<'a> {
    fn run(&mut self) {
        self.check_sections();
        let root = self.document.root();
        self.walk(root, "");
        self.check_scene_graphs();
    }

    fn emit(&mut self, diagnostic: Diagnostic, needle: Option<&str>) {
        let position = needle.and_then(|needle| self.finder.find(needle));
        self.diagnostics.push(diagnostic.at(position));
    }

    fn check_sections(&mut self) {
        for diagnostic in self.document.check_required_sections() {
            let tail = diagnostic
                .path
                .rsplit('.')
                .next()
                .unwrap_or(diagnostic.path.as_str());
            let needle = format!("\"{}\"", tail);
            self.emit(diagnostic, Some(&needle));
        }
    }

    // ---- depth-first walk -------------------------------------------------

    fn walk(&mut self, value: &'a Value, path: &str) {
        match value {
            Value::Object(map) => {
                let fields = self.field_set_for(path, map);
                for (key, child) in map {
                    let child_path = join_key(path, key);
                    if key == "$extends" {
                        if let Value::String(target) = child {
                            self.check_extends(target, &child_path);
                        }
                        continue;
                    }
                    if let Some(set) = fields {
                        self.check_field(&set, key, child, &child_path);
                    }
                    if let Value::String(text) = child {
                        self.scan_string(Some(key.as_str()), text, &child_path);
                    }
                    self.walk(child, &child_path);
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let child_path = format!("{}[{}]", path, index);
                    if let Value::String(text) = item {
                        self.scan_string(None, text, &child_path);
                    }
                    self.walk(item, &child_path);
                }
            }
            _ => {}
        }
    }

    /// Field set applicable to the object at `path`, if any.
    ///
    /// Checks run only at each region's canonical depth: degraded
    /// classifications of deeper unrecognized paths keep their coarse tag
    /// but are not re-checked, which avoids cascading unknown-key noise.
    fn field_set_for(&self, path: &str, map: &'a serde_json::Map<String, Value>) -> Option<FieldSet> {
        let context = PathContext::resolve(path);
        let depth = path_depth(path);
        match context {
            PathContext::Rows { row: Some(_) } if depth == 2 => catalog::region_fields(&context),
            PathContext::RowFocusSettings { .. } if depth == 3 => catalog::region_fields(&context),
            PathContext::RowHeaderSettings { .. } if depth == 3 => catalog::region_fields(&context),
            PathContext::Cells { cell: Some(_) } if depth == 2 => catalog::region_fields(&context),
            PathContext::CellViews { .. } if depth == 3 => catalog::region_fields(&context),
            PathContext::CellViewsBase { index: Some(_), .. } if depth == 4 => {
                // Discriminated dispatch on the node's own subType; an
                // unknown or absent discriminator falls back to the
                // permissive union (the subType itself is still checked
                // as an enum field).
                let sub_type = map.get("subType").and_then(Value::as_str);
                Some(
                    sub_type
                        .and_then(catalog::node_fields)
                        .unwrap_or_else(|| catalog::override_fields(None)),
                )
            }
            PathContext::CellStateOverride {
                cell,
                view_id: Some(view_id),
                ..
            } if depth == 5 => {
                let base_sub_type = self.base_sub_type(&cell, &view_id);
                Some(catalog::override_fields(base_sub_type))
            }
            _ => None,
        }
    }

    /// Looks up the `subType` of the base node with the given id in the
    /// same cell's `views.base` (arena lookup through the whole document).
    fn base_sub_type(&self, cell: &str, view_id: &str) -> Option<&'a str> {
        let views = self
            .document
            .value_at(&format!("cells.{}.views", cell))?
            .as_object()?;
        let base = views.get("base")?.as_array()?;
        base.iter()
            .filter_map(Value::as_object)
            .find(|node| node.get("id").and_then(Value::as_str) == Some(view_id))
            .and_then(|node| node.get("subType"))
            .and_then(Value::as_str)
    }

    fn check_field(&mut self, set: &FieldSet, key: &str, value: &Value, child_path: &str) {
        let needle = format!("\"{}\"", key);
        match set.get(key) {
            None => {
                self.emit(
                    Diagnostic::invalid_property_key(child_path, key),
                    Some(&needle),
                );
            }
            Some(def) => {
                if let Err(err) = def.check(value) {
                    self.emit(
                        Diagnostic::invalid_property_value(child_path, key, err),
                        Some(&needle),
                    );
                }
            }
        }
    }

    // ---- string value scans ----------------------------------------------

    fn scan_string(&mut self, key: Option<&str>, text: &str, path: &str) {
        let is_font_key = key.is_some_and(|key| key.ends_with("Key"));

        if text.starts_with('~') {
            if is_font_key {
                if let Err(err) = validate_font_key_alias(text) {
                    // A comma-bearing alias is one authoring mistake; the
                    // grammar diagnostic stands alone and resolution is
                    // not attempted against the mangled path.
                    self.emit(Diagnostic::invalid_font_key(path, err), Some(text));
                    return;
                }
            }
            if let Err(err) = self.resolver.check_alias(text) {
                self.emit_reference(path, err, text);
            }
            return;
        }

        if is_font_key {
            if let Err(err) = validate_font_key(text) {
                self.emit(Diagnostic::invalid_font_key(path, err), Some(text));
            }
        }

        if let Some(asset) = find_asset_reference(text) {
            let asset = asset.to_string();
            if let Err(err) = self.resolver.check_asset(&asset) {
                self.emit_reference(path, err, &asset);
            }
        }
    }

    fn check_extends(&mut self, target: &str, path: &str) {
        if let Err(err) = self.resolver.check_extends(target) {
            self.emit_reference(path, err, target);
        }
    }

    fn emit_reference(&mut self, path: &str, err: ReferenceError, needle: &str) {
        let diagnostic = match err {
            ReferenceError::UnresolvedAlias { reference } => {
                Diagnostic::invalid_json_reference(path, &reference)
            }
            ReferenceError::ExtendsWithTilde { value } => Diagnostic::extends_with_tilde(path, &value),
            ReferenceError::UnresolvedExtends { value } => {
                Diagnostic::invalid_extends_reference(path, &value)
            }
            err @ (ReferenceError::BadAssetPrefix { .. } | ReferenceError::AssetNotFound { .. }) => {
                Diagnostic::invalid_pkg_path(path, err)
            }
        };
        self.emit(diagnostic, Some(needle));
    }

    // ---- scene-graph second pass ------------------------------------------

    fn check_scene_graphs(&mut self) {
        let Some(cells) = self.document.root().get("cells").and_then(Value::as_object) else {
            return;
        };

        for (cell_name, cell) in cells {
            let Some(views) = cell.get("views").and_then(Value::as_object) else {
                continue;
            };

            let mut base_ids: HashSet<&str> = HashSet::new();
            if let Some(base) = views.get("base").and_then(Value::as_array) {
                for (index, node) in base.iter().enumerate() {
                    let node_path = format!("cells.{}.views.base[{}]", cell_name, index);
                    let Some(node) = node.as_object() else {
                        continue;
                    };
                    self.check_base_node(node, &node_path, &mut base_ids);
                }
            }

            for state in ViewState::ALL {
                let Some(overrides) = views.get(state.as_str()).and_then(Value::as_object) else {
                    continue;
                };
                for view_id in overrides.keys() {
                    if !base_ids.contains(view_id.as_str()) {
                        let path = format!("cells.{}.views.{}.{}", cell_name, state, view_id);
                        let needle = format!("\"{}\"", view_id);
                        self.emit(
                            Diagnostic::invalid_view_id_reference(&path, view_id),
                            Some(&needle),
                        );
                    }
                }
            }
        }
    }

    fn check_base_node(
        &mut self,
        node: &'a serde_json::Map<String, Value>,
        node_path: &str,
        base_ids: &mut HashSet<&'a str>,
    ) {
        // Anchor needle: the node's own id text when present, otherwise
        // the collection key.
        let anchor = node
            .get("id")
            .and_then(Value::as_str)
            .map(|id| format!("\"{}\"", id))
            .unwrap_or_else(|| "\"base\"".to_string());

        if !node.contains_key("id") {
            self.emit(
                Diagnostic::missing_required_field(node_path, "id"),
                Some(&anchor),
            );
        } else if let Some(id) = node.get("id").and_then(Value::as_str) {
            if !base_ids.insert(id) {
                self.emit(
                    Diagnostic::invalid_property_value(
                        &join_key(node_path, "id"),
                        "id",
                        format!("duplicate view id '{}'", id),
                    ),
                    Some(&anchor),
                );
            }
        }

        if !node.contains_key("subType") {
            self.emit(
                Diagnostic::missing_required_field(node_path, "subType"),
                Some(&anchor),
            );
        }

        // Required fields per subType table; an unknown subType was
        // already reported by the walk's enum check, so nothing more is
        // enforceable here.
        let Some(set) = node
            .get("subType")
            .and_then(Value::as_str)
            .and_then(catalog::node_fields)
        else {
            return;
        };
        for def in set.required_fields() {
            if !node.contains_key(def.name) {
                self.emit(
                    Diagnostic::missing_required_field(node_path, def.name),
                    Some(&anchor),
                );
            }
        }
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn path_depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.split('.').count()
    }
}

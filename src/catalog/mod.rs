//! Field schema catalog
//!
//! Per CONFIG.md §2-§4, every recognized structural region carries a closed
//! field set. Scene-graph nodes are polymorphic: the applicable table is
//! selected by the node's own `subType` value (discriminated dispatch on
//! runtime data), and state overrides dispatch on the `subType` of the base
//! node they reference.

mod tables;
mod types;

pub use tables::{
    CELL_FIELDS, CELL_VIEWS_FIELDS, COMMON_NODE_FIELDS, OVERRIDE_FALLBACK_FIELDS, ROW_FIELDS,
    ROW_FOCUS_FIELDS, ROW_HEADER_FIELDS, SUB_TYPE_NAMES, SUB_TYPE_TABLES,
};
pub use types::{ArrayKind, FieldDef, FieldType, Primitive, ValueError};

use crate::context::PathContext;

/// A resolved field set: up to two tables searched in order.
///
/// Scene-graph nodes combine the common node fields with a subType-specific
/// table; flat regions use a single table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSet {
    primary: &'static [FieldDef],
    secondary: &'static [FieldDef],
}

impl FieldSet {
    const fn single(table: &'static [FieldDef]) -> Self {
        Self {
            primary: table,
            secondary: &[],
        }
    }

    const fn merged(primary: &'static [FieldDef], secondary: &'static [FieldDef]) -> Self {
        Self { primary, secondary }
    }

    /// Looks up one field definition by name.
    pub fn get(&self, name: &str) -> Option<&'static FieldDef> {
        self.primary
            .iter()
            .chain(self.secondary)
            .find(|def| def.name == name)
    }

    /// Iterates the required fields of this set.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.primary
            .iter()
            .chain(self.secondary)
            .filter(|def| def.required)
    }
}

/// Field set for a flat (non-polymorphic) region.
///
/// Returns `None` for contexts whose keys are free-form (row/cell names,
/// paths outside `rows`/`cells`) and for scene-graph contexts, which must
/// dispatch on `subType` via [`node_fields`] / [`override_fields`].
pub fn region_fields(context: &PathContext) -> Option<FieldSet> {
    match context {
        PathContext::Rows { row: Some(_) } => Some(FieldSet::single(ROW_FIELDS)),
        PathContext::RowFocusSettings { .. } => Some(FieldSet::single(ROW_FOCUS_FIELDS)),
        PathContext::RowHeaderSettings { .. } => Some(FieldSet::single(ROW_HEADER_FIELDS)),
        PathContext::Cells { cell: Some(_) } => Some(FieldSet::single(CELL_FIELDS)),
        PathContext::CellViews { .. } => Some(FieldSet::single(CELL_VIEWS_FIELDS)),
        _ => None,
    }
}

/// Field set for a scene-graph node of the given `subType`.
pub fn node_fields(sub_type: &str) -> Option<FieldSet> {
    sub_type_table(sub_type).map(|specific| FieldSet::merged(COMMON_NODE_FIELDS, specific))
}

/// Field set for a state override.
///
/// `base_sub_type` is the `subType` of the base node the override
/// references; when the base node is missing or its `subType` is unknown,
/// the conservative fallback union applies.
pub fn override_fields(base_sub_type: Option<&str>) -> FieldSet {
    base_sub_type
        .and_then(node_fields)
        .unwrap_or(FieldSet::merged(COMMON_NODE_FIELDS, OVERRIDE_FALLBACK_FIELDS))
}

fn sub_type_table(name: &str) -> Option<&'static [FieldDef]> {
    SUB_TYPE_TABLES
        .iter()
        .find(|(sub_type, _)| *sub_type == name)
        .map(|(_, table)| *table)
}

//! Structural classification of document paths
//!
//! Per CONFIG.md §2-§3, only the `rows` and `cells` sections carry closed
//! field sets; everything else is owned by other validators and resolves
//! to `PathContext::None`.
//!
//! Classification is pure string work over the dotted path built during
//! the tree walk (array indices rendered as `name[i]`), so it is safe to
//! call redundantly at every node.

use std::fmt;

/// The four state-collection names under `cells.<name>.views`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Normal,
    Focused,
    Disabled,
    Selected,
}

impl ViewState {
    pub const ALL: &'static [ViewState] = &[
        ViewState::Normal,
        ViewState::Focused,
        ViewState::Disabled,
        ViewState::Selected,
    ];

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "normal" => Some(ViewState::Normal),
            "focused" => Some(ViewState::Focused),
            "disabled" => Some(ViewState::Disabled),
            "selected" => Some(ViewState::Selected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Normal => "normal",
            ViewState::Focused => "focused",
            ViewState::Disabled => "disabled",
            ViewState::Selected => "selected",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural region a document path denotes.
///
/// Row/cell keys are carried when the path is deep enough to name them.
/// Unrecognized depth degrades to the coarser enclosing tag rather than
/// inventing a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathContext {
    /// Under `rows` (`row` is `None` for the section object itself)
    Rows { row: Option<String> },
    /// `rows.<row>.focusSettings` and below
    RowFocusSettings { row: String },
    /// `rows.<row>.headerSettings` and below
    RowHeaderSettings { row: String },
    /// Under `cells` (`cell` is `None` for the section object itself)
    Cells { cell: Option<String> },
    /// `cells.<cell>.views`
    CellViews { cell: String },
    /// `cells.<cell>.views.base` (`index` names one node when present)
    CellViewsBase { cell: String, index: Option<usize> },
    /// `cells.<cell>.views.<state>` (`view_id` names one override when present)
    CellStateOverride {
        cell: String,
        state: ViewState,
        view_id: Option<String>,
    },
    /// Outside `rows`/`cells`; never schema-checked here
    None,
}

impl PathContext {
    /// Classifies a dotted path.
    pub fn resolve(path: &str) -> PathContext {
        if path.is_empty() {
            return PathContext::None;
        }
        let segments: Vec<&str> = path.split('.').collect();
        match segments[0] {
            "rows" => Self::resolve_rows(&segments),
            "cells" => Self::resolve_cells(&segments),
            _ => PathContext::None,
        }
    }

    fn resolve_rows(segments: &[&str]) -> PathContext {
        let Some(row) = segments.get(1) else {
            return PathContext::Rows { row: None };
        };
        let row = (*row).to_string();
        match segments.get(2).copied() {
            Some("focusSettings") => PathContext::RowFocusSettings { row },
            Some("headerSettings") => PathContext::RowHeaderSettings { row },
            _ => PathContext::Rows { row: Some(row) },
        }
    }

    fn resolve_cells(segments: &[&str]) -> PathContext {
        let Some(cell) = segments.get(1) else {
            return PathContext::Cells { cell: None };
        };
        let cell = (*cell).to_string();
        if segments.get(2).copied() != Some("views") {
            return PathContext::Cells { cell: Some(cell) };
        }
        let Some(collection) = segments.get(3) else {
            return PathContext::CellViews { cell };
        };
        let (name, index) = split_index(collection);
        if name == "base" {
            return PathContext::CellViewsBase { cell, index };
        }
        if let Some(state) = ViewState::from_segment(name) {
            let view_id = segments.get(4).map(|s| (*s).to_string());
            return PathContext::CellStateOverride {
                cell,
                state,
                view_id,
            };
        }
        // Unknown collection name under views; degrade to the views object.
        PathContext::CellViews { cell }
    }
}

/// Splits a `name[i]` segment into its name and optional index.
fn split_index(segment: &str) -> (&str, Option<usize>) {
    let Some(open) = segment.find('[') else {
        return (segment, None);
    };
    if !segment.ends_with(']') {
        return (segment, None);
    }
    let index = segment[open + 1..segment.len() - 1].parse().ok();
    match index {
        Some(i) => (&segment[..open], Some(i)),
        None => (segment, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_outside_rows_and_cells_are_none() {
        assert_eq!(PathContext::resolve("theme.colors.primary"), PathContext::None);
        assert_eq!(PathContext::resolve("controls.Button"), PathContext::None);
        assert_eq!(PathContext::resolve(""), PathContext::None);
    }

    #[test]
    fn test_rows_section_and_row_settings() {
        assert_eq!(PathContext::resolve("rows"), PathContext::Rows { row: None });
        assert_eq!(
            PathContext::resolve("rows.home"),
            PathContext::Rows { row: Some("home".into()) }
        );
    }

    #[test]
    fn test_row_nested_settings_refine() {
        assert_eq!(
            PathContext::resolve("rows.home.focusSettings"),
            PathContext::RowFocusSettings { row: "home".into() }
        );
        assert_eq!(
            PathContext::resolve("rows.home.headerSettings.offset"),
            PathContext::RowHeaderSettings { row: "home".into() }
        );
    }

    #[test]
    fn test_unrecognized_row_depth_degrades_to_rows() {
        assert_eq!(
            PathContext::resolve("rows.home.somethingElse.deeper"),
            PathContext::Rows { row: Some("home".into()) }
        );
    }

    #[test]
    fn test_cell_views_base_with_index() {
        assert_eq!(
            PathContext::resolve("cells.movie.views.base"),
            PathContext::CellViewsBase { cell: "movie".into(), index: None }
        );
        assert_eq!(
            PathContext::resolve("cells.movie.views.base[2]"),
            PathContext::CellViewsBase { cell: "movie".into(), index: Some(2) }
        );
        assert_eq!(
            PathContext::resolve("cells.movie.views.base[2].clippingRect"),
            PathContext::CellViewsBase { cell: "movie".into(), index: Some(2) }
        );
    }

    #[test]
    fn test_cell_state_override_with_view_id() {
        assert_eq!(
            PathContext::resolve("cells.movie.views.focused"),
            PathContext::CellStateOverride {
                cell: "movie".into(),
                state: ViewState::Focused,
                view_id: None,
            }
        );
        assert_eq!(
            PathContext::resolve("cells.movie.views.selected.poster"),
            PathContext::CellStateOverride {
                cell: "movie".into(),
                state: ViewState::Selected,
                view_id: Some("poster".into()),
            }
        );
    }

    #[test]
    fn test_unknown_views_collection_degrades() {
        assert_eq!(
            PathContext::resolve("cells.movie.views.hovered.poster"),
            PathContext::CellViews { cell: "movie".into() }
        );
        assert_eq!(
            PathContext::resolve("cells.movie.other"),
            PathContext::Cells { cell: Some("movie".into()) }
        );
    }
}

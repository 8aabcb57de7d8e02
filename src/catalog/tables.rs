//! Static field tables per CONFIG.md §2-§4
//!
//! The subType dispatch table is data-driven: adding a scene-graph subtype
//! means adding one `(name, table)` pair, not another conditional branch.

use super::types::{ArrayKind, FieldDef, FieldType, Primitive};

const PAIR: &[Primitive] = &[Primitive::Number, Primitive::Number];
const RECT: &[Primitive] = &[
    Primitive::Number,
    Primitive::Number,
    Primitive::Number,
    Primitive::Number,
];

const PAIR_TUPLE: FieldType = FieldType::Array(ArrayKind::Tuple(PAIR));
const RECT_TUPLE: FieldType = FieldType::Array(ArrayKind::Tuple(RECT));

/// Valid keys of one `rows.<name>` settings object (CONFIG.md §2).
pub const ROW_FIELDS: &[FieldDef] = &[
    FieldDef::optional("height", FieldType::Number),
    FieldDef::optional("spacing", FieldType::Number),
    FieldDef::optional("cellSize", PAIR_TUPLE),
    FieldDef::optional("cellType", FieldType::String),
    FieldDef::optional("focusStrategy", FieldType::StringEnum(&["fixed", "floating"])),
    FieldDef::optional("visible", FieldType::Bool),
    FieldDef::optional("maxItems", FieldType::Number),
    FieldDef::optional("focusSettings", FieldType::Object),
    FieldDef::optional("headerSettings", FieldType::Object),
];

/// Valid keys of `rows.<name>.focusSettings` (CONFIG.md §2.1).
pub const ROW_FOCUS_FIELDS: &[FieldDef] = &[
    FieldDef::optional("focusBitmapUri", FieldType::String),
    FieldDef::optional("focusFeedbackColor", FieldType::String),
    FieldDef::optional("scaleFactor", FieldType::Number),
    FieldDef::optional("animationSpeed", FieldType::Number),
];

/// Valid keys of `rows.<name>.headerSettings` (CONFIG.md §2.2).
pub const ROW_HEADER_FIELDS: &[FieldDef] = &[
    FieldDef::optional("height", FieldType::Number),
    FieldDef::optional("fontKey", FieldType::String),
    FieldDef::optional("color", FieldType::String),
    FieldDef::optional("offset", PAIR_TUPLE),
    FieldDef::optional("visible", FieldType::Bool),
];

/// Valid keys of one `cells.<name>` fragment.
pub const CELL_FIELDS: &[FieldDef] = &[FieldDef::required("views", FieldType::Object)];

/// Valid keys of `cells.<name>.views`.
pub const CELL_VIEWS_FIELDS: &[FieldDef] = &[
    FieldDef::required("base", FieldType::Array(ArrayKind::Any)),
    FieldDef::optional("normal", FieldType::Object),
    FieldDef::optional("focused", FieldType::Object),
    FieldDef::optional("disabled", FieldType::Object),
    FieldDef::optional("selected", FieldType::Object),
];

/// Fields common to every scene-graph node (CONFIG.md §4).
///
/// `id` and `subType` appear here so node key checks accept them; their
/// presence is enforced by the dedicated scene-graph pass, not via the
/// `required` flag, to keep that pass the single source of those reports.
pub const COMMON_NODE_FIELDS: &[FieldDef] = &[
    FieldDef::optional("id", FieldType::String),
    FieldDef::optional("subType", FieldType::StringEnum(SUB_TYPE_NAMES)),
    FieldDef::required("translation", PAIR_TUPLE),
    FieldDef::required("opacity", FieldType::Number),
    FieldDef::optional("visible", FieldType::Bool),
    FieldDef::optional("scale", PAIR_TUPLE),
    FieldDef::optional("rotation", FieldType::Number),
    FieldDef::optional("inheritParentOpacity", FieldType::Bool),
    FieldDef::optional("clippingRect", RECT_TUPLE),
    FieldDef::optional(
        "childRenderOrder",
        FieldType::StringEnum(&["renderFirst", "renderLast"]),
    ),
];

const POSTER_FIELDS: &[FieldDef] = &[
    FieldDef::required("uri", FieldType::String),
    FieldDef::required("width", FieldType::Number),
    FieldDef::required("height", FieldType::Number),
    FieldDef::optional("loadSync", FieldType::Bool),
    FieldDef::optional("loadWidth", FieldType::Number),
    FieldDef::optional("loadHeight", FieldType::Number),
    FieldDef::optional(
        "loadDisplayMode",
        FieldType::StringEnum(&["noScale", "scaleToFit", "scaleToFill", "scaleToZoom"]),
    ),
    FieldDef::optional("blendColor", FieldType::String),
    FieldDef::optional("failedBitmapUri", FieldType::String),
    FieldDef::optional("loadingBitmapUri", FieldType::String),
];

const RECTANGLE_FIELDS: &[FieldDef] = &[
    FieldDef::required("width", FieldType::Number),
    FieldDef::required("height", FieldType::Number),
    FieldDef::required("color", FieldType::String),
    FieldDef::optional("blendingEnabled", FieldType::Bool),
];

const LABEL_FIELDS: &[FieldDef] = &[
    FieldDef::required("text", FieldType::String),
    FieldDef::required("fontKey", FieldType::String),
    FieldDef::required("color", FieldType::String),
    FieldDef::optional("width", FieldType::Number),
    FieldDef::optional("height", FieldType::Number),
    FieldDef::optional("horizAlign", FieldType::StringEnum(&["left", "center", "right"])),
    FieldDef::optional("vertAlign", FieldType::StringEnum(&["top", "center", "bottom"])),
    FieldDef::optional("wrap", FieldType::Bool),
    FieldDef::optional("numLines", FieldType::Number),
    FieldDef::optional("lineSpacing", FieldType::Number),
    FieldDef::optional("ellipsizeOnBoundary", FieldType::Bool),
];

const GROUP_FIELDS: &[FieldDef] = &[];

const MASK_GROUP_FIELDS: &[FieldDef] = &[
    FieldDef::required("maskUri", FieldType::String),
    FieldDef::optional("maskSize", PAIR_TUPLE),
    FieldDef::optional("maskOffset", PAIR_TUPLE),
];

/// Closed `subType` value set, aligned with `SUB_TYPE_TABLES`.
pub const SUB_TYPE_NAMES: &[&str] = &["Poster", "Rectangle", "Group", "Label", "MaskGroup"];

/// subType → specific field table (common fields apply to all of them).
pub const SUB_TYPE_TABLES: &[(&str, &[FieldDef])] = &[
    ("Poster", POSTER_FIELDS),
    ("Rectangle", RECTANGLE_FIELDS),
    ("Group", GROUP_FIELDS),
    ("Label", LABEL_FIELDS),
    ("MaskGroup", MASK_GROUP_FIELDS),
];

/// Extra fields accepted on a state override whose base node cannot be
/// found: the superset of commonly-overridden fields. Permissive so a bad
/// id (reported separately) does not cascade into per-field noise.
pub const OVERRIDE_FALLBACK_FIELDS: &[FieldDef] = &[
    FieldDef::optional("uri", FieldType::String),
    FieldDef::optional("color", FieldType::String),
    FieldDef::optional("text", FieldType::String),
    FieldDef::optional("fontKey", FieldType::String),
    FieldDef::optional("width", FieldType::Number),
    FieldDef::optional("height", FieldType::Number),
    FieldDef::optional("blendColor", FieldType::String),
];

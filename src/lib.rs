//! sceneconf - a strict, deterministic structural validator for SceneGraph
//! app-config documents
//!
//! One validation pass takes one raw JSON document plus a project root,
//! and returns a flat diagnostic list. See docs/CONFIG.md for the
//! document contract and the diagnostic code table.

pub mod catalog;
pub mod cli;
pub mod context;
pub mod diagnostics;
pub mod document;
pub mod font;
pub mod observability;
pub mod reference;
pub mod validator;

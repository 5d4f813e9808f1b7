//! redactor-form-types: Shared data types for the redactor-form helper.
//!
//! This crate contains pure data types (asset references, per-render
//! options) plus the small pure functions that adapt legacy form-framework
//! conventions: bracket-wrapped plugin selection strings and element ids
//! derived from field names. It has no filesystem or logging dependencies,
//! making it suitable as a foundation layer.

pub mod asset;
pub mod naming;
pub mod options;

// Re-export commonly used types at the crate root for convenience
pub use asset::{AssetKind, AssetRef};
pub use naming::id_from_name;
pub use options::{parse_plugin_list, RenderOptions};

//! redactor-form: server-side form helper for the Redactor rich-text editor.
//!
//! This library renders a `<textarea>` wired to the Redactor editor:
//! - resolves configured asset paths and verifies the editor is installed
//! - queues script/stylesheet references on a per-request page accumulator
//! - validates per-field plugin selections against the configured allow-list
//! - emits the textarea markup plus the inline initialization script
//!
//! Configuration lives in [`EditorSettings`]:
//! - `redactor_dir`: path to the Redactor sources under the web root,
//!   e.g. `js/admin/redactor`
//! - `plugins`: the allow-list of plugins installed under
//!   `<redactor_dir>/plugins/`, e.g. `["fontcolor", "clips", "fontsize"]`
//! - `web_root`: filesystem path that public asset paths resolve under
//!
//! ```
//! use redactor_form::{EditorSettings, PageAssets, RedactorWidget, RenderOptions};
//!
//! let mut settings = EditorSettings::default();
//! settings.redactor_dir = Some("js/redactor".to_string());
//! # settings.web_root = std::env::temp_dir();
//! # std::fs::create_dir_all(settings.web_root.join("js/redactor")).unwrap();
//! # std::fs::write(settings.web_root.join("js/redactor/redactor.js"), "").unwrap();
//!
//! let widget = RedactorWidget::new(settings);
//! let mut page = PageAssets::new();
//! let html = widget
//!     .render("article[body]", "", &RenderOptions::new(), &mut page)
//!     .unwrap();
//! assert!(html.starts_with("<textarea"));
//! ```

pub mod config;
pub mod core;
pub mod html;
pub mod widget;

// Re-export commonly used types
pub use crate::config::EditorSettings;
pub use crate::core::{AssetProbe, BoxedProbe, DiskProbe, PageAssets, RenderError};
pub use crate::widget::RedactorWidget;
pub use redactor_form_types::{
    id_from_name, parse_plugin_list, AssetKind, AssetRef, RenderOptions,
};

//! Redactor rich-text editor widget
//!
//! Renders a textarea wired to the Redactor editor: queues the editor's
//! script/stylesheet references (plus any installed plugin assets) on the
//! page accumulator, validates the per-field plugin selection against the
//! configured allow-list, and emits the markup with an inline
//! initialization script.

use log::debug;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::config::EditorSettings;
use crate::core::{BoxedProbe, DiskProbe, PageAssets, RenderError};
use crate::html::{content_tag, Attrs};
use redactor_form_types::{id_from_name, RenderOptions};

/// Fixed tag-replacement table baked into every initialization script.
/// Part of the widget contract, not configurable; the duplicated `strike`
/// row matches the table shipped by the original integration.
static REPLACE_TAGS: Lazy<serde_json::Value> = Lazy::new(|| {
    json!([
        ["strike", "del"],
        ["i", "em"],
        ["b", "strong"],
        ["big", "strong"],
        ["strike", "del"],
    ])
});

/// Renders Redactor-backed textarea widgets.
///
/// Constructed once with the process-wide [`EditorSettings`]; each
/// [`render`](Self::render) call is otherwise stateless and writes only
/// to the caller-owned [`PageAssets`].
pub struct RedactorWidget {
    settings: EditorSettings,
    probe: BoxedProbe,
}

impl RedactorWidget {
    /// Widget backed by the local filesystem
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_probe(settings, Box::new(DiskProbe))
    }

    /// Widget with an explicit readability probe
    pub fn with_probe(settings: EditorSettings, probe: BoxedProbe) -> Self {
        Self { settings, probe }
    }

    /// The settings this widget renders against
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Render the textarea and initialization script for one field.
    ///
    /// Queues the editor's assets on `page` as a side effect. Fails with
    /// [`RenderError::NotInstalled`] when the base assets are missing and
    /// with [`RenderError::MissingPlugins`] when the field requests
    /// plugins outside the allow-list; plugins whose own asset files are
    /// unreadable are skipped without error.
    pub fn render(
        &self,
        name: &str,
        content: &str,
        options: &RenderOptions,
        page: &mut PageAssets,
    ) -> Result<String, RenderError> {
        let id = options
            .id
            .clone()
            .unwrap_or_else(|| id_from_name(name));

        let script_path = self.settings.base_script_path();
        let stylesheet_path = self.settings.base_stylesheet_path();

        // Deliberately fails only when BOTH base files are unreadable,
        // matching the integration this replaces. A half install (one of
        // the two present) passes here and only surfaces at the client.
        if !self.readable(script_path.as_deref()) && !self.readable(stylesheet_path.as_deref()) {
            return Err(RenderError::NotInstalled);
        }

        if let Some(path) = script_path {
            page.add_script(path);
        }
        if let Some(path) = stylesheet_path {
            page.add_stylesheet(path);
        }

        for plugin in &self.settings.plugins {
            if let Some(path) = self.settings.plugin_script_path(plugin) {
                if self.readable(Some(&path)) {
                    page.add_script(path);
                } else {
                    debug!("skipping unreadable script for plugin `{plugin}`");
                }
            }
            if let Some(path) = self.settings.plugin_stylesheet_path(plugin) {
                if self.readable(Some(&path)) {
                    page.add_stylesheet(path);
                } else {
                    debug!("skipping unreadable stylesheet for plugin `{plugin}`");
                }
            }
        }

        let missing: Vec<String> = options
            .plugins
            .iter()
            .filter(|plugin| !self.settings.plugins.contains(plugin))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(RenderError::MissingPlugins(missing));
        }

        let init = init_script(&id, &options.plugins);

        let mut attrs = Attrs::new();
        attrs.set("name", name);
        attrs.set("id", &id);
        attrs.merge(options.attrs.iter().cloned());

        let mut script_attrs = Attrs::new();
        script_attrs.set("type", "text/javascript");

        Ok(format!(
            "{}{}",
            content_tag("textarea", content, &attrs),
            content_tag("script", &init, &script_attrs),
        ))
    }

    fn readable(&self, web_path: Option<&str>) -> bool {
        match web_path {
            Some(path) => self.probe.is_readable(&self.settings.fs_path(path)),
            None => false,
        }
    }
}

/// Build the inline initialization payload for one rendered field.
///
/// The option block is fixed; only the element id and the plugin list
/// vary per field.
fn init_script(id: &str, plugins: &[String]) -> String {
    let plugins_json = serde_json::to_string(plugins).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
      jQuery_redactor(function(){{
          jQuery_redactor('#{id}').redactor({{
              formattingAdd: [
              {{
                tag: 'q',
                title: 'Inline Quote'
              }}],
              minHeight: 150,
              linebreaks: true,
              plugins: {plugins_json},
              tabKey: false,
              paragraphize: false,
              replaceTags: {replace_tags}
          }});
      }});"#,
        replace_tags = *REPLACE_TAGS,
    )
}

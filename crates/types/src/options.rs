//! Per-render options for a widget instance

use serde::{Deserialize, Serialize};

/// Options for one render of a rich-text widget.
///
/// Created fresh per call and never retained. `plugins` is the
/// already-parsed, ordered plugin selection for this field; callers
/// holding the legacy bracket-string form should run it through
/// [`parse_plugin_list`] first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Explicit element id; derived from the field name when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Plugins requested for this field instance, in order
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Pass-through HTML attributes for the textarea
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
}

impl RenderOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the requested plugin list
    pub fn with_plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }

    /// Append a pass-through attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }
}

/// Parse the legacy bracket-wrapped plugin selection string.
///
/// `"[a,b]"` yields `["a", "b"]`. Exactly one leading and one trailing
/// character are stripped before splitting on commas, matching the
/// configuration format this adapter replaces; names are not trimmed
/// beyond that. Empty or bare-bracket input yields an empty list.
pub fn parse_plugin_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    let inner = chars.as_str();

    if inner.is_empty() {
        return Vec::new();
    }

    inner.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_list() {
        assert_eq!(parse_plugin_list("[a,b]"), vec!["a", "b"]);
        assert_eq!(
            parse_plugin_list("[fontfamily,clips,fontsize]"),
            vec!["fontfamily", "clips", "fontsize"]
        );
    }

    #[test]
    fn test_parse_preserves_order_and_spacing() {
        // Names are not trimmed; a space after the comma stays in the name.
        assert_eq!(parse_plugin_list("[a, b]"), vec!["a", " b"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_plugin_list("").is_empty());
        assert!(parse_plugin_list("[]").is_empty());
    }

    #[test]
    fn test_parse_single_plugin() {
        assert_eq!(parse_plugin_list("[clips]"), vec!["clips"]);
    }

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_id("intro")
            .with_plugins(["a", "b"])
            .with_attr("class", "rich");
        assert_eq!(options.id.as_deref(), Some("intro"));
        assert_eq!(options.plugins, vec!["a", "b"]);
        assert_eq!(
            options.attrs,
            vec![("class".to_string(), "rich".to_string())]
        );
    }
}

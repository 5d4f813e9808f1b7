//! Minimal HTML construction: escaping, attribute merging, tag building

/// Escape text for use inside an HTML attribute value or element body
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Insertion-ordered attribute list with merge semantics.
///
/// Setting a key that is already present overwrites its value in place,
/// keeping the original position, so pass-through options can override
/// base attributes without reordering the rendered output.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    entries: Vec<(String, String)>,
}

impl Attrs {
    /// Create an empty attribute list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite an attribute
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Merge another set of attributes on top of this one
    pub fn merge<I, K, V>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in other {
            self.set(key, value);
        }
    }

    /// Value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
        }
        out
    }
}

/// Build a non-void element with escaped attribute values.
///
/// Content is inserted verbatim: script bodies must not be entity-escaped,
/// so escaping body text is the caller's concern (use [`escape`]).
pub fn content_tag(tag: &str, content: &str, attrs: &Attrs) -> String {
    format!("<{}{}>{}</{}>", tag, attrs.render(), content, tag)
}

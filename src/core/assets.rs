//! Per-request page asset accumulator

use log::debug;
use redactor_form_types::{AssetKind, AssetRef};

/// Accumulates script and stylesheet references for one rendered page.
///
/// One instance lives per request and is owned by the caller; widgets
/// append to it while rendering. Registration is insertion-ordered and
/// idempotent: an exact (path, kind) duplicate is ignored, so several
/// widgets on one page do not queue the same tag twice. The accumulator
/// does no locking; sharing one instance across threads for the same
/// request is the caller's obligation.
#[derive(Debug, Clone, Default)]
pub struct PageAssets {
    refs: Vec<AssetRef>,
}

impl PageAssets {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a script reference
    pub fn add_script(&mut self, path: impl Into<String>) {
        self.push(AssetRef::script(path));
    }

    /// Queue a stylesheet reference
    pub fn add_stylesheet(&mut self, path: impl Into<String>) {
        self.push(AssetRef::stylesheet(path));
    }

    fn push(&mut self, asset: AssetRef) {
        if self.refs.contains(&asset) {
            return;
        }
        debug!("queued {:?}: {}", asset.kind, asset.path);
        self.refs.push(asset);
    }

    /// All queued references, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &AssetRef> {
        self.refs.iter()
    }

    /// Queued script paths, in insertion order
    pub fn scripts(&self) -> Vec<&str> {
        self.paths_of(AssetKind::Script)
    }

    /// Queued stylesheet paths, in insertion order
    pub fn stylesheets(&self) -> Vec<&str> {
        self.paths_of(AssetKind::Stylesheet)
    }

    fn paths_of(&self, kind: AssetKind) -> Vec<&str> {
        self.refs
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| a.path.as_str())
            .collect()
    }

    /// Number of queued references
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether nothing has been queued yet
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut page = PageAssets::new();
        page.add_script("/a.js");
        page.add_stylesheet("/a.css");
        page.add_script("/b.js");

        assert_eq!(page.scripts(), vec!["/a.js", "/b.js"]);
        assert_eq!(page.stylesheets(), vec!["/a.css"]);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut page = PageAssets::new();
        page.add_script("/a.js");
        page.add_script("/a.js");

        assert_eq!(page.scripts(), vec!["/a.js"]);
    }

    #[test]
    fn test_same_path_different_kind_is_kept() {
        let mut page = PageAssets::new();
        page.add_script("/a");
        page.add_stylesheet("/a");

        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_empty_accumulator() {
        let page = PageAssets::new();
        assert!(page.is_empty());
        assert_eq!(page.iter().count(), 0);
    }
}

//! Asset references queued for inclusion in a rendered page

use serde::{Deserialize, Serialize};

/// Kind of client-side asset a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// JavaScript file, included as a `<script src=...>` tag
    Script,
    /// CSS file, included as a `<link rel="stylesheet">` tag
    Stylesheet,
}

/// A resolved (path, kind) pair handed to the page accumulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Web path of the asset, rooted at the public web directory
    pub path: String,
    /// Whether this is a script or a stylesheet
    pub kind: AssetKind,
}

impl AssetRef {
    /// Create a script reference
    pub fn script(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: AssetKind::Script,
        }
    }

    /// Create a stylesheet reference
    pub fn stylesheet(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: AssetKind::Stylesheet,
        }
    }
}

//! Filesystem readability probe

use std::fs::File;
use std::path::Path;

/// Checks whether an asset file is readable on disk.
///
/// The renderer only needs a yes/no answer, so this is a trait seam:
/// production code uses [`DiskProbe`], tests substitute a fake that
/// never touches the filesystem.
pub trait AssetProbe {
    /// Whether the file at `path` exists and can be opened for reading
    fn is_readable(&self, path: &Path) -> bool;
}

/// Type-erased probe for dynamic dispatch
pub type BoxedProbe = Box<dyn AssetProbe>;

/// Probe backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl AssetProbe for DiskProbe {
    fn is_readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }
}

//! Core machinery: page accumulator, filesystem probe, render errors

mod assets;
mod error;
mod probe;

pub use assets::PageAssets;
pub use error::RenderError;
pub use probe::{AssetProbe, BoxedProbe, DiskProbe};

use serde::{Deserialize, Serialize};

/// How an image is fitted into its element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    /// Scale to fit inside the box, preserving aspect ratio.
    Contain,
    /// Scale to cover the whole box, preserving aspect ratio.
    Cover,
    /// Stretch to fill the box exactly.
    Stretch,
}

impl Default for ImageFit {
    fn default() -> Self {
        Self::Contain
    }
}

/// An image element referencing an asset by name.
///
/// Blob storage and decoding live outside the core; the element only names
/// the asset the rendering sink should fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Asset key in the external store.
    pub source: String,
    #[serde(default)]
    pub fit: ImageFit,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
}

impl ImageElement {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fit: ImageFit::default(),
            opacity: 1.0,
        }
    }
}

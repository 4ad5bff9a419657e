use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Binding;

/// What a placeholder resolves to at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// An image looked up by name in the asset store.
    Image,
    /// A QR code generated from the resolved value.
    QrCode,
}

/// A placeholder element with a static or data-bound source.
///
/// The `source` property may be bound to a data column; unbound placeholders
/// fall back to `static_source`. Generation of the actual QR code or image
/// lookup is the rendering sink's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderElement {
    pub kind: PlaceholderKind,
    /// Value used when no binding matches.
    #[serde(default)]
    pub static_source: Option<String>,
    #[serde(default)]
    pub bindings: SmallVec<[Binding; 2]>,
}

impl PlaceholderElement {
    pub fn new(kind: PlaceholderKind) -> Self {
        Self {
            kind,
            static_source: None,
            bindings: SmallVec::new(),
        }
    }

    /// Returns the binding for the given property, if any.
    pub fn binding(&self, property: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.property == property)
    }
}

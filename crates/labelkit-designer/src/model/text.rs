use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Binding, Color};

/// Horizontal text alignment within the element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl Default for HorizontalAlign {
    fn default() -> Self {
        Self::Left
    }
}

/// A text element.
///
/// `content` may carry `{Column}` tokens which are substituted per data row,
/// or the element may bind its `content` property to a column outright; see
/// the `binding` module for the resolution rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub content: String,
    pub font_family: String,
    /// Font size in typographic points.
    pub font_size: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    pub color: Color,
    #[serde(default)]
    pub align: HorizontalAlign,
    /// When set, the rendering sink wraps lines greedily at the box width.
    #[serde(default)]
    pub wrap: bool,
    /// Column bindings, usually empty or a single `content` binding.
    #[serde(default)]
    pub bindings: SmallVec<[Binding; 2]>,
}

impl TextElement {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
            bold: false,
            italic: false,
            color: Color::BLACK,
            align: HorizontalAlign::default(),
            wrap: true,
            bindings: SmallVec::new(),
        }
    }

    /// Returns the binding for the given property, if any.
    pub fn binding(&self, property: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.property == property)
    }
}

use serde::{Deserialize, Serialize};

use super::Color;

/// Geometric shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    /// A line across the element box diagonal from top-left to bottom-right.
    Line,
}

/// A filled/stroked geometric shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    pub kind: ShapeKind,
    /// Fill color; `None` draws no fill.
    pub fill: Option<Color>,
    pub stroke: Color,
    /// Stroke width in mm.
    pub stroke_width: f64,
    /// Corner radius in mm, rectangles only.
    #[serde(default)]
    pub corner_radius: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
}

impl ShapeElement {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            fill: None,
            stroke: Color::BLACK,
            stroke_width: 0.25,
            corner_radius: 0.0,
            opacity: 1.0,
        }
    }
}

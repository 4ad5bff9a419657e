//! Element data model for label designs.
//!
//! A label is a flat list of [`Element`]s. Every element shares the same base
//! fields (identity, transform, stacking order, visibility, lock) and carries
//! a kind-specific payload in [`ElementKind`]. All lengths are millimeters,
//! rotation is degrees clockwise, and the design origin is the top-left
//! corner of the label with +y pointing down the page.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod image;
mod placeholder;
mod shape;
mod text;

pub use image::{ImageElement, ImageFit};
pub use placeholder::{PlaceholderElement, PlaceholderKind};
pub use shape::{ShapeElement, ShapeKind};
pub use text::{HorizontalAlign, TextElement};

/// Opaque element identity, unique within a master label.
///
/// Immutable once created; override records refer to master elements by this
/// id and never hold the element itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in design space (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle in design space (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Position, size and rotation of an element.
///
/// `x`/`y` locate the top-left corner of the unrotated box; rotation is
/// applied around the box center. Patch merges treat the whole value as
/// atomic: a transform override always replaces every field at once, so a
/// stale width can never pair with a new x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Left edge in mm.
    pub x: f64,
    /// Top edge in mm.
    pub y: f64,
    /// Width in mm.
    pub width: f64,
    /// Height in mm.
    pub height: f64,
    /// Rotation in degrees, clockwise, around the box center.
    pub rotation: f64,
}

impl Transform {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Center of the unrotated box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Bounding box ignoring rotation.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A named link from an element property to a data-table column.
///
/// Resolution happens per data row at render time; see the `binding` module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// The element property this binding feeds (e.g. `content`, `source`).
    pub property: String,
    /// The data-table column name, matched case-insensitively.
    pub column: String,
}

impl Binding {
    pub fn new(property: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            column: column.into(),
        }
    }
}

/// Kind-specific payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text(TextElement),
    Image(ImageElement),
    Shape(ShapeElement),
    Placeholder(PlaceholderElement),
}

impl ElementKind {
    /// Stable tag name, used in logs and file diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Text(_) => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Shape(_) => "shape",
            ElementKind::Placeholder(_) => "placeholder",
        }
    }
}

/// One visual element of a label design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Identity, immutable once created.
    pub id: ElementId,
    /// Placement in mm/degrees.
    pub transform: Transform,
    /// Stacking order; lower renders behind. Values need not be contiguous
    /// or unique, only their relative order is meaningful.
    pub z_index: i32,
    /// Hidden elements are skipped by the rendering sink.
    pub visible: bool,
    /// Locked elements are not selectable or draggable.
    pub locked: bool,
    /// Kind-specific payload.
    pub kind: ElementKind,
}

impl Element {
    /// Creates an element with a fresh id at z-index 0.
    pub fn new(kind: ElementKind, transform: Transform) -> Self {
        Self {
            id: ElementId::new(),
            transform,
            z_index: 0,
            visible: true,
            locked: false,
            kind,
        }
    }
}

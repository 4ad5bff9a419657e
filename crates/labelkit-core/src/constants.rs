//! Numeric constants shared across the workspace.

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// DPI used for the interactive canvas.
pub const SCREEN_DPI: f64 = 96.0;

/// DPI used when rasterizing for print export.
pub const PRINT_DPI: f64 = 300.0;

/// Lower bound for interactive zoom.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper bound for interactive zoom.
pub const MAX_ZOOM: f64 = 16.0;

/// Fraction of the viewport reserved as padding by fit-to-view.
pub const VIEW_PADDING: f64 = 0.05;

/// Smallest width/height an element may be resized to, in mm.
pub const MIN_ELEMENT_SIZE_MM: f64 = 1.0;

/// Default number of document snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 64;

/// A4 sheet size in mm.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

/// US Letter sheet size in mm.
pub const LETTER_WIDTH_MM: f64 = 215.9;
pub const LETTER_HEIGHT_MM: f64 = 279.4;

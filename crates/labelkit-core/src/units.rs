//! Unit conversion utilities.
//!
//! Converts between millimeters, inches, typographic points, and device
//! pixels at a given DPI. Design space is always millimeters; pixels exist in
//! two DPI domains, the interactive canvas ([`constants::SCREEN_DPI`]) and
//! print export ([`constants::PRINT_DPI`]), both served by the same formulas.
//!
//! No function here rounds. Rounding is the caller's business at the pixel
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{self, MM_PER_INCH, POINTS_PER_INCH};

/// Measurement system used for display and input parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

/// Converts millimeters to device pixels at the given DPI.
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    mm / MM_PER_INCH * dpi
}

/// Converts device pixels to millimeters at the given DPI.
pub fn px_to_mm(px: f64, dpi: f64) -> f64 {
    px * MM_PER_INCH / dpi
}

/// Converts millimeters to pixels in the interactive-canvas DPI domain.
pub fn mm_to_screen_px(mm: f64) -> f64 {
    mm_to_px(mm, constants::SCREEN_DPI)
}

/// Converts millimeters to pixels in the print-export DPI domain.
pub fn mm_to_print_px(mm: f64) -> f64 {
    mm_to_px(mm, constants::PRINT_DPI)
}

/// Converts millimeters to inches.
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Converts inches to millimeters.
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Converts millimeters to typographic points.
pub fn mm_to_points(mm: f64) -> f64 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

/// Converts typographic points to millimeters.
pub fn points_to_mm(points: f64) -> f64 {
    points / POINTS_PER_INCH * MM_PER_INCH
}

/// Format a length value for display in the given system.
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.2} mm", value_mm),
        MeasurementSystem::Imperial => format!("{:.3} in", mm_to_inches(value_mm)),
    }
}

/// Get the unit label for the given system ("mm" or "in").
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

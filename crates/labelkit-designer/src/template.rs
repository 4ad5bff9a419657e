//! Label sheet templates: the physical grid geometry.
//!
//! A template is an immutable value describing one page of a label sheet:
//! how many labels, how large, how spaced, and where the grid sits on the
//! sheet. Switching templates invalidates every override, because slot
//! indices only mean something relative to one grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use labelkit_core::constants::{
    A4_HEIGHT_MM, A4_WIDTH_MM, LETTER_HEIGHT_MM, LETTER_WIDTH_MM,
};

/// Unprintable borders of the sheet, in mm.
///
/// The grid offsets are measured from the sheet's top-left corner and
/// already cover the left/top margins; the right/bottom margins bound the
/// printable area for validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Physical geometry of one label sheet page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelTemplate {
    /// Stable preset identifier, e.g. `avery-5163`.
    pub id: String,
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    /// Width of a single label in mm.
    pub label_width: f64,
    /// Height of a single label in mm.
    pub label_height: f64,
    /// Horizontal gap between adjacent columns in mm.
    pub horizontal_spacing: f64,
    /// Vertical gap between adjacent rows in mm.
    pub vertical_spacing: f64,
    /// Distance from the sheet's left edge to the first column in mm.
    pub offset_left: f64,
    /// Distance from the sheet's top edge to the first row in mm.
    pub offset_top: f64,
    pub sheet_width: f64,
    pub sheet_height: f64,
    #[serde(default)]
    pub margins: Margins,
}

impl LabelTemplate {
    /// Number of label slots on one page.
    pub fn slots_per_page(&self) -> usize {
        self.rows * self.columns
    }

    /// Width of the printable area in mm.
    pub fn printable_width(&self) -> f64 {
        self.sheet_width - self.margins.right
    }

    /// Height of the printable area in mm.
    pub fn printable_height(&self) -> f64 {
        self.sheet_height - self.margins.bottom
    }

    /// Horizontal span of the whole grid, offset included, in mm.
    pub fn grid_width(&self) -> f64 {
        self.offset_left
            + self.columns as f64 * self.label_width
            + (self.columns.saturating_sub(1)) as f64 * self.horizontal_spacing
    }

    /// Vertical span of the whole grid, offset included, in mm.
    pub fn grid_height(&self) -> f64 {
        self.offset_top
            + self.rows as f64 * self.label_height
            + (self.rows.saturating_sub(1)) as f64 * self.vertical_spacing
    }

    /// Checks the grid against the printable area.
    ///
    /// Always returns the full issue list; the caller decides whether an
    /// invalid template blocks the action or merely warns.
    pub fn validate(&self) -> TemplateValidation {
        let mut issues = Vec::new();

        for (field, value) in [
            ("label width", self.label_width),
            ("label height", self.label_height),
        ] {
            if value <= 0.0 {
                issues.push(TemplateIssue::NonPositiveDimension { field, value });
            }
        }
        if self.rows == 0 {
            issues.push(TemplateIssue::NonPositiveDimension {
                field: "rows",
                value: self.rows as f64,
            });
        }
        if self.columns == 0 {
            issues.push(TemplateIssue::NonPositiveDimension {
                field: "columns",
                value: self.columns as f64,
            });
        }

        // Overflow checks only make sense on a well-formed grid.
        if issues.is_empty() {
            let horizontal_overflow = self.grid_width() - self.printable_width();
            if horizontal_overflow > 0.0 {
                issues.push(TemplateIssue::HorizontalOverflow {
                    overflow_mm: horizontal_overflow,
                });
            }
            let vertical_overflow = self.grid_height() - self.printable_height();
            if vertical_overflow > 0.0 {
                issues.push(TemplateIssue::VerticalOverflow {
                    overflow_mm: vertical_overflow,
                });
            }
        }

        TemplateValidation { issues }
    }
}

/// One problem found by [`LabelTemplate::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateIssue {
    /// A dimension that must be strictly positive is not.
    NonPositiveDimension { field: &'static str, value: f64 },
    /// The grid exceeds the printable width by this many mm.
    HorizontalOverflow { overflow_mm: f64 },
    /// The grid exceeds the printable height by this many mm.
    VerticalOverflow { overflow_mm: f64 },
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateIssue::NonPositiveDimension { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            TemplateIssue::HorizontalOverflow { overflow_mm } => {
                write!(
                    f,
                    "labels overflow the printable width by {:.2} mm",
                    overflow_mm
                )
            }
            TemplateIssue::VerticalOverflow { overflow_mm } => {
                write!(
                    f,
                    "labels overflow the printable height by {:.2} mm",
                    overflow_mm
                )
            }
        }
    }
}

/// Result of template validation: advisory, never thrown.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateValidation {
    pub issues: Vec<TemplateIssue>,
}

impl TemplateValidation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Built-in sheet presets.
///
/// Measurements follow the manufacturers' data sheets, converted to mm.
pub fn builtin_templates() -> Vec<LabelTemplate> {
    vec![
        // 2 x 5 shipping labels on US Letter.
        LabelTemplate {
            id: "avery-5163".to_string(),
            name: "Avery 5163 Shipping (2\" x 4\")".to_string(),
            rows: 5,
            columns: 2,
            label_width: 101.6,
            label_height: 50.8,
            horizontal_spacing: 3.175,
            vertical_spacing: 0.0,
            offset_left: 4.7625,
            offset_top: 12.7,
            sheet_width: LETTER_WIDTH_MM,
            sheet_height: LETTER_HEIGHT_MM,
            margins: Margins::default(),
        },
        // 3 x 10 address labels on US Letter.
        LabelTemplate {
            id: "avery-5160".to_string(),
            name: "Avery 5160 Address (1\" x 2-5/8\")".to_string(),
            rows: 10,
            columns: 3,
            label_width: 66.675,
            label_height: 25.4,
            horizontal_spacing: 3.175,
            vertical_spacing: 0.0,
            offset_left: 4.7625,
            offset_top: 12.7,
            sheet_width: LETTER_WIDTH_MM,
            sheet_height: LETTER_HEIGHT_MM,
            margins: Margins::default(),
        },
        // 3 x 7 address labels on A4.
        LabelTemplate {
            id: "avery-l7160".to_string(),
            name: "Avery L7160 Address (63.5 x 38.1 mm)".to_string(),
            rows: 7,
            columns: 3,
            label_width: 63.5,
            label_height: 38.1,
            horizontal_spacing: 2.5,
            vertical_spacing: 0.0,
            offset_left: 7.25,
            offset_top: 15.15,
            sheet_width: A4_WIDTH_MM,
            sheet_height: A4_HEIGHT_MM,
            margins: Margins::default(),
        },
        // Single full-page label, used by template-editing mode.
        LabelTemplate {
            id: "a4-full".to_string(),
            name: "A4 Full Sheet".to_string(),
            rows: 1,
            columns: 1,
            label_width: A4_WIDTH_MM,
            label_height: A4_HEIGHT_MM,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
            offset_left: 0.0,
            offset_top: 0.0,
            sheet_width: A4_WIDTH_MM,
            sheet_height: A4_HEIGHT_MM,
            margins: Margins::default(),
        },
    ]
}

/// Looks up a built-in preset by id.
pub fn preset(id: &str) -> Option<LabelTemplate> {
    builtin_templates().into_iter().find(|t| t.id == id)
}

//! Grid placement: slot index to physical position, plus adjacency-aware
//! clipping.
//!
//! This module only knows about one page's grid. Callers translate absolute
//! slot indices (stable across pagination) to on-page indices before asking;
//! the editor's pagination helpers do that split. All arithmetic stays in
//! mm; rounding belongs to the pixel-conversion boundary.

use crate::model::Rect;
use crate::template::LabelTemplate;

/// Where a slot sits on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPosition {
    pub row: usize,
    pub col: usize,
    /// Left edge of the label in mm from the sheet's left edge.
    pub x: f64,
    /// Top edge of the label in mm from the sheet's top edge.
    pub y: f64,
}

/// Computes the physical position of the Nth slot on a page, row-major.
///
/// Returns `None` for indices outside `[0, rows*columns)`. UI code probes
/// boundary indices routinely during pagination math, so out-of-range is a
/// normal answer, not an error.
pub fn slot_position(template: &LabelTemplate, index_on_page: usize) -> Option<SlotPosition> {
    if template.columns == 0 || index_on_page >= template.slots_per_page() {
        return None;
    }
    let row = index_on_page / template.columns;
    let col = index_on_page % template.columns;
    Some(SlotPosition {
        row,
        col,
        x: template.offset_left
            + col as f64 * (template.label_width + template.horizontal_spacing),
        y: template.offset_top
            + row as f64 * (template.label_height + template.vertical_spacing),
    })
}

/// Computes the advisory clip rectangle for a slot during sheet rendering.
///
/// Edges with a neighboring label clip exactly at the label boundary; edges
/// without one are pushed out by at least a full sheet dimension so designs
/// may bleed off the sheet where no neighbor would be corrupted. A slot with
/// no neighbors on any side (a 1x1 grid) returns `None`: nothing needs
/// clipping at all.
///
/// The rectangle is metadata for the rendering sink; composition itself
/// never clips.
pub fn slot_clip_rect(template: &LabelTemplate, index_on_page: usize) -> Option<Rect> {
    let pos = slot_position(template, index_on_page)?;

    let has_left = pos.col > 0;
    let has_right = pos.col + 1 < template.columns;
    let has_top = pos.row > 0;
    let has_bottom = pos.row + 1 < template.rows;

    if !has_left && !has_right && !has_top && !has_bottom {
        return None;
    }

    let bleed = template.sheet_width.max(template.sheet_height);

    let mut left = pos.x;
    let mut top = pos.y;
    let mut right = pos.x + template.label_width;
    let mut bottom = pos.y + template.label_height;

    if !has_left {
        left -= bleed;
    }
    if !has_right {
        right += bleed;
    }
    if !has_top {
        top -= bleed;
    }
    if !has_bottom {
        bottom += bleed;
    }

    Some(Rect::new(left, top, right - left, bottom - top))
}

//! Viewport and coordinate transformation for the interactive canvas.
//!
//! Converts between screen pixels and design-space millimeters. Both spaces
//! share the same orientation, origin at the top-left with +y down, so the
//! mapping is pan, zoom and a DPI conversion with no axis flip:
//!
//! ```text
//! design_mm = px_to_mm((screen - pan) / zoom, SCREEN_DPI)
//! screen    = mm_to_px(design_mm, SCREEN_DPI) * zoom + pan
//! ```
//!
//! Print export uses the same unit formulas at `PRINT_DPI`; see
//! `labelkit_core::units`. The viewport itself only serves the interactive
//! domain.

use std::fmt;

use labelkit_core::constants::{MAX_ZOOM, MIN_ZOOM, SCREEN_DPI, VIEW_PADDING};
use labelkit_core::units::{mm_to_px, px_to_mm};

use crate::model::Point;

/// Zoom and pan state of the canvas.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport for a canvas of the given pixel dimensions.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Updates the canvas dimensions, typically on window resize.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, ignored outside the configured clamp range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom >= MIN_ZOOM && zoom <= MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.2);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts screen pixels to design millimeters.
    pub fn screen_to_design(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            px_to_mm((screen_x - self.pan_x) / self.zoom, SCREEN_DPI),
            px_to_mm((screen_y - self.pan_y) / self.zoom, SCREEN_DPI),
        )
    }

    /// Converts design millimeters to screen pixels.
    pub fn design_to_screen(&self, design: Point) -> (f64, f64) {
        (
            mm_to_px(design.x, SCREEN_DPI) * self.zoom + self.pan_x,
            mm_to_px(design.y, SCREEN_DPI) * self.zoom + self.pan_y,
        )
    }

    /// Converts a screen-pixel delta to a design-space delta in mm.
    ///
    /// Deltas ignore pan: only zoom and DPI apply.
    pub fn screen_delta_to_design(&self, dx: f64, dy: f64) -> (f64, f64) {
        (
            px_to_mm(dx / self.zoom, SCREEN_DPI),
            px_to_mm(dy / self.zoom, SCREEN_DPI),
        )
    }

    /// Zooms while keeping the given design point fixed on screen.
    pub fn zoom_to_point(&mut self, anchor: Point, new_zoom: f64) {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&new_zoom) {
            return;
        }
        let (screen_x, screen_y) = self.design_to_screen(anchor);
        self.zoom = new_zoom;
        self.pan_x = screen_x - mm_to_px(anchor.x, SCREEN_DPI) * new_zoom;
        self.pan_y = screen_y - mm_to_px(anchor.y, SCREEN_DPI) * new_zoom;
    }

    pub fn zoom_in_at(&mut self, anchor: Point) {
        self.zoom_to_point(anchor, self.zoom * 1.2);
    }

    pub fn zoom_out_at(&mut self, anchor: Point) {
        self.zoom_to_point(anchor, self.zoom / 1.2);
    }

    /// Fits a design-space bounding box (mm) into the canvas with padding.
    ///
    /// `padding` is the fraction of the viewport reserved on each side.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width_px = mm_to_px(max_x - min_x, SCREEN_DPI);
        let height_px = mm_to_px(max_y - min_y, SCREEN_DPI);

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / width_px;
        let zoom_y = (self.canvas_height * padding_factor) / height_px;
        let new_zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        self.zoom = new_zoom;
        self.pan_x =
            (self.canvas_width - width_px * new_zoom) / 2.0 - mm_to_px(min_x, SCREEN_DPI) * new_zoom;
        self.pan_y = (self.canvas_height - height_px * new_zoom) / 2.0
            - mm_to_px(min_y, SCREEN_DPI) * new_zoom;
    }

    /// Fits with the default padding.
    pub fn fit_to_view(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        self.fit_to_bounds(min_x, min_y, max_x, max_y, VIEW_PADDING);
    }

    /// Centers the canvas on a design point.
    pub fn center_on(&mut self, design: Point) {
        self.pan_x = self.canvas_width / 2.0 - mm_to_px(design.x, SCREEN_DPI) * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - mm_to_px(design.y, SCREEN_DPI) * self.zoom;
    }

    /// Resets to 1:1 zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

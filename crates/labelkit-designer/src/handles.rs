//! Selection geometry: hit-testing and rotation-aware handle math.
//!
//! Resize handles live on the element's unrotated box, so a pointer delta
//! arriving in design-space axes must be rotated *into* the element's local
//! frame before it can change width or height, and any origin shift caused
//! by dragging a near edge must be rotated back *out* before it lands on the
//! element's world x/y. Skipping either step makes resizing a rotated
//! element silently translate it.

use labelkit_core::constants::MIN_ELEMENT_SIZE_MM;

use crate::model::{Element, ElementId, Point, Transform};

/// The eight resize handles of a selection box, named in compass terms on
/// the element's own (unrotated) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl ResizeHandle {
    /// -1 when the handle drags the west edge, +1 for east, 0 for neither.
    fn x_edge(&self) -> f64 {
        match self {
            ResizeHandle::NorthWest | ResizeHandle::West | ResizeHandle::SouthWest => -1.0,
            ResizeHandle::NorthEast | ResizeHandle::East | ResizeHandle::SouthEast => 1.0,
            ResizeHandle::North | ResizeHandle::South => 0.0,
        }
    }

    /// -1 when the handle drags the north edge, +1 for south, 0 for neither.
    fn y_edge(&self) -> f64 {
        match self {
            ResizeHandle::NorthWest | ResizeHandle::North | ResizeHandle::NorthEast => -1.0,
            ResizeHandle::SouthWest | ResizeHandle::South | ResizeHandle::SouthEast => 1.0,
            ResizeHandle::West | ResizeHandle::East => 0.0,
        }
    }

    pub fn is_corner(&self) -> bool {
        self.x_edge() != 0.0 && self.y_edge() != 0.0
    }
}

/// Rotates a vector by `radians` (clockwise, +y down).
fn rotate(dx: f64, dy: f64, radians: f64) -> (f64, f64) {
    let (sin, cos) = radians.sin_cos();
    (dx * cos - dy * sin, dx * sin + dy * cos)
}

/// Resizes via a handle drag, honoring the element's rotation.
///
/// `dx_mm`/`dy_mm` is the pointer delta in design-space axes (already
/// converted from screen pixels). With `lock_aspect`, the dominant axis of
/// movement drives both dimensions at the original ratio, and the origin
/// shift is rederived from the ratio-corrected dimension delta rather than
/// the raw pointer delta, so the untouched corner stays put.
pub fn apply_resize(
    transform: &Transform,
    handle: ResizeHandle,
    dx_mm: f64,
    dy_mm: f64,
    lock_aspect: bool,
) -> Transform {
    let radians = transform.rotation.to_radians();

    // Step one: pointer delta into the element's local axes.
    let (local_dx, local_dy) = rotate(dx_mm, dy_mm, -radians);

    let sx = handle.x_edge();
    let sy = handle.y_edge();

    let mut new_width = transform.width + sx * local_dx;
    let mut new_height = transform.height + sy * local_dy;

    if lock_aspect && transform.width > 0.0 && transform.height > 0.0 {
        let ratio = transform.width / transform.height;
        let width_drives = if handle.is_corner() {
            local_dx.abs() >= local_dy.abs()
        } else {
            sx != 0.0
        };
        if width_drives {
            new_width = new_width.max(MIN_ELEMENT_SIZE_MM);
            new_height = new_width / ratio;
            if new_height < MIN_ELEMENT_SIZE_MM {
                new_height = MIN_ELEMENT_SIZE_MM;
                new_width = new_height * ratio;
            }
        } else {
            new_height = new_height.max(MIN_ELEMENT_SIZE_MM);
            new_width = new_height * ratio;
            if new_width < MIN_ELEMENT_SIZE_MM {
                new_width = MIN_ELEMENT_SIZE_MM;
                new_height = new_width / ratio;
            }
        }
    } else {
        new_width = new_width.max(MIN_ELEMENT_SIZE_MM);
        new_height = new_height.max(MIN_ELEMENT_SIZE_MM);
    }

    // Shifts derive from the clamped dimension deltas, not the raw pointer.
    let width_delta = new_width - transform.width;
    let height_delta = new_height - transform.height;
    let local_shift_x = if sx < 0.0 { -width_delta } else { 0.0 };
    let local_shift_y = if sy < 0.0 { -height_delta } else { 0.0 };

    // Step two: near-edge shift back into world axes.
    let (world_shift_x, world_shift_y) = rotate(local_shift_x, local_shift_y, radians);

    Transform {
        x: transform.x + world_shift_x,
        y: transform.y + world_shift_y,
        width: new_width,
        height: new_height,
        rotation: transform.rotation,
    }
}

/// World position of a handle on the rotated selection box.
pub fn handle_position(transform: &Transform, handle: ResizeHandle) -> Point {
    let center = transform.center();
    let local_x = handle.x_edge() * transform.width / 2.0;
    let local_y = handle.y_edge() * transform.height / 2.0;
    let (dx, dy) = rotate(local_x, local_y, transform.rotation.to_radians());
    Point::new(center.x + dx, center.y + dy)
}

/// Rotation-aware point-in-element test with a tolerance in mm.
pub fn element_contains_point(transform: &Transform, point: Point, tolerance_mm: f64) -> bool {
    let center = transform.center();
    let (local_x, local_y) = rotate(
        point.x - center.x,
        point.y - center.y,
        -transform.rotation.to_radians(),
    );
    local_x.abs() <= transform.width / 2.0 + tolerance_mm
        && local_y.abs() <= transform.height / 2.0 + tolerance_mm
}

/// Finds the topmost selectable element under a design-space point.
///
/// `resolved` must be in render order (back to front), as produced by
/// `compose::resolve`; the scan walks it front to back. Invisible elements
/// are ignored and locked elements cannot be picked.
pub fn hit_test(resolved: &[Element], point: Point, tolerance_mm: f64) -> Option<ElementId> {
    resolved
        .iter()
        .rev()
        .find(|e| {
            e.visible && !e.locked && element_contains_point(&e.transform, point, tolerance_mm)
        })
        .map(|e| e.id)
}

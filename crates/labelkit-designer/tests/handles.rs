use labelkit_designer::handles::{
    apply_resize, element_contains_point, handle_position, hit_test, ResizeHandle,
};
use labelkit_designer::model::{
    Element, ElementKind, Point, ShapeElement, ShapeKind, Transform,
};
use labelkit_designer::{resolve, MasterLabel};

fn transform(x: f64, y: f64, w: f64, h: f64, rotation: f64) -> Transform {
    Transform {
        x,
        y,
        width: w,
        height: h,
        rotation,
    }
}

fn shape_at(t: Transform) -> Element {
    Element::new(ElementKind::Shape(ShapeElement::new(ShapeKind::Rectangle)), t)
}

#[test]
fn east_drag_on_unrotated_element_changes_width_only() {
    let t = transform(10.0, 10.0, 40.0, 20.0, 0.0);
    let resized = apply_resize(&t, ResizeHandle::East, 5.0, 3.0, false);

    assert!((resized.width - 45.0).abs() < 1e-9);
    assert!((resized.height - 20.0).abs() < 1e-9);
    assert!((resized.x - 10.0).abs() < 1e-9);
    assert!((resized.y - 10.0).abs() < 1e-9);
}

#[test]
fn west_drag_shifts_origin_with_the_edge() {
    let t = transform(10.0, 10.0, 40.0, 20.0, 0.0);
    let resized = apply_resize(&t, ResizeHandle::West, 5.0, 0.0, false);

    // Dragging the left edge right shrinks width and moves x in lockstep.
    assert!((resized.width - 35.0).abs() < 1e-9);
    assert!((resized.x - 15.0).abs() < 1e-9);
    assert!((resized.y - 10.0).abs() < 1e-9);
}

#[test]
fn rotated_element_resizes_along_local_axes() {
    // Rotated 90 degrees: the local x-axis lies on the screen's vertical,
    // so a pure horizontal drag must land on the local y-axis and change
    // only the logical height.
    let t = transform(10.0, 10.0, 40.0, 20.0, 90.0);
    let resized = apply_resize(&t, ResizeHandle::South, 5.0, 0.0, false);

    assert!((resized.width - 40.0).abs() < 1e-9, "width must not change");
    assert!((resized.height - 15.0).abs() < 1e-9);
}

#[test]
fn rotated_near_edge_shift_is_rotated_back_into_world_axes() {
    let t = transform(0.0, 0.0, 40.0, 20.0, 30.0);

    // Drag the north-west corner outward by (-6, -4) in its local axes;
    // the world-space delta is that vector rotated forward by 30 degrees.
    let radians = 30.0f64.to_radians();
    let (dx, dy) = (
        -6.0 * radians.cos() - -4.0 * radians.sin(),
        -6.0 * radians.sin() + -4.0 * radians.cos(),
    );
    let resized = apply_resize(&t, ResizeHandle::NorthWest, dx, dy, false);

    assert!((resized.width - 46.0).abs() < 1e-9);
    assert!((resized.height - 24.0).abs() < 1e-9);
    // The origin shift is the local near-edge shift (-dw, -dh) rotated
    // forward, i.e. exactly the pointer delta for a corner drag.
    assert!((resized.x - dx).abs() < 1e-9);
    assert!((resized.y - dy).abs() < 1e-9);
}

#[test]
fn unrotated_corner_drag_keeps_the_far_corner_fixed() {
    let t = transform(10.0, 10.0, 40.0, 20.0, 0.0);
    let anchor = handle_position(&t, ResizeHandle::SouthEast);

    let resized = apply_resize(&t, ResizeHandle::NorthWest, -6.0, -4.0, false);
    let after = handle_position(&resized, ResizeHandle::SouthEast);

    assert!((resized.width - 46.0).abs() < 1e-9);
    assert!((resized.height - 24.0).abs() < 1e-9);
    assert!(anchor.distance_to(&after) < 1e-9);
}

#[test]
fn aspect_lock_recomputes_both_dimensions_from_dominant_axis() {
    let t = transform(0.0, 0.0, 40.0, 20.0, 0.0);
    let resized = apply_resize(&t, ResizeHandle::SouthEast, 10.0, 1.0, true);

    assert!((resized.width - 50.0).abs() < 1e-9);
    assert!((resized.height - 25.0).abs() < 1e-9);
    assert!((resized.x - 0.0).abs() < 1e-9);
    assert!((resized.y - 0.0).abs() < 1e-9);
}

#[test]
fn aspect_lock_shift_tracks_corrected_delta() {
    let t = transform(0.0, 0.0, 40.0, 20.0, 0.0);
    // Dominant axis is x (+10); the height delta is derived (+5), and the
    // north edge shift must use that derived delta, not the raw 1.0.
    let resized = apply_resize(&t, ResizeHandle::NorthEast, 10.0, -1.0, true);

    assert!((resized.width - 50.0).abs() < 1e-9);
    assert!((resized.height - 25.0).abs() < 1e-9);
    assert!((resized.x - 0.0).abs() < 1e-9);
    assert!((resized.y - -5.0).abs() < 1e-9);
}

#[test]
fn resize_clamps_to_minimum_size() {
    let t = transform(0.0, 0.0, 10.0, 10.0, 0.0);
    let resized = apply_resize(&t, ResizeHandle::East, -50.0, 0.0, false);
    assert!(resized.width >= 1.0);
}

#[test]
fn contains_point_honors_rotation() {
    // A wide, short box rotated 90 degrees becomes tall and narrow.
    let t = transform(-20.0, -10.0, 40.0, 20.0, 90.0);

    assert!(element_contains_point(&t, Point::new(0.0, 18.0), 0.0));
    assert!(!element_contains_point(&t, Point::new(18.0, 0.0), 0.0));

    let unrotated = transform(-20.0, -10.0, 40.0, 20.0, 0.0);
    assert!(element_contains_point(&unrotated, Point::new(18.0, 0.0), 0.0));
    assert!(!element_contains_point(&unrotated, Point::new(0.0, 18.0), 0.0));
}

#[test]
fn hit_test_picks_topmost_visible() {
    let mut master = MasterLabel::new();
    let bottom = master
        .add(shape_at(transform(0.0, 0.0, 30.0, 30.0, 0.0)))
        .unwrap();
    let top = master
        .add(shape_at(transform(0.0, 0.0, 30.0, 30.0, 0.0)))
        .unwrap();

    let resolved = resolve(&master, None);
    assert_eq!(hit_test(&resolved, Point::new(15.0, 15.0), 0.0), Some(top));

    let mut master2 = master.clone();
    master2.element_mut(top).unwrap().visible = false;
    let resolved = resolve(&master2, None);
    assert_eq!(
        hit_test(&resolved, Point::new(15.0, 15.0), 0.0),
        Some(bottom)
    );
}

#[test]
fn hit_test_skips_locked_elements() {
    let mut master = MasterLabel::new();
    let id = master
        .add(shape_at(transform(0.0, 0.0, 30.0, 30.0, 0.0)))
        .unwrap();
    master.element_mut(id).unwrap().locked = true;

    let resolved = resolve(&master, None);
    assert_eq!(hit_test(&resolved, Point::new(15.0, 15.0), 0.0), None);
}

#[test]
fn hit_test_misses_empty_space() {
    let mut master = MasterLabel::new();
    master
        .add(shape_at(transform(0.0, 0.0, 10.0, 10.0, 0.0)))
        .unwrap();
    let resolved = resolve(&master, None);
    assert_eq!(hit_test(&resolved, Point::new(50.0, 50.0), 0.0), None);
}

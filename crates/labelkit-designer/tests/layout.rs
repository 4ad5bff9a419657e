use labelkit_designer::layout::{slot_clip_rect, slot_position};
use labelkit_designer::template::{preset, LabelTemplate, Margins};

fn grid_3x3() -> LabelTemplate {
    LabelTemplate {
        id: "test-3x3".to_string(),
        name: "Test 3x3".to_string(),
        rows: 3,
        columns: 3,
        label_width: 50.0,
        label_height: 30.0,
        horizontal_spacing: 5.0,
        vertical_spacing: 4.0,
        offset_left: 10.0,
        offset_top: 20.0,
        sheet_width: 210.0,
        sheet_height: 297.0,
        margins: Margins::default(),
    }
}

#[test]
fn shipping_sheet_slot_positions() {
    // 2 x 5 shipping labels: slot 1 is row 0, column 1.
    let template = preset("avery-5163").unwrap();
    let pos = slot_position(&template, 1).unwrap();
    assert_eq!(pos.row, 0);
    assert_eq!(pos.col, 1);
    assert!((pos.x - 109.5375).abs() < 1e-9);
    assert!((pos.y - 12.7).abs() < 1e-9);
}

#[test]
fn row_major_indexing() {
    let template = grid_3x3();
    let pos = slot_position(&template, 4).unwrap();
    assert_eq!((pos.row, pos.col), (1, 1));
    assert!((pos.x - (10.0 + 55.0)).abs() < 1e-9);
    assert!((pos.y - (20.0 + 34.0)).abs() < 1e-9);

    let last = slot_position(&template, 8).unwrap();
    assert_eq!((last.row, last.col), (2, 2));
}

#[test]
fn out_of_range_index_returns_none() {
    let template = grid_3x3();
    assert!(slot_position(&template, 9).is_none());
    assert!(slot_position(&template, usize::MAX).is_none());
}

#[test]
fn single_label_grid_needs_no_clip() {
    let template = preset("a4-full").unwrap();
    assert_eq!(template.slots_per_page(), 1);
    assert!(slot_clip_rect(&template, 0).is_none());
}

#[test]
fn interior_slot_clips_exactly_to_label_box() {
    let template = grid_3x3();
    // Slot 4 sits in the middle with neighbors on all four sides.
    let clip = slot_clip_rect(&template, 4).unwrap();
    let pos = slot_position(&template, 4).unwrap();

    assert!((clip.x - pos.x).abs() < 1e-9);
    assert!((clip.y - pos.y).abs() < 1e-9);
    assert!((clip.width - template.label_width).abs() < 1e-9);
    assert!((clip.height - template.label_height).abs() < 1e-9);
}

#[test]
fn sheet_edge_slots_may_bleed_outward() {
    let template = grid_3x3();
    // Slot 0 is the top-left corner: neighbors right and below only.
    let clip = slot_clip_rect(&template, 0).unwrap();
    let pos = slot_position(&template, 0).unwrap();

    let bleed = template.sheet_width.max(template.sheet_height);
    // Free edges extend by at least a sheet dimension.
    assert!(clip.x <= pos.x - bleed);
    assert!(clip.y <= pos.y - bleed);
    // Bounded edges clip exactly at the label boundary.
    assert!((clip.right() - (pos.x + template.label_width)).abs() < 1e-9);
    assert!((clip.bottom() - (pos.y + template.label_height)).abs() < 1e-9);
}

#[test]
fn clip_rect_for_invalid_slot_is_none() {
    let template = grid_3x3();
    assert!(slot_clip_rect(&template, 99).is_none());
}

use labelkit_designer::model::{Element, ElementKind, ShapeElement, ShapeKind, TextElement, Transform};
use labelkit_designer::overrides::{ElementPatch, KindPatch, LabelOverride, TextPatch};
use labelkit_designer::{resolve, ElementId, MasterLabel};

fn text_element(content: &str) -> Element {
    Element::new(
        ElementKind::Text(TextElement::new(content)),
        Transform::new(0.0, 0.0, 40.0, 10.0),
    )
}

fn shape_element() -> Element {
    Element::new(
        ElementKind::Shape(ShapeElement::new(ShapeKind::Rectangle)),
        Transform::new(5.0, 5.0, 20.0, 20.0),
    )
}

fn master_with(elements: Vec<Element>) -> (MasterLabel, Vec<ElementId>) {
    let mut master = MasterLabel::new();
    let ids = elements
        .into_iter()
        .map(|e| master.add(e).unwrap())
        .collect();
    (master, ids)
}

#[test]
fn resolve_without_override_copies_master() {
    let (master, ids) = master_with(vec![text_element("a"), shape_element()]);
    let resolved = resolve(&master, None);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].id, ids[0]);
    assert_eq!(resolved[1].id, ids[1]);
}

#[test]
fn resolve_is_pure_and_repeatable() {
    let (master, ids) = master_with(vec![text_element("a"), text_element("b")]);
    let mut ovr = LabelOverride::new();
    ovr.hide(ids[0]);
    ovr.set_patch(
        ids[1],
        ElementPatch::with_transform(Transform::new(1.0, 2.0, 3.0, 4.0)),
    );

    let master_before = master.clone();
    let ovr_before = ovr.clone();

    let first = resolve(&master, Some(&ovr));
    let second = resolve(&master, Some(&ovr));

    assert_eq!(first, second);
    assert_eq!(master, master_before);
    assert_eq!(ovr, ovr_before);
}

#[test]
fn hidden_element_is_skipped() {
    let (master, ids) = master_with(vec![text_element("a"), text_element("b")]);
    let mut ovr = LabelOverride::new();
    ovr.hide(ids[0]);

    let resolved = resolve(&master, Some(&ovr));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, ids[1]);
}

#[test]
fn hide_wins_over_patch() {
    let (master, ids) = master_with(vec![text_element("a")]);
    let mut ovr = LabelOverride::new();
    ovr.set_patch(
        ids[0],
        ElementPatch {
            kind: Some(KindPatch::Text(TextPatch {
                content: Some("patched".to_string()),
                ..TextPatch::default()
            })),
            ..ElementPatch::default()
        },
    );
    ovr.hide(ids[0]);

    let resolved = resolve(&master, Some(&ovr));
    assert!(resolved.is_empty());
}

#[test]
fn patch_merges_on_top_of_master_fields() {
    let (master, ids) = master_with(vec![text_element("hello")]);
    let mut ovr = LabelOverride::new();
    ovr.set_patch(
        ids[0],
        ElementPatch {
            kind: Some(KindPatch::Text(TextPatch {
                content: Some("goodbye".to_string()),
                ..TextPatch::default()
            })),
            ..ElementPatch::default()
        },
    );

    let resolved = resolve(&master, Some(&ovr));
    let ElementKind::Text(text) = &resolved[0].kind else {
        panic!("expected a text element");
    };
    assert_eq!(text.content, "goodbye");
    // Unpatched fields keep master values.
    assert_eq!(text.font_family, "Helvetica");
    assert_eq!(resolved[0].transform, Transform::new(0.0, 0.0, 40.0, 10.0));
}

#[test]
fn transform_patch_replaces_whole_value() {
    let (master, ids) = master_with(vec![text_element("a")]);
    let mut ovr = LabelOverride::new();
    let replacement = Transform {
        x: 9.0,
        y: 8.0,
        width: 7.0,
        height: 6.0,
        rotation: 45.0,
    };
    ovr.set_patch(ids[0], ElementPatch::with_transform(replacement));

    let resolved = resolve(&master, Some(&ovr));
    assert_eq!(resolved[0].transform, replacement);
}

#[test]
fn additional_elements_appear_once_with_own_z() {
    let (master, ids) = master_with(vec![text_element("a"), text_element("b")]);
    let mut ovr = LabelOverride::new();
    let mut extra = shape_element();
    // Slot the extra element between the two master elements.
    extra.z_index = 0;
    let extra_id = ovr.add_element(extra);

    let resolved = resolve(&master, Some(&ovr));
    assert_eq!(resolved.len(), 3);
    let occurrences = resolved.iter().filter(|e| e.id == extra_id).count();
    assert_eq!(occurrences, 1);
    // Master z are 0 and 1; the extra shares z 0 and was appended after, so
    // the stable sort keeps it behind element b but after element a.
    assert_eq!(resolved[0].id, ids[0]);
    assert_eq!(resolved[1].id, extra_id);
    assert_eq!(resolved[2].id, ids[1]);
}

#[test]
fn equal_z_preserves_declaration_order() {
    let (mut master, ids) = master_with(vec![text_element("a"), text_element("b")]);
    master.element_mut(ids[0]).unwrap().z_index = 3;
    master.element_mut(ids[1]).unwrap().z_index = 3;

    for _ in 0..3 {
        let resolved = resolve(&master, None);
        assert_eq!(resolved[0].id, ids[0]);
        assert_eq!(resolved[1].id, ids[1]);
    }
}

#[test]
fn dangling_override_references_are_inert() {
    let (mut master, ids) = master_with(vec![text_element("a"), text_element("b")]);
    let mut ovr = LabelOverride::new();
    ovr.set_patch(
        ids[0],
        ElementPatch::with_transform(Transform::new(1.0, 1.0, 1.0, 1.0)),
    );
    ovr.hide(ids[0]);

    master.remove(ids[0]);

    let resolved = resolve(&master, Some(&ovr));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, ids[1]);
}

#[test]
fn empty_override_behaves_like_no_override() {
    let (master, _) = master_with(vec![text_element("a"), shape_element()]);
    let empty = LabelOverride::new();
    assert!(empty.is_empty());
    assert_eq!(resolve(&master, Some(&empty)), resolve(&master, None));
}

#[test]
fn colliding_additional_element_is_skipped() {
    let (master, ids) = master_with(vec![text_element("a")]);
    let mut ovr = LabelOverride::new();
    let mut clone = master.element(ids[0]).unwrap().clone();
    clone.z_index = 10;
    ovr.add_element(clone);

    let resolved = resolve(&master, Some(&ovr));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].z_index, 0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Resolve must be deterministic and stable for any z assignment.
        #[test]
        fn stable_order_under_arbitrary_z(zs in prop::collection::vec(-5i32..5, 1..16)) {
            let mut master = MasterLabel::new();
            let mut ids = Vec::new();
            for _ in &zs {
                ids.push(master.add(text_element("x")).unwrap());
            }
            for (id, z) in ids.iter().zip(&zs) {
                master.element_mut(*id).unwrap().z_index = *z;
            }

            let first = resolve(&master, None);
            let second = resolve(&master, None);
            prop_assert_eq!(&first, &second);

            // Sorted ascending, ties in declaration order.
            for pair in first.windows(2) {
                prop_assert!(pair[0].z_index <= pair[1].z_index);
                if pair[0].z_index == pair[1].z_index {
                    let a = ids.iter().position(|id| *id == pair[0].id).unwrap();
                    let b = ids.iter().position(|id| *id == pair[1].id).unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}

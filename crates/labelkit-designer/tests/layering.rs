use labelkit_designer::model::{Element, ElementKind, TextElement, Transform};
use labelkit_designer::{resolve, MasterLabel};

fn element(content: &str) -> Element {
    Element::new(
        ElementKind::Text(TextElement::new(content)),
        Transform::new(0.0, 0.0, 10.0, 10.0),
    )
}

fn stack_of(n: usize) -> (MasterLabel, Vec<labelkit_designer::ElementId>) {
    let mut master = MasterLabel::new();
    let ids = (0..n)
        .map(|i| master.add(element(&format!("e{i}"))).unwrap())
        .collect();
    (master, ids)
}

#[test]
fn new_elements_land_on_top() {
    let (master, ids) = stack_of(3);
    let resolved = resolve(&master, None);
    assert_eq!(resolved.last().unwrap().id, ids[2]);
    assert_eq!(
        master.element(ids[2]).unwrap().z_index,
        master.element(ids[1]).unwrap().z_index + 1
    );
}

#[test]
fn bring_to_front_places_element_last() {
    let (mut master, ids) = stack_of(3);
    assert!(master.bring_to_front(ids[0]));
    let resolved = resolve(&master, None);
    assert_eq!(resolved.last().unwrap().id, ids[0]);
}

#[test]
fn send_to_back_places_element_first() {
    let (mut master, ids) = stack_of(3);
    assert!(master.send_to_back(ids[2]));
    let resolved = resolve(&master, None);
    assert_eq!(resolved.first().unwrap().id, ids[2]);
    // Goes below zero rather than renumbering the others.
    assert_eq!(master.element(ids[2]).unwrap().z_index, -1);
}

#[test]
fn bring_forward_swaps_with_neighbor_only() {
    let (mut master, ids) = stack_of(3);
    // Starting order [A, B, C] with z (0, 1, 2).
    assert!(master.bring_forward(ids[0]));

    let resolved = resolve(&master, None);
    let order: Vec<_> = resolved.iter().map(|e| e.id).collect();
    assert_eq!(order, vec![ids[1], ids[0], ids[2]]);

    // A strict z swap: C keeps its z untouched.
    assert_eq!(master.element(ids[0]).unwrap().z_index, 1);
    assert_eq!(master.element(ids[1]).unwrap().z_index, 0);
    assert_eq!(master.element(ids[2]).unwrap().z_index, 2);
}

#[test]
fn send_backward_swaps_with_neighbor_only() {
    let (mut master, ids) = stack_of(3);
    assert!(master.send_backward(ids[2]));

    let resolved = resolve(&master, None);
    let order: Vec<_> = resolved.iter().map(|e| e.id).collect();
    assert_eq!(order, vec![ids[0], ids[2], ids[1]]);
}

#[test]
fn forward_on_top_and_backward_on_bottom_are_noops() {
    let (mut master, ids) = stack_of(2);
    assert!(!master.bring_forward(ids[1]));
    assert!(!master.send_backward(ids[0]));
}

#[test]
fn swap_works_with_sparse_z_values() {
    let (mut master, ids) = stack_of(3);
    master.element_mut(ids[0]).unwrap().z_index = -4;
    master.element_mut(ids[1]).unwrap().z_index = 10;
    master.element_mut(ids[2]).unwrap().z_index = 25;

    assert!(master.bring_forward(ids[0]));
    assert_eq!(master.element(ids[0]).unwrap().z_index, 10);
    assert_eq!(master.element(ids[1]).unwrap().z_index, -4);
    assert_eq!(master.element(ids[2]).unwrap().z_index, 25);
}

#[test]
fn reorder_assigns_list_positions() {
    let (mut master, ids) = stack_of(3);
    master.reorder(&[ids[2], ids[0]]);

    assert_eq!(master.element(ids[2]).unwrap().z_index, 0);
    assert_eq!(master.element(ids[0]).unwrap().z_index, 1);
    // Unlisted ids keep their z.
    assert_eq!(master.element(ids[1]).unwrap().z_index, 1);
}

#[test]
fn missing_ids_are_rejected() {
    let (mut master, _) = stack_of(1);
    let stranger = labelkit_designer::ElementId::new();
    assert!(!master.bring_to_front(stranger));
    assert!(!master.send_to_back(stranger));
    assert!(!master.bring_forward(stranger));
    assert!(!master.send_backward(stranger));
}

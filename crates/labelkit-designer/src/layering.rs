//! Stacking-order operations.
//!
//! z-index values need not be contiguous, start at zero, or be unique; only
//! relative order matters. The composition engine breaks ties by list
//! position, so these operations never reorder the underlying list, they
//! only rewrite z values. Forward/backward are a strict swap with the
//! nearest neighbor: every other element keeps its relative order.

use crate::model::{Element, ElementId};

/// z-index for a newly created element: one above everything else.
pub fn next_z_index(elements: &[Element]) -> i32 {
    elements.iter().map(|e| e.z_index).max().unwrap_or(-1) + 1
}

/// Sets the element's z to `max(all, -1) + 1`.
pub fn bring_to_front(elements: &mut [Element], id: ElementId) -> bool {
    let Some(pos) = elements.iter().position(|e| e.id == id) else {
        return false;
    };
    let max = elements.iter().map(|e| e.z_index).max().unwrap_or(-1).max(-1);
    elements[pos].z_index = max + 1;
    true
}

/// Sets the element's z to `min(all, 0) - 1`.
pub fn send_to_back(elements: &mut [Element], id: ElementId) -> bool {
    let Some(pos) = elements.iter().position(|e| e.id == id) else {
        return false;
    };
    let min = elements.iter().map(|e| e.z_index).min().unwrap_or(0).min(0);
    elements[pos].z_index = min - 1;
    true
}

/// Swaps z with the element holding the next-higher z-index.
///
/// Returns `false` when the element is missing or already on top.
pub fn bring_forward(elements: &mut [Element], id: ElementId) -> bool {
    let Some(pos) = elements.iter().position(|e| e.id == id) else {
        return false;
    };
    let z = elements[pos].z_index;
    let above = elements
        .iter()
        .enumerate()
        .filter(|(_, e)| e.z_index > z)
        .min_by_key(|(_, e)| e.z_index)
        .map(|(i, _)| i);
    match above {
        Some(other) => {
            let other_z = elements[other].z_index;
            elements[other].z_index = z;
            elements[pos].z_index = other_z;
            true
        }
        None => false,
    }
}

/// Swaps z with the element holding the next-lower z-index.
///
/// Returns `false` when the element is missing or already at the bottom.
pub fn send_backward(elements: &mut [Element], id: ElementId) -> bool {
    let Some(pos) = elements.iter().position(|e| e.id == id) else {
        return false;
    };
    let z = elements[pos].z_index;
    let below = elements
        .iter()
        .enumerate()
        .filter(|(_, e)| e.z_index < z)
        .max_by_key(|(_, e)| e.z_index)
        .map(|(i, _)| i);
    match below {
        Some(other) => {
            let other_z = elements[other].z_index;
            elements[other].z_index = z;
            elements[pos].z_index = other_z;
            true
        }
        None => false,
    }
}

/// Assigns each listed id a z equal to its list position (0-based).
///
/// Ids absent from the list keep their current z unchanged; unknown ids are
/// ignored. Supports drag-and-drop re-layering from a layers panel.
pub fn reorder(elements: &mut [Element], ordered_ids: &[ElementId]) {
    for (position, id) in ordered_ids.iter().enumerate() {
        if let Some(element) = elements.iter_mut().find(|e| e.id == *id) {
            element.z_index = position as i32;
        }
    }
}

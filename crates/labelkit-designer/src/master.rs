//! The master label: the canonical element list shared by all slots.

use serde::{Deserialize, Serialize};

use labelkit_core::LabelError;

use crate::layering;
use crate::model::{Color, Element, ElementId};

/// The single canonical design every slot renders, absent divergence.
///
/// Elements are owned exclusively by the master; override records refer to
/// them by id only. Mutate through the methods here so stacking-order
/// invariants hold (a new element always lands on top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterLabel {
    elements: Vec<Element>,
    #[serde(default)]
    pub background: Option<Color>,
}

impl MasterLabel {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            background: None,
        }
    }

    /// Adds an element on top of the stack and returns its id.
    ///
    /// The element's z-index is overwritten with `max(existing) + 1`.
    pub fn add(&mut self, mut element: Element) -> Result<ElementId, LabelError> {
        if self.contains(element.id) {
            return Err(LabelError::DuplicateElementId {
                id: element.id.to_string(),
            });
        }
        element.z_index = layering::next_z_index(&self.elements);
        let id = element.id;
        self.elements.push(element);
        Ok(id)
    }

    /// Removes an element.
    ///
    /// Override records referencing the removed id are left untouched; they
    /// become inert during composition rather than being garbage-collected.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(pos))
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements in declaration order (the z tie-break order).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Mutable slice for the layering operations.
    pub(crate) fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Moves an element above every other element.
    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        layering::bring_to_front(&mut self.elements, id)
    }

    /// Moves an element below every other element.
    pub fn send_to_back(&mut self, id: ElementId) -> bool {
        layering::send_to_back(&mut self.elements, id)
    }

    /// Moves an element one visual step up by swapping z with its neighbor.
    pub fn bring_forward(&mut self, id: ElementId) -> bool {
        layering::bring_forward(&mut self.elements, id)
    }

    /// Moves an element one visual step down by swapping z with its neighbor.
    pub fn send_backward(&mut self, id: ElementId) -> bool {
        layering::send_backward(&mut self.elements, id)
    }

    /// Re-layers the listed ids by list position; unlisted ids keep their z.
    pub fn reorder(&mut self, ordered_ids: &[ElementId]) {
        layering::reorder(&mut self.elements, ordered_ids);
    }
}

impl Default for MasterLabel {
    fn default() -> Self {
        Self::new()
    }
}

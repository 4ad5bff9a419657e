//! Per-slot divergence from the master label.
//!
//! A [`LabelOverride`] records how one slot differs from the master: hidden
//! master ids, sparse field patches on master elements, and elements that
//! exist only in that slot. No entry for a slot means "pure master". The
//! store keys overrides by absolute slot index (row-major across all pages)
//! in a `BTreeMap`, so serialization order is deterministic and never leans
//! on native map iteration order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{
    Color, Element, ElementId, HorizontalAlign, ImageFit, PlaceholderKind, ShapeKind, Transform,
};

/// Sparse patch over a text payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

/// Sparse patch over an image payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Sparse patch over a shape payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKind>,
    /// `Some(None)` clears the fill; `None` leaves it alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Sparse patch over a placeholder payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PlaceholderKind>,
    /// `Some(None)` clears the static source; `None` leaves it alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_source: Option<Option<String>>,
}

/// Kind-specific half of an element patch.
///
/// A patch whose variant does not match the element's kind is inert, the
/// same way a patch for a deleted element is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KindPatch {
    Text(TextPatch),
    Image(ImagePatch),
    Shape(ShapePatch),
    Placeholder(PlaceholderPatch),
}

/// Partial-field patch over one element.
///
/// Every field is optional; present fields replace the master value, absent
/// fields keep it. The transform is atomic: a patch that changes geometry
/// carries the complete [`Transform`], never individual sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<KindPatch>,
}

impl ElementPatch {
    /// A patch replacing only the transform.
    pub fn with_transform(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transform.is_none()
            && self.z_index.is_none()
            && self.visible.is_none()
            && self.locked.is_none()
            && self.kind.is_none()
    }

    /// Applies this patch to an element copy. The id is never touched.
    pub fn apply(&self, element: &mut Element) {
        if let Some(transform) = self.transform {
            element.transform = transform;
        }
        if let Some(z) = self.z_index {
            element.z_index = z;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
        if let Some(kind_patch) = &self.kind {
            kind_patch.apply(element);
        }
    }

    /// Folds `newer` into `self`: newer fields win, absent fields keep the
    /// already-stored value. Idempotent under repeated identical merges.
    pub fn merge(&mut self, newer: &ElementPatch) {
        if newer.transform.is_some() {
            self.transform = newer.transform;
        }
        if newer.z_index.is_some() {
            self.z_index = newer.z_index;
        }
        if newer.visible.is_some() {
            self.visible = newer.visible;
        }
        if newer.locked.is_some() {
            self.locked = newer.locked;
        }
        match (&mut self.kind, &newer.kind) {
            (_, None) => {}
            (Some(old), Some(new)) => old.merge(new),
            (slot @ None, Some(new)) => *slot = Some(new.clone()),
        }
    }
}

impl KindPatch {
    fn apply(&self, element: &mut Element) {
        use crate::model::ElementKind;
        match (self, &mut element.kind) {
            (KindPatch::Text(p), ElementKind::Text(t)) => {
                if let Some(content) = &p.content {
                    t.content = content.clone();
                }
                if let Some(font_family) = &p.font_family {
                    t.font_family = font_family.clone();
                }
                if let Some(font_size) = p.font_size {
                    t.font_size = font_size;
                }
                if let Some(bold) = p.bold {
                    t.bold = bold;
                }
                if let Some(italic) = p.italic {
                    t.italic = italic;
                }
                if let Some(color) = p.color {
                    t.color = color;
                }
                if let Some(align) = p.align {
                    t.align = align;
                }
                if let Some(wrap) = p.wrap {
                    t.wrap = wrap;
                }
            }
            (KindPatch::Image(p), ElementKind::Image(i)) => {
                if let Some(source) = &p.source {
                    i.source = source.clone();
                }
                if let Some(fit) = p.fit {
                    i.fit = fit;
                }
                if let Some(opacity) = p.opacity {
                    i.opacity = opacity;
                }
            }
            (KindPatch::Shape(p), ElementKind::Shape(s)) => {
                if let Some(kind) = p.kind {
                    s.kind = kind;
                }
                if let Some(fill) = p.fill {
                    s.fill = fill;
                }
                if let Some(stroke) = p.stroke {
                    s.stroke = stroke;
                }
                if let Some(stroke_width) = p.stroke_width {
                    s.stroke_width = stroke_width;
                }
                if let Some(corner_radius) = p.corner_radius {
                    s.corner_radius = corner_radius;
                }
                if let Some(opacity) = p.opacity {
                    s.opacity = opacity;
                }
            }
            (KindPatch::Placeholder(p), ElementKind::Placeholder(ph)) => {
                if let Some(kind) = p.kind {
                    ph.kind = kind;
                }
                if let Some(static_source) = &p.static_source {
                    ph.static_source = static_source.clone();
                }
            }
            // Kind mismatch: the patch targets a payload this element does
            // not have. Inert, not an error.
            _ => {}
        }
    }

    fn merge(&mut self, newer: &KindPatch) {
        match (self, newer) {
            (KindPatch::Text(old), KindPatch::Text(new)) => {
                if new.content.is_some() {
                    old.content = new.content.clone();
                }
                if new.font_family.is_some() {
                    old.font_family = new.font_family.clone();
                }
                if new.font_size.is_some() {
                    old.font_size = new.font_size;
                }
                if new.bold.is_some() {
                    old.bold = new.bold;
                }
                if new.italic.is_some() {
                    old.italic = new.italic;
                }
                if new.color.is_some() {
                    old.color = new.color;
                }
                if new.align.is_some() {
                    old.align = new.align;
                }
                if new.wrap.is_some() {
                    old.wrap = new.wrap;
                }
            }
            (KindPatch::Image(old), KindPatch::Image(new)) => {
                if new.source.is_some() {
                    old.source = new.source.clone();
                }
                if new.fit.is_some() {
                    old.fit = new.fit;
                }
                if new.opacity.is_some() {
                    old.opacity = new.opacity;
                }
            }
            (KindPatch::Shape(old), KindPatch::Shape(new)) => {
                if new.kind.is_some() {
                    old.kind = new.kind;
                }
                if new.fill.is_some() {
                    old.fill = new.fill;
                }
                if new.stroke.is_some() {
                    old.stroke = new.stroke;
                }
                if new.stroke_width.is_some() {
                    old.stroke_width = new.stroke_width;
                }
                if new.corner_radius.is_some() {
                    old.corner_radius = new.corner_radius;
                }
                if new.opacity.is_some() {
                    old.opacity = new.opacity;
                }
            }
            (KindPatch::Placeholder(old), KindPatch::Placeholder(new)) => {
                if new.kind.is_some() {
                    old.kind = new.kind;
                }
                if new.static_source.is_some() {
                    old.static_source = new.static_source.clone();
                }
            }
            // Variant changed between calls; the newer patch wins wholesale.
            (old, new) => *old = new.clone(),
        }
    }
}

/// A stored patch entry for one master element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementOverride {
    pub element_id: ElementId,
    pub patch: ElementPatch,
}

/// Everything one slot does differently from the master.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelOverride {
    /// Sparse per-element field patches, in first-divergence order.
    #[serde(default)]
    pub element_overrides: Vec<ElementOverride>,
    /// Master ids suppressed for this slot. Hide wins over any patch.
    #[serde(default)]
    pub hidden_element_ids: BTreeSet<ElementId>,
    /// Elements that exist only in this slot. Owned here, never aliased
    /// into the master; each carries its own z-index.
    #[serde(default)]
    pub additional_elements: Vec<Element>,
}

impl LabelOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// An override with no divergence behaves exactly like no override.
    pub fn is_empty(&self) -> bool {
        self.element_overrides.is_empty()
            && self.hidden_element_ids.is_empty()
            && self.additional_elements.is_empty()
    }

    pub fn hides(&self, id: ElementId) -> bool {
        self.hidden_element_ids.contains(&id)
    }

    pub fn patch_for(&self, id: ElementId) -> Option<&ElementPatch> {
        self.element_overrides
            .iter()
            .find(|o| o.element_id == id)
            .map(|o| &o.patch)
    }

    /// Merges `patch` into the stored patch for `id`, creating the entry on
    /// first divergence. Repeated identical calls are idempotent.
    pub fn set_patch(&mut self, id: ElementId, patch: ElementPatch) {
        match self.element_overrides.iter_mut().find(|o| o.element_id == id) {
            Some(existing) => existing.patch.merge(&patch),
            None => self.element_overrides.push(ElementOverride {
                element_id: id,
                patch,
            }),
        }
    }

    /// Suppresses a master element for this slot. Set semantics.
    pub fn hide(&mut self, id: ElementId) {
        self.hidden_element_ids.insert(id);
    }

    /// Un-suppresses a master element.
    pub fn show(&mut self, id: ElementId) -> bool {
        self.hidden_element_ids.remove(&id)
    }

    /// Drops only the stored patch for a master element, keeping any hidden
    /// flag in place.
    pub fn clear_patch(&mut self, id: ElementId) -> bool {
        let len_before = self.element_overrides.len();
        self.element_overrides.retain(|o| o.element_id != id);
        self.element_overrides.len() != len_before
    }

    /// Drops every trace of divergence for a master element: patch entry and
    /// hidden flag. The element is implicitly pure-master again.
    pub fn reset_element(&mut self, id: ElementId) {
        self.element_overrides.retain(|o| o.element_id != id);
        self.hidden_element_ids.remove(&id);
    }

    /// Adds a slot-only element. Its id must not collide with a master id;
    /// the composition engine skips colliding entries defensively.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.additional_elements.push(element);
        id
    }

    pub fn additional_element(&self, id: ElementId) -> Option<&Element> {
        self.additional_elements.iter().find(|e| e.id == id)
    }

    pub fn additional_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.additional_elements.iter_mut().find(|e| e.id == id)
    }

    pub fn remove_additional(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.additional_elements.iter().position(|e| e.id == id)?;
        Some(self.additional_elements.remove(pos))
    }
}

/// Sparse map from absolute slot index to that slot's override.
///
/// Ordered by key so iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideStore {
    slots: BTreeMap<usize, LabelOverride>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: usize) -> Option<&LabelOverride> {
        self.slots.get(&slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut LabelOverride> {
        self.slots.get_mut(&slot)
    }

    /// Returns the override for `slot`, creating an empty record on first
    /// divergence.
    pub fn ensure(&mut self, slot: usize) -> &mut LabelOverride {
        self.slots.entry(slot).or_default()
    }

    /// Reverts a slot to pure master.
    pub fn clear_slot(&mut self, slot: usize) -> Option<LabelOverride> {
        self.slots.remove(&slot)
    }

    /// Discards every override. Used when the template changes.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots holding an override record, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LabelOverride)> {
        self.slots.iter().map(|(slot, ovr)| (*slot, ovr))
    }

    /// Every slot whose rendering of `element_id` would change if the master
    /// element were edited now: slots with neither a hide nor a patch for
    /// that id. Scans each index in `0..total_slots` exactly once.
    pub fn affected_slots(&self, element_id: ElementId, total_slots: usize) -> Vec<usize> {
        (0..total_slots)
            .filter(|slot| match self.slots.get(slot) {
                None => true,
                Some(ovr) => !ovr.hides(element_id) && ovr.patch_for(element_id).is_none(),
            })
            .collect()
    }
}

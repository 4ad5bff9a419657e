//! Editor state for UI integration.
//!
//! Couples the document {template, master, overrides} with edit mode,
//! selection, viewport and history, and routes every mutation to the right
//! place: template-mode edits write to the master (and therefore to every
//! non-diverged slot), preview-mode edits write to the active slot's
//! override, created lazily on first divergence.
//!
//! Reads of "effective elements for slot N" always re-run composition off
//! current state; nothing here caches a resolved list across a mutation.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::compose;
use crate::handles::{self, ResizeHandle};
use crate::history::{DocumentSnapshot, HistoryController, UndoRedoManager};
use crate::layering;
use crate::master::MasterLabel;
use crate::model::{Element, ElementId, ElementKind, Transform};
use crate::overrides::{ElementPatch, OverrideStore};
use crate::serialization::ProjectFile;
use crate::template::LabelTemplate;

/// Which layer of the design edits land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Edits write to the master and propagate to all non-diverged slots.
    Template,
    /// Edits write to the active slot's override.
    Preview,
}

/// The document value: everything history snapshots and files persist.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDocument {
    pub template: LabelTemplate,
    pub master: MasterLabel,
    pub overrides: OverrideStore,
}

impl LabelDocument {
    pub fn new(template: LabelTemplate) -> Self {
        Self {
            template,
            master: MasterLabel::new(),
            overrides: OverrideStore::new(),
        }
    }

    /// The render-ready element list for an absolute slot index, composed
    /// freshly from current state.
    pub fn effective_elements(&self, slot: usize) -> Vec<Element> {
        compose::resolve(&self.master, self.overrides.get(slot))
    }

    /// Replaces the template and discards every override in one step.
    ///
    /// Slot indices are meaningless across different grids, so the
    /// invalidation is documented behavior, not data loss to recover from.
    pub fn set_template(&mut self, template: LabelTemplate) {
        let discarded = self.overrides.len();
        if discarded > 0 {
            tracing::warn!(discarded, "template switch discarded slot overrides");
        }
        self.template = template;
        self.overrides.clear();
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            template: self.template.clone(),
            master: self.master.clone(),
            overrides: self.overrides.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.template = snapshot.template;
        self.master = snapshot.master;
        self.overrides = snapshot.overrides;
    }
}

/// Designer state for UI integration.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: LabelDocument,
    pub viewport: crate::viewport::Viewport,
    pub is_modified: bool,
    pub design_name: String,
    pub current_file_path: Option<PathBuf>,
    pub show_grid: bool,
    mode: EditMode,
    active_slot: usize,
    selection: Option<ElementId>,
    total_slots: usize,
    history: UndoRedoManager,
}

impl EditorState {
    pub fn new(template: LabelTemplate) -> Self {
        let total_slots = template.slots_per_page().max(1);
        Self {
            document: LabelDocument::new(template),
            viewport: crate::viewport::Viewport::default(),
            is_modified: false,
            design_name: "Untitled".to_string(),
            current_file_path: None,
            show_grid: true,
            mode: EditMode::Template,
            active_slot: 0,
            selection: None,
            total_slots,
            history: UndoRedoManager::new(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        tracing::debug!(?mode, "edit mode changed");
        self.mode = mode;
        self.selection = None;
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    /// Selects the slot preview edits apply to. Out-of-range is ignored.
    pub fn set_active_slot(&mut self, slot: usize) {
        if slot >= self.total_slots {
            tracing::warn!(slot, total = self.total_slots, "active slot out of range");
            return;
        }
        self.active_slot = slot;
        self.selection = None;
    }

    pub fn total_slots(&self) -> usize {
        self.total_slots
    }

    /// Sets how many labels the document produces, usually the data-table
    /// row count. Never less than one page.
    pub fn set_total_slots(&mut self, total: usize) {
        self.total_slots = total
            .max(self.document.template.slots_per_page())
            .max(1);
        if self.active_slot >= self.total_slots {
            self.active_slot = self.total_slots - 1;
        }
    }

    /// Number of sheet pages needed for all slots.
    pub fn page_count(&self) -> usize {
        let per_page = self.document.template.slots_per_page();
        if per_page == 0 {
            return 0;
        }
        self.total_slots.div_ceil(per_page)
    }

    /// Absolute slot index for a position on a page.
    pub fn absolute_slot(&self, page: usize, index_on_page: usize) -> Option<usize> {
        let per_page = self.document.template.slots_per_page();
        if index_on_page >= per_page {
            return None;
        }
        let absolute = page * per_page + index_on_page;
        (absolute < self.total_slots).then_some(absolute)
    }

    /// Splits an absolute slot index into (page, index on page).
    pub fn page_of_slot(&self, slot: usize) -> (usize, usize) {
        let per_page = self.document.template.slots_per_page().max(1);
        (slot / per_page, slot % per_page)
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn select(&mut self, id: Option<ElementId>) {
        self.selection = id;
    }

    /// Effective elements for the active slot.
    pub fn effective_elements(&self) -> Vec<Element> {
        self.document.effective_elements(self.active_slot)
    }

    /// Slots a master edit to `element_id` would change right now.
    pub fn affected_slots(&self, element_id: ElementId) -> Vec<usize> {
        self.document
            .overrides
            .affected_slots(element_id, self.total_slots)
    }

    /// Adds an element on top of the current layer's stack.
    ///
    /// Template mode appends to the master; preview mode adds a slot-only
    /// element to the active slot's override.
    pub fn add_element(&mut self, kind: ElementKind, transform: Transform) -> Option<ElementId> {
        let before = self.document.snapshot();
        let element = Element::new(kind, transform);
        let id = match self.mode {
            EditMode::Template => match self.document.master.add(element) {
                Ok(id) => id,
                Err(err) => {
                    tracing::warn!(%err, "failed to add element");
                    return None;
                }
            },
            EditMode::Preview => {
                let mut element = element;
                element.z_index = layering::next_z_index(&self.effective_elements());
                self.document
                    .overrides
                    .ensure(self.active_slot)
                    .add_element(element)
            }
        };
        self.commit(before);
        self.selection = Some(id);
        Some(id)
    }

    /// Removes an element from the current layer.
    ///
    /// Template mode deletes from the master and deliberately leaves any
    /// dangling per-slot overrides in place; they are inert. Preview mode
    /// hides master elements for this slot and deletes slot-only ones.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let before = self.document.snapshot();
        let removed = match self.mode {
            EditMode::Template => self.document.master.remove(id).is_some(),
            EditMode::Preview => {
                if self.document.master.contains(id) {
                    self.document.overrides.ensure(self.active_slot).hide(id);
                    true
                } else {
                    self.document
                        .overrides
                        .get_mut(self.active_slot)
                        .and_then(|o| o.remove_additional(id))
                        .is_some()
                }
            }
        };
        if removed {
            self.commit(before);
            if self.selection == Some(id) {
                self.selection = None;
            }
        }
        removed
    }

    /// Applies a partial-field patch to an element through the current mode.
    pub fn apply_patch(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let before = self.document.snapshot();
        let applied = match self.mode {
            EditMode::Template => match self.document.master.element_mut(id) {
                Some(element) => {
                    patch.apply(element);
                    true
                }
                None => false,
            },
            EditMode::Preview => {
                if self.document.master.contains(id) {
                    self.document
                        .overrides
                        .ensure(self.active_slot)
                        .set_patch(id, patch);
                    true
                } else if let Some(element) = self
                    .document
                    .overrides
                    .get_mut(self.active_slot)
                    .and_then(|o| o.additional_element_mut(id))
                {
                    patch.apply(element);
                    true
                } else {
                    false
                }
            }
        };
        if applied {
            self.commit(before);
        } else {
            tracing::warn!(%id, "patch targets an unknown element");
        }
        applied
    }

    /// The transform an element currently renders with in the active slot.
    pub fn current_transform(&self, id: ElementId) -> Option<Transform> {
        match self.mode {
            EditMode::Template => self.document.master.element(id).map(|e| e.transform),
            EditMode::Preview => self
                .effective_elements()
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.transform),
        }
    }

    /// Moves an element by a design-space delta in mm.
    ///
    /// The whole transform is written back atomically, never x/y alone.
    pub fn translate_element(&mut self, id: ElementId, dx_mm: f64, dy_mm: f64) -> bool {
        let Some(mut transform) = self.current_transform(id) else {
            return false;
        };
        transform.x += dx_mm;
        transform.y += dy_mm;
        self.apply_patch(id, ElementPatch::with_transform(transform))
    }

    /// Resizes an element via a handle drag; see `handles::apply_resize`.
    pub fn resize_element(
        &mut self,
        id: ElementId,
        handle: ResizeHandle,
        dx_mm: f64,
        dy_mm: f64,
        lock_aspect: bool,
    ) -> bool {
        let Some(transform) = self.current_transform(id) else {
            return false;
        };
        let resized = handles::apply_resize(&transform, handle, dx_mm, dy_mm, lock_aspect);
        self.apply_patch(id, ElementPatch::with_transform(resized))
    }

    /// Hides an element: master visibility in template mode, a per-slot
    /// suppression in preview mode.
    pub fn hide_element(&mut self, id: ElementId) -> bool {
        match self.mode {
            EditMode::Template => self.apply_patch(
                id,
                ElementPatch {
                    visible: Some(false),
                    ..ElementPatch::default()
                },
            ),
            EditMode::Preview => {
                if !self.document.master.contains(id) {
                    return false;
                }
                let before = self.document.snapshot();
                self.document.overrides.ensure(self.active_slot).hide(id);
                self.commit(before);
                true
            }
        }
    }

    /// Undoes a preview-mode hide, or restores master visibility.
    pub fn show_element(&mut self, id: ElementId) -> bool {
        match self.mode {
            EditMode::Template => self.apply_patch(
                id,
                ElementPatch {
                    visible: Some(true),
                    ..ElementPatch::default()
                },
            ),
            EditMode::Preview => {
                let before = self.document.snapshot();
                let shown = self
                    .document
                    .overrides
                    .get_mut(self.active_slot)
                    .map(|o| o.show(id))
                    .unwrap_or(false);
                if shown {
                    self.commit(before);
                }
                shown
            }
        }
    }

    /// Reverts one slot to pure master.
    pub fn reset_slot(&mut self, slot: usize) -> bool {
        let before = self.document.snapshot();
        let cleared = self.document.overrides.clear_slot(slot).is_some();
        if cleared {
            self.commit(before);
        }
        cleared
    }

    /// Drops a single element's divergence in one slot.
    pub fn reset_element_override(&mut self, slot: usize, id: ElementId) {
        let before = self.document.snapshot();
        if let Some(record) = self.document.overrides.get_mut(slot) {
            record.reset_element(id);
            self.commit(before);
        }
    }

    /// Moves an element above everything else in its layer.
    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        self.layer_op(id, layering::bring_to_front)
    }

    /// Moves an element below everything else in its layer.
    pub fn send_to_back(&mut self, id: ElementId) -> bool {
        self.layer_op(id, layering::send_to_back)
    }

    /// Swaps stacking order with the next element up.
    pub fn bring_forward(&mut self, id: ElementId) -> bool {
        self.layer_op(id, layering::bring_forward)
    }

    /// Swaps stacking order with the next element down.
    pub fn send_backward(&mut self, id: ElementId) -> bool {
        self.layer_op(id, layering::send_backward)
    }

    /// Re-layers listed ids by list position (layers-panel drag and drop).
    pub fn reorder_elements(&mut self, ordered_ids: &[ElementId]) {
        let before = self.document.snapshot();
        match self.mode {
            EditMode::Template => self.document.master.reorder(ordered_ids),
            EditMode::Preview => {
                if let Some(record) = self.document.overrides.get_mut(self.active_slot) {
                    layering::reorder(&mut record.additional_elements, ordered_ids);
                }
            }
        }
        self.commit(before);
    }

    fn layer_op(
        &mut self,
        id: ElementId,
        op: fn(&mut [Element], ElementId) -> bool,
    ) -> bool {
        let before = self.document.snapshot();
        let changed = match self.mode {
            EditMode::Template => op(self.document.master.elements_mut(), id),
            EditMode::Preview => {
                // Master z-order is template-wide state; per-slot layering
                // only applies to slot-only elements.
                if self.document.master.contains(id) {
                    tracing::warn!(%id, "master stacking order is edited in template mode");
                    false
                } else {
                    self.document
                        .overrides
                        .get_mut(self.active_slot)
                        .map(|o| op(&mut o.additional_elements, id))
                        .unwrap_or(false)
                }
            }
        };
        if changed {
            self.commit(before);
        }
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Steps the document back one snapshot.
    pub fn undo(&mut self) -> bool {
        let current = self.document.snapshot();
        match self.history.step_back(current) {
            Some(previous) => {
                self.document.restore(previous);
                self.is_modified = true;
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Steps the document forward one snapshot.
    pub fn redo(&mut self) -> bool {
        let current = self.document.snapshot();
        match self.history.step_forward(current) {
            Some(next) => {
                self.document.restore(next);
                self.is_modified = true;
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    /// Switches the sheet template, discarding all overrides.
    pub fn set_template(&mut self, template: LabelTemplate) {
        let before = self.document.snapshot();
        self.document.set_template(template);
        self.total_slots = self.document.template.slots_per_page().max(1);
        self.active_slot = 0;
        self.selection = None;
        self.commit(before);
    }

    /// Saves the project, remembering the path for subsequent saves.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let mut project = ProjectFile::new(
            self.design_name.clone(),
            self.document.template.clone(),
            self.document.master.clone(),
        );
        project.set_overrides(&self.document.overrides);
        project.save_to_file(path.as_ref())?;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Loads a project into a fresh editor.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let project = ProjectFile::load_from_file(path.as_ref())?;
        let overrides = project.override_store();
        let mut editor = Self::new(project.template.clone());
        editor.document.master = project.master;
        editor.document.overrides = overrides;
        editor.design_name = project.metadata.name;
        editor.current_file_path = Some(path.as_ref().to_path_buf());
        Ok(editor)
    }

    fn commit(&mut self, before: DocumentSnapshot) {
        self.history.record(before);
        self.is_modified = true;
    }

    fn prune_selection(&mut self) {
        if let Some(id) = self.selection {
            let still_there = self.effective_elements().iter().any(|e| e.id == id);
            if !still_there {
                self.selection = None;
            }
        }
    }
}

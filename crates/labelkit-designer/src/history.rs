//! Undo/redo over whole-document snapshots.
//!
//! The document {template, master, overrides} is a plain value with no
//! hidden caches, so history is a pair of snapshot stacks: after each
//! logical edit the editor records the state the edit replaced. The core
//! only depends on the [`HistoryController`] capabilities, not on how deep
//! or granular the snapshots are.

use crate::master::MasterLabel;
use crate::overrides::OverrideStore;
use crate::template::LabelTemplate;

use labelkit_core::constants::HISTORY_CAPACITY;

/// One restorable document state.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub template: LabelTemplate,
    pub master: MasterLabel,
    pub overrides: OverrideStore,
}

/// The two capabilities and two commands the core needs from history.
pub trait HistoryController {
    fn can_step_back(&self) -> bool;
    fn can_step_forward(&self) -> bool;
    /// Steps back, exchanging `current` for the previous snapshot.
    fn step_back(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot>;
    /// Steps forward, exchanging `current` for the next snapshot.
    fn step_forward(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot>;
}

/// Capacity-bounded snapshot stacks.
#[derive(Debug, Clone, Default)]
pub struct UndoRedoManager {
    undo_stack: Vec<DocumentSnapshot>,
    redo_stack: Vec<DocumentSnapshot>,
    capacity: usize,
}

impl UndoRedoManager {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    /// Records the state an edit replaced. Clears the redo stack: a new
    /// edit forks history.
    pub fn record(&mut self, before: DocumentSnapshot) {
        self.undo_stack.push(before);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

impl HistoryController for UndoRedoManager {
    fn can_step_back(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_step_forward(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn step_back(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    fn step_forward(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }
}

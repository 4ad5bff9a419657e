//! # LabelKit Designer
//!
//! Core engine of the LabelKit label sheet designer: design one master
//! label, stamp it onto every slot of a physical sheet, and let any slot
//! diverge from the master without losing the ability to re-sync later.
//!
//! ## Core Components
//!
//! ### Composition
//! - **Model**: tagged element union (text, image, shape, placeholder) with
//!   a shared mm/degree transform, stacking order and visibility
//! - **Master**: the canonical element list shared by all slots
//! - **Overrides**: sparse per-slot divergence (hidden ids, field patches,
//!   slot-only elements)
//! - **Compose**: merges master + override into the effective, render-ready
//!   element list for a slot
//!
//! ### Physical layout
//! - **Template**: the sheet grid geometry (rows, columns, label size,
//!   spacing, offsets) with validation and built-in presets
//! - **Layout**: slot index to mm position, adjacency-aware clip rectangles
//! - **Viewport**: screen pixels to design millimeters and back
//!
//! ### Interaction and state
//! - **Handles**: rotation-aware resize math and hit-testing
//! - **Layering**: stacking-order operations over an element list
//! - **Binding**: per-row data binding resolution with diagnostics
//! - **History**: undo/redo over whole-document snapshots
//! - **Editor**: routes edits to master (template mode) or per-slot
//!   override (preview mode)
//! - **Serialization**: JSON project files with explicit override lists
//!
//! ## Architecture
//!
//! ```text
//! Template (sheet grid)
//!   └── Layout (slot positions, clip rects)
//!
//! Master + Overrides
//!   └── Compose (effective elements per slot)
//!         └── Rendering sink (external: canvas or print surface)
//!
//! EditorState
//!   ├── Viewport (screen <-> mm)
//!   ├── Handles (drag/resize geometry)
//!   └── History (snapshots)
//! ```
//!
//! Everything is synchronous and single-threaded; the rendering sink, asset
//! store and tabular data editor are external collaborators.

pub mod binding;
pub mod compose;
pub mod editor;
pub mod handles;
pub mod history;
pub mod layering;
pub mod layout;
pub mod master;
pub mod model;
pub mod overrides;
pub mod serialization;
pub mod template;
pub mod viewport;

pub use binding::{DataRow, MissingReference};
pub use compose::resolve;
pub use editor::{EditMode, EditorState, LabelDocument};
pub use handles::ResizeHandle;
pub use history::{DocumentSnapshot, HistoryController, UndoRedoManager};
pub use master::MasterLabel;
pub use model::{
    Binding, Color, Element, ElementId, ElementKind, Point, Rect, Transform,
};
pub use overrides::{ElementPatch, KindPatch, LabelOverride, OverrideStore};
pub use serialization::ProjectFile;
pub use template::{builtin_templates, preset, LabelTemplate, TemplateIssue, TemplateValidation};
pub use viewport::Viewport;

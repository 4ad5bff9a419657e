//! Error handling for LabelKit.
//!
//! Most conditions in the core are deliberately *not* errors: out-of-range
//! slot queries return `None`, dangling override references are inert during
//! composition, and template geometry problems are reported as structured
//! validation issues rather than failures. The variants here cover the cases
//! that genuinely cannot proceed.

use thiserror::Error;

/// Workspace-wide error type.
#[derive(Error, Debug)]
pub enum LabelError {
    /// An element id was inserted twice into the same master.
    #[error("duplicate element id: {id}")]
    DuplicateElementId {
        /// The offending element id, rendered as a string.
        id: String,
    },

    /// A persisted file names an element kind this version does not know.
    #[error("unknown element kind: {kind}")]
    UnknownElementKind {
        /// The unrecognized kind tag.
        kind: String,
    },

    /// A persisted file carries an unsupported format version.
    #[error("unsupported file format version: {version}")]
    UnsupportedVersion {
        /// The version string found in the file.
        version: String,
    },

    /// Reading or writing a project file failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

//! # LabelKit Core
//!
//! Shared foundation for the LabelKit label sheet designer:
//!
//! - **Constants**: DPI domains, unit ratios, zoom limits, sheet sizes
//! - **Units**: conversion between millimeters, inches, points and pixels
//! - **Errors**: common error taxonomy used across the workspace
//!
//! Everything in this crate is pure and synchronous. Design-space values are
//! millimeters unless a name says otherwise; pixel values only exist at the
//! conversion boundary, parameterized by a DPI.

pub mod constants;
pub mod error;
pub mod units;

pub use error::LabelError;

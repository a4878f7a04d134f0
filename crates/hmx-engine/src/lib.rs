//! Hierarchical header-matrix engine.
//!
//! Takes the multi-level column index of a spreadsheet-style table and
//! derives renderer-ready views from it:
//!
//! - **project**: expand a spanned header matrix into a dense value grid
//! - **spans**: rowspan/colspan rules over the dense grid
//! - **rebuild**: two-pass reconstruction of a valid spanned matrix
//! - **abbrev**: deterministic shortening for combined names
//! - **flatten**: combine the top N header levels into single names
//! - **filters**: NaN-row and redundant-feature-column removal
//! - **view**: the fixed derivation pipeline and per-result store
//!
//! The engine never mutates its input table; every derivation is a fresh
//! value computed from the original plus a `ViewConfig`.

pub mod abbrev;
pub mod filters;
pub mod flatten;
pub mod project;
pub mod rebuild;
pub mod spans;
pub mod view;

pub use abbrev::abbreviate;
pub use filters::{
    filter_nan_rows, filter_redundant_columns, nan_row_indices, redundant_column_indices,
};
pub use flatten::flatten;
pub use project::project;
pub use rebuild::rebuild;
pub use spans::{Coverage, colspan, rowspan};
pub use view::{ResultStore, derive_view, export_view};

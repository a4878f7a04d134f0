//! Compact, spanned representation of a multi-level column header.
//!
//! A `HeaderMatrix` is what the renderer consumes: one `HeaderLevel` per
//! index level, outermost first, each holding position-sorted, non-overlapping
//! `HeaderCell`s with explicit `rowspan`/`colspan` values.

use serde::{Deserialize, Serialize};

/// Placeholder text marking a structural filler position at the wire
/// boundary. A cell below a vertical span carries no content of its own;
/// upstream preprocessing rewrites such cells to this literal.
pub const FILLER_TEXT: &str = "Header";

/// One spanning cell in a header level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub text: String,
    /// Zero-based column index of the cell's left edge.
    pub position: usize,
    pub colspan: usize,
    pub rowspan: usize,
    /// Zero-based level index, outermost level first.
    #[serde(default)]
    pub level: usize,
}

impl HeaderCell {
    pub fn new(text: impl Into<String>, position: usize, level: usize) -> Self {
        Self {
            text: text.into(),
            position,
            colspan: 1,
            rowspan: 1,
            level,
        }
    }

    /// True when this cell is pure structural filler rather than content.
    pub fn is_filler(&self) -> bool {
        self.text == FILLER_TEXT
    }
}

/// One level of a header matrix: position-sorted, non-overlapping cells.
pub type HeaderLevel = Vec<HeaderCell>;

/// Full spanned header: one level per index level, outermost first.
pub type HeaderMatrix = Vec<HeaderLevel>;

/// Build a single flat header level from plain column names.
pub fn flat_header_matrix(columns: &[String]) -> HeaderMatrix {
    vec![
        columns
            .iter()
            .enumerate()
            .map(|(position, name)| HeaderCell::new(name.clone(), position, 0))
            .collect(),
    ]
}

/// Sum of colspans at a level; equals the column count for a valid matrix.
pub fn level_width(level: &[HeaderCell]) -> usize {
    level.iter().map(|cell| cell.colspan).sum()
}

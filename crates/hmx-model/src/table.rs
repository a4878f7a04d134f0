//! Table values and the `TableInfo` boundary contract.

use serde::{Deserialize, Serialize};

use crate::header::{HeaderMatrix, level_width};

/// Placeholder the source data uses for "no value" in rendered cells.
pub const EM_DASH: &str = "\u{2014}";

/// One data cell. Serialized untagged so JSON stays a plain scalar-or-null,
/// matching what the query-result producer emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl CellValue {
    /// True when the cell counts as empty for NaN-row detection: absent,
    /// empty string, the em-dash placeholder, or a numeric NaN.
    pub fn is_empty_like(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Number(value) => value.is_nan(),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                trimmed.is_empty() || trimmed == EM_DASH
            }
            CellValue::Bool(_) => false,
        }
    }

    /// Trimmed textual content, if any; used by redundant-column detection.
    pub fn non_empty_text(&self) -> Option<String> {
        match self {
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Number(value) if !value.is_nan() => Some(value.to_string()),
            CellValue::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

/// One query result's table: the boundary contract between the upstream
/// query pipeline (producer) and renderer/exporter/chart consumers.
///
/// Created once per result; the engine never mutates it. Every derived view
/// is a fresh value computed from the original plus a [`ViewConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    pub has_multiindex: bool,
    pub header_matrix: HeaderMatrix,
    /// One display name per column, resolving leaf labels.
    pub final_columns: Vec<String>,
    pub data_rows: Vec<Vec<CellValue>>,
    pub row_count: usize,
    pub col_count: usize,
    /// Names of grouping (label) columns, leftmost in the table.
    #[serde(default)]
    pub feature_rows: Vec<String>,
    /// Names of fact (value) columns.
    #[serde(default)]
    pub feature_cols: Vec<String>,
    /// Rows removed by the NaN-row filter, if it ran.
    #[serde(default)]
    pub nan_rows_hidden: usize,
    /// Columns removed by the redundant-feature-column filter, if it ran.
    #[serde(default)]
    pub redundant_columns_hidden: usize,
    /// Row count before the NaN-row filter ran.
    #[serde(default)]
    pub original_row_count: Option<usize>,
}

impl TableInfo {
    /// A table with a single flat header level built from column names.
    pub fn flat(final_columns: Vec<String>, data_rows: Vec<Vec<CellValue>>) -> Self {
        let header_matrix = crate::header::flat_header_matrix(&final_columns);
        Self {
            has_multiindex: false,
            header_matrix,
            col_count: final_columns.len(),
            row_count: data_rows.len(),
            final_columns,
            data_rows,
            feature_rows: Vec::new(),
            feature_cols: Vec::new(),
            nan_rows_hidden: 0,
            redundant_columns_hidden: 0,
            original_row_count: None,
        }
    }

    pub fn level_count(&self) -> usize {
        self.header_matrix.len()
    }

    /// Structural sanity used by the fail-soft guards: a usable matrix has at
    /// least one level and its outermost level spans every column.
    pub fn has_consistent_header(&self) -> bool {
        match self.header_matrix.first() {
            Some(level) => level_width(level) == self.col_count,
            None => false,
        }
    }
}

/// Configuration tuple selecting a derived view of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// How many of the top header levels to combine. 0 leaves the table
    /// untouched; `level_count - 1` yields a single flat level.
    pub flatten_level: usize,
    pub hide_nan_rows: bool,
    pub hide_redundant_columns: bool,
}

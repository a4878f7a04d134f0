//! Downloadable variant of a derived table view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::TableInfo;

/// Record of which filters were applied when a view was exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FiltersApplied {
    pub nan_rows_hidden: usize,
    pub redundant_columns_hidden: usize,
}

/// The exported/downloadable table shape: the derived `TableInfo` plus
/// export metadata consumers use to label the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedTable {
    #[serde(flatten)]
    pub table: TableInfo,
    pub filename: String,
    pub export_timestamp: DateTime<Utc>,
    pub flatten_level_applied: usize,
    pub filters_applied: FiltersApplied,
}

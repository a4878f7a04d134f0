//! Derived views: the fixed flatten -> column-filter -> row-filter pipeline
//! and the per-result store that replaces ad-hoc global caches.

use std::collections::HashMap;

use tracing::debug;

use hmx_model::{ExportedTable, FiltersApplied, TableInfo, ViewConfig};

use crate::filters::{filter_nan_rows, filter_redundant_columns};
use crate::flatten::flatten;

/// Compute the view of `table` selected by `config`.
///
/// Stages run in a fixed order because each filter's definition is relative
/// to the column set the previous stage selected: flatten first, then the
/// redundant-column filter, then the NaN-row filter. Pure and idempotent for
/// a given `(table, config)` pair.
pub fn derive_view(table: &TableInfo, config: &ViewConfig) -> TableInfo {
    let flattened = flatten(table, config.flatten_level);
    let columns_filtered = filter_redundant_columns(&flattened, config.hide_redundant_columns);
    filter_nan_rows(&columns_filtered, config.hide_nan_rows)
}

/// Assemble the downloadable variant of a derived view.
pub fn export_view(
    table: &TableInfo,
    config: &ViewConfig,
    filename: impl Into<String>,
) -> ExportedTable {
    let view = derive_view(table, config);
    let filters_applied = FiltersApplied {
        nan_rows_hidden: view.nan_rows_hidden,
        redundant_columns_hidden: view.redundant_columns_hidden,
    };
    ExportedTable {
        filename: filename.into(),
        export_timestamp: chrono::Utc::now(),
        flatten_level_applied: config.flatten_level,
        filters_applied,
        table: view,
    }
}

/// Store of source tables, one per query result, with memoized derived
/// views keyed by `(result index, config)`.
///
/// Source tables are immutable once registered; every derived view is a
/// fresh value computed from the original, so the memo is a pure cache.
#[derive(Debug, Default)]
pub struct ResultStore {
    tables: Vec<TableInfo>,
    memo: HashMap<(usize, ViewConfig), TableInfo>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a query result's table, returning its index.
    pub fn insert(&mut self, table: TableInfo) -> usize {
        self.tables.push(table);
        self.tables.len() - 1
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The original, unconfigured table for a result.
    pub fn source(&self, index: usize) -> Option<&TableInfo> {
        self.tables.get(index)
    }

    /// The derived view for `(index, config)`, computed on first use.
    pub fn view(&mut self, index: usize, config: ViewConfig) -> Option<&TableInfo> {
        let table = self.tables.get(index)?;
        let view = self.memo.entry((index, config)).or_insert_with(|| {
            debug!(index, ?config, "derived view computed");
            derive_view(table, &config)
        });
        Some(view)
    }
}

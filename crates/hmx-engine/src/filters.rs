//! Row and column filters: NaN-row removal and redundant-feature-column
//! removal, each repairing the table it returns.
//!
//! Both filters are defined relative to the column set already selected by
//! the previous pipeline stage, so they must run after flattening, columns
//! before rows.

use std::collections::BTreeSet;

use tracing::debug;

use hmx_model::{CellValue, DenseGrid, DenseValue, TableInfo};

use crate::project::project;
use crate::rebuild::rebuild;

/// Indices of rows whose every fact cell (index `feature_rows.len()` onward)
/// is absent, empty, an em-dash placeholder, or a numeric NaN.
pub fn nan_row_indices(table: &TableInfo) -> Vec<usize> {
    let fact_start = table.feature_rows.len();
    if fact_start >= table.col_count {
        // No fact columns at all; nothing sensible to flag.
        return Vec::new();
    }
    table
        .data_rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            (fact_start..table.col_count)
                .all(|col| row.get(col).is_none_or(CellValue::is_empty_like))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Remove NaN rows when `hide` is set and at least one such row exists.
pub fn filter_nan_rows(table: &TableInfo, hide: bool) -> TableInfo {
    if !hide {
        return table.clone();
    }
    let empty_rows: BTreeSet<usize> = nan_row_indices(table).into_iter().collect();
    if empty_rows.is_empty() {
        return table.clone();
    }

    let original_row_count = table.data_rows.len();
    let data_rows: Vec<Vec<CellValue>> = table
        .data_rows
        .iter()
        .enumerate()
        .filter(|(index, _)| !empty_rows.contains(index))
        .map(|(_, row)| row.clone())
        .collect();
    debug!(hidden = empty_rows.len(), remaining = data_rows.len(), "hid NaN rows");

    TableInfo {
        row_count: data_rows.len(),
        data_rows,
        nan_rows_hidden: empty_rows.len(),
        original_row_count: Some(original_row_count),
        ..table.clone()
    }
}

/// Indices of redundant grouping columns: among the first
/// `feature_rows.len()` columns, those whose distinct non-empty trimmed
/// values number at most one.
pub fn redundant_column_indices(table: &TableInfo) -> Vec<usize> {
    let feature_count = table.feature_rows.len().min(table.col_count);
    (0..feature_count)
        .filter(|&col| {
            let distinct: BTreeSet<String> = table
                .data_rows
                .iter()
                .filter_map(|row| row.get(col).and_then(CellValue::non_empty_text))
                .collect();
            distinct.len() <= 1
        })
        .collect()
}

/// Remove redundant grouping columns when `hide` is set. The header matrix
/// is re-derived for the surviving columns: expand it to its dense grid,
/// drop the removed columns, rebuild the spans. Positions shift left and
/// colspans shrink as a consequence, and parents left without children
/// disappear with them.
///
/// If the rebuilt matrix has a level with zero cells while columns remain,
/// the header is rebuilt as a single flat level from the surviving
/// `final_columns` instead of propagating an inconsistent matrix.
pub fn filter_redundant_columns(table: &TableInfo, hide: bool) -> TableInfo {
    if !hide {
        return table.clone();
    }
    if !table.has_consistent_header() {
        debug!("inconsistent header matrix, column filter skipped");
        return table.clone();
    }
    let removed: BTreeSet<usize> = redundant_column_indices(table).into_iter().collect();
    if removed.is_empty() {
        return table.clone();
    }

    let keep = |col: usize| !removed.contains(&col);
    let final_columns: Vec<String> = table
        .final_columns
        .iter()
        .enumerate()
        .filter(|(col, _)| keep(*col))
        .map(|(_, name)| name.clone())
        .collect();
    let col_count = final_columns.len();

    let data_rows: Vec<Vec<CellValue>> = table
        .data_rows
        .iter()
        .map(|row| {
            let mut kept: Vec<CellValue> = row
                .iter()
                .enumerate()
                .filter(|(col, _)| keep(*col))
                .map(|(_, cell)| cell.clone())
                .collect();
            kept.resize(col_count, CellValue::Missing);
            kept
        })
        .collect();

    let feature_rows: Vec<String> = table
        .feature_rows
        .iter()
        .enumerate()
        .filter(|(col, _)| keep(*col))
        .map(|(_, name)| name.clone())
        .collect();

    let dense = project(&table.header_matrix, table.col_count).retain_columns(keep);
    let mut header_matrix = rebuild(&dense);

    // A level with no cells left while columns remain is invalid; fall back
    // to a flat header derived from the surviving column names.
    if col_count > 0 && header_matrix.iter().any(Vec::is_empty) {
        let flat_grid = DenseGrid::from_rows(
            vec![
                final_columns
                    .iter()
                    .map(|name| DenseValue::Real(name.clone()))
                    .collect(),
            ],
            col_count,
        );
        header_matrix = rebuild(&flat_grid);
    }
    debug!(hidden = removed.len(), remaining = col_count, "hid redundant columns");

    TableInfo {
        has_multiindex: header_matrix.len() > 1,
        header_matrix,
        final_columns,
        data_rows,
        col_count,
        feature_rows,
        redundant_columns_hidden: removed.len(),
        ..table.clone()
    }
}

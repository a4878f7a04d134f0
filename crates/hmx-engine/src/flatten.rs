//! Progressive flattening of the top header levels into combined names.

use tracing::debug;

use hmx_model::{DenseGrid, DenseValue, TableInfo};

use crate::abbrev::abbreviate;
use crate::project::project;
use crate::rebuild::rebuild;

/// Name given to a column whose combined levels carry no content at all.
const FALLBACK_COLUMN_NAME: &str = "Column";

/// Combine the top `level + 1` header levels of `table` into single names.
///
/// `level` 0 returns the table unchanged, as does any table that is already
/// flat; levels past the deepest are clamped. Malformed input (missing or
/// inconsistent header matrix) falls back to the unmodified table.
pub fn flatten(table: &TableInfo, level: usize) -> TableInfo {
    if level == 0 || table.level_count() <= 1 {
        return table.clone();
    }
    if !table.has_consistent_header() {
        debug!(col_count = table.col_count, "inconsistent header matrix, flatten skipped");
        return table.clone();
    }

    let level_count = table.level_count();
    let combine = (level + 1).min(level_count);
    let grid = project(&table.header_matrix, table.col_count);

    let combined: Vec<String> = (0..table.col_count)
        .map(|col| combined_name(&grid, col, combine))
        .collect();

    // Reduced grid: the combined names on top, untouched deeper levels below.
    let mut rows: Vec<Vec<DenseValue>> = Vec::with_capacity(level_count - combine + 1);
    rows.push(
        combined
            .iter()
            .map(|name| DenseValue::Real(name.clone()))
            .collect(),
    );
    for lower in combine..level_count {
        rows.push(grid.level_values(lower));
    }
    let reduced = DenseGrid::from_rows(rows, table.col_count);
    let header_matrix = rebuild(&reduced);

    let has_multiindex = header_matrix.len() > 1;
    let final_columns = if has_multiindex {
        table.final_columns.clone()
    } else {
        combined
    };
    debug!(
        combined_levels = combine,
        remaining_levels = header_matrix.len(),
        "flattened header matrix"
    );

    TableInfo {
        has_multiindex,
        header_matrix,
        final_columns,
        ..table.clone()
    }
}

/// Collect the meaningful parts of one column across the combined levels and
/// join them into a single display name.
fn combined_name(grid: &DenseGrid, col: usize, combine: usize) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for level in 0..combine {
        let DenseValue::Real(text) = grid.value(level, col) else {
            continue;
        };
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "nan" {
            continue;
        }
        // Consecutive duplicates are artifacts of vertical inheritance.
        if parts.last() != Some(&trimmed) {
            parts.push(trimmed);
        }
    }

    match parts.as_slice() {
        [] => FALLBACK_COLUMN_NAME.to_string(),
        [only] => (*only).to_string(),
        [ancestors @ .., leaf] => {
            let mut pieces: Vec<String> = ancestors.iter().map(|part| abbreviate(part)).collect();
            pieces.push((*leaf).to_string());
            pieces.join(" ")
        }
    }
}

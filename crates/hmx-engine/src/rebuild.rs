//! Two-pass reconstruction of a valid spanned header matrix from any dense
//! index grid.

use hmx_model::{DenseGrid, HeaderCell, HeaderMatrix};

use crate::spans::{Coverage, colspan, rowspan};

/// Rebuild a `HeaderMatrix` from a dense grid.
///
/// Pass 1 computes every cell's rowspan. Pass 2 walks each level left to
/// right, skipping columns claimed by an earlier rowspan, emits one cell per
/// uncovered column with its colspan, and marks the covered rectangle
/// `[level+1, level+rowspan) x [col, col+colspan)`. O(levels * columns),
/// deterministic.
pub fn rebuild(grid: &DenseGrid) -> HeaderMatrix {
    let level_count = grid.level_count();
    let col_count = grid.col_count();

    let mut rowspans = vec![vec![1usize; col_count]; level_count];
    for (level, level_rowspans) in rowspans.iter_mut().enumerate() {
        for (col, slot) in level_rowspans.iter_mut().enumerate() {
            *slot = rowspan(grid, level, col);
        }
    }

    let mut coverage = Coverage::new(level_count, col_count);
    let mut matrix: HeaderMatrix = Vec::with_capacity(level_count);

    for level in 0..level_count {
        let mut cells = Vec::new();
        let mut col = 0;
        while col < col_count {
            if coverage.is_covered(level, col) {
                col += 1;
                continue;
            }
            let span_cols = colspan(grid, level, col, &coverage);
            let span_rows = rowspans[level][col];
            cells.push(HeaderCell {
                text: grid.value(level, col).display_text().to_string(),
                position: col,
                colspan: span_cols,
                rowspan: span_rows,
                level,
            });
            for covered_level in level + 1..(level + span_rows).min(level_count) {
                for covered_col in col..col + span_cols {
                    coverage.cover(covered_level, covered_col);
                }
            }
            col += span_cols;
        }
        matrix.push(cells);
    }

    matrix
}

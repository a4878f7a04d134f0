//! Dense index projection: expand a spanned header matrix into a full
//! per-level, per-column value grid.

use hmx_model::{DenseGrid, DenseValue, HeaderMatrix};

/// Expand `matrix` into a `levels x col_count` dense grid.
///
/// Each cell writes its own text across `[position, position + colspan)` at
/// its level, and structural filler into every further level its rowspan
/// covers. Filler lands only in empty slots: real text, once written, is
/// never overwritten by filler, and filler is never overwritten by filler
/// from a later-processed cell. Real text may replace filler left by an
/// earlier rowspan, so malformed overlapping input degrades to
/// first-real-writer-wins instead of erroring.
pub fn project(matrix: &HeaderMatrix, col_count: usize) -> DenseGrid {
    let level_count = matrix.len();
    let mut grid = DenseGrid::empty(level_count, col_count);

    for (level, cells) in matrix.iter().enumerate() {
        for cell in cells {
            let value = DenseValue::from_text(&cell.text);
            let end = cell.position.saturating_add(cell.colspan).min(col_count);
            for col in cell.position..end {
                let writable = match grid.value(level, col) {
                    DenseValue::Empty => true,
                    DenseValue::Filler => value.as_real().is_some(),
                    DenseValue::Real(_) => false,
                };
                if writable {
                    grid.set(level, col, value.clone());
                }
            }
            let span_end = level.saturating_add(cell.rowspan).min(level_count);
            for span_level in (level + 1)..span_end {
                for col in cell.position..end {
                    if grid.value(span_level, col).is_empty() {
                        grid.set(span_level, col, DenseValue::Filler);
                    }
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmx_model::HeaderCell;

    fn cell(text: &str, position: usize, colspan: usize, rowspan: usize, level: usize) -> HeaderCell {
        HeaderCell {
            text: text.to_string(),
            position,
            colspan,
            rowspan,
            level,
        }
    }

    #[test]
    fn rowspan_projects_filler_below() {
        // "Name" spans all 3 levels at column 2.
        let matrix = vec![
            vec![cell("Year", 0, 2, 1, 0), cell("Name", 2, 1, 3, 0)],
            vec![cell("Q1", 0, 1, 2, 1), cell("Q2", 1, 1, 2, 1)],
            vec![],
        ];
        let grid = project(&matrix, 3);
        assert_eq!(grid.value(0, 2).as_real(), Some("Name"));
        assert!(grid.value(1, 2).is_filler());
        assert!(grid.value(2, 2).is_filler());
        assert!(grid.value(2, 0).is_filler());
        assert_eq!(grid.value(1, 0).as_real(), Some("Q1"));
    }

    #[test]
    fn real_text_wins_over_filler() {
        // Malformed input: the level-1 cell sits where the level-0 rowspan
        // already left filler. Its own real text still lands.
        let matrix = vec![
            vec![cell("Top", 0, 1, 2, 0)],
            vec![cell("Leaf", 0, 1, 1, 1)],
        ];
        let grid = project(&matrix, 1);
        assert_eq!(grid.value(1, 0).as_real(), Some("Leaf"));
    }

    #[test]
    fn filler_literal_projects_as_filler() {
        let matrix = vec![vec![cell("Header", 0, 1, 1, 0)]];
        let grid = project(&matrix, 1);
        assert!(grid.value(0, 0).is_filler());
    }
}

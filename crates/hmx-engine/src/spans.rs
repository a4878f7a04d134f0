//! Row- and column-span calculators over a dense index grid.
//!
//! These are the only span rules in the engine; the matrix builder in
//! `rebuild` consumes them and nothing else computes spans.

use hmx_model::DenseGrid;

/// Positions already claimed by an earlier cell's rowspan during a rebuild.
#[derive(Debug, Clone)]
pub struct Coverage {
    covered: Vec<bool>,
    col_count: usize,
}

impl Coverage {
    pub fn new(level_count: usize, col_count: usize) -> Self {
        Self {
            covered: vec![false; level_count * col_count],
            col_count,
        }
    }

    pub fn is_covered(&self, level: usize, col: usize) -> bool {
        self.covered
            .get(level * self.col_count + col)
            .copied()
            .unwrap_or(false)
    }

    pub fn cover(&mut self, level: usize, col: usize) {
        if col < self.col_count
            && let Some(slot) = self.covered.get_mut(level * self.col_count + col)
        {
            *slot = true;
        }
    }
}

/// Vertical span for the cell anchored at `(level, col)`.
///
/// The last level never spans. Otherwise the cell spans to the very bottom
/// exactly when every level below it at this column is structural filler;
/// genuine content below, even textually different content, blocks merging.
pub fn rowspan(grid: &DenseGrid, level: usize, col: usize) -> usize {
    let level_count = grid.level_count();
    if level + 1 >= level_count {
        return 1;
    }
    let all_filler_below = (level + 1..level_count).all(|lower| grid.value(lower, col).is_filler());
    if all_filler_below {
        level_count - level
    } else {
        1
    }
}

/// Horizontal span for the cell anchored at `(level, start_col)`.
///
/// Consecutive columns sharing this level's value (and not claimed by a prior
/// rowspan) form the candidate run. The run merges only when the levels below
/// justify it: either some lower level varies across the run (a genuine
/// parent header), or everything below is filler (merge over structural
/// emptiness). Identical real content below means the run is
/// accidentally-identical sibling columns, which stay separate.
pub fn colspan(grid: &DenseGrid, level: usize, start_col: usize, coverage: &Coverage) -> usize {
    let level_count = grid.level_count();
    let col_count = grid.col_count();
    if level + 1 >= level_count {
        return 1;
    }

    let anchor = grid.value(level, start_col);
    let mut run_end = start_col + 1;
    while run_end < col_count
        && grid.value(level, run_end) == anchor
        && !coverage.is_covered(level, run_end)
    {
        run_end += 1;
    }
    let run = run_end - start_col;
    if run == 1 {
        return 1;
    }

    for lower in level + 1..level_count {
        let first = grid.value(lower, start_col);
        if (start_col + 1..run_end).any(|col| grid.value(lower, col) != first) {
            return run;
        }
    }

    // Every lower level is uniform across the run. Merge only over filler.
    let all_filler = (level + 1..level_count)
        .all(|lower| (start_col..run_end).all(|col| grid.value(lower, col).is_filler()));
    if all_filler { run } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmx_model::DenseValue as V;

    fn real(text: &str) -> V {
        V::Real(text.to_string())
    }

    fn grid(rows: Vec<Vec<V>>) -> DenseGrid {
        let cols = rows.first().map_or(0, Vec::len);
        DenseGrid::from_rows(rows, cols)
    }

    #[test]
    fn rowspan_spans_over_filler_only() {
        let g = grid(vec![
            vec![real("Name"), real("Year")],
            vec![V::Filler, real("Q1")],
            vec![V::Filler, real("M1")],
        ]);
        assert_eq!(rowspan(&g, 0, 0), 3);
        assert_eq!(rowspan(&g, 0, 1), 1);
        assert_eq!(rowspan(&g, 2, 0), 1);
    }

    #[test]
    fn colspan_merges_when_children_differ() {
        let g = grid(vec![
            vec![real("Year"), real("Year"), real("Name")],
            vec![real("Q1"), real("Q2"), V::Filler],
        ]);
        let coverage = Coverage::new(2, 3);
        assert_eq!(colspan(&g, 0, 0, &coverage), 2);
    }

    #[test]
    fn colspan_refuses_identical_real_children() {
        // Two "Total" columns with identical children are separate columns.
        let g = grid(vec![
            vec![real("Total"), real("Total")],
            vec![real("Sum"), real("Sum")],
        ]);
        let coverage = Coverage::new(2, 2);
        assert_eq!(colspan(&g, 0, 0, &coverage), 1);
    }

    #[test]
    fn colspan_merges_over_filler() {
        let g = grid(vec![
            vec![real("Name"), real("Name")],
            vec![V::Filler, V::Filler],
        ]);
        let coverage = Coverage::new(2, 2);
        assert_eq!(colspan(&g, 0, 0, &coverage), 2);
    }

    #[test]
    fn last_level_never_spans() {
        let g = grid(vec![vec![real("A"), real("A")]]);
        let coverage = Coverage::new(1, 2);
        assert_eq!(colspan(&g, 0, 0, &coverage), 1);
        assert_eq!(rowspan(&g, 0, 0), 1);
    }
}

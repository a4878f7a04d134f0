//! Dense per-level, per-column expansion of a header matrix.
//!
//! Span and flatten algorithms never reason over spanned cells directly; they
//! work on this expanded grid, where every `(level, column)` slot holds an
//! explicit tagged value rather than a magic placeholder string.

use crate::header::FILLER_TEXT;

/// Value of one slot in a dense index grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DenseValue {
    /// Genuine header text governed by some cell.
    Real(String),
    /// Structural filler inherited from a rowspan above.
    Filler,
    /// Nothing has been written here.
    #[default]
    Empty,
}

impl DenseValue {
    /// Classify raw header text: the wire-level filler literal maps to
    /// `Filler`, everything else (including the empty string) stays real.
    pub fn from_text(text: &str) -> Self {
        if text == FILLER_TEXT {
            DenseValue::Filler
        } else {
            DenseValue::Real(text.to_string())
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, DenseValue::Filler)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DenseValue::Empty)
    }

    pub fn as_real(&self) -> Option<&str> {
        match self {
            DenseValue::Real(text) => Some(text),
            _ => None,
        }
    }

    /// Text to emit when this slot must surface as a compact header cell.
    pub fn display_text(&self) -> &str {
        match self {
            DenseValue::Real(text) => text,
            DenseValue::Filler => FILLER_TEXT,
            DenseValue::Empty => "",
        }
    }
}

/// `levels x col_count` matrix of dense values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid {
    levels: Vec<Vec<DenseValue>>,
    col_count: usize,
}

impl DenseGrid {
    pub fn empty(level_count: usize, col_count: usize) -> Self {
        Self {
            levels: vec![vec![DenseValue::Empty; col_count]; level_count],
            col_count,
        }
    }

    /// Wrap pre-built rows. Short rows are padded with `Empty` so every
    /// level has exactly `col_count` slots.
    pub fn from_rows(mut levels: Vec<Vec<DenseValue>>, col_count: usize) -> Self {
        for level in &mut levels {
            level.resize(col_count, DenseValue::Empty);
        }
        Self { levels, col_count }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Out-of-range reads yield `Empty` rather than panicking.
    pub fn value(&self, level: usize, col: usize) -> &DenseValue {
        const EMPTY: &DenseValue = &DenseValue::Empty;
        self.levels
            .get(level)
            .and_then(|row| row.get(col))
            .unwrap_or(EMPTY)
    }

    /// Write a slot, ignoring out-of-range coordinates.
    pub fn set(&mut self, level: usize, col: usize, value: DenseValue) {
        if let Some(row) = self.levels.get_mut(level)
            && let Some(slot) = row.get_mut(col)
        {
            *slot = value;
        }
    }

    /// Copy of one level's slots.
    pub fn level_values(&self, level: usize) -> Vec<DenseValue> {
        self.levels.get(level).cloned().unwrap_or_default()
    }

    /// New grid keeping only the columns whose indices satisfy `keep`.
    pub fn retain_columns(&self, keep: impl Fn(usize) -> bool) -> DenseGrid {
        let levels: Vec<Vec<DenseValue>> = self
            .levels
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(col, _)| keep(*col))
                    .map(|(_, value)| value.clone())
                    .collect()
            })
            .collect();
        let col_count = levels.first().map_or(0, Vec::len);
        Self { levels, col_count }
    }
}

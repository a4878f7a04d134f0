//! Shared data model for the HMX hierarchical header-matrix engine.
//!
//! - **header**: compact spanned header representation (`HeaderMatrix`)
//! - **dense**: expanded per-level, per-column grid (`DenseGrid`)
//! - **table**: data cells and the `TableInfo` boundary contract
//! - **export**: downloadable table variant with export metadata
//! - **error**: crate-level error and result types

pub mod dense;
pub mod error;
pub mod export;
pub mod header;
pub mod table;

pub use dense::{DenseGrid, DenseValue};
pub use error::{HmxError, Result};
pub use export::{ExportedTable, FiltersApplied};
pub use header::{FILLER_TEXT, HeaderCell, HeaderLevel, HeaderMatrix, flat_header_matrix, level_width};
pub use table::{CellValue, EM_DASH, TableInfo, ViewConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_roundtrips_as_plain_json() {
        let cells = vec![
            CellValue::Number(5.0),
            CellValue::Text("North".to_string()),
            CellValue::Missing,
            CellValue::Bool(true),
        ];
        let json = serde_json::to_string(&cells).expect("serialize cells");
        assert_eq!(json, r#"[5.0,"North",null,true]"#);
        let round: Vec<CellValue> = serde_json::from_str(&json).expect("deserialize cells");
        assert_eq!(round, cells);
    }

    #[test]
    fn empty_like_cells() {
        assert!(CellValue::Missing.is_empty_like());
        assert!(CellValue::Text(String::new()).is_empty_like());
        assert!(CellValue::Text(EM_DASH.to_string()).is_empty_like());
        assert!(CellValue::Number(f64::NAN).is_empty_like());
        assert!(!CellValue::Number(0.0).is_empty_like());
        assert!(!CellValue::Text("x".to_string()).is_empty_like());
    }

    #[test]
    fn table_info_roundtrips() {
        let table = TableInfo::flat(
            vec!["Region".to_string(), "Total".to_string()],
            vec![vec![
                CellValue::Text("North".to_string()),
                CellValue::Number(12.0),
            ]],
        );
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: TableInfo = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round, table);
        assert!(round.has_consistent_header());
        assert!(!round.has_multiindex);
    }

    #[test]
    fn filler_text_is_tagged_in_dense_values() {
        assert!(DenseValue::from_text(FILLER_TEXT).is_filler());
        assert_eq!(
            DenseValue::from_text("Revenue"),
            DenseValue::Real("Revenue".to_string())
        );
        assert_eq!(DenseValue::Filler.display_text(), FILLER_TEXT);
    }
}

//! CSV ingestion for tables with stacked (multi-row) column headers.
//!
//! Spreadsheet exports surface merged header cells as blanks: a horizontal
//! merge leaves blanks to the right of its label, a vertical merge leaves the
//! column blank all the way down. The reader disambiguates the two, builds a
//! dense header grid, and lets the engine's builder derive the spanned
//! header matrix from it.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use hmx_engine::rebuild;
use hmx_model::{CellValue, DenseGrid, DenseValue, FILLER_TEXT, HmxError, TableInfo};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("file has {records} records but {header_rows} header rows were requested")]
    NotEnoughRecords { records: usize, header_rows: usize },
}

/// Ingest errors flow into the shared model error at the CLI boundary.
impl From<IngestError> for HmxError {
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::Io(source) => HmxError::Io(source),
            other => HmxError::Message(other.to_string()),
        }
    }
}

/// Options controlling how a CSV file maps onto a `TableInfo`.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Number of leading records that form the stacked header levels.
    pub header_rows: usize,
    /// Number of leading columns that are grouping (feature) columns; the
    /// rest are fact columns.
    pub feature_columns: usize,
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_rows: 1,
            feature_columns: 0,
            delimiter: b',',
        }
    }
}

/// Read `path` into a `TableInfo` per `options`.
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<TableInfo, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_path(path)?;

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(|field| field.trim().to_string()).collect());
    }

    let header_rows = options.header_rows.max(1);
    if records.len() < header_rows {
        return Err(IngestError::NotEnoughRecords {
            records: records.len(),
            header_rows,
        });
    }

    let col_count = records.iter().map(Vec::len).max().unwrap_or(0);
    for record in &mut records {
        record.resize(col_count, String::new());
    }
    let (header_records, data_records) = records.split_at(header_rows);

    let grid = header_grid(header_records, col_count);
    let header_matrix = rebuild(&grid);
    let final_columns = leaf_column_names(&grid);

    let data_rows: Vec<Vec<CellValue>> = data_records
        .iter()
        .map(|record| record.iter().map(|field| parse_cell(field)).collect())
        .collect();

    let feature_count = options.feature_columns.min(col_count);
    let feature_rows = final_columns[..feature_count].to_vec();
    let feature_cols = final_columns[feature_count..].to_vec();
    debug!(
        rows = data_rows.len(),
        cols = col_count,
        levels = header_matrix.len(),
        "ingested csv table"
    );

    Ok(TableInfo {
        has_multiindex: header_matrix.len() > 1,
        header_matrix,
        final_columns,
        row_count: data_rows.len(),
        data_rows,
        col_count,
        feature_rows,
        feature_cols,
        nan_rows_hidden: 0,
        redundant_columns_hidden: 0,
        original_row_count: None,
    })
}

/// Resolve the raw header records into a dense grid.
///
/// A blank cell is a horizontal continuation (inherits its left neighbor)
/// when real content appears somewhere below it in the same column, and
/// vertical filler when the column is blank from here to the bottom. The
/// literal filler text from already-preprocessed exports is honored as-is.
fn header_grid(header_records: &[Vec<String>], col_count: usize) -> DenseGrid {
    let level_count = header_records.len();
    let mut rows: Vec<Vec<DenseValue>> = Vec::with_capacity(level_count);

    for (level, record) in header_records.iter().enumerate() {
        let mut resolved: Vec<DenseValue> = Vec::with_capacity(col_count);
        for (col, text) in record.iter().enumerate() {
            let value = if text == FILLER_TEXT {
                DenseValue::Filler
            } else if !text.is_empty() {
                DenseValue::Real(text.clone())
            } else {
                let blank_below = (level + 1..level_count).all(|lower| {
                    let below = &header_records[lower][col];
                    below.is_empty() || below == FILLER_TEXT
                });
                if blank_below {
                    DenseValue::Filler
                } else if col > 0 {
                    resolved[col - 1].clone()
                } else {
                    DenseValue::Real(String::new())
                }
            };
            resolved.push(value);
        }
        rows.push(resolved);
    }

    DenseGrid::from_rows(rows, col_count)
}

/// Display name per column: the deepest real label, falling back to the top
/// level when nothing below carries content.
fn leaf_column_names(grid: &DenseGrid) -> Vec<String> {
    (0..grid.col_count())
        .map(|col| {
            (0..grid.level_count())
                .rev()
                .find_map(|level| {
                    grid.value(level, col)
                        .as_real()
                        .filter(|text| !text.is_empty())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| grid.value(0, col).display_text().to_string())
        })
        .collect()
}

fn parse_cell(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Missing;
    }
    match field.parse::<f64>() {
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("table.csv");
        fs::write(&path, contents).expect("write fixture");
        (dir, path)
    }

    #[test]
    fn single_header_row_reads_flat() {
        let (_dir, path) = write_fixture("Name,Age\nJohn,25\nJane,30\n");
        let table = read_table(&path, &IngestOptions::default()).expect("read table");

        assert!(!table.has_multiindex);
        assert_eq!(table.final_columns, vec!["Name".to_string(), "Age".to_string()]);
        assert_eq!(table.row_count, 2);
        assert_eq!(table.data_rows[0][1], CellValue::Number(25.0));
        assert_eq!(table.data_rows[1][0], CellValue::Text("Jane".to_string()));
    }

    #[test]
    fn stacked_headers_resolve_merges() {
        let (_dir, path) = write_fixture(
            "Năm 2024,,,Tên\n\
             quý 1,,Quý 2,\n\
             tháng 1,tháng 2,tháng 4,\n\
             North,1,2,Alice\n",
        );
        let options = IngestOptions {
            header_rows: 3,
            feature_columns: 0,
            delimiter: b',',
        };
        let table = read_table(&path, &options).expect("read table");

        assert!(table.has_multiindex);
        assert_eq!(table.header_matrix.len(), 3);
        let level0 = &table.header_matrix[0];
        assert_eq!(level0[0].text, "Năm 2024");
        assert_eq!(level0[0].colspan, 3);
        assert_eq!(level0[1].text, "Tên");
        assert_eq!(level0[1].rowspan, 3);

        let level1 = &table.header_matrix[1];
        assert_eq!(level1[0].text, "quý 1");
        assert_eq!(level1[0].colspan, 2);

        assert_eq!(
            table.final_columns,
            vec![
                "tháng 1".to_string(),
                "tháng 2".to_string(),
                "tháng 4".to_string(),
                "Tên".to_string(),
            ]
        );
    }

    #[test]
    fn literal_filler_text_is_honored() {
        let (_dir, path) = write_fixture("Tên,Total\nHeader,Sum\nAlice,3\n");
        let options = IngestOptions {
            header_rows: 2,
            ..IngestOptions::default()
        };
        let table = read_table(&path, &options).expect("read table");
        assert_eq!(table.header_matrix[0][0].text, "Tên");
        assert_eq!(table.header_matrix[0][0].rowspan, 2);
        assert_eq!(table.final_columns[0], "Tên");
    }

    #[test]
    fn feature_columns_split_names() {
        let (_dir, path) = write_fixture("Region,A,B\nNorth,1,2\n");
        let options = IngestOptions {
            feature_columns: 1,
            ..IngestOptions::default()
        };
        let table = read_table(&path, &options).expect("read table");
        assert_eq!(table.feature_rows, vec!["Region".to_string()]);
        assert_eq!(table.feature_cols, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn ragged_records_pad_with_missing() {
        let (_dir, path) = write_fixture("A,B,C\n1,2\n");
        let table = read_table(&path, &IngestOptions::default()).expect("read table");
        assert_eq!(table.data_rows[0].len(), 3);
        assert_eq!(table.data_rows[0][2], CellValue::Missing);
    }

    #[test]
    fn ingest_errors_convert_to_model_errors() {
        let error = IngestError::NotEnoughRecords { records: 1, header_rows: 2 };
        let converted = HmxError::from(error);
        assert!(matches!(converted, HmxError::Message(_)));
        assert!(converted.to_string().contains("header rows"));

        let io = IngestError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(HmxError::from(io), HmxError::Io(_)));
    }

    #[test]
    fn too_few_records_is_an_error() {
        let (_dir, path) = write_fixture("only,one,row\n");
        let options = IngestOptions {
            header_rows: 2,
            ..IngestOptions::default()
        };
        let error = read_table(&path, &options).expect_err("should fail");
        assert!(matches!(error, IngestError::NotEnoughRecords { records: 1, header_rows: 2 }));
    }
}

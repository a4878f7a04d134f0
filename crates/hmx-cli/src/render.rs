//! Terminal rendering of a derived table view.
//!
//! comfy-table has no merged cells, so spanning header text is shown once at
//! its anchor column and the columns it spans stay blank — the same reading
//! order the HTML renderer produces with real rowspan/colspan.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hmx_model::{CellValue, EM_DASH, HeaderCell, TableInfo};

pub fn render_table(table: &TableInfo) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut levels = table.header_matrix.iter();
    if let Some(top) = levels.next() {
        out.set_header(header_row(top, table.col_count));
    }
    for level in levels {
        out.add_row(header_row(level, table.col_count));
    }

    for row in &table.data_rows {
        out.add_row(
            (0..table.col_count)
                .map(|col| data_cell(row.get(col)))
                .collect::<Vec<_>>(),
        );
    }
    out
}

/// One-line summary below the table: counts plus what the filters hid.
pub fn summary_line(table: &TableInfo) -> String {
    let mut parts = vec![format!("{} rows x {} columns", table.row_count, table.col_count)];
    if table.nan_rows_hidden > 0 {
        parts.push(format!("{} empty rows hidden", table.nan_rows_hidden));
    }
    if table.redundant_columns_hidden > 0 {
        parts.push(format!(
            "{} redundant columns hidden",
            table.redundant_columns_hidden
        ));
    }
    parts.join(", ")
}

fn header_row(level: &[HeaderCell], col_count: usize) -> Vec<Cell> {
    let mut texts = vec![String::new(); col_count];
    for cell in level {
        if cell.position < col_count && !cell.is_filler() {
            texts[cell.position] = cell.text.clone();
        }
    }
    texts
        .into_iter()
        .map(|text| {
            Cell::new(text)
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan)
        })
        .collect()
}

fn data_cell(value: Option<&CellValue>) -> Cell {
    match value {
        Some(CellValue::Number(number)) => {
            Cell::new(format_number(*number)).set_alignment(CellAlignment::Right)
        }
        Some(CellValue::Text(text)) => Cell::new(text),
        Some(CellValue::Bool(flag)) => Cell::new(flag),
        Some(CellValue::Missing) | None => Cell::new(EM_DASH).fg(Color::DarkGrey),
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return EM_DASH.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_compactly() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), EM_DASH);
    }

    #[test]
    fn summary_mentions_hidden_work() {
        let mut table = TableInfo::flat(vec!["A".to_string()], vec![]);
        assert_eq!(summary_line(&table), "0 rows x 1 columns");
        table.nan_rows_hidden = 2;
        table.redundant_columns_hidden = 1;
        assert_eq!(
            summary_line(&table),
            "0 rows x 1 columns, 2 empty rows hidden, 1 redundant columns hidden"
        );
    }
}

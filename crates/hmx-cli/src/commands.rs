//! Command implementations: load a table, derive the requested view, render
//! or export it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use hmx_engine::{derive_view, export_view};
use hmx_ingest::{IngestOptions, read_table};
use hmx_model::{HmxError, TableInfo, ViewConfig};

use crate::cli::{ExportArgs, ShowArgs, TableArgs};
use crate::render::{render_table, summary_line};

pub fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let table = load_table(&args.table)
        .with_context(|| format!("load {}", args.table.file.display()))?;
    let view = derive_view(&table, &view_config(&args.table));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_table(&view));
        println!("{}", summary_line(&view));
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let table = load_table(&args.table)
        .with_context(|| format!("load {}", args.table.file.display()))?;
    let filename = args
        .output
        .file_stem()
        .map_or_else(|| "table".to_string(), |stem| stem.to_string_lossy().into_owned());
    let exported = export_view(&table, &view_config(&args.table), filename);

    let file = File::create(&args.output)
        .with_context(|| format!("create {}", args.output.display()))?;
    serde_json::to_writer_pretty(file, &exported)?;
    info!(path = %args.output.display(), "wrote export");
    println!("Exported: {}", args.output.display());
    Ok(())
}

fn view_config(args: &TableArgs) -> ViewConfig {
    ViewConfig {
        flatten_level: args.flatten_level,
        hide_nan_rows: args.hide_nan_rows,
        hide_redundant_columns: args.hide_redundant_columns,
    }
}

/// Load a table from TableInfo JSON or, for anything else, CSV.
pub fn load_table(args: &TableArgs) -> hmx_model::Result<TableInfo> {
    let is_json = args
        .file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_json_table(&args.file)
    } else {
        let options = IngestOptions {
            header_rows: args.header_rows,
            feature_columns: args.feature_columns,
            ..IngestOptions::default()
        };
        Ok(read_table(&args.file, &options)?)
    }
}

fn load_json_table(path: &Path) -> hmx_model::Result<TableInfo> {
    let file = File::open(path)?;
    let table: TableInfo = serde_json::from_reader(BufReader::new(file))
        .map_err(|error| HmxError::Message(format!("parse {}: {error}", path.display())))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table_args(file: PathBuf) -> TableArgs {
        TableArgs {
            file,
            header_rows: 1,
            feature_columns: 0,
            flatten_level: 0,
            hide_nan_rows: false,
            hide_redundant_columns: false,
        }
    }

    #[test]
    fn missing_json_table_surfaces_io_error() {
        let args = table_args(PathBuf::from("/nonexistent/table.json"));
        assert!(matches!(load_table(&args), Err(HmxError::Io(_))));
    }

    #[test]
    fn missing_csv_table_is_an_error() {
        let args = table_args(PathBuf::from("/nonexistent/table.csv"));
        assert!(load_table(&args).is_err());
    }
}

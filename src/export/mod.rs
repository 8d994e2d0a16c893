// src/export/mod.rs

mod json_csv;
pub mod model;
mod xlsx;

pub use model::RecordExport;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Parse a config-file format name.
    pub fn parse(name: &str) -> AppResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// Write the rows in the requested format. The output file is overwritten on
/// every export; the destination is a fixed, configured path unless the
/// caller overrides it.
pub fn write_export(rows: &[RecordExport], format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => json_csv::export_csv(rows, path),
        ExportFormat::Json => json_csv::export_json(rows, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path),
    }
}

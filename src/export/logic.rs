// src/export/logic.rs

use crate::core::search::SearchLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::DutyExport;
use crate::models::month_key::MonthKey;
use crate::store::Document;
use crate::ui::messages::warning;

use crate::export::csv::export_csv;
use crate::export::json::export_json;
use crate::export::xlsx::export_xlsx;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the populated rows of one month sheet.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute output path
    /// - `key`: month to export
    pub fn export(
        doc: &Document,
        format: ExportFormat,
        file: &str,
        key: MonthKey,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let wb = doc.open()?;
        let Some(listing) = SearchLogic::month_listing(&wb, key) else {
            warning(format!("No schedule sheet found for month {}", key));
            return Ok(());
        };

        let rows: Vec<DutyExport> = listing.into_iter().map(DutyExport::from).collect();

        if rows.is_empty() {
            warning("No duty rows found for the selected month.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}

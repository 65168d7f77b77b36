use crate::errors::AppResult;
use crate::export::{DutyExport, notify_export_success};
use std::fs::File;
use std::path::Path;

/// Write the duty rows as pretty JSON.
pub(crate) fn export_json(rows: &[DutyExport], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, rows)?;
    notify_export_success("JSON", path);
    Ok(())
}

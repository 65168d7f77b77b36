use crate::errors::AppResult;
use crate::export::model::{duty_to_row, get_headers};
use crate::export::{DutyExport, notify_export_success};
use csv::Writer;
use std::path::Path;

/// Write the duty rows as CSV.
pub(crate) fn export_csv(rows: &[DutyExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| std::io::Error::other(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    for row in rows {
        wtr.write_record(duty_to_row(row))
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

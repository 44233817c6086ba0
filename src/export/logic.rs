use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::warning;

use crate::export::csv::export_csv;
use crate::export::json::export_json;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export check-in records.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `user`: restrict to a single user id, or `None` for everyone
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        user: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let records = load_all_records(&pool.conn, user)?;

        if records.is_empty() {
            warning("No check-in records found for the selected filter.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        crate::export::notify_export_success(format.as_str(), path);

        // audit trail, non-blocking
        let _ = crate::db::log::audit(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} record(s) as {}", records.len(), format.as_str()),
        );

        Ok(())
    }
}

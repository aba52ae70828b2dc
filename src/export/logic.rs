// src/export/logic.rs

use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::coverage_to_rows;
use crate::models::language::Language;
use crate::models::service::ServiceWindow;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High-level export of coverage gaps.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the gaps reported for each date.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `dates`: the resolved period
    /// - `selected_service`: `None` exports the all-services view
    pub fn export(
        snapshot: &Snapshot,
        format: ExportFormat,
        file: &str,
        dates: &[NaiveDate],
        selected_service: Option<&ServiceWindow>,
        lang: Language,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let coverage = Core::month_coverage(snapshot, dates, selected_service, lang);
        let rows = coverage_to_rows(&coverage);

        if rows.is_empty() {
            warning("No coverage gaps found for the selected period.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

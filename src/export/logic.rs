// src/export/logic.rs

use crate::core::ExperienceReport;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::PeriodExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file`.
    ///
    /// - `format`: csv (one row per entry) or json (entries + total)
    /// - `file`: absolute output path
    pub fn export(
        report: &ExperienceReport,
        format: ExportFormat,
        file: &str,
        ongoing_label: &str,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        if report.entries.is_empty() {
            warning("Work history is empty: nothing but the total to export.");
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<PeriodExport> = report
                    .entries
                    .iter()
                    .map(|s| PeriodExport::from_summary(s, ongoing_label))
                    .collect();
                export_csv(&rows, path)?
            }
            ExportFormat::Json => export_json(report, path)?,
        }

        Ok(())
    }
}

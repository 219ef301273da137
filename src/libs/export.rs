//! Export of the task table to external files.
//!
//! An export is the full snapshot of the store with the same eight columns as the
//! backing workbook, values untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::libs::export::{ExportFormat, Exporter};
//! use daytask::store::TaskStore;
//! use std::path::PathBuf;
//!
//! let store = TaskStore::open("tasks.xlsx");
//! let exporter = Exporter::new(ExportFormat::Csv, Some(PathBuf::from("tasks.csv")));
//! exporter.export(&store.get_all())?;
//! # Ok::<(), daytask::libs::export::ExportError>(())
//! ```

use crate::libs::task::{Column, Task, COLUMNS};
use crate::store::{sheet, StoreError};
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed array of objects.
    Json,
    /// Workbook in the same layout as the tasks file.
    Excel,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Workbook(#[from] StoreError),
}

/// One exported row, fields in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: String,
    pub repeat: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            day: task.field(Column::Day).to_string(),
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
            priority: task.field(Column::Priority).to_string(),
            repeat: task.field(Column::Repeat).to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `daytask_export_<YYYYMMDD_HHMMSS>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("daytask_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension()))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, tasks: &[Task]) -> Result<(), ExportError> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tasks),
            ExportFormat::Json => self.export_json(tasks),
            ExportFormat::Excel => Ok(sheet::write_tasks(&self.output_path, tasks)?),
        }
    }

    fn export_csv(&self, tasks: &[Task]) -> Result<(), ExportError> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(COLUMNS.iter().map(|column| column.header()))?;

        for task in tasks {
            wtr.write_record(task.cells())?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tasks: &[Task]) -> Result<(), ExportError> {
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();
        let json = serde_json::to_string_pretty(&rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

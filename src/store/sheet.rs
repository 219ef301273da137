//! Workbook codec for the backing file.
//!
//! The table lives on the first worksheet: a header row naming the columns, then
//! one row per task. Columns are matched by header name, so their order in the file
//! does not matter. Missing columns read as empty strings and unknown columns are
//! ignored. Everything is written back as text in [`COLUMNS`] order.

use super::StoreError;
use crate::libs::task::{Column, Task, COLUMNS};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::NaiveTime;
use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const SHEET_NAME: &str = "tasks";

/// Reads all task rows from the workbook at `path`.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };
    Ok(tasks_from_range(&range))
}

fn tasks_from_range(range: &Range<Data>) -> Vec<Task> {
    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => return Vec::new(),
    };

    let positions: HashMap<Column, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| Column::from_header(&cell_text(cell)).map(|column| (column, index)))
        .collect();

    rows.filter(|row| row.iter().any(|cell| !cell_text(cell).is_empty()))
        .map(|row| {
            Task::from_cells(|column| {
                positions
                    .get(&column)
                    .and_then(|&index| row.get(index))
                    .map(cell_text)
                    .unwrap_or_default()
            })
        })
        .collect()
}

/// Text of a cell. Whole numbers lose their trailing `.0`, since spreadsheet
/// editors happily turn ids or times typed by hand into numbers. Time cells read
/// as `HH:MM`, dates with a time part as `YYYY-MM-DD HH:MM`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => (*value as i64).to_string(),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) if value.as_f64() < 1.0 => datetime.format("%H:%M").to_string(),
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
            None => value.as_f64().to_string(),
        },
        Data::DateTimeIso(text) => NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
            .map(|time| time.format("%H:%M").to_string())
            .unwrap_or_else(|_| text.clone()),
        other => other.to_string(),
    }
}

/// Replaces the workbook at `path` with `tasks`.
///
/// The workbook is written next to the target first and then renamed over it, so
/// the file on disk is always either the previous or the new table.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, column) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.header(), &header_format)?;
    }

    for (i, task) in tasks.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in task.cells().iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, *value)?;
            }
        }
    }

    let staging = staging_path(path);
    workbook.save(&staging)?;
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_normalizes_numbers() {
        assert_eq!(cell_text(&Data::Float(42.0)), "42");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("09:00".to_string())), "09:00");
    }

    #[test]
    fn test_cell_text_formats_iso_times() {
        assert_eq!(cell_text(&Data::DateTimeIso("09:30:00".to_string())), "09:30");
        assert_eq!(cell_text(&Data::DateTimeIso("2025-01-12T09:30:00".to_string())), "2025-01-12T09:30:00");
    }

    #[test]
    fn test_staging_path_is_a_sibling() {
        let staging = staging_path(Path::new("/data/tasks.xlsx"));
        assert_eq!(staging, PathBuf::from("/data/tasks.xlsx.tmp"));
    }
}

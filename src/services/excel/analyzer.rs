use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use rayon::prelude::*;
use smallvec::SmallVec;

use super::types::{
    ColumnInfo, MappedColumn, SampleCell, SampleRow, SheetAnalysis, SheetSummary, SAMPLE_SIZE,
};
use super::utils::{
    cell_display, detect_column_type, matches_day, merge_min_max, range_dimensions, round_pct,
    update_min_max,
};
use crate::error::AppError;
use crate::models;

/// Header census stops after this many columns.
const HEADER_SCAN_LIMIT: usize = 50;
/// Deep examination samples data rows 2..=6.
const SAMPLE_ROW_LIMIT: usize = 5;
/// ...and at most this many columns per sampled row.
const SAMPLE_COLUMN_LIMIT: usize = 30;
/// Key-column samples cover data rows 2..=4.
const KEY_ROW_LIMIT: usize = 3;
/// Column type detection looks at the first 100 data rows only.
const TYPE_DETECTION_ROWS: usize = 100;

/// Read-only view over one workbook file. Opens the container once and
/// serves every report from it.
pub struct WorkbookInspector {
    path: PathBuf,
    workbook: Xlsx<std::io::BufReader<std::fs::File>>,
}

impl WorkbookInspector {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let start = Instant::now();
        tracing::debug!("opening workbook at {}", path.display());

        let workbook: Xlsx<_> = open_workbook(path)?;
        tracing::debug!("workbook opened in {:?}", start.elapsed());

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Census of every worksheet: extents plus the populated headers.
    pub fn sheet_summaries(&mut self) -> Result<Vec<SheetSummary>, AppError> {
        let names = self.sheet_names();
        tracing::debug!("summarizing {} worksheets", names.len());

        let mut summaries = Vec::with_capacity(names.len());
        for name in names {
            let range = self.workbook.worksheet_range(&name)?;
            summaries.push(summarize_sheet(&name, &range));
        }
        Ok(summaries)
    }

    /// Full structural analysis of the named worksheet, or of the first one
    /// when no name is given. `today` is the caller's current day-of-month,
    /// fed to the kickoff matching heuristic.
    pub fn analyze_sheet(
        &mut self,
        sheet: Option<&str>,
        today: u32,
    ) -> Result<SheetAnalysis, AppError> {
        let start = Instant::now();
        let names = self.sheet_names();
        let name = match sheet {
            Some(requested) => names
                .iter()
                .find(|n| n.as_str() == requested)
                .cloned()
                .ok_or_else(|| AppError::SheetNotFound {
                    name: requested.to_string(),
                    available: names.clone(),
                })?,
            None => names.first().cloned().ok_or(AppError::EmptyWorkbook)?,
        };

        let range = self.workbook.worksheet_range(&name)?;
        let (row_count, column_count) = populated_extent(&range);
        let data_row_count = row_count.saturating_sub(1);

        let headers: Vec<Option<String>> =
            (1..=column_count).map(|col| header_at(&range, col)).collect();

        let columns = analyze_columns(&range, &headers, row_count, column_count);

        let wide_columns: Vec<usize> = (1..=column_count.min(SAMPLE_COLUMN_LIMIT)).collect();
        let sample_rows =
            collect_sample_rows(&range, &headers, row_count, &wide_columns, SAMPLE_ROW_LIMIT, true);

        let key_columns: Vec<usize> = models::KEY_SAMPLE_COLUMNS
            .iter()
            .copied()
            .filter(|&col| col <= column_count)
            .collect();
        let key_rows =
            collect_sample_rows(&range, &headers, row_count, &key_columns, KEY_ROW_LIMIT, false);

        let mapped_columns = map_prediction_columns(&range, &headers);
        let matches_today = count_matches_on_day(&range, row_count, today);

        tracing::info!(
            "analyzed sheet '{}' ({} rows, {} columns) in {:?}",
            name,
            row_count,
            column_count,
            start.elapsed()
        );

        Ok(SheetAnalysis {
            sheet_name: name,
            dimensions: range_dimensions(&range),
            row_count,
            column_count,
            data_row_count,
            headers,
            columns,
            sample_rows,
            key_rows,
            mapped_columns,
            today,
            matches_today,
        })
    }
}

/// Populated extent of a sheet as 1-based row/column counts, (0, 0) for an
/// empty sheet.
fn populated_extent(range: &Range<Data>) -> (usize, usize) {
    match range.end() {
        Some((row, col)) => (row as usize + 1, col as usize + 1),
        None => (0, 0),
    }
}

/// Header cell of a 1-based column, `None` when blank.
fn header_at(range: &Range<Data>, column: usize) -> Option<String> {
    let value = range.get_value((0, column as u32 - 1))?;
    let text = cell_display(value);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn summarize_sheet(name: &str, range: &Range<Data>) -> SheetSummary {
    let (row_count, column_count) = populated_extent(range);
    let headers = (1..=column_count.min(HEADER_SCAN_LIMIT))
        .filter_map(|col| header_at(range, col))
        .collect();

    SheetSummary {
        name: name.to_string(),
        dimensions: range_dimensions(range),
        row_count,
        column_count,
        headers,
    }
}

fn analyze_columns(
    range: &Range<Data>,
    headers: &[Option<String>],
    row_count: usize,
    column_count: usize,
) -> Vec<ColumnInfo> {
    (1..=column_count)
        .map(|column| {
            let values: Vec<Data> = (2..=row_count)
                .map(|row| {
                    range
                        .get_value((row as u32 - 1, column as u32 - 1))
                        .cloned()
                        .unwrap_or(Data::Empty)
                })
                .collect();
            analyze_column(column, column_name(headers, column), &values)
        })
        .collect()
}

/// Per-column statistics over every data row, folded in parallel.
fn analyze_column(index: usize, name: String, values: &[Data]) -> ColumnInfo {
    let (null_count, seen_values, min_max) = values
        .par_iter()
        .fold(
            || (0usize, HashSet::new(), (None, None)),
            |(mut nulls, mut seen, mut min_max), value| {
                if matches!(value, Data::Empty) {
                    nulls += 1;
                } else {
                    let text = value.to_string();
                    update_min_max(&mut min_max, &text);
                    seen.insert(text);
                }
                (nulls, seen, min_max)
            },
        )
        .reduce(
            || (0, HashSet::new(), (None, None)),
            |a, b| {
                let mut seen = a.1;
                seen.extend(b.1);
                (a.0 + b.0, seen, merge_min_max(a.2, b.2))
            },
        );

    let mut sample_values = SmallVec::new();
    for value in values.iter().take(SAMPLE_SIZE) {
        sample_values.push(cell_display(value));
    }

    let detection_window = &values[..values.len().min(TYPE_DETECTION_ROWS)];

    ColumnInfo {
        index,
        name,
        data_type: detect_column_type(detection_window),
        sample_values,
        null_count,
        null_percentage: round_pct(null_count, values.len()),
        unique_count: seen_values.len(),
        min_value: min_max.0,
        max_value: min_max.1,
        has_duplicates: seen_values.len() < values.len() - null_count,
    }
}

fn column_name(headers: &[Option<String>], column: usize) -> String {
    headers
        .get(column - 1)
        .and_then(|header| header.clone())
        .unwrap_or_else(|| format!("col_{column}"))
}

/// Sample a window of data rows. With `skip_empty`, blank cells are dropped
/// from the row; otherwise every requested column appears, blank or not.
fn collect_sample_rows(
    range: &Range<Data>,
    headers: &[Option<String>],
    row_count: usize,
    columns: &[usize],
    row_limit: usize,
    skip_empty: bool,
) -> Vec<SampleRow> {
    (2..=row_count.min(1 + row_limit))
        .map(|row| {
            let cells = columns
                .iter()
                .filter_map(|&column| {
                    let value = range
                        .get_value((row as u32 - 1, column as u32 - 1))
                        .map(cell_display)
                        .unwrap_or_default();
                    if skip_empty && value.trim().is_empty() {
                        return None;
                    }
                    Some(SampleCell {
                        column,
                        header: column_name(headers, column),
                        value,
                    })
                })
                .collect();
            SampleRow { row, cells }
        })
        .collect()
}

/// Join the static field table with what the sheet actually holds in the
/// header row and the first data row.
fn map_prediction_columns(range: &Range<Data>, headers: &[Option<String>]) -> Vec<MappedColumn> {
    models::PREDICTION_FIELDS
        .iter()
        .map(|spec| {
            let sample = range
                .get_value((1, spec.column as u32 - 1))
                .map(cell_display)
                .filter(|text| !text.is_empty());
            MappedColumn {
                column: spec.column,
                field: spec.field,
                market: spec.market,
                header: headers.get(spec.column - 1).and_then(|h| h.clone()),
                sample,
            }
        })
        .collect()
}

/// Count data rows whose kickoff cell falls on the given day-of-month.
/// Blank and malformed cells are skipped, never errors.
fn count_matches_on_day(range: &Range<Data>, row_count: usize, day: u32) -> usize {
    (2..=row_count)
        .filter_map(|row| range.get_value((row as u32 - 1, models::KICKOFF_COLUMN as u32 - 1)))
        .filter(|cell| !matches!(cell, Data::Empty))
        .filter(|cell| matches_day(&cell.to_string(), day))
        .count()
}

//! Deep examination of one worksheet: headers, sample rows, mapped
//! prediction fields and aggregate statistics.

use std::path::Path;

use chrono::{Datelike, Local};
use colored::Colorize;
use serde::Serialize;

use crate::error::AppError;
use crate::models;
use crate::services::excel::types::{ColumnInfo, MappedColumn, SampleRow, SheetAnalysis};
use crate::services::excel::WorkbookInspector;

const RULER: usize = 80;

#[derive(Debug, Serialize)]
pub(crate) struct ColumnReport {
    pub index: usize,
    pub name: String,
    pub data_type: String,
    pub sample_values: Vec<String>,
    pub null_count: usize,
    pub null_percentage: f64,
    pub unique_count: usize,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub has_duplicates: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct MappedColumnReport {
    pub column: usize,
    pub field: &'static str,
    pub market: Option<&'static str>,
    pub header: Option<String>,
    pub sample: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExamineReport {
    file: String,
    sheet_name: String,
    dimensions: Option<String>,
    row_count: usize,
    column_count: usize,
    data_row_count: usize,
    headers: Vec<Option<String>>,
    columns: Vec<ColumnReport>,
    mapped_columns: Vec<MappedColumnReport>,
    today: u32,
    matches_today: usize,
}

pub fn run(path: &Path, sheet: Option<&str>, json: bool) -> Result<(), AppError> {
    let today = Local::now().day();
    let mut inspector = WorkbookInspector::open(path)?;
    let analysis = inspector.analyze_sheet(sheet, today)?;

    if json {
        let report = ExamineReport {
            file: path.display().to_string(),
            sheet_name: analysis.sheet_name,
            dimensions: analysis.dimensions,
            row_count: analysis.row_count,
            column_count: analysis.column_count,
            data_row_count: analysis.data_row_count,
            headers: analysis.headers,
            columns: analysis.columns.into_iter().map(column_report).collect(),
            mapped_columns: analysis
                .mapped_columns
                .into_iter()
                .map(mapped_report)
                .collect(),
            today: analysis.today,
            matches_today: analysis.matches_today,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(path, &analysis);
    Ok(())
}

pub(crate) fn column_report(info: ColumnInfo) -> ColumnReport {
    ColumnReport {
        index: info.index,
        name: info.name,
        data_type: info.data_type.to_string(),
        sample_values: info.sample_values.to_vec(),
        null_count: info.null_count,
        null_percentage: info.null_percentage,
        unique_count: info.unique_count,
        min_value: info.min_value,
        max_value: info.max_value,
        has_duplicates: info.has_duplicates,
    }
}

pub(crate) fn mapped_report(mapped: MappedColumn) -> MappedColumnReport {
    MappedColumnReport {
        column: mapped.column,
        field: mapped.field,
        market: mapped.market,
        header: mapped.header,
        sample: mapped.sample,
    }
}

fn render(path: &Path, analysis: &SheetAnalysis) {
    println!(
        "{}",
        format!("📊 Workbook analysis: {}", path.display())
            .bold()
            .green()
    );
    println!("{}", "=".repeat(RULER));
    println!();

    println!(
        "📄 Worksheet: {}",
        analysis.sheet_name.bright_blue().bold()
    );
    println!(
        "📐 Dimensions: {}",
        analysis.dimensions.as_deref().unwrap_or("(empty)")
    );
    println!(
        "📏 Max row: {}, max column: {}",
        analysis.row_count, analysis.column_count
    );
    println!();

    println!("{}", "📋 COLUMN HEADERS (row 1)".bold());
    println!("{}", "-".repeat(RULER));
    for (idx, header) in analysis.headers.iter().enumerate().take(50) {
        let column = idx + 1;
        let name = header.as_deref().unwrap_or("(empty)");
        match models::field_for_column(column) {
            Some(spec) => println!(
                "Column {column:2}: {name}  {}",
                format!("→ {}", spec.field).cyan()
            ),
            None => println!("Column {column:2}: {name}"),
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "📊 SAMPLE DATA (rows 2-{})",
            1 + analysis.sample_rows.len()
        )
        .bold()
    );
    println!("{}", "-".repeat(RULER));
    render_sample_rows(&analysis.sample_rows);

    println!();
    println!("{}", "🔍 MAPPED PREDICTION FIELDS".bold());
    println!("{}", "-".repeat(RULER));
    render_mapped_columns(&analysis.mapped_columns);

    println!();
    println!("{}", "📈 DATA STATISTICS".bold());
    println!("{}", "-".repeat(RULER));
    println!("Total data rows: {}", analysis.data_row_count);
    println!(
        "Matches for today (day {}): {}",
        analysis.today, analysis.matches_today
    );

    let numeric = type_count(&analysis.columns, "numeric");
    let dates = type_count(&analysis.columns, "date");
    let text = type_count(&analysis.columns, "string");
    println!("Column types: {numeric} numeric, {dates} date, {text} text");
}

fn type_count(columns: &[ColumnInfo], data_type: &str) -> usize {
    columns.iter().filter(|c| c.data_type == data_type).count()
}

pub(crate) fn render_sample_rows(rows: &[SampleRow]) {
    for sample in rows {
        println!();
        println!("{}", format!("🔹 Row {}:", sample.row).bold());
        for cell in &sample.cells {
            let value = if cell.value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                cell.value.clone()
            };
            println!("  [{:2}] {}: {}", cell.column, cell.header.cyan(), value);
        }
    }
}

pub(crate) fn render_mapped_columns(mapped: &[MappedColumn]) {
    for entry in mapped {
        let label = match entry.market {
            Some(market) => format!("{} ({})", entry.field, market),
            None => entry.field.to_string(),
        };
        println!(
            "  Col {:2} → {:24} | Header: '{}' | Sample: '{}'",
            entry.column,
            label.cyan(),
            entry.header.as_deref().unwrap_or("(missing)"),
            entry.sample.as_deref().unwrap_or("")
        );
    }
}

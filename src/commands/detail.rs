//! Detailed report on one sheet: every header, mapped prediction fields,
//! key-column sample matches and null-value data quality.

use std::path::Path;

use chrono::{Datelike, Local};
use colored::Colorize;
use serde::Serialize;

use super::examine::{mapped_report, render_mapped_columns, render_sample_rows, MappedColumnReport};
use crate::error::AppError;
use crate::models;
use crate::services::excel::types::{SheetAnalysis, SampleRow};
use crate::services::excel::WorkbookInspector;

const RULER: usize = 100;

#[derive(Debug, Serialize)]
struct QualityReport {
    column: usize,
    name: String,
    null_count: usize,
    null_percentage: f64,
}

#[derive(Debug, Serialize)]
struct SampleCellReport {
    column: usize,
    header: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct SampleRowReport {
    row: usize,
    cells: Vec<SampleCellReport>,
}

#[derive(Debug, Serialize)]
struct DetailReport {
    file: String,
    sheet_name: String,
    dimensions: Option<String>,
    row_count: usize,
    column_count: usize,
    data_row_count: usize,
    mapped_columns: Vec<MappedColumnReport>,
    sample_matches: Vec<SampleRowReport>,
    today: u32,
    matches_today: usize,
    quality: Vec<QualityReport>,
}

pub fn run(path: &Path, sheet: &str, json: bool) -> Result<(), AppError> {
    let today = Local::now().day();
    let mut inspector = WorkbookInspector::open(path)?;
    let analysis = inspector.analyze_sheet(Some(sheet), today)?;
    let quality = quality_rows(&analysis);

    if json {
        let report = DetailReport {
            file: path.display().to_string(),
            sheet_name: analysis.sheet_name,
            dimensions: analysis.dimensions,
            row_count: analysis.row_count,
            column_count: analysis.column_count,
            data_row_count: analysis.data_row_count,
            mapped_columns: analysis
                .mapped_columns
                .into_iter()
                .map(mapped_report)
                .collect(),
            sample_matches: analysis.key_rows.into_iter().map(sample_report).collect(),
            today: analysis.today,
            matches_today: analysis.matches_today,
            quality,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(&analysis, &quality);
    Ok(())
}

/// Null statistics for the probability columns under quality watch, skipping
/// any that fall outside the sheet.
fn quality_rows(analysis: &SheetAnalysis) -> Vec<QualityReport> {
    models::QUALITY_COLUMNS
        .iter()
        .filter_map(|&column| analysis.columns.get(column - 1))
        .map(|info| QualityReport {
            column: info.index,
            name: info.name.clone(),
            null_count: info.null_count,
            null_percentage: info.null_percentage,
        })
        .collect()
}

fn sample_report(row: SampleRow) -> SampleRowReport {
    SampleRowReport {
        row: row.row,
        cells: row
            .cells
            .into_iter()
            .map(|cell| SampleCellReport {
                column: cell.column,
                header: cell.header,
                value: cell.value,
            })
            .collect(),
    }
}

fn render(analysis: &SheetAnalysis, quality: &[QualityReport]) {
    println!(
        "{}",
        format!("⚽ SHEET DETAIL: {}", analysis.sheet_name)
            .bold()
            .green()
    );
    println!("{}", "=".repeat(RULER));
    println!(
        "Dimensions: {}",
        analysis.dimensions.as_deref().unwrap_or("(empty)")
    );
    println!(
        "Total rows: {}, total columns: {}",
        analysis.row_count, analysis.column_count
    );
    println!();

    println!("{}", "📋 ALL COLUMN HEADERS".bold());
    println!("{}", "-".repeat(RULER));
    for (idx, header) in analysis.headers.iter().enumerate() {
        println!("Col {:2}: {}", idx + 1, header.as_deref().unwrap_or("(empty)"));
    }

    println!();
    println!("{}", "🔍 MAPPED PREDICTION FIELDS".bold());
    println!("{}", "-".repeat(RULER));
    render_mapped_columns(&analysis.mapped_columns);

    println!();
    println!(
        "{}",
        format!("📊 SAMPLE MATCHES (first {} rows)", analysis.key_rows.len()).bold()
    );
    println!("{}", "-".repeat(RULER));
    render_sample_rows(&analysis.key_rows);

    println!();
    println!("{}", "📈 STATISTICS".bold());
    println!("{}", "-".repeat(RULER));
    println!("Total matches in file: {}", analysis.data_row_count);
    println!(
        "Matches for today (day {}): {}",
        analysis.today, analysis.matches_today
    );

    println!();
    println!("{}", "🔬 DATA QUALITY".bold());
    println!("{}", "-".repeat(RULER));
    for entry in quality {
        println!(
            "  {}: {} null values ({:.1}%)",
            entry.name.cyan(),
            entry.null_count,
            entry.null_percentage
        );
    }
}

//! Worksheet census: every sheet with its extents and headers.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::error::AppError;
use crate::services::excel::types::SheetSummary;
use crate::services::excel::WorkbookInspector;

#[derive(Debug, Serialize)]
struct SheetReport {
    name: String,
    dimensions: Option<String>,
    row_count: usize,
    column_count: usize,
    headers: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CensusReport {
    file: String,
    worksheet_count: usize,
    worksheets: Vec<SheetReport>,
}

pub fn run(path: &Path, json: bool) -> Result<(), AppError> {
    let mut inspector = WorkbookInspector::open(path)?;
    let summaries = inspector.sheet_summaries()?;

    if json {
        let report = CensusReport {
            file: path.display().to_string(),
            worksheet_count: summaries.len(),
            worksheets: summaries.into_iter().map(to_report).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(&summaries);
    Ok(())
}

fn to_report(summary: SheetSummary) -> SheetReport {
    SheetReport {
        name: summary.name,
        dimensions: summary.dimensions,
        row_count: summary.row_count,
        column_count: summary.column_count,
        headers: summary.headers,
    }
}

fn render(summaries: &[SheetSummary]) {
    println!("Total worksheets: {}", summaries.len());
    println!();

    for (idx, summary) in summaries.iter().enumerate() {
        println!(
            "{}",
            format!("Worksheet {}: '{}'", idx + 1, summary.name).bold()
        );
        println!(
            "  Dimensions: {}",
            summary.dimensions.as_deref().unwrap_or("(empty)")
        );
        println!(
            "  Rows: {}, Columns: {}",
            summary.row_count, summary.column_count
        );
        println!("  Headers: {}", summary.headers.join(", "));
        println!();
    }
}

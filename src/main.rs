use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod logging;
mod models;
mod services;

#[derive(Parser)]
#[command(name = "sheet-inspector")]
#[command(about = "Inspect the structure of a match prediction workbook")]
#[command(long_about = "Sheet Inspector - read-only diagnostics for predictions.xlsx

Opens the prediction workbook and reports its structure: worksheets,
dimensions, column headers, sample rows, mapped prediction fields and
null-value statistics. The workbook is never modified.

By default the workbook is looked up at Resources/predictions.xlsx, then
at the documented fallback locations. Use --file to point somewhere else.

EXAMPLES:
  sheet-inspector sheets                  # census of every worksheet
  sheet-inspector examine                 # deep-dive into the first sheet
  sheet-inspector detail soccer           # per-sheet report with data quality
  sheet-inspector --json examine          # same analysis as JSON")]
#[command(version)]
struct Cli {
    /// Path to the workbook (skips the default search locations)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Emit the report as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Show progress logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every worksheet with its dimensions and headers
    Sheets,

    /// Examine one worksheet in depth (defaults to the first)
    Examine {
        /// Worksheet to examine instead of the first one
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Detailed sheet report: prediction fields, sample matches, data quality
    Detail {
        /// Worksheet name
        #[arg(default_value = "soccer")]
        sheet: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("{} failed to initialize logging: {err}", "⚠️".yellow());
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "❌".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = config::resolve_workbook(cli.file.as_deref())?;
    tracing::info!("using workbook at {}", path.display());

    match cli.command {
        Commands::Sheets => commands::sheets::run(&path, cli.json)?,
        Commands::Examine { sheet } => commands::examine::run(&path, sheet.as_deref(), cli.json)?,
        Commands::Detail { sheet } => commands::detail::run(&path, &sheet, cli.json)?,
    }

    Ok(())
}

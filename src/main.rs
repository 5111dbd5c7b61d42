mod error;
mod output;
mod timeline;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use occupation_types::{Dataset, MapView, page};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::{DEFAULT_OUTPUT_DIR, to_pretty_json, write_json};

const TIMELINE_WIDTH: usize = 48;

#[derive(Parser)]
#[command(
    name = "occupation_map",
    about = "German occupations of World War II on a date-driven map"
)]
struct Cli {
    /// Enable verbose logging. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory for `export` output
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the countries under occupation on a date
    Report {
        /// Date as YYYY-MM-DD; defaults to the start of the slider range
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the Plotly choropleth figure for a date as JSON
    Figure {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print every occupation interval on a shared time axis
    Timeline,
    /// Write records.json and figure.json for the frontend
    Export {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = Dataset::shared()
        .map_err(CliError::from)
        .and_then(|dataset| match cli.command {
            Some(Command::Report { date }) => run_report(dataset, date),
            Some(Command::Figure { date }) => run_figure(dataset, date),
            Some(Command::Timeline) => run_timeline(dataset),
            Some(Command::Export { date }) => run_export(dataset, date, &cli.output_dir),
            // Default: report at the slider's starting date
            None => run_report(dataset, None),
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn view_for(dataset: &Dataset, date: Option<NaiveDate>) -> MapView {
    match date {
        Some(d) => MapView::for_date(dataset, d),
        None => MapView::initial(dataset),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  REPORT / FIGURE: one rendering pass to stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_report(dataset: &Dataset, date: Option<NaiveDate>) -> Result<(), CliError> {
    let view = view_for(dataset, date);
    println!("{}", page::map_title(view.selected_date));
    println!();
    println!("{}", view.rendering.report);
    Ok(())
}

fn run_figure(dataset: &Dataset, date: Option<NaiveDate>) -> Result<(), CliError> {
    let view = view_for(dataset, date);
    println!("{}", to_pretty_json("figure", &view.figure)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  TIMELINE: every interval against the slider range
// ═══════════════════════════════════════════════════════════════════════

fn run_timeline(dataset: &Dataset) -> Result<(), CliError> {
    for line in timeline::timeline_lines(dataset, TIMELINE_WIDTH) {
        println!("{line}");
    }
    eprintln!("\nTotal: {} occupied countries", dataset.records().len());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  EXPORT: JSON files for static hosting
// ═══════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct RecordsFile<'a> {
    title: &'static str,
    notes: &'static [&'static str],
    #[serde(flatten)]
    dataset: &'a Dataset,
}

fn run_export(dataset: &Dataset, date: Option<NaiveDate>, dir: &Path) -> Result<(), CliError> {
    let view = view_for(dataset, date);
    let records = RecordsFile {
        title: page::APP_TITLE,
        notes: page::NOTES,
        dataset,
    };

    let written = [
        write_json(dir, "records.json", &records)?,
        write_json(dir, "figure.json", &view.figure)?,
    ];
    for path in written {
        eprintln!("  {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_date_argument() {
        let cli = Cli::try_parse_from(["occupation_map", "report", "--date", "1940-05-10"]).unwrap();
        match cli.command {
            Some(Command::Report { date }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(1940, 5, 10));
            }
            _ => panic!("expected report subcommand"),
        }
    }

    #[test]
    fn test_rejects_malformed_date() {
        assert!(Cli::try_parse_from(["occupation_map", "figure", "--date", "May 1940"]).is_err());
    }

    #[test]
    fn test_records_file_flattens_dataset() {
        let dataset = Dataset::shared().unwrap();
        let value = serde_json::to_value(RecordsFile {
            title: page::APP_TITLE,
            notes: page::NOTES,
            dataset,
        })
        .unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 17);
        assert_eq!(value["slider"]["min"], "1937-03-12");
        assert_eq!(value["title"], "German Invasions in World War II");
    }
}

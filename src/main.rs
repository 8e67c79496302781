//! CLI entry point for the bike sharing dashboard.
//!
//! Loads the daily and hourly rental tables once, then either runs the
//! interactive dashboard session or renders a single date range.

use anyhow::{Result, bail};
use bikeshare_dashboard::{
    charts::write_charts,
    filter::DateRange,
    loader::Dataset,
    output::write_json,
    session::{render, run_session},
    view::{AppState, DashboardView},
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare-dashboard")]
#[command(about = "An interactive dashboard over the bike sharing dataset", long_about = None)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct DataArgs {
    /// Daily rental records
    #[arg(long, env = "BIKESHARE_DAY_CSV", default_value = "day.csv", global = true)]
    day_csv: PathBuf,

    /// Hourly rental records
    #[arg(long, env = "BIKESHARE_HOUR_CSV", default_value = "hour.csv", global = true)]
    hour_csv: PathBuf,

    /// Optional: directory to write hours.svg and seasons.svg into on every render
    #[arg(long, env = "BIKESHARE_CHARTS_DIR", global = true)]
    charts_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive dashboard (default)
    Dashboard,
    /// Render a single date range and exit
    Report {
        /// First day of the range (defaults to the earliest date in the data)
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: Option<NaiveDate>,

        /// Last day of the range (defaults to the latest date in the data)
        #[arg(long, value_name = "YYYY-MM-DD")]
        end: Option<NaiveDate>,

        /// Print the view as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let data = cli.data;

    let dataset = Dataset::load(&data.day_csv, &data.hour_csv)?;
    let charts_dir = data.charts_dir.as_deref();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            let mut state = AppState::new(dataset);
            let stdin = io::stdin();
            run_session(&mut state, stdin.lock(), &mut out, charts_dir)?;
            info!("Dashboard session ended");
        }
        Commands::Report { start, end, json } => {
            let requested = DateRange::from_parts(start, end, &dataset.bounds());
            if requested.start > requested.end {
                bail!(
                    "start date {} is after end date {}",
                    requested.start,
                    requested.end
                );
            }

            let view = AppState::new(dataset).apply(requested);
            report(&mut out, &view, json, charts_dir)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Writes one rendering of `view` as text or JSON.
fn report<W: Write>(
    out: &mut W,
    view: &DashboardView,
    json: bool,
    charts_dir: Option<&Path>,
) -> Result<()> {
    if json {
        write_json(out, view)?;
        if let Some(dir) = charts_dir {
            write_charts(dir, view)?;
        }
    } else {
        render(out, view, charts_dir)?;
    }
    Ok(())
}

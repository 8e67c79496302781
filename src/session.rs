//! Interactive terminal session: reads range selections and re-renders.
//!
//! Each accepted line is one input event. The event is applied to the
//! [`AppState`], and the resulting view is rendered before the next line is read.

use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::charts::write_charts;
use crate::filter::DateRange;
use crate::output::render_text;
use crate::view::{AppState, DashboardView};

const DATE_FORMAT: &str = "%Y-%m-%d";

const HELP: &str = "\
Commands:
  <start> <end>    select an inclusive date range (YYYY-MM-DD)
  <start>..<end>   same as above
  <date>           select a single day
  all | reset      select the full date range
  help             show this message
  quit | exit      leave the dashboard";

/// Errors in a line typed at the range prompt.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeInputError {
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("expected at most two dates, got {count}")]
    TooManyDates { count: usize },

    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// A parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(DateRange),
    Reset,
    Help,
    Quit,
    Empty,
}

fn parse_date(input: &str) -> Result<NaiveDate, RangeInputError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| RangeInputError::InvalidDate {
        input: input.to_string(),
    })
}

/// Parses one line of session input.
pub fn parse_command(line: &str) -> Result<Command, RangeInputError> {
    let line = line.trim();

    match line.to_ascii_lowercase().as_str() {
        "" => return Ok(Command::Empty),
        "all" | "reset" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .flat_map(|p| p.split(".."))
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [day] => Ok(Command::Select(DateRange::single(parse_date(day)?))),
        [start, end] => {
            let start = parse_date(start)?;
            let end = parse_date(end)?;
            if start > end {
                return Err(RangeInputError::Inverted { start, end });
            }
            Ok(Command::Select(DateRange::new(start, end)))
        }
        parts => Err(RangeInputError::TooManyDates { count: parts.len() }),
    }
}

/// Renders `view` to `out` and, if configured, refreshes the SVG charts.
pub fn render<W: Write>(out: &mut W, view: &DashboardView, charts_dir: Option<&Path>) -> Result<()> {
    render_text(out, view)?;

    if let Some(dir) = charts_dir {
        let written = write_charts(dir, view)?;
        for path in written {
            writeln!(out, "Chart written to {}", path.display())?;
        }
    }

    Ok(())
}

/// Runs the dashboard until `quit` or end of input.
///
/// The full range is rendered first; every accepted selection re-renders.
#[tracing::instrument(skip_all)]
pub fn run_session<R, W>(
    state: &mut AppState,
    input: R,
    out: &mut W,
    charts_dir: Option<&Path>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    render(out, &state.view(), charts_dir)?;
    writeln!(out)?;
    writeln!(out, "Type 'help' for commands.")?;
    prompt(out, state)?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Reset) => {
                let view = state.reset();
                info!(range = %view.range, "Range reset");
                render(out, &view, charts_dir)?;
            }
            Ok(Command::Select(range)) => {
                let view = state.apply(range);
                info!(requested = %range, applied = %view.range, "Range selected");
                render(out, &view, charts_dir)?;
            }
            Err(e) => {
                warn!(input = %line, error = %e, "Rejected range input");
                writeln!(out, "error: {}", e)?;
            }
        }

        prompt(out, state)?;
    }

    writeln!(out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W, state: &AppState) -> Result<()> {
    write!(out, "[{}]> ", state.range())?;
    out.flush()?;
    Ok(())
}

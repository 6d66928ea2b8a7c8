//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the convention `[month] [year]`, both optional.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, ValueEnum, ValueHint};

use crate::types::RenderContext;

#[derive(Parser, Debug)]
#[command(name = "evcal")]
#[command(about = "Displays a month calendar with events", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12 or name) - defaults to the current month.
    #[arg(index = 1, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999) - defaults to the current year.
    #[arg(index = 2, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// JSON file with events to lay onto the grid.
    #[arg(short, long, value_name = "file", value_hint = ValueHint::FilePath)]
    pub events: Option<PathBuf>,

    /// Output format.
    #[arg(
        long,
        default_value = "text",
        value_name = "format",
        help_heading = "Output options"
    )]
    pub output: OutputMode,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,
}

/// Presentation target for a built grid.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputMode {
    /// Terminal text rendering.
    Text,
    /// JSON dump of the grid for an external renderer.
    Json,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a month calendar with events.

Without any arguments, display the current month.

Examples:
  evcal                       Display current month
  evcal 2 2008                Display February 2008
  evcal february 2008         Same, by month name
  evcal 2026                  Display the current month of 2026
  evcal -e events.json        Lay events from a file onto the grid
  evcal --output json 1 2008  Emit the grid as JSON";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl RenderContext {
    pub fn new(args: &Args, today: NaiveDate) -> Self {
        RenderContext {
            color: !args.no_color && std::io::stdout().is_terminal(),
            today,
            max_width: terminal_size::terminal_size().map(|(w, _)| w.0 as usize),
        }
    }
}

/// Get today's date, respecting EVCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("EVCAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Calculate the display month from positional arguments.
///
/// Argument patterns:
/// - no args: current month (from `today`, computed by the caller)
/// - 1 arg: year (4 digits) or month (number or name)
/// - 2 args: month year
pub fn get_display_date(args: &Args, today: NaiveDate) -> Result<(i32, u32)> {
    match (&args.month_arg, &args.year_arg) {
        (None, _) => Ok((today.year(), today.month())),
        (Some(val), None) => {
            // 4 digits = year, anything else is tried as a month
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                return Ok((num, today.month()));
            }
            if let Some(month) = crate::formatter::parse_month(val) {
                return Ok((today.year(), month));
            }
            bail!("invalid argument: {val}")
        }
        (Some(month_str), Some(year_str)) => {
            let month = crate::formatter::parse_month(month_str)
                .ok_or_else(|| anyhow!("invalid month: {month_str}"))?;
            let year: i32 = year_str
                .parse()
                .map_err(|_| anyhow!("invalid year: {year_str}"))?;
            if !(1..=9999).contains(&year) {
                bail!("invalid year: {year} (must be 1-9999)");
            }
            Ok((year, month))
        }
    }
}

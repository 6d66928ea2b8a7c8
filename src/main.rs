//! Month calendar CLI.
//!
//! # Usage
//! ```ignore
//! evcal                  // Current month
//! evcal 2 2008           // February 2008
//! evcal -e events.json   // Current month with events from a file
//! evcal --output json    // Grid as JSON for an external renderer
//! ```

use evcal::args::{Args, OutputMode, get_display_date, get_today_date};
use evcal::formatter::{get_system_locale, render_month};
use evcal::source::{EventSource, JsonFileSource};
use evcal::types::{CalendarGrid, RenderContext};

fn main() {
    evcal::logging::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("evcal: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let today = get_today_date();
    let (year, month) = get_display_date(args, today)?;

    let events = match &args.events {
        Some(path) => JsonFileSource::new(path).events_for(year, month)?,
        None => Vec::new(),
    };

    let locale = get_system_locale();
    let grid = CalendarGrid::build_localized(year, month, &events, locale)?;

    match args.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
        OutputMode::Text => {
            let ctx = RenderContext::new(args, today);
            for line in render_month(&grid, &ctx, locale) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

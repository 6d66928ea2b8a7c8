//! Type definitions and constants for the calendar grid and its rendering.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A dated item to be laid onto the grid.
///
/// `day` may carry a time of day; grid placement only looks at the calendar
/// date, but the full timestamp is preserved for downstream renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub day: NaiveDateTime,
    pub title: String,
    /// Optional link target; `None` when the event has nothing to link to.
    pub url: Option<String>,
    /// CSS class hint for HTML renderers, may be empty.
    #[serde(rename = "class")]
    pub css_class: String,
}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// True iff `date` falls in the requested month (false on padding days).
    pub in_month: bool,
    /// Events on this date, in input order.
    pub events: Vec<CalendarEvent>,
}

/// Seven consecutive day cells, Monday through Sunday.
pub type Week = Vec<DayCell>;

/// A month laid out as whole weeks, with navigation anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarGrid {
    pub weeks: Vec<Week>,
    /// Short weekday labels, Monday-first.
    pub weekday_headers: Vec<String>,
    /// First day of the requested month.
    pub month: NaiveDate,
    /// First day of the previous month.
    pub prev_month: NaiveDate,
    /// First day of the next month.
    pub next_month: NaiveDate,
}

/// Terminal rendering options.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Display width available for event lines, when known.
    pub max_width: Option<usize>,
}

pub const DAYS_PER_WEEK: usize = 7;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_GRAY: &str = "\x1b[90m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";

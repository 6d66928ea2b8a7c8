//! Terminal formatting for a built month grid, with localization and color.

use chrono::{Datelike, Locale, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{
    COLOR_GRAY, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarGrid, DayCell,
    RenderContext,
};

/// Width of the day grid: seven 2-char cells with single spaces between.
const GRID_WIDTH: usize = 20;

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Localized month name for a month anchor date.
pub fn month_name(anchor: NaiveDate, locale: Locale) -> String {
    anchor.format_localized("%B", locale).to_string()
}

/// Parse month from string (numeric 1-12, English name or abbreviation).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Format "Month Year" centered over the grid, optionally colored.
pub fn format_month_header(grid: &CalendarGrid, locale: Locale, color: bool) -> String {
    let header = format!("{} {}", month_name(grid.month, locale), grid.month.year());
    let centered = center_text(&header, GRID_WIDTH);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Weekday header row from the grid's Monday-first labels.
pub fn format_weekday_headers(grid: &CalendarGrid, color: bool) -> String {
    let row = grid
        .weekday_headers
        .iter()
        .map(|label| format!("{:<2}", label))
        .collect::<Vec<_>>()
        .join(" ");
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format a day cell with color highlighting.
///
/// Color priority: today > out-of-month padding > day with events > regular.
fn format_day(cell: &DayCell, ctx: &RenderContext) -> String {
    let day_str = format!("{:>2}", cell.date.day());
    if !ctx.color {
        return day_str;
    }
    if cell.date == ctx.today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !cell.in_month {
        format!("{}{}{}", COLOR_GRAY, day_str, COLOR_RESET)
    } else if !cell.events.is_empty() {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format month as grid of lines: header, weekday row, one line per week.
///
/// Padding days are rendered with their real day numbers; color mode dims
/// them to keep the month readable.
pub fn format_month_grid(grid: &CalendarGrid, ctx: &RenderContext, locale: Locale) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);
    lines.push(format_month_header(grid, locale, ctx.color));
    lines.push(format_weekday_headers(grid, ctx.color));
    for week in &grid.weeks {
        let line = week
            .iter()
            .map(|cell| format_day(cell, ctx))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }
    lines
}

/// One line per event, in grid order: `30 Jan  Concert  /foo/2`.
pub fn event_lines(grid: &CalendarGrid, ctx: &RenderContext, locale: Locale) -> Vec<String> {
    let mut lines = Vec::new();
    for cell in grid.weeks.iter().flatten() {
        for event in &cell.events {
            let stamp = cell.date.format_localized("%e %b", locale).to_string();
            let mut line = format!("{}  {}", stamp, event.title);
            if let Some(url) = &event.url {
                line.push_str("  ");
                line.push_str(url);
            }
            lines.push(truncate_to_width(line, ctx.max_width));
        }
    }
    lines
}

/// Truncate a line to the given display width, marking the cut.
fn truncate_to_width(line: String, max_width: Option<usize>) -> String {
    let Some(max) = max_width else {
        return line;
    };
    if line.width() <= max {
        return line;
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Navigation line pointing at the adjacent months.
pub fn navigation_line(grid: &CalendarGrid, locale: Locale) -> String {
    format!(
        "< {} {}    {} {} >",
        month_name(grid.prev_month, locale),
        grid.prev_month.year(),
        month_name(grid.next_month, locale),
        grid.next_month.year(),
    )
}

/// Full terminal rendering: grid, navigation, then the event listing.
pub fn render_month(grid: &CalendarGrid, ctx: &RenderContext, locale: Locale) -> Vec<String> {
    let mut lines = format_month_grid(grid, ctx, locale);
    lines.push(navigation_line(grid, locale));
    let events = event_lines(grid, ctx, locale);
    if !events.is_empty() {
        lines.push(String::new());
        lines.extend(events);
    }
    lines
}

//! Month grid construction.

use std::collections::HashMap;

use chrono::{Datelike, Days, Duration, Locale, NaiveDate};

use crate::error::CalendarError;
use crate::types::{CalendarEvent, CalendarGrid, DAYS_PER_WEEK, DayCell, Week};

/// First day of the given month, validating the month number.
pub fn month_anchor(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear { year })
}

/// First day of the month before the given one (month 1 rolls to December).
pub fn prev_month_anchor(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 1 {
        month_anchor(year - 1, 12)
    } else {
        month_anchor(year, month - 1)
    }
}

/// First day of the month after the given one (month 12 rolls to January).
pub fn next_month_anchor(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 12 {
        month_anchor(year + 1, 1)
    } else {
        month_anchor(year, month + 1)
    }
}

/// Number of days in the given month, leap-aware.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = month_anchor(year, month)?;
    let next = next_month_anchor(year, month)?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Short weekday labels, Monday-first, in the given locale.
pub fn weekday_labels(locale: Locale) -> Vec<String> {
    // 2000-01-03 is a Monday
    let monday = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            date.format_localized("%a", locale)
                .to_string()
                .chars()
                .take(2)
                .collect()
        })
        .collect()
}

impl CalendarGrid {
    /// Build the grid for a month, labeling weekdays in English.
    pub fn build(
        year: i32,
        month: u32,
        events: &[CalendarEvent],
    ) -> Result<CalendarGrid, CalendarError> {
        Self::build_localized(year, month, events, Locale::en_US)
    }

    /// Build the grid for a month, labeling weekdays in the given locale.
    ///
    /// The grid starts on the Monday on or before the 1st and ends on the
    /// Sunday on or after the last day of the month, so every row holds a
    /// full week. Events are grouped by calendar date, input order preserved;
    /// events dated outside the enumerated range do not appear.
    pub fn build_localized(
        year: i32,
        month: u32,
        events: &[CalendarEvent],
        locale: Locale,
    ) -> Result<CalendarGrid, CalendarError> {
        let first = month_anchor(year, month)?;
        let prev_month = prev_month_anchor(year, month)?;
        let next_month = next_month_anchor(year, month)?;
        let last = next_month
            .pred_opt()
            .ok_or(CalendarError::InvalidYear { year })?;

        let head = u64::from(first.weekday().num_days_from_monday());
        let tail = u64::from(6 - last.weekday().num_days_from_monday());
        let start = first
            .checked_sub_days(Days::new(head))
            .ok_or(CalendarError::InvalidYear { year })?;
        let end = last
            .checked_add_days(Days::new(tail))
            .ok_or(CalendarError::InvalidYear { year })?;

        let total = (end.signed_duration_since(start).num_days() + 1) as usize;
        debug_assert_eq!(total % DAYS_PER_WEEK, 0);

        let mut by_day: HashMap<NaiveDate, Vec<CalendarEvent>> = HashMap::new();
        for event in events {
            by_day.entry(event.day.date()).or_default().push(event.clone());
        }

        let mut weeks: Vec<Week> = Vec::with_capacity(total / DAYS_PER_WEEK);
        let mut week: Week = Vec::with_capacity(DAYS_PER_WEEK);
        for date in start.iter_days().take(total) {
            week.push(DayCell {
                date,
                in_month: date.month() == month,
                events: by_day.remove(&date).unwrap_or_default(),
            });
            if week.len() == DAYS_PER_WEEK {
                weeks.push(week);
                week = Vec::with_capacity(DAYS_PER_WEEK);
            }
        }

        Ok(CalendarGrid {
            weeks,
            weekday_headers: weekday_labels(locale),
            month: first,
            prev_month,
            next_month,
        })
    }
}

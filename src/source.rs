//! Event sources supplying the events for a requested month.
//!
//! The grid builder takes an already-filtered event list; implementations of
//! [`EventSource`] are the filtering boundary in front of it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CalendarError, SourceError};
use crate::types::CalendarEvent;

/// A store that can be queried for one month's events.
pub trait EventSource {
    /// Events whose date falls in the given month, in source order.
    fn events_for(&self, year: i32, month: u32) -> Result<Vec<CalendarEvent>, SourceError>;
}

/// Raw event record as it appears in an events file.
#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(default)]
    day: Option<String>,
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "class")]
    css_class: String,
}

impl EventRecord {
    fn into_event(self) -> Result<CalendarEvent, CalendarError> {
        let raw = self.day.ok_or_else(|| CalendarError::EventDateMissing {
            title: self.title.clone(),
        })?;
        let day = parse_event_day(&raw).ok_or_else(|| CalendarError::EventDateUnparseable {
            title: self.title.clone(),
            value: raw.clone(),
        })?;
        Ok(CalendarEvent {
            day,
            title: self.title,
            url: self.url,
            css_class: self.css_class,
        })
    }
}

/// Parse an event date: ISO datetime with `T` or space separator, with or
/// without seconds, or a bare ISO date (taken as midnight).
pub fn parse_event_day(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Events read from a JSON file: an array of
/// `{"day": ..., "title": ..., "url": ..., "class": ...}` records.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EventSource for JsonFileSource {
    fn events_for(&self, year: i32, month: u32) -> Result<Vec<CalendarEvent>, SourceError> {
        let data = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<EventRecord> = serde_json::from_str(&data)?;
        let loaded = records.len();

        let mut events = Vec::with_capacity(loaded);
        for record in records {
            events.push(record.into_event()?);
        }
        events.retain(|e| e.day.year() == year && e.day.month() == month);

        debug!(
            loaded,
            kept = events.len(),
            path = %self.path.display(),
            "loaded events file"
        );
        Ok(events)
    }
}

/// An in-memory event list, filtered by month on query.
pub struct MemorySource {
    events: Vec<CalendarEvent>,
}

impl MemorySource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        MemorySource { events }
    }
}

impl EventSource for MemorySource {
    fn events_for(&self, year: i32, month: u32) -> Result<Vec<CalendarEvent>, SourceError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.day.year() == year && e.day.month() == month)
            .cloned()
            .collect())
    }
}

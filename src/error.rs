//! Error types for grid construction and event loading.

use std::path::PathBuf;

/// Validation failures for grid construction and event records.
///
/// The first two variants cover bad date requests (month out of range, year
/// the date library cannot represent); the last two cover event records
/// without a usable date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when the year, or the week padding around its months, falls
    /// outside the representable date range.
    #[error("unsupported year: {year}")]
    InvalidYear {
        /// The out-of-range year that was provided.
        year: i32,
    },

    /// Returned when an event record carries no date at all.
    #[error("event {title:?} is missing a date")]
    EventDateMissing {
        /// Title of the offending event.
        title: String,
    },

    /// Returned when an event date is neither an ISO datetime nor an ISO date.
    #[error("event {title:?} has an unparseable date: {value:?}")]
    EventDateUnparseable {
        /// Title of the offending event.
        title: String,
        /// The raw date string that failed to parse.
        value: String,
    },
}

/// Failures while loading events from a backing store.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The events file could not be read.
    #[error("cannot read events from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The events file is not valid JSON of the expected shape.
    #[error("malformed events file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record in the events file failed validation.
    #[error(transparent)]
    Event(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_year() {
        let err = CalendarError::InvalidYear { year: 400_000 };
        assert_eq!(err.to_string(), "unsupported year: 400000");
    }

    #[test]
    fn error_event_date_missing() {
        let err = CalendarError::EventDateMissing {
            title: "Concert".to_string(),
        };
        assert_eq!(err.to_string(), "event \"Concert\" is missing a date");
    }

    #[test]
    fn error_event_date_unparseable() {
        let err = CalendarError::EventDateUnparseable {
            title: "Concert".to_string(),
            value: "not-a-date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "event \"Concert\" has an unparseable date: \"not-a-date\""
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
        assert_impl::<SourceError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
        assert_impl::<SourceError>();
    }

    #[test]
    fn source_error_wraps_calendar_error() {
        let err = SourceError::from(CalendarError::InvalidMonth { month: 0 });
        assert_eq!(err.to_string(), "invalid month: 0 (must be 1..=12)");
    }
}

//! Month calendar grid with per-day events.
//!
//! Builds a render-ready month grid: whole weeks padded with the adjacent
//! months' days, each day cell carrying its date, in-month flag, and events,
//! plus previous/next month anchors for navigation. Events come from an
//! injected [`source::EventSource`]; rendering is either terminal text or a
//! JSON dump for an external template layer.

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod source;
pub mod types;

//! ICS export.
//!
//! Turns a [`Schedule`](crate::schedule::Schedule) into an RFC 5545 calendar
//! of weekly-recurring events, one per class.

mod event;
mod export;

pub use event::{CalendarEvent, calendar_events};
pub use export::{ExportOptions, export, export_with};

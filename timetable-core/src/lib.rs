//! Core types for the timetable tools.
//!
//! This crate holds every pure routine the CLI builds on:
//! - `slots` for the fixed weekly grid (days, time slots, the lunch break)
//! - `subject` for subjects and the helpers callers use to manage them
//! - `schedule` for the round-robin timetable generator
//! - `date` for next-weekday date arithmetic
//! - `ics` for exporting a schedule as a weekly-recurring calendar
//!
//! Nothing here reads the clock: every operation that depends on "today"
//! takes the reference date as a parameter.

pub mod config;
pub mod date;
pub mod error;
pub mod ics;
pub mod schedule;
pub mod slots;
pub mod subject;

pub use error::{TimetableError, TimetableResult};
pub use schedule::{Cell, Schedule, generate, regenerate};
pub use slots::{BreakMarker, Day, TimeSlot};
pub use subject::Subject;

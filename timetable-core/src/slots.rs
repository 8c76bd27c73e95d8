//! The fixed weekly grid: school days, hourly time slots and the lunch break.

use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult};

/// A school day. Declaration order is the order slots are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

const DAYS: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

impl Day {
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Two-letter weekday code used in RRULE BYDAY parts.
    pub fn weekday_code(self) -> &'static str {
        match self {
            Day::Monday => "MO",
            Day::Tuesday => "TU",
            Day::Wednesday => "WE",
            Day::Thursday => "TH",
            Day::Friday => "FR",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A one-hour period, identified by its 12-hour start label (e.g. "9:00 AM").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot(&'static str);

const TIME_SLOTS: [TimeSlot; 8] = [
    TimeSlot("9:00 AM"),
    TimeSlot("10:00 AM"),
    TimeSlot("11:00 AM"),
    TimeSlot("12:00 PM"),
    TimeSlot("1:00 PM"),
    TimeSlot("2:00 PM"),
    TimeSlot("3:00 PM"),
    TimeSlot("4:00 PM"),
];

/// The lunch slot, never assigned a subject.
pub const LUNCH_SLOT: TimeSlot = TimeSlot("12:00 PM");

/// End of the last period of the day.
pub const END_OF_DAY: TimeSlot = TimeSlot("5:00 PM");

impl TimeSlot {
    pub fn label(self) -> &'static str {
        self.0
    }

    /// Wall-clock start time of this slot.
    pub fn start_time(self) -> TimetableResult<NaiveTime> {
        NaiveTime::parse_from_str(self.0, "%I:%M %p")
            .map_err(|_| TimetableError::InvalidTimeLabel(self.0.to_string()))
    }

    /// 24-hour `HHMM` form of the label ("1:00 PM" -> "1300").
    pub fn to_24_hour(self) -> TimetableResult<String> {
        Ok(self.start_time()?.format("%H%M").to_string())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Sentinel entry occupying the lunch slot on every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakMarker;

impl BreakMarker {
    pub const ID: &'static str = "lunch";
    pub const NAME: &'static str = "Lunch Break";
    pub const COLOR: &'static str = "#6B7280";
}

/// School days in fill order.
pub fn days() -> &'static [Day] {
    &DAYS
}

/// Time slots in chronological order.
pub fn time_slots() -> &'static [TimeSlot] {
    &TIME_SLOTS
}

pub fn is_break(slot: TimeSlot) -> bool {
    slot == LUNCH_SLOT
}

/// The slot after `slot`, or [`END_OF_DAY`] for the last period.
pub fn next_slot(slot: TimeSlot) -> TimeSlot {
    TIME_SLOTS
        .iter()
        .position(|s| *s == slot)
        .and_then(|i| TIME_SLOTS.get(i + 1))
        .copied()
        .unwrap_or(END_OF_DAY)
}

//! ICS document generation.

use chrono::NaiveDate;
use icalendar::{Calendar, Component, Property};
use tracing::{debug, trace};

use crate::date::{ensure_compact_range, format_compact_date};
use crate::error::TimetableResult;
use crate::ics::event::{CalendarEvent, calendar_events};
use crate::schedule::Schedule;

/// Calendar-level metadata and the UID domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub calendar_name: String,
    pub product_id: String,
    pub uid_domain: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            calendar_name: "My School Timetable".to_string(),
            product_id: "-//School Timetable Manager//EN".to_string(),
            uid_domain: "timetable.com".to_string(),
        }
    }
}

/// Export `schedule` with the default calendar metadata.
pub fn export(schedule: &Schedule, now: NaiveDate) -> TimetableResult<String> {
    export_with(schedule, now, &ExportOptions::default())
}

/// Generate .ics content for every class in `schedule`.
///
/// Each class becomes a weekly-recurring event starting on the first matching
/// weekday strictly after `now`.
pub fn export_with(
    schedule: &Schedule,
    now: NaiveDate,
    options: &ExportOptions,
) -> TimetableResult<String> {
    ensure_compact_range(now)?;

    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", &options.calendar_name));

    // DTSTAMP is required by RFC 5545; pin it to the reference date so the
    // document only depends on the inputs
    let dtstamp = format!("{}T000000Z", format_compact_date(now));

    let events = calendar_events(schedule, now)?;
    for event in &events {
        trace!(uid = %event.uid(&options.uid_domain), "adding event");
        cal.push(build_event(event, &dtstamp, &options.uid_domain));
    }
    let cal = cal.done();

    debug!(events = events.len(), reference = %now, "exported timetable");

    Ok(tidy_ics(&cal.to_string(), &options.product_id))
}

fn build_event(event: &CalendarEvent, dtstamp: &str, uid_domain: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid(uid_domain));
    ics_event.summary(&event.subject.name);
    ics_event.description(&format!("School class: {}", event.subject.name));
    ics_event.add_property("DTSTAMP", dtstamp);

    // Floating local times: classes follow the wall clock wherever the
    // calendar is opened
    ics_event.add_property("DTSTART", event.start.format("%Y%m%dT%H%M%S").to_string());
    ics_event.add_property("DTEND", event.end.format("%Y%m%dT%H%M%S").to_string());

    ics_event.add_property("RRULE", event.rrule());

    ics_event.done()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own product identifier
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn tidy_ics(ics: &str, product_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(product_id);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

//! Calendar events derived from a schedule.

use chrono::{NaiveDate, NaiveDateTime};

use crate::date::next_date_for;
use crate::error::TimetableResult;
use crate::schedule::Schedule;
use crate::slots::{Day, TimeSlot, next_slot};
use crate::subject::Subject;

/// One class in the exported calendar: the first occurrence of a weekly series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub subject: Subject,
    pub day: Day,
    pub slot: TimeSlot,
    pub occurrence_date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    fn new(subject: &Subject, day: Day, slot: TimeSlot, now: NaiveDate) -> TimetableResult<Self> {
        let occurrence_date = next_date_for(day, now)?;
        let start = occurrence_date.and_time(slot.start_time()?);
        let end = occurrence_date.and_time(next_slot(slot).start_time()?);

        Ok(CalendarEvent {
            subject: subject.clone(),
            day,
            slot,
            occurrence_date,
            start,
            end,
        })
    }

    /// UID for this class. Independent of the reference date, so re-exports
    /// update the same series instead of duplicating it.
    pub fn uid(&self, domain: &str) -> String {
        format!("{}-{}-{}@{}", self.subject.id, self.day, self.slot, domain)
    }

    pub fn weekday_code(&self) -> &'static str {
        self.day.weekday_code()
    }

    pub fn rrule(&self) -> String {
        format!("FREQ=WEEKLY;BYDAY={}", self.weekday_code())
    }
}

/// One event per class cell, in Day-then-TimeSlot order. Breaks are skipped.
pub fn calendar_events(schedule: &Schedule, now: NaiveDate) -> TimetableResult<Vec<CalendarEvent>> {
    schedule
        .cells()
        .filter_map(|(day, slot, cell)| cell.subject().map(|subject| (day, slot, subject)))
        .map(|(day, slot, subject)| CalendarEvent::new(subject, day, slot, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::generate;
    use crate::slots::time_slots;
    use crate::subject::default_subjects;

    fn monday() -> NaiveDate {
        // 2025-09-01 is a Monday
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn test_one_event_per_class() {
        let events = calendar_events(&generate(&default_subjects()), monday()).unwrap();
        assert_eq!(events.len(), 35);
        assert!(events.iter().all(|e| e.slot.label() != "12:00 PM"));
    }

    #[test]
    fn test_events_follow_grid_order() {
        let events = calendar_events(&generate(&default_subjects()), monday()).unwrap();
        let first = &events[0];
        assert_eq!(first.day, Day::Monday);
        assert_eq!(first.slot, time_slots()[0]);
        assert_eq!(events[7].day, Day::Tuesday);
        assert_eq!(events[7].subject.name, "English");
    }

    #[test]
    fn test_event_times() {
        let events = calendar_events(&generate(&default_subjects()), monday()).unwrap();

        // Monday reference date rolls Monday classes a week forward
        let first = &events[0];
        assert_eq!(first.occurrence_date, NaiveDate::from_ymd_opt(2025, 9, 8).unwrap());
        assert_eq!(first.start.format("%H%M").to_string(), "0900");
        assert_eq!(first.end.format("%H%M").to_string(), "1000");

        // 11 AM ends at noon
        assert_eq!(events[2].end.format("%H%M").to_string(), "1200");

        // last period gets the synthetic 5 PM end
        let last = &events[6];
        assert_eq!(last.slot.label(), "4:00 PM");
        assert_eq!(last.end.format("%H%M").to_string(), "1700");
    }

    #[test]
    fn test_every_event_is_one_hour() {
        let events = calendar_events(&generate(&default_subjects()), monday()).unwrap();
        for event in &events {
            assert_eq!((event.end - event.start).num_minutes(), 60, "{:?}", event.slot);
        }
    }

    #[test]
    fn test_uid_and_rrule() {
        let events = calendar_events(&generate(&default_subjects()), monday()).unwrap();
        assert_eq!(events[0].uid("timetable.com"), "1-Monday-9:00 AM@timetable.com");
        assert_eq!(events[0].rrule(), "FREQ=WEEKLY;BYDAY=MO");
        assert_eq!(events[34].weekday_code(), "FR");
    }

    #[test]
    fn test_empty_schedule_has_no_events() {
        assert!(calendar_events(&generate(&[]), monday()).unwrap().is_empty());
    }
}

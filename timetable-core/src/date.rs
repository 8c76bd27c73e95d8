//! Date arithmetic for projecting weekly classes onto the calendar.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{TimetableError, TimetableResult};
use crate::slots::Day;

/// The first date strictly after `now` that falls on `day`.
///
/// A class on today's weekday is placed next week, never today.
pub fn next_date_for(day: Day, now: NaiveDate) -> TimetableResult<NaiveDate> {
    let target = day.weekday().num_days_from_sunday();
    let current = now.weekday().num_days_from_sunday();

    let delta = match (target + 7 - current) % 7 {
        0 => 7,
        d => d,
    };

    let next = now
        .checked_add_days(Days::new(u64::from(delta)))
        .ok_or_else(|| TimetableError::InvalidDate(format!("{} + {} days is out of range", now, delta)))?;

    ensure_compact_range(next)
}

/// Reject dates whose year does not fit the four digits of `YYYYMMDD`.
pub fn ensure_compact_range(date: NaiveDate) -> TimetableResult<NaiveDate> {
    if (0..=9999).contains(&date.year()) {
        Ok(date)
    } else {
        Err(TimetableError::InvalidDate(format!(
            "{} is outside years 0000-9999",
            date
        )))
    }
}

/// Format as eight digits, `YYYYMMDD`.
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parse a YYYY-MM-DD reference date.
pub fn parse_reference_date(s: &str) -> TimetableResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TimetableError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::days;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_date_later_this_week() {
        // 2025-09-03 is a Wednesday
        let now = date(2025, 9, 3);
        assert_eq!(next_date_for(Day::Friday, now).unwrap(), date(2025, 9, 5));
        assert_eq!(next_date_for(Day::Thursday, now).unwrap(), date(2025, 9, 4));
    }

    #[test]
    fn test_next_date_wraps_to_next_week() {
        let now = date(2025, 9, 3);
        assert_eq!(next_date_for(Day::Monday, now).unwrap(), date(2025, 9, 8));
        assert_eq!(next_date_for(Day::Tuesday, now).unwrap(), date(2025, 9, 9));
    }

    #[test]
    fn test_same_weekday_rolls_a_full_week() {
        let now = date(2025, 9, 3);
        assert_eq!(next_date_for(Day::Wednesday, now).unwrap(), date(2025, 9, 10));
    }

    #[test]
    fn test_weekend_reference_dates() {
        // Saturday and Sunday
        assert_eq!(next_date_for(Day::Monday, date(2025, 9, 6)).unwrap(), date(2025, 9, 8));
        assert_eq!(next_date_for(Day::Monday, date(2025, 9, 7)).unwrap(), date(2025, 9, 8));
        assert_eq!(next_date_for(Day::Friday, date(2025, 9, 7)).unwrap(), date(2025, 9, 12));
    }

    #[test]
    fn test_crosses_month_and_year_boundaries() {
        // 2025-12-31 is a Wednesday
        assert_eq!(next_date_for(Day::Monday, date(2025, 12, 31)).unwrap(), date(2026, 1, 5));
        // 2024-02-28 is a Wednesday, leap year
        assert_eq!(next_date_for(Day::Thursday, date(2024, 2, 28)).unwrap(), date(2024, 2, 29));
        assert_eq!(next_date_for(Day::Friday, date(2024, 2, 28)).unwrap(), date(2024, 3, 1));
    }

    #[test]
    fn test_projection_is_the_smallest_later_match() {
        let start = date(2025, 1, 1);
        for offset in 0..21 {
            let now = start + Duration::days(offset);
            for &day in days() {
                let next = next_date_for(day, now).unwrap();
                assert!(next > now, "{} from {} should be in the future", day, now);
                assert_eq!(next.weekday(), day.weekday());
                assert!((next - now).num_days() <= 7);
            }
        }
    }

    #[test]
    fn test_overflow_is_invalid_date() {
        let err = next_date_for(Day::Monday, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidDate(_)));
    }

    #[test]
    fn test_projection_past_year_9999_is_invalid_date() {
        // 9999-12-30 is a Thursday; Friday still fits, Monday lands in 10000
        let now = date(9999, 12, 30);
        assert_eq!(next_date_for(Day::Friday, now).unwrap(), date(9999, 12, 31));
        let err = next_date_for(Day::Monday, now).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidDate(_)), "got {:?}", err);
    }

    #[test]
    fn test_ensure_compact_range() {
        assert!(ensure_compact_range(date(0, 1, 1)).is_ok());
        assert!(ensure_compact_range(date(9999, 12, 31)).is_ok());
        assert!(ensure_compact_range(date(10000, 1, 1)).is_err());
        assert!(ensure_compact_range(date(-1, 12, 31)).is_err());
    }

    #[test]
    fn test_format_compact_date() {
        assert_eq!(format_compact_date(date(2025, 9, 8)), "20250908");
        assert_eq!(format_compact_date(date(987, 1, 2)), "09870102");
    }

    #[test]
    fn test_parse_reference_date() {
        assert_eq!(parse_reference_date("2025-09-03").unwrap(), date(2025, 9, 3));
        assert!(matches!(
            parse_reference_date("2025-02-30"),
            Err(TimetableError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_reference_date("next monday"),
            Err(TimetableError::InvalidDate(_))
        ));
    }
}

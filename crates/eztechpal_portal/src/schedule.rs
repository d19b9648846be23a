//! crates/eztechpal_portal/src/schedule.rs
//!
//! The static weekly operating hours shown on the schedule page.

use chrono::{NaiveTime, Weekday};

/// Operating hours for one weekday. `hours` is `None` on closed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub hours: Option<(NaiveTime, NaiveTime)>,
}

impl DaySchedule {
    pub fn is_open(&self) -> bool {
        self.hours.is_some()
    }
}

fn open_hours(from: u32, to: u32) -> Option<(NaiveTime, NaiveTime)> {
    match (
        NaiveTime::from_hms_opt(from, 0, 0),
        NaiveTime::from_hms_opt(to, 0, 0),
    ) {
        (Some(opens), Some(closes)) => Some((opens, closes)),
        _ => None,
    }
}

/// The full week, Monday first.
pub fn weekly() -> [DaySchedule; 7] {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .map(for_day)
}

/// Hours for a single weekday: weekdays 09:00-18:00, Saturday 10:00-16:00,
/// Sunday closed.
pub fn for_day(day: Weekday) -> DaySchedule {
    let hours = match day {
        Weekday::Sat => open_hours(10, 16),
        Weekday::Sun => None,
        _ => open_hours(9, 18),
    };
    DaySchedule { day, hours }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_is_closed() {
        assert!(!for_day(Weekday::Sun).is_open());
    }

    #[test]
    fn saturday_has_short_hours() {
        let saturday = for_day(Weekday::Sat);
        let (opens, closes) = saturday.hours.unwrap();
        assert_eq!(opens, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(closes, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn week_lists_monday_first_and_has_one_closed_day() {
        let week = weekly();
        assert_eq!(week[0].day, Weekday::Mon);
        assert_eq!(week.iter().filter(|d| !d.is_open()).count(), 1);
    }
}

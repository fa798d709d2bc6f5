//! Travel conditions derived from the booking time.

use chrono::{DateTime, Datelike, Local, Timelike, Weekday};

/// Time-of-booking facts that influence fares and durations.
///
/// Derived once per request and passed down explicitly, so the search
/// itself never consults the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelConditions {
    /// Saturday or Sunday.
    pub weekend: bool,

    /// 07:00-09:59 or 17:00-19:59 local time.
    pub rush_hour: bool,
}

impl TravelConditions {
    /// Conditions at a specific local time.
    pub fn at(when: DateTime<Local>) -> Self {
        let weekend = matches!(when.weekday(), Weekday::Sat | Weekday::Sun);
        let hour = when.hour();
        let rush_hour = (7..=9).contains(&hour) || (17..=19).contains(&hour);

        Self { weekend, rush_hour }
    }

    /// Conditions right now.
    pub fn now() -> Self {
        Self::at(Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn weekday_off_peak() {
        // Wednesday 2026-08-05, 13:00
        let conditions = TravelConditions::at(local(2026, 8, 5, 13, 0));
        assert!(!conditions.weekend);
        assert!(!conditions.rush_hour);
    }

    #[test]
    fn weekend_detection() {
        // Saturday 2026-08-08
        let conditions = TravelConditions::at(local(2026, 8, 8, 13, 0));
        assert!(conditions.weekend);

        // Sunday 2026-08-09
        let conditions = TravelConditions::at(local(2026, 8, 9, 13, 0));
        assert!(conditions.weekend);
    }

    #[test]
    fn morning_rush_window() {
        assert!(TravelConditions::at(local(2026, 8, 5, 7, 0)).rush_hour);
        assert!(TravelConditions::at(local(2026, 8, 5, 9, 59)).rush_hour);
        assert!(!TravelConditions::at(local(2026, 8, 5, 6, 59)).rush_hour);
        assert!(!TravelConditions::at(local(2026, 8, 5, 10, 0)).rush_hour);
    }

    #[test]
    fn evening_rush_window() {
        assert!(TravelConditions::at(local(2026, 8, 5, 17, 0)).rush_hour);
        assert!(TravelConditions::at(local(2026, 8, 5, 19, 59)).rush_hour);
        assert!(!TravelConditions::at(local(2026, 8, 5, 20, 0)).rush_hour);
    }
}

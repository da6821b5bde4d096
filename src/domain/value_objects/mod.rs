use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The weekly firing slot, pre-rendered in the formats lead records carry:
/// a full day name ("Tuesday") and a 12-hour clock string ("5:00 PM").
/// Drops are compared against these strings verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropSlot {
    pub day: String,
    pub time: String,
}

impl DropSlot {
    pub fn new(day: Weekday, time: NaiveTime) -> Self {
        Self {
            day: day_name(day).to_string(),
            time: time.format("%-I:%M %p").to_string(),
        }
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_afternoon_slot_without_zero_padding() {
        let slot = DropSlot::new(Weekday::Tue, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(slot.day, "Tuesday");
        assert_eq!(slot.time, "5:00 PM");
    }

    #[test]
    fn renders_morning_slot() {
        let slot = DropSlot::new(Weekday::Fri, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(slot.day, "Friday");
        assert_eq!(slot.time, "9:05 AM");
    }

    #[test]
    fn renders_noon_and_midnight_as_twelve() {
        let noon = DropSlot::new(Weekday::Mon, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(noon.time, "12:00 PM");

        let midnight = DropSlot::new(Weekday::Mon, NaiveTime::from_hms_opt(0, 30, 0).unwrap());
        assert_eq!(midnight.time, "12:30 AM");
    }
}

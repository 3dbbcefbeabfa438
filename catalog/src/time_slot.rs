use std::fmt;
use std::str::FromStr;

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

/// A bookable time of day, displayed and parsed as zero-padded `HH:MM`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(Time);

impl TimeSlot {
    /// Panics on an out-of-range hour or minute; meant for literals.
    pub const fn new(hour: i8, minute: i8) -> Self {
        Self(jiff::civil::time(hour, minute, 0, 0))
    }

    pub fn time(&self) -> Time {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot {0:?}, expected HH:MM")]
pub struct ParseTimeSlotError(String);

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeSlotError(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let two_digits =
            |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hour) || !two_digits(minute) {
            return Err(invalid());
        }

        let hour: i8 = hour.parse().map_err(|_| invalid())?;
        let minute: i8 = minute.parse().map_err(|_| invalid())?;
        let time = Time::new(hour, minute, 0, 0).map_err(|_| invalid())?;
        Ok(Self(time))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeSlot::new(9, 0).to_string(), "09:00");
        assert_eq!(TimeSlot::new(17, 30).to_string(), "17:30");
    }

    #[test]
    fn test_parse() {
        assert_eq!("09:00".parse::<TimeSlot>(), Ok(TimeSlot::new(9, 0)));
        assert_eq!("23:59".parse::<TimeSlot>(), Ok(TimeSlot::new(23, 59)));
        assert!("9:00".parse::<TimeSlot>().is_err());
        assert!("24:00".parse::<TimeSlot>().is_err());
        assert!("12:60".parse::<TimeSlot>().is_err());
        assert!("noon".parse::<TimeSlot>().is_err());
        assert!("".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_ordering_follows_time_of_day() {
        assert!(TimeSlot::new(9, 0) < TimeSlot::new(10, 0));
        assert!(TimeSlot::new(10, 0) < TimeSlot::new(10, 30));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&TimeSlot::new(15, 0)).unwrap();
        assert_eq!(json, "\"15:00\"");
        let slot: TimeSlot = serde_json::from_str("\"08:00\"").unwrap();
        assert_eq!(slot, TimeSlot::new(8, 0));
        assert!(serde_json::from_str::<TimeSlot>("\"8am\"").is_err());
    }
}

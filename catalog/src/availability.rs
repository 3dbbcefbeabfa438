//! Weekly availability of a coach and the lookup from a calendar date to
//! the slots offered that day.

use std::collections::BTreeMap;

use derive_more::Display;
use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

use crate::TimeSlot;

/// English weekday names, Monday first. Used as the keys of an
/// [`Availability`] mapping.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Weekday of a civil date. No timezone is involved: the date is taken
    /// as already being in the viewer's calendar.
    pub fn of(date: Date) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => DayOfWeek::Monday,
            Weekday::Tuesday => DayOfWeek::Tuesday,
            Weekday::Wednesday => DayOfWeek::Wednesday,
            Weekday::Thursday => DayOfWeek::Thursday,
            Weekday::Friday => DayOfWeek::Friday,
            Weekday::Saturday => DayOfWeek::Saturday,
            Weekday::Sunday => DayOfWeek::Sunday,
        }
    }
}

/// Mapping from weekday to the ordered time slots offered on that day.
///
/// Slot order is kept exactly as configured; days without an entry have no
/// availability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<DayOfWeek, Vec<TimeSlot>>);

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any slots already set for `day`.
    pub fn with_day(
        mut self,
        day: DayOfWeek,
        slots: impl IntoIterator<Item = TimeSlot>,
    ) -> Self {
        self.0.insert(day, slots.into_iter().collect());
        self
    }

    pub fn slots_for(&self, day: DayOfWeek) -> &[TimeSlot] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Slots bookable on `date`, resolved purely by its weekday. Past dates
    /// are not excluded.
    pub fn slots_on(&self, date: Date) -> &[TimeSlot] {
        self.slots_for(DayOfWeek::of(date))
    }

    /// Configured days in Monday-first order.
    pub fn days(&self) -> impl Iterator<Item = (DayOfWeek, &[TimeSlot])> {
        self.0.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl FromIterator<(DayOfWeek, Vec<TimeSlot>)> for Availability {
    fn from_iter<I: IntoIterator<Item = (DayOfWeek, Vec<TimeSlot>)>>(
        iter: I,
    ) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn slot(s: &str) -> TimeSlot {
        s.parse().unwrap()
    }

    #[test]
    fn test_day_of_week() {
        // 2024-01-15 was a Monday
        assert_eq!(DayOfWeek::of(date(2024, 1, 15)), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::of(date(2024, 1, 16)), DayOfWeek::Tuesday);
        assert_eq!(DayOfWeek::of(date(2024, 1, 21)), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_slots_on_resolves_by_weekday() {
        let availability = Availability::new()
            .with_day(DayOfWeek::Monday, [slot("09:00"), slot("10:00")]);

        assert_eq!(
            availability.slots_on(date(2024, 1, 15)),
            &[slot("09:00"), slot("10:00")]
        );
        assert!(availability.slots_on(date(2024, 1, 16)).is_empty());
        // Any Monday, past or future, maps to the same slots.
        assert_eq!(
            availability.slots_on(date(1999, 3, 1)),
            availability.slots_on(date(2031, 6, 2)),
        );
    }

    #[test]
    fn test_slot_order_is_preserved() {
        let availability = Availability::new().with_day(
            DayOfWeek::Friday,
            [slot("14:00"), slot("09:00"), slot("11:00")],
        );
        assert_eq!(
            availability.slots_for(DayOfWeek::Friday),
            &[slot("14:00"), slot("09:00"), slot("11:00")]
        );
    }

    #[test]
    fn test_days_iterate_monday_first() {
        let availability: Availability = [
            (DayOfWeek::Sunday, vec![slot("15:00")]),
            (DayOfWeek::Monday, vec![slot("09:00")]),
        ]
        .into_iter()
        .collect();
        let days: Vec<_> = availability.days().map(|(day, _)| day).collect();
        assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Sunday]);
    }

    #[test]
    fn test_empty() {
        assert!(Availability::new().is_empty());
        assert!(
            Availability::new()
                .with_day(DayOfWeek::Monday, [])
                .is_empty()
        );
        assert!(
            !Availability::new()
                .with_day(DayOfWeek::Monday, [slot("09:00")])
                .is_empty()
        );
    }

    #[test]
    fn test_serializes_weekday_names() {
        let availability = Availability::new()
            .with_day(DayOfWeek::Tuesday, [slot("11:00")]);
        let json = serde_json::to_string(&availability).unwrap();
        assert_eq!(json, r#"{"Tuesday":["11:00"]}"#);
    }
}

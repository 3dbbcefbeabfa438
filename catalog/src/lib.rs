//! Static records and booking logic for the Elite Sports Academy site.
//!
//! Nothing in here talks to a network or a store: every record is built
//! from literals, and every "submission" is a synchronous check whose
//! outcome the ui crate turns into a toast.

use derive_more::Display;
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod availability;
pub mod calendar;
pub mod coach;
pub mod forms;
pub mod landing;
pub mod lookup;
pub mod search;
pub mod session;
pub mod sport;
pub mod time_slot;

pub use availability::{Availability, DayOfWeek};
pub use coach::{Coach, RosterCoach, Testimonial};
pub use forms::ValidationError;
pub use search::CoachFilter;
pub use session::{Session, SessionStatus, SessionType};
pub use sport::{Sport, SportSummary};
pub use time_slot::TimeSlot;

pub const ACADEMY_NAME: &str = "Elite Sports Academy";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CoachId(pub u32);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct SessionId(pub u32);

/// Whole-dollar prices render without a fractional part ("$80"), others
/// with two decimals ("$80.50").
pub fn format_price(price: Decimal) -> String {
    if price.fract().is_zero() {
        format!("${}", price.trunc())
    } else {
        format!("${:.2}", price)
    }
}

/// Long-form date used in booking confirmations, e.g. "Mon Jan 15 2024".
pub fn format_date(date: Date) -> String {
    date.strftime("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::from(80)), "$80");
        assert_eq!(format_price(Decimal::new(8050, 2)), "$80.50");
        assert_eq!(format_price(Decimal::new(800, 1)), "$80");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 15)), "Mon Jan 15 2024");
        assert_eq!(format_date(date(2024, 3, 5)), "Tue Mar 05 2024");
    }
}

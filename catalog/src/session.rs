use std::str::FromStr;

use derive_more::Display;
use jiff::civil::{Date, date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{SessionId, TimeSlot};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    #[default]
    #[display("individual")]
    Individual,
    #[display("group")]
    Group,
    #[display("virtual")]
    Virtual,
}

impl SessionType {
    pub const ALL: [SessionType; 3] =
        [SessionType::Individual, SessionType::Group, SessionType::Virtual];

    /// Label shown in the session type picker.
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Individual => "Individual (1-on-1)",
            SessionType::Group => "Group Session",
            SessionType::Virtual => "Virtual Training",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown session type {0:?}")]
pub struct UnknownSessionType(String);

impl FromStr for SessionType {
    type Err = UnknownSessionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionType::ALL
            .into_iter()
            .find(|t| t.to_string() == s)
            .ok_or_else(|| UnknownSessionType(s.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[display("upcoming")]
    Upcoming,
    #[display("completed")]
    Completed,
    #[display("cancelled")]
    Cancelled,
}

/// A booked coaching appointment. Records are seed data; cancelling or
/// rescheduling only produces a notice and never changes the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub coach: String,
    pub sport: String,
    pub date: Date,
    pub time: TimeSlot,
    pub duration_minutes: u32,
    pub session_type: SessionType,
    pub status: SessionStatus,
    pub price: Decimal,
    pub location: Option<String>,
}

impl Session {
    pub fn cancellation_notice(&self) -> String {
        format!("Session {} has been cancelled. Refund processed.", self.id)
    }

    pub fn reschedule_notice(&self) -> String {
        format!("Reschedule request sent for session {}", self.id)
    }
}

/// Sports offered in the booking form.
pub const BOOKABLE_SPORTS: &[&str] = &[
    "Football",
    "Basketball",
    "Tennis",
    "Swimming",
    "Athletics",
    "Martial Arts",
];

/// Coaches offered in the booking form.
pub const BOOKABLE_COACHES: &[&str] = &[
    "Sarah Johnson",
    "Mike Chen",
    "Emma Rodriguez",
    "Alex Thompson",
    "Maria Garcia",
];

/// Times offered in the booking form, the same for every date.
pub const BOOKABLE_TIMES: &[TimeSlot] = &[
    TimeSlot::new(9, 0),
    TimeSlot::new(10, 0),
    TimeSlot::new(11, 0),
    TimeSlot::new(14, 0),
    TimeSlot::new(15, 0),
    TimeSlot::new(16, 0),
    TimeSlot::new(17, 0),
    TimeSlot::new(18, 0),
    TimeSlot::new(19, 0),
];

/// Flat price quoted by the booking form regardless of selection.
pub fn booking_price() -> Decimal {
    Decimal::from(80)
}

pub fn upcoming_sessions() -> Vec<Session> {
    vec![
        Session {
            id: SessionId(1),
            coach: "Sarah Johnson".into(),
            sport: "Tennis".into(),
            date: date(2024, 1, 25),
            time: TimeSlot::new(10, 0),
            duration_minutes: 60,
            session_type: SessionType::Individual,
            status: SessionStatus::Upcoming,
            price: Decimal::from(80),
            location: Some("Court A".into()),
        },
        Session {
            id: SessionId(2),
            coach: "Mike Chen".into(),
            sport: "Basketball".into(),
            date: date(2024, 1, 26),
            time: TimeSlot::new(15, 0),
            duration_minutes: 90,
            session_type: SessionType::Group,
            status: SessionStatus::Upcoming,
            price: Decimal::from(50),
            location: None,
        },
        Session {
            id: SessionId(3),
            coach: "Emma Rodriguez".into(),
            sport: "Swimming".into(),
            date: date(2024, 1, 27),
            time: TimeSlot::new(8, 0),
            duration_minutes: 60,
            session_type: SessionType::Virtual,
            status: SessionStatus::Upcoming,
            price: Decimal::from(60),
            location: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_round_trips_through_select_value() {
        for session_type in SessionType::ALL {
            let value = session_type.to_string();
            assert_eq!(value.parse::<SessionType>(), Ok(session_type));
        }
        assert!("private".parse::<SessionType>().is_err());
    }

    #[test]
    fn test_serialized_representation() {
        let session = &upcoming_sessions()[0];
        let json = serde_json::to_value(session).unwrap();
        assert_eq!(json["session_type"], "individual");
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["date"], "2024-01-25");
        assert_eq!(json["time"], "10:00");
        assert_eq!(json["location"], "Court A");
    }

    #[test]
    fn test_notices_name_the_session() {
        let sessions = upcoming_sessions();
        assert_eq!(
            sessions[1].cancellation_notice(),
            "Session 2 has been cancelled. Refund processed."
        );
        assert_eq!(
            sessions[2].reschedule_notice(),
            "Reschedule request sent for session 3"
        );
    }
}

//! Route parameter lookups.
//!
//! Parameters are accepted but do not select a record: every sport name
//! resolves to the sample sport and every coach id to the sample coach.

use tracing::debug;

use crate::coach::{Coach, sample_coach};
use crate::sport::{Sport, sample_sport};

pub fn sport_by_name(sport_name: &str) -> Sport {
    debug!(sport_name, "serving sample sport");
    sample_sport()
}

pub fn coach_by_id(coach_id: &str) -> Coach {
    debug!(coach_id, "serving sample coach");
    sample_coach()
}

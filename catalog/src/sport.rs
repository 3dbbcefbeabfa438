use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CoachId, RosterCoach, Testimonial};

/// A sport category page: its copy, its roster, and its success stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub methodology: String,
    pub coaches: Vec<RosterCoach>,
    pub testimonials: Vec<Testimonial>,
}

/// A sport card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportSummary {
    pub name: &'static str,
    pub icon: &'static str,
    pub coaches: u32,
    pub sessions: u32,
    pub rating: Decimal,
}

pub fn sport_summaries() -> Vec<SportSummary> {
    [
        ("Football", "⚽", 15, 120, 48),
        ("Basketball", "🏀", 12, 98, 49),
        ("Tennis", "🎾", 8, 75, 47),
        ("Swimming", "🏊", 10, 89, 48),
        ("Athletics", "🏃", 20, 150, 49),
        ("Martial Arts", "🥋", 14, 110, 48),
    ]
    .into_iter()
    .map(|(name, icon, coaches, sessions, rating)| SportSummary {
        name,
        icon,
        coaches,
        sessions,
        rating: Decimal::new(rating, 1),
    })
    .collect()
}

/// The one hard-coded sport every sport page renders.
pub fn sample_sport() -> Sport {
    Sport {
        name: "Football".into(),
        icon: "⚽".into(),
        description: "Master the beautiful game with our expert football \
            coaches. From basic skills to advanced tactics, our comprehensive \
            program covers all aspects of football training."
            .into(),
        methodology: "Our football methodology combines traditional European \
            coaching techniques with modern sports science. We focus on \
            technical skills, tactical understanding, physical conditioning, \
            and mental resilience. Each session is tailored to the player's \
            level, from beginners learning basic ball control to advanced \
            players perfecting their match strategies. Our coaches emphasize \
            proper technique, game intelligence, and character development \
            both on and off the field."
            .into(),
        coaches: vec![
            RosterCoach {
                id: CoachId(1),
                name: "Carlos Rodriguez".into(),
                specialty: "Youth Development".into(),
                experience_years: 8,
                rating: Decimal::new(49, 1),
                price: Decimal::from(80),
                achievements: vec![
                    "UEFA B License".into(),
                    "Youth Coach of the Year 2023".into(),
                ],
                available: true,
            },
            RosterCoach {
                id: CoachId(2),
                name: "Sarah Mitchell".into(),
                specialty: "Advanced Tactics".into(),
                experience_years: 12,
                rating: Decimal::new(48, 1),
                price: Decimal::from(100),
                achievements: vec![
                    "FIFA Coaching Diploma".into(),
                    "Champions League Experience".into(),
                ],
                available: true,
            },
        ],
        testimonials: vec![
            Testimonial {
                author: "James Wilson".into(),
                text: "The football program transformed my game completely. \
                    The tactical knowledge I gained is incredible!"
                    .into(),
                rating: 5,
                date: None,
            },
            Testimonial {
                author: "Maria Santos".into(),
                text: "Best football coaching I've ever received. My \
                    daughter's confidence on the field has skyrocketed!"
                    .into(),
                rating: 5,
                date: None,
            },
        ],
    }
}

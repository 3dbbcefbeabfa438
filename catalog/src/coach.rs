use jiff::civil::{Date, date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Availability, CoachId, DayOfWeek, TimeSlot};

/// Full coach profile, as shown on the coach page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub id: CoachId,
    pub name: String,
    pub title: String,
    pub sport: String,
    pub rating: Decimal,
    pub reviews: u32,
    pub experience_years: u32,
    /// Price of one session.
    pub price: Decimal,
    pub location: String,
    pub languages: Vec<String>,
    pub specialties: Vec<String>,
    pub achievements: Vec<String>,
    pub philosophy: String,
    pub bio: String,
    pub credentials: Vec<String>,
    pub availability: Availability,
    pub testimonials: Vec<Testimonial>,
}

impl Coach {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Coach entry in a sport's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCoach {
    pub id: CoachId,
    pub name: String,
    pub specialty: String,
    pub experience_years: u32,
    pub rating: Decimal,
    pub price: Decimal,
    pub achievements: Vec<String>,
    pub available: bool,
}

impl RosterCoach {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub text: String,
    /// Star count, 1 to 5.
    pub rating: u8,
    pub date: Option<Date>,
}

/// First character of each whitespace separated part of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn slots(times: &[(i8, i8)]) -> Vec<TimeSlot> {
    times.iter().map(|&(h, m)| TimeSlot::new(h, m)).collect()
}

/// The one hard-coded coach profile every coach page renders.
pub fn sample_coach() -> Coach {
    let availability = Availability::new()
        .with_day(
            DayOfWeek::Monday,
            slots(&[(9, 0), (10, 0), (15, 0), (16, 0)]),
        )
        .with_day(
            DayOfWeek::Tuesday,
            slots(&[(9, 0), (11, 0), (14, 0), (17, 0)]),
        )
        .with_day(
            DayOfWeek::Wednesday,
            slots(&[(10, 0), (15, 0), (16, 0), (18, 0)]),
        )
        .with_day(
            DayOfWeek::Thursday,
            slots(&[(9, 0), (10, 0), (15, 0), (16, 0)]),
        )
        .with_day(DayOfWeek::Friday, slots(&[(9, 0), (11, 0), (14, 0)]))
        .with_day(DayOfWeek::Saturday, slots(&[(9, 0), (10, 0), (11, 0)]))
        .with_day(DayOfWeek::Sunday, slots(&[(15, 0), (16, 0), (17, 0)]));

    Coach {
        id: CoachId(1),
        name: "Carlos Rodriguez".into(),
        title: "Professional Football Coach".into(),
        sport: "Football".into(),
        rating: Decimal::new(49, 1),
        reviews: 127,
        experience_years: 8,
        price: Decimal::from(80),
        location: "Barcelona, Spain".into(),
        languages: strings(&["English", "Spanish", "Portuguese"]),
        specialties: strings(&[
            "Youth Development",
            "Technical Skills",
            "Tactical Training",
        ]),
        achievements: strings(&[
            "UEFA B Coaching License",
            "Youth Coach of the Year 2023",
            "Former Barcelona Youth Academy Coach",
            "Developed 15+ Professional Players",
        ]),
        philosophy: "I believe that football is more than just a game - it's \
            a tool for character development and life lessons. My coaching \
            philosophy centers on building confident, intelligent players who \
            understand the game deeply. I focus on creating a positive \
            learning environment where players can express themselves while \
            mastering fundamental skills and tactical concepts. Every player \
            is unique, and I tailor my approach to unlock their individual \
            potential while fostering teamwork and sportsmanship."
            .into(),
        bio: "Carlos Rodriguez brings over 8 years of professional coaching \
            experience to Elite Sports Academy. Having worked with Barcelona's \
            youth academy and various professional clubs across Europe, Carlos \
            has developed a reputation for nurturing young talent and helping \
            players reach their full potential. His expertise spans from \
            grassroots development to elite performance coaching. Carlos holds \
            multiple coaching certifications and has successfully guided \
            numerous players to professional contracts. His innovative \
            training methods combine traditional techniques with modern sports \
            science, ensuring players develop both technically and mentally."
            .into(),
        credentials: strings(&[
            "UEFA B Coaching License",
            "Sports Science Degree - University of Barcelona",
            "Youth Development Certificate - FIFA",
            "Sports Psychology Certification",
        ]),
        availability,
        testimonials: vec![
            Testimonial {
                author: "David Thompson".into(),
                text: "Carlos helped my son develop incredible ball control \
                    and confidence. His tactical knowledge is exceptional!"
                    .into(),
                rating: 5,
                date: Some(date(2024, 1, 15)),
            },
            Testimonial {
                author: "Lisa Chang".into(),
                text: "Professional, patient, and incredibly knowledgeable. \
                    My daughter loves training with Carlos!"
                    .into(),
                rating: 5,
                date: Some(date(2024, 1, 10)),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Carlos Rodriguez"), "CR");
        assert_eq!(initials("  Sarah   Mitchell "), "SM");
        assert_eq!(initials("Émile"), "É");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_sample_coach_offers_every_day() {
        let coach = sample_coach();
        assert_eq!(coach.initials(), "CR");
        for day in DayOfWeek::ALL {
            assert!(
                !coach.availability.slots_for(day).is_empty(),
                "{day} has no slots"
            );
        }
        assert_eq!(
            coach.availability.slots_for(DayOfWeek::Friday),
            &slots(&[(9, 0), (11, 0), (14, 0)])[..]
        );
    }
}

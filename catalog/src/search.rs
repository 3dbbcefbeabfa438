use crate::RosterCoach;

/// Roster search state for a sport page.
///
/// Recomputed on every keystroke; there is no ranking, so matches keep the
/// order of the roster they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachFilter {
    pub query: String,
    pub available_only: bool,
}

impl CoachFilter {
    pub fn new(query: impl Into<String>, available_only: bool) -> Self {
        Self {
            query: query.into(),
            available_only,
        }
    }

    /// Case-insensitive, unanchored substring match on the coach name,
    /// plus the availability flag when `available_only` is set.
    pub fn matches(&self, coach: &RosterCoach) -> bool {
        let name_matches = coach
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        name_matches && (!self.available_only || coach.available)
    }

    pub fn apply<'a>(&self, roster: &'a [RosterCoach]) -> Vec<&'a RosterCoach> {
        roster.iter().filter(|coach| self.matches(coach)).collect()
    }

    pub fn toggle_available(&mut self) {
        self.available_only = !self.available_only;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoachId;
    use rust_decimal::Decimal;

    fn coach(id: u32, name: &str, available: bool) -> RosterCoach {
        RosterCoach {
            id: CoachId(id),
            name: name.into(),
            specialty: "Footwork".into(),
            experience_years: 3,
            rating: Decimal::new(45, 1),
            price: Decimal::from(60),
            achievements: vec![],
            available,
        }
    }

    fn names<'a>(coaches: &[&'a RosterCoach]) -> Vec<&'a str> {
        coaches.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everyone_in_order() {
        let roster = vec![
            coach(1, "Zed Alpha", true),
            coach(2, "Amy Beta", false),
            coach(3, "Bo Gamma", true),
        ];
        let result = CoachFilter::default().apply(&roster);
        assert_eq!(names(&result), vec!["Zed Alpha", "Amy Beta", "Bo Gamma"]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_unanchored() {
        let roster = vec![
            coach(1, "Carlos Rodriguez", true),
            coach(2, "Sarah Mitchell", true),
        ];
        let filter = CoachFilter::new("RODRI", false);
        assert_eq!(names(&filter.apply(&roster)), vec!["Carlos Rodriguez"]);

        let filter = CoachFilter::new("a", false);
        assert_eq!(
            names(&filter.apply(&roster)),
            vec!["Carlos Rodriguez", "Sarah Mitchell"]
        );
    }

    #[test]
    fn test_query_does_not_match_specialty() {
        let roster = vec![coach(1, "Carlos Rodriguez", true)];
        assert!(CoachFilter::new("footwork", false).apply(&roster).is_empty());
    }

    #[test]
    fn test_available_only() {
        let roster = vec![
            coach(1, "Ann", true),
            coach(2, "Ben", false),
            coach(3, "Cal", true),
        ];
        let mut filter = CoachFilter::default();
        filter.toggle_available();
        assert!(filter.available_only);
        assert_eq!(names(&filter.apply(&roster)), vec!["Ann", "Cal"]);

        filter.toggle_available();
        assert_eq!(names(&filter.apply(&roster)), vec!["Ann", "Ben", "Cal"]);
    }

    #[test]
    fn test_query_and_availability_combine() {
        let roster = vec![coach(1, "Ann Lee", false), coach(2, "Lee Park", true)];
        let filter = CoachFilter::new("lee", true);
        assert_eq!(names(&filter.apply(&roster)), vec!["Lee Park"]);
    }
}

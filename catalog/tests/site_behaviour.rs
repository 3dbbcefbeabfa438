use catalog::coach::sample_coach;
use catalog::forms::{AuthFormData, FormField};
use catalog::sport::sample_sport;
use catalog::{
    Availability, CoachFilter, DayOfWeek, TimeSlot, ValidationError, lookup,
};
use jiff::ToSpan;
use jiff::civil::date;

#[test]
fn every_coach_is_found_by_part_of_their_name() {
    let sport = sample_sport();
    for coach in &sport.coaches {
        let first = coach.name.split_whitespace().next().unwrap();
        let queries = [
            first.to_uppercase(),
            first.to_lowercase(),
            coach.name[2..5].to_string(),
        ];
        for query in queries {
            let filter = CoachFilter::new(query.clone(), false);
            assert!(
                filter.apply(&sport.coaches).contains(&coach),
                "{query:?} should find {}",
                coach.name
            );
        }
    }
}

#[test]
fn unknown_name_finds_nobody() {
    let sport = sample_sport();
    let filter = CoachFilter::new("zzzz", false);
    assert!(filter.apply(&sport.coaches).is_empty());
}

#[test]
fn available_only_drops_unavailable_and_toggles_back() {
    let mut sport = sample_sport();
    sport.coaches[1].available = false;

    let mut filter = CoachFilter::default();
    let original = filter.apply(&sport.coaches);

    filter.toggle_available();
    let filtered = filter.apply(&sport.coaches);
    assert!(filtered.iter().all(|c| c.available));
    assert_eq!(filtered.len(), 1);

    filter.toggle_available();
    assert_eq!(filter.apply(&sport.coaches), original);
}

#[test]
fn monday_only_availability() {
    let availability = Availability::new().with_day(
        DayOfWeek::Monday,
        [TimeSlot::new(9, 0), TimeSlot::new(10, 0)],
    );
    let monday = date(2024, 1, 15);
    let slots: Vec<String> =
        availability.slots_on(monday).iter().map(ToString::to_string).collect();
    assert_eq!(slots, vec!["09:00", "10:00"]);
    assert!(availability.slots_on(monday.tomorrow().unwrap()).is_empty());
}

#[test]
fn sample_coach_week_matches_configuration() {
    let coach = sample_coach();
    let monday = date(2024, 1, 15);
    for offset in 0..7 {
        let day = monday.checked_add(offset.days()).unwrap();
        assert_eq!(
            coach.availability.slots_on(day),
            coach.availability.slots_for(DayOfWeek::of(day))
        );
    }
    let sunday: Vec<String> = coach
        .availability
        .slots_on(date(2024, 1, 21))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(sunday, vec!["15:00", "16:00", "17:00"]);
}

#[test]
fn registration_with_mismatched_passwords_fails() {
    let form = AuthFormData::default()
        .with(FormField::FirstName, "Jo")
        .with(FormField::LastName, "Doe")
        .with(FormField::Email, "jo@example.com")
        .with(FormField::Password, "a")
        .with(FormField::ConfirmPassword, "b");
    let err = form.validate_registration().unwrap_err();
    assert_eq!(err, ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match.");
}

#[test]
fn login_outcomes() {
    let filled = AuthFormData::default()
        .with(FormField::Email, "jo@example.com")
        .with(FormField::Password, "pw");
    assert!(filled.validate_login().is_ok());

    for missing in [FormField::Email, FormField::Password] {
        let form = filled.clone().with(missing, "");
        assert_eq!(
            form.validate_login(),
            Err(ValidationError::MissingRequiredFields)
        );
    }
}

#[test]
fn coach_routes_render_the_same_record() {
    assert_eq!(lookup::coach_by_id("123"), lookup::coach_by_id("456"));
    assert_eq!(
        lookup::sport_by_name("tennis"),
        lookup::sport_by_name("Football")
    );
    assert_eq!(lookup::coach_by_id("999").name, "Carlos Rodriguez");
}

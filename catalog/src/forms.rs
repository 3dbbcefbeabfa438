//! Client-side checks for the login, registration and booking forms.
//!
//! A check either passes, in which case the ui shows the matching success
//! toast (after a simulated delay for the auth forms), or fails with a
//! [`ValidationError`] whose `Display` text is the error toast.

use std::collections::BTreeMap;
use std::time::Duration;

use jiff::civil::Date;
use tracing::info;

use crate::{ACADEMY_NAME, SessionType, TimeSlot, format_date};

/// Stand-in for the login round trip.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);
/// Stand-in for the registration round trip.
pub const REGISTER_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please select a date and time for your session")]
    MissingDateOrTime,
    #[error("Please fill in all required fields to book a session")]
    MissingBookingFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Sport,
    Experience,
}

/// Field values of the sign-in page. Login and registration share one map,
/// so an email typed on one tab is already filled in on the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormData(BTreeMap<FormField, String>);

impl AuthFormData {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FormField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    fn all_filled(&self, fields: &[FormField]) -> bool {
        fields.iter().all(|field| !self.get(*field).is_empty())
    }

    /// Login needs an email and a password. Credentials are never checked.
    pub fn validate_login(&self) -> Result<(), ValidationError> {
        if !self.all_filled(&[FormField::Email, FormField::Password]) {
            info!("login rejected: missing fields");
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    /// The password match is checked before required fields, so a mismatch
    /// is reported even when other fields are blank.
    pub fn validate_registration(&self) -> Result<(), ValidationError> {
        if self.get(FormField::Password) != self.get(FormField::ConfirmPassword)
        {
            info!("registration rejected: passwords differ");
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.all_filled(&[
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Password,
        ]) {
            info!("registration rejected: missing fields");
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }
}

pub fn login_success_message() -> String {
    format!("Login successful! Welcome back to {ACADEMY_NAME}.")
}

pub fn registration_success_message() -> String {
    format!("Account created successfully! Welcome to {ACADEMY_NAME}.")
}

/// Selections on the booking calendar page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub sport: Option<String>,
    pub coach: Option<String>,
    pub session_type: SessionType,
    pub date: Option<Date>,
    pub time: Option<TimeSlot>,
}

impl BookingRequest {
    /// Returns the confirmation text when every required selection is made.
    pub fn confirm(&self) -> Result<String, ValidationError> {
        let chosen = |value: &Option<String>| {
            value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
        };
        match (self.date, self.time, chosen(&self.sport), chosen(&self.coach)) {
            (Some(date), Some(time), Some(sport), Some(coach)) => Ok(format!(
                "Session booked successfully! {sport} with {coach} on {} at {time}",
                format_date(date)
            )),
            _ => {
                info!("booking rejected: missing selections");
                Err(ValidationError::MissingBookingFields)
            }
        }
    }
}

/// Date and time picked in a coach profile's booking sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachBooking {
    pub date: Option<Date>,
    pub time: Option<TimeSlot>,
}

impl CoachBooking {
    pub fn confirm(&self, coach_name: &str) -> Result<String, ValidationError> {
        match (self.date, self.time) {
            (Some(date), Some(time)) => Ok(format!(
                "Session booked with {coach_name} on {} at {time}!",
                format_date(date)
            )),
            _ => {
                info!("coach booking rejected: no date or time");
                Err(ValidationError::MissingDateOrTime)
            }
        }
    }
}

pub fn roster_booking_message(coach_name: &str) -> String {
    format!("Booking session with {coach_name}! Redirecting to calendar...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn registration() -> AuthFormData {
        AuthFormData::default()
            .with(FormField::FirstName, "John")
            .with(FormField::LastName, "Doe")
            .with(FormField::Email, "john@example.com")
            .with(FormField::Password, "secret")
            .with(FormField::ConfirmPassword, "secret")
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let form = AuthFormData::default();
        assert_eq!(
            form.validate_login(),
            Err(ValidationError::MissingRequiredFields)
        );
        let form = form.with(FormField::Email, "a@b.c");
        assert_eq!(
            form.validate_login(),
            Err(ValidationError::MissingRequiredFields)
        );
        let form = form.with(FormField::Password, "pw");
        assert_eq!(form.validate_login(), Ok(()));
    }

    #[test]
    fn test_login_ignores_registration_fields() {
        let form = AuthFormData::default()
            .with(FormField::Email, "a@b.c")
            .with(FormField::Password, "pw")
            .with(FormField::ConfirmPassword, "different");
        assert_eq!(form.validate_login(), Ok(()));
    }

    #[test]
    fn test_registration_success() {
        assert_eq!(registration().validate_registration(), Ok(()));
        // Sport and experience are optional.
        assert_eq!(registration().get(FormField::Sport), "");
    }

    #[test]
    fn test_registration_mismatch_is_checked_first() {
        let form = AuthFormData::default()
            .with(FormField::Password, "a")
            .with(FormField::ConfirmPassword, "b");
        assert_eq!(
            form.validate_registration(),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_registration_missing_fields() {
        for field in [
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
        ] {
            let form = registration().with(field, "");
            assert_eq!(
                form.validate_registration(),
                Err(ValidationError::MissingRequiredFields),
                "{field:?}"
            );
        }
        // Blank matching passwords pass the match check but not the
        // required-field check.
        let form = registration()
            .with(FormField::Password, "")
            .with(FormField::ConfirmPassword, "");
        assert_eq!(
            form.validate_registration(),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Please fill in all required fields."
        );
    }

    #[test]
    fn test_booking_request() {
        let mut request = BookingRequest {
            date: Some(date(2024, 1, 15)),
            time: Some(TimeSlot::new(10, 0)),
            ..Default::default()
        };
        assert_eq!(
            request.confirm(),
            Err(ValidationError::MissingBookingFields)
        );

        request.sport = Some("Tennis".into());
        request.coach = Some(String::new());
        assert_eq!(
            request.confirm(),
            Err(ValidationError::MissingBookingFields)
        );

        request.coach = Some("Mike Chen".into());
        assert_eq!(
            request.confirm().unwrap(),
            "Session booked successfully! Tennis with Mike Chen on Mon Jan 15 2024 at 10:00"
        );
    }

    #[test]
    fn test_coach_booking() {
        let booking = CoachBooking {
            date: Some(date(2024, 1, 16)),
            time: None,
        };
        assert_eq!(
            booking.confirm("Carlos Rodriguez"),
            Err(ValidationError::MissingDateOrTime)
        );

        let booking = CoachBooking {
            time: Some(TimeSlot::new(9, 0)),
            ..booking
        };
        assert_eq!(
            booking.confirm("Carlos Rodriguez").unwrap(),
            "Session booked with Carlos Rodriguez on Tue Jan 16 2024 at 09:00!"
        );
    }
}

pub mod auth;
pub mod booking;
pub mod coach_profile;
pub mod home;
pub mod not_found;
pub mod sport_category;

pub use auth::AuthPage;
pub use booking::BookingPage;
pub use coach_profile::CoachProfilePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use sport_category::SportCategoryPage;

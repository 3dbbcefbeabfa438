pub mod calendar;
pub mod coach_avatar;
pub mod layout;
pub mod star_rating;
pub mod tab_bar;
pub mod toast;

pub use calendar::Calendar;
pub use coach_avatar::CoachAvatar;
pub use layout::{SiteFooter, SiteHeader};
pub use star_rating::StarRating;
pub use tab_bar::TabBar;
pub use toast::ToastContainer;

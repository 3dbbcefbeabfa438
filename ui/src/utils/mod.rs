pub mod time;

pub use time::today;

/// Path segment for a sport name, e.g. "Martial Arts" -> "martial-arts".
pub fn sport_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

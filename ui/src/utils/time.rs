use jiff::{Zoned, civil::Date};

/// Today's date in the browser's timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

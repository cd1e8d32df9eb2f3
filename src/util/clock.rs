//! Wall-clock access for the footer copyright line.

use chrono::Datelike;

/// Current calendar year in the viewer's local timezone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

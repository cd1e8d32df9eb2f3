//! Small browser-facing helpers.

pub mod clock;
pub mod notify;

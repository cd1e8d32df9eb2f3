//! Page components, one file per section.
//!
//! Every component here is a stateless renderer over the static content in
//! [`crate::content`], except the nav bar (menu flag) and the contact form
//! (field record), which own their local state as an `RwSignal`.

pub mod about;
pub mod contact;
pub mod footer;
pub mod home;
pub mod nav_bar;
pub mod projects;
pub mod skills;

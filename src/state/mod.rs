//! Local interaction state.
//!
//! DESIGN
//! ======
//! The page has exactly two pieces of mutable state, each exclusively
//! owned by one component: the nav bar's menu flag and the contact form's
//! field record. They are split by domain so the transition logic stays a
//! plain struct that unit-tests on the native target; components wrap them
//! in an `RwSignal`.

pub mod contact;
pub mod nav;

//! # devfolio
//!
//! Leptos + WASM single-page developer portfolio. A client-rendered page
//! with fixed sections (home, about, skills, projects), a contact form
//! with local validation, and a collapsible mobile navigation menu.
//!
//! This crate contains the page components, the static content they render,
//! the two pieces of local interaction state (menu flag, contact form), and
//! the injected notification capability used for form acknowledgements.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;

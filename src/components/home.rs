//! Hero section: name, tagline, and call-to-action.

use leptos::prelude::*;

use crate::content::{DEVELOPER_NAME, TAGLINE};

#[component]
pub fn HomeSection() -> impl IntoView {
    view! {
        <section id="home" class="section section--hero">
            <div class="section__inner">
                <h1 class="hero__name">{DEVELOPER_NAME}</h1>
                <p class="hero__tagline">{TAGLINE}</p>
                <a href="#projects" class="btn-primary">
                    "View Projects"
                </a>
            </div>
        </section>
    }
}

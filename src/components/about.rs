//! About section rendering the bio paragraphs.

use leptos::prelude::*;

use crate::content::BIO;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section section--alt">
            <div class="section__inner">
                <h2 class="section-title">"About Me"</h2>
                <div class="about__text">
                    {BIO
                        .iter()
                        .map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

//! Skills section: badge grid in declared order.

use leptos::prelude::*;

use crate::content::SKILLS;

/// Renders one badge per skill, preserving the declared list order.
#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section">
            <div class="section__inner">
                <h2 class="section-title">"My Skills"</h2>
                <div class="skills__grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill-badge">
                                    <span class="skill-badge__glyph">{skill.glyph}</span>
                                    <span class="skill-badge__label">{skill.label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

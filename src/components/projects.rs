//! Projects section: card grid with ordered technology tags.

use leptos::prelude::*;

use crate::content::PROJECTS;

/// Renders one card per project, preserving both the project order and each
/// project's technology-tag order.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section section--alt">
            <div class="section__inner">
                <h2 class="section-title">"My Projects"</h2>
                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="project-card">
                                    <h3 class="project-card__title">{project.title}</h3>
                                    <p class="project-card__description">{project.description}</p>
                                    <div class="project-card__tags">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! { <span class="project-card__tag">{*tech}</span> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

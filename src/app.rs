//! Root application component composing the page sections.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::home::HomeSection;
use crate::components::nav_bar::NavBar;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::content::DEVELOPER_NAME;
use crate::util::notify::Notifier;

/// Root component.
///
/// Pure composition in fixed vertical order; owns no state of its own.
/// Provides the notification capability consumed by the contact form.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Notifier::alert());

    view! {
        <Title text=format!("{DEVELOPER_NAME} | Portfolio")/>

        <NavBar/>
        <main>
            <HomeSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ContactSection/>
        </main>
        <Footer/>
    }
}

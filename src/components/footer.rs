//! Footer with the current-year copyright line.

use leptos::prelude::*;

use crate::content::DEVELOPER_NAME;
use crate::util::clock;

#[component]
pub fn Footer() -> impl IntoView {
    let year = clock::current_year();

    view! {
        <footer class="footer">
            <p class="footer__copyright">
                {format!("\u{a9} {year} {DEVELOPER_NAME}. All rights reserved.")}
            </p>
        </footer>
    }
}

//! Fixed top navigation with anchor links and a collapsible mobile menu.

use leptos::prelude::*;

use crate::content::{DEVELOPER_NAME, NAV_LINKS};
use crate::state::nav::NavState;

/// Fixed header with the brand link, the desktop link row, and a toggle
/// button for the mobile dropdown. Activating a mobile link closes the
/// dropdown before the browser follows the anchor.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let on_toggle = move |_| nav.update(NavState::toggle_menu);
    let menu_open = move || nav.get().menu_open;

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand">
                    {DEVELOPER_NAME}
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.anchor class="nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="navbar__toggle"
                    class=("navbar__toggle--open", menu_open)
                    on:click=on_toggle
                    aria-label="Toggle menu"
                >
                    <span class="navbar__bar"></span>
                    <span class="navbar__bar"></span>
                    <span class="navbar__bar"></span>
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.anchor
                                    class="nav-link"
                                    on:click=move |_| nav.update(NavState::follow_link)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}

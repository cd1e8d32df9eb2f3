#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Nav bar state: whether the collapsible mobile menu is open.
///
/// Owned exclusively by the nav bar component. The desktop link row
/// ignores this flag entirely; it only controls the mobile dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    /// Flip the mobile menu open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was activated. The mobile menu always ends up
    /// closed so it does not cover the section being navigated to.
    pub fn follow_link(&mut self) {
        self.menu_open = false;
    }
}

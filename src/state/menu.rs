//! Open/closed state of the navigation menus.
//!
//! DESIGN
//! ======
//! The mobile menu and the profile dropdown are independent; every operation
//! touches exactly one flag.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_menu_open: bool,
    pub profile_menu_open: bool,
}

impl MenuState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn open_profile_menu(&mut self) {
        self.profile_menu_open = true;
    }

    pub fn close_profile_menu(&mut self) {
        self.profile_menu_open = false;
    }
}

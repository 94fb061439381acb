//! Pure view model for the navigation bar.
//!
//! DESIGN
//! ======
//! All branching on session and menu state happens here, so the `Navbar`
//! component only maps model variants to markup and rendering rules can be
//! tested without a DOM.

#[cfg(test)]
#[path = "navbar_model_test.rs"]
mod navbar_model_test;

use crate::routes::{BRAND_LINK, LOGIN_LINK, NavLink, PRIMARY_LINKS, SIGNUP_LINK};
use crate::state::menu::MenuState;
use crate::state::session::SessionState;
use crate::util::text::capitalize_first;

/// Everything the navigation bar shows for one session/menu combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavModel {
    pub brand: NavLink,
    pub links: &'static [NavLink],
    pub desktop: DesktopAuth,
    pub menu_icon: MenuIcon,
    /// Present only while the mobile menu is open.
    pub mobile: Option<MobileMenu>,
}

/// Controls for signed-out (or not yet registered) visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuestControls {
    pub login: NavLink,
    pub signup: NavLink,
}

impl Default for GuestControls {
    fn default() -> Self {
        Self { login: LOGIN_LINK, signup: SIGNUP_LINK }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DesktopAuth {
    Guest(GuestControls),
    Profile(ProfileControls),
}

/// Avatar trigger plus the hover dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileControls {
    pub avatar: Avatar,
    pub dropdown: Option<ProfileDropdown>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDropdown {
    pub display_name: String,
    pub actions: [ProfileAction; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    EditProfile,
    Logout,
}

impl ProfileAction {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileAction::EditProfile => "Edit Profile",
            ProfileAction::Logout => "Logout",
        }
    }
}

/// Hamburger button glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuIcon {
    #[default]
    Hamburger,
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileMenu {
    pub links: &'static [NavLink],
    pub auth: MobileAuth,
}

/// Mobile menus show the profile inline instead of as a dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MobileAuth {
    Guest(GuestControls),
    Profile { display_name: String, user_type_label: String, action: ProfileAction },
}

/// Build the navigation model for the given session and menu state.
pub fn build_nav_model(session: &SessionState, menus: &MenuState) -> NavModel {
    NavModel {
        brand: BRAND_LINK,
        links: &PRIMARY_LINKS,
        desktop: desktop_auth(session, menus),
        menu_icon: if menus.mobile_menu_open { MenuIcon::Close } else { MenuIcon::Hamburger },
        mobile: menus.mobile_menu_open.then(|| MobileMenu { links: &PRIMARY_LINKS, auth: mobile_auth(session) }),
    }
}

fn desktop_auth(session: &SessionState, menus: &MenuState) -> DesktopAuth {
    if !shows_profile(session) {
        return DesktopAuth::Guest(GuestControls::default());
    }
    DesktopAuth::Profile(ProfileControls {
        avatar: avatar_for(session.avatar_url()),
        dropdown: menus.profile_menu_open.then(|| ProfileDropdown {
            display_name: session.display_name().to_owned(),
            actions: [ProfileAction::EditProfile, ProfileAction::Logout],
        }),
    })
}

fn mobile_auth(session: &SessionState) -> MobileAuth {
    if !shows_profile(session) {
        return MobileAuth::Guest(GuestControls::default());
    }
    MobileAuth::Profile {
        display_name: session.display_name().to_owned(),
        user_type_label: capitalize_first(session.user_type()),
        action: ProfileAction::Logout,
    }
}

fn shows_profile(session: &SessionState) -> bool {
    session.logged_in() && session.registration_complete()
}

fn avatar_for(url: &str) -> Avatar {
    if url.is_empty() { Avatar::Placeholder } else { Avatar::Image(url.to_owned()) }
}

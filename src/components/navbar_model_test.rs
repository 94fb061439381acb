use super::*;
use crate::routes::AppRoute;
use crate::state::session::Profile;

fn registered(avatar_url: &str) -> SessionState {
    SessionState::Registered(Profile {
        email: "a@b.com".to_owned(),
        user_type: "driver".to_owned(),
        display_name: "Ann".to_owned(),
        avatar_url: avatar_url.to_owned(),
    })
}

fn menus(mobile_menu_open: bool, profile_menu_open: bool) -> MenuState {
    MenuState { mobile_menu_open, profile_menu_open }
}

const ALL_MENUS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

// =============================================================
// Auth-dependent controls
// =============================================================

#[test]
fn logged_out_sessions_never_show_profile_controls() {
    for session in [SessionState::Anonymous, SessionState::PendingRegistration] {
        for (mobile, profile) in ALL_MENUS {
            let model = build_nav_model(&session, &menus(mobile, profile));
            assert_eq!(model.desktop, DesktopAuth::Guest(GuestControls::default()));
            if let Some(menu) = model.mobile {
                assert_eq!(menu.auth, MobileAuth::Guest(GuestControls::default()));
            }
        }
    }
}

#[test]
fn registered_session_never_shows_guest_controls() {
    let session = registered("");
    for (mobile, profile) in ALL_MENUS {
        let model = build_nav_model(&session, &menus(mobile, profile));
        assert!(matches!(model.desktop, DesktopAuth::Profile(_)));
        if let Some(menu) = model.mobile {
            assert!(matches!(menu.auth, MobileAuth::Profile { .. }));
        }
    }
}

#[test]
fn guest_controls_link_login_and_signup_to_auth() {
    let controls = GuestControls::default();
    assert_eq!(controls.login.label, "Log in");
    assert_eq!(controls.signup.label, "Sign up");
    assert_eq!(controls.login.route, AppRoute::Auth);
    assert_eq!(controls.signup.route, AppRoute::Auth);
}

// =============================================================
// Avatar + dropdown
// =============================================================

#[test]
fn avatar_uses_image_when_url_present() {
    let model = build_nav_model(&registered("https://img.test/ann.png"), &MenuState::default());
    let DesktopAuth::Profile(controls) = model.desktop else { panic!("expected profile controls") };
    assert_eq!(controls.avatar, Avatar::Image("https://img.test/ann.png".to_owned()));
}

#[test]
fn avatar_falls_back_to_placeholder() {
    let model = build_nav_model(&registered(""), &MenuState::default());
    let DesktopAuth::Profile(controls) = model.desktop else { panic!("expected profile controls") };
    assert_eq!(controls.avatar, Avatar::Placeholder);
}

#[test]
fn dropdown_only_while_profile_menu_open() {
    let closed = build_nav_model(&registered(""), &menus(false, false));
    let DesktopAuth::Profile(controls) = closed.desktop else { panic!("expected profile controls") };
    assert_eq!(controls.dropdown, None);

    let open = build_nav_model(&registered(""), &menus(false, true));
    let DesktopAuth::Profile(controls) = open.desktop else { panic!("expected profile controls") };
    let dropdown = controls.dropdown.expect("dropdown should be open");
    assert_eq!(dropdown.display_name, "Ann");
    assert_eq!(dropdown.actions, [ProfileAction::EditProfile, ProfileAction::Logout]);
}

#[test]
fn profile_action_labels() {
    assert_eq!(ProfileAction::EditProfile.label(), "Edit Profile");
    assert_eq!(ProfileAction::Logout.label(), "Logout");
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn mobile_menu_hidden_while_closed() {
    let model = build_nav_model(&registered(""), &menus(false, true));
    assert_eq!(model.mobile, None);
    assert_eq!(model.menu_icon, MenuIcon::Hamburger);
}

#[test]
fn mobile_menu_shows_inline_profile_with_capitalized_type() {
    let model = build_nav_model(&registered(""), &menus(true, false));
    assert_eq!(model.menu_icon, MenuIcon::Close);
    let menu = model.mobile.expect("mobile menu should be open");
    assert_eq!(
        menu.auth,
        MobileAuth::Profile {
            display_name: "Ann".to_owned(),
            user_type_label: "Driver".to_owned(),
            action: ProfileAction::Logout,
        }
    );
}

#[test]
fn static_links_present_in_every_state() {
    for session in [SessionState::Anonymous, SessionState::PendingRegistration, registered("")] {
        let model = build_nav_model(&session, &menus(true, false));
        assert_eq!(model.links.len(), 5);
        assert_eq!(model.brand.label, "RideWise");
        assert_eq!(model.mobile.map(|m| m.links.len()), Some(5));
    }
}

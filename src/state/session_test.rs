use super::*;

fn status(exists: bool, user_type: Option<&str>, user_name: Option<&str>) -> RegistrationStatus {
    RegistrationStatus {
        exists,
        user_type: user_type.map(str::to_owned),
        user_name: user_name.map(str::to_owned),
    }
}

fn assert_logged_out(state: &SessionState) {
    assert!(!state.logged_in());
    assert!(!state.registration_complete());
    assert_eq!(state.email(), "");
    assert_eq!(state.user_type(), "");
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_anonymous() {
    let state = SessionState::default();
    assert_eq!(state, SessionState::Anonymous);
    assert_logged_out(&state);
    assert_eq!(state.display_name(), "");
    assert_eq!(state.avatar_url(), "");
}

// =============================================================
// from_registration
// =============================================================

#[test]
fn registered_lookup_populates_profile() {
    let state = SessionState::from_registration("a@b.com", None, status(true, Some("driver"), Some("Ann")));
    assert!(state.logged_in());
    assert!(state.registration_complete());
    assert_eq!(state.email(), "a@b.com");
    assert_eq!(state.user_type(), "driver");
    assert_eq!(state.display_name(), "Ann");
    assert_eq!(state.avatar_url(), "");
}

#[test]
fn registered_lookup_defaults_missing_fields_to_empty() {
    let state = SessionState::from_registration("a@b.com", Some("https://img.test/a.png"), status(true, None, None));
    assert_eq!(state.user_type(), "");
    assert_eq!(state.display_name(), "");
    assert_eq!(state.avatar_url(), "https://img.test/a.png");
}

#[test]
fn unregistered_lookup_is_pending_and_flat_logged_out() {
    let state = SessionState::from_registration("a@b.com", None, status(false, Some("driver"), Some("Ann")));
    assert_eq!(state, SessionState::PendingRegistration);
    assert_logged_out(&state);
    assert!(state.profile().is_none());
}

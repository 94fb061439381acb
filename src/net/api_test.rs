use super::*;

#[test]
fn parse_registration_status_accepts_backend_payload() {
    let status = parse_registration_status(r#"{"exists":true,"userType":"passenger","userName":"Bo"}"#).unwrap();
    assert!(status.exists);
    assert_eq!(status.user_type.as_deref(), Some("passenger"));
    assert_eq!(status.user_name.as_deref(), Some("Bo"));
}

#[test]
fn parse_registration_status_rejects_non_json() {
    let err = parse_registration_status("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)));
}

#[test]
fn parse_registration_status_rejects_wrong_shape() {
    let err = parse_registration_status(r#"{"exists":"yes"}"#).unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_lookup_is_unavailable_off_browser() {
    let lookup = HttpRegistrationLookup::new(NavConfig::default());
    let result = futures::executor::block_on(lookup.registration_status("a@b.com"));
    assert_eq!(result, Err(LookupError::Unavailable));
}

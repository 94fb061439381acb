use super::*;

#[test]
fn lookup_email_requires_non_blank_email() {
    assert_eq!(Identity::default().lookup_email(), None);
    assert_eq!(Identity::with_email("  ").lookup_email(), None);
    assert_eq!(Identity::with_email("a@b.com").lookup_email(), Some("a@b.com"));
}

#[test]
fn photo_url_builder_sets_claim() {
    let identity = Identity::with_email("a@b.com").photo_url("https://img.test/a.png");
    assert_eq!(identity.photo_url.as_deref(), Some("https://img.test/a.png"));
}

#[test]
fn identity_error_messages() {
    assert_eq!(IdentityError::SignOut("network".to_owned()).to_string(), "sign-out failed: network");
    assert_eq!(IdentityError::Unavailable.to_string(), "identity provider unavailable");
}

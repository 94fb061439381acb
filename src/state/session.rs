//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the auth watcher, read by the navigation bar to decide between
//! guest controls and profile controls.
//!
//! DESIGN
//! ======
//! "Logged in" and "registration complete" always move together, so the
//! session is one tagged value instead of independent flags. The flat
//! accessors below give the flag view back for rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::RegistrationStatus;

/// Profile of a signed-in user who finished registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub email: String,
    pub user_type: String,
    pub display_name: String,
    /// Empty when the identity provider has no photo.
    pub avatar_url: String,
}

/// Component-local view of the current user's auth and profile state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No identity reported by the provider.
    #[default]
    Anonymous,
    /// Signed in with the provider, but the backend has no completed
    /// registration (or could not be asked).
    PendingRegistration,
    Registered(Profile),
}

impl SessionState {
    /// Session for `email` given a successful registration-status lookup.
    pub fn from_registration(email: &str, photo_url: Option<&str>, status: RegistrationStatus) -> Self {
        if !status.exists {
            return Self::PendingRegistration;
        }
        Self::Registered(Profile {
            email: email.to_owned(),
            user_type: status.user_type.unwrap_or_default(),
            display_name: status.user_name.unwrap_or_default(),
            avatar_url: photo_url.unwrap_or_default().to_owned(),
        })
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Registered(profile) => Some(profile),
            Self::Anonymous | Self::PendingRegistration => None,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.profile().is_some()
    }

    pub fn registration_complete(&self) -> bool {
        self.profile().is_some()
    }

    pub fn email(&self) -> &str {
        self.profile().map_or("", |p| p.email.as_str())
    }

    pub fn user_type(&self) -> &str {
        self.profile().map_or("", |p| p.user_type.as_str())
    }

    pub fn display_name(&self) -> &str {
        self.profile().map_or("", |p| p.display_name.as_str())
    }

    pub fn avatar_url(&self) -> &str {
        self.profile().map_or("", |p| p.avatar_url.as_str())
    }
}

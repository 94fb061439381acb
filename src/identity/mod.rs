//! Identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in itself belongs to an external identity service. The crate only
//! needs three things from it: a stream of "current user" notifications, a
//! way to stop listening, and sign-out. [`IdentityProvider`] captures exactly
//! that so the watcher can be driven by the browser adapter or by
//! [`memory::MemoryIdentityProvider`] on the server and in tests.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::sync::Arc;

use async_trait::async_trait;

/// Claims reported by the identity provider for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl Identity {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()), photo_url: None }
    }

    #[must_use]
    pub fn photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Email usable as a lookup key; blank emails count as absent.
    pub fn lookup_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.trim().is_empty())
    }
}

/// Errors produced by identity-provider operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider rejected or failed the sign-out call.
    #[error("sign-out failed: {0}")]
    SignOut(String),

    /// No identity adapter is installed in this environment.
    #[error("identity provider unavailable")]
    Unavailable,
}

/// Handle returned by [`IdentityProvider::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked on every auth-state transition with the current identity, if any.
pub type IdentityListener = Box<dyn Fn(Option<Identity>) + Send + Sync>;

/// External identity service with explicit subscribe/unsubscribe lifecycle.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Register `listener` for auth-state transitions.
    fn subscribe(&self, listener: IdentityListener) -> ListenerId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);

    /// End the provider session.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the provider fails to sign out.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Shared provider handle placed in Leptos context.
#[derive(Clone)]
pub struct IdentityHandle(pub Arc<dyn IdentityProvider>);

impl IdentityHandle {
    pub fn new(provider: impl IdentityProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    /// Provider for the current build target: the browser adapter when
    /// hydrating, an idle in-memory provider when rendering on the server.
    pub fn for_target() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(browser::BrowserIdentityProvider::default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(memory::MemoryIdentityProvider::default())
        }
    }
}

//! Identity-provider subscription that keeps the session current.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar owns one watcher per mount. Each auth-state transition
//! from the identity provider turns into at most one registration-status
//! lookup, and the outcome is written to the session sink.
//!
//! DESIGN
//! ======
//! Every transition takes the next request token. A result is written only
//! when its token is still the latest and the watcher is attached, so an
//! older lookup finishing late can never overwrite a newer session.
//!
//! ERROR HANDLING
//! ==============
//! Lookup failures degrade to `PendingRegistration` and sign-out failures
//! leave the session untouched. Both are logged; neither escapes.

#[cfg(test)]
#[path = "auth_watcher_test.rs"]
mod auth_watcher_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{self, LocalBoxFuture};

use super::session::SessionState;
use crate::identity::{Identity, IdentityProvider, ListenerId};
use crate::net::api::RegistrationLookup;
use crate::routes::AppRoute;

/// Receives every accepted session update.
pub type SessionSink = Arc<dyn Fn(SessionState) + Send + Sync>;

struct WatcherInner {
    identity: Arc<dyn IdentityProvider>,
    lookup: Arc<dyn RegistrationLookup>,
    sink: SessionSink,
    latest_token: AtomicU64,
    detached: AtomicBool,
    listener: Mutex<Option<ListenerId>>,
}

#[derive(Clone)]
pub struct AuthWatcher {
    inner: Arc<WatcherInner>,
}

impl AuthWatcher {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        lookup: Arc<dyn RegistrationLookup>,
        sink: impl Fn(SessionState) + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(WatcherInner {
                identity,
                lookup,
                sink: Arc::new(sink),
                latest_token: AtomicU64::new(0),
                detached: AtomicBool::new(false),
                listener: Mutex::new(None),
            }),
        }
    }

    /// Register the single identity listener. Each transition becomes a
    /// future handed to `spawn`.
    ///
    /// Attaching twice, or after [`AuthWatcher::detach`], does nothing.
    pub fn attach<S>(&self, spawn: S)
    where
        S: Fn(LocalBoxFuture<'static, ()>) + Send + Sync + 'static,
    {
        let mut listener = self.inner.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if listener.is_some() || self.is_detached() {
            leptos::logging::warn!("auth watcher attach ignored: already attached or detached");
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let id = self.inner.identity.subscribe(Box::new(move |identity| {
            if let Some(inner) = weak.upgrade() {
                spawn(AuthWatcher { inner }.handle_identity(identity));
            }
        }));
        *listener = Some(id);
    }

    /// Deregister the listener. No session writes happen afterwards.
    pub fn detach(&self) {
        self.inner.detached.store(true, Ordering::SeqCst);
        let id = self.inner.listener.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(id) = id {
            self.inner.identity.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.listener.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    pub fn is_detached(&self) -> bool {
        self.inner.detached.load(Ordering::SeqCst)
    }

    /// React to one auth-state transition.
    ///
    /// With no usable identity the session resets before this returns; the
    /// returned future is already complete. Otherwise the future performs the
    /// registration lookup and writes its outcome if still current.
    pub fn handle_identity(&self, identity: Option<Identity>) -> LocalBoxFuture<'static, ()> {
        let token = self.next_token();
        let Some((email, photo_url)) = identity
            .as_ref()
            .and_then(|i| i.lookup_email().map(|email| (email.to_owned(), i.photo_url.clone())))
        else {
            self.apply(token, SessionState::Anonymous);
            return Box::pin(future::ready(()));
        };

        let watcher = self.clone();
        Box::pin(async move {
            let state = match watcher.inner.lookup.registration_status(&email).await {
                Ok(status) => SessionState::from_registration(&email, photo_url.as_deref(), status),
                Err(e) => {
                    leptos::logging::error!("registration lookup for {email} failed: {e}");
                    SessionState::PendingRegistration
                }
            };
            watcher.apply(token, state);
        })
    }

    /// Sign out with the identity provider, then reset the session and
    /// navigate home. A failed sign-out is logged and changes nothing.
    pub fn logout<N>(&self, navigate: N) -> impl Future<Output = ()> + 'static
    where
        N: Fn(&str) + 'static,
    {
        let watcher = self.clone();
        async move {
            match watcher.inner.identity.sign_out().await {
                Ok(()) => {
                    let token = watcher.next_token();
                    watcher.apply(token, SessionState::Anonymous);
                    navigate(AppRoute::Home.path());
                }
                Err(e) => leptos::logging::error!("logout failed: {e}"),
            }
        }
    }

    fn next_token(&self) -> u64 {
        self.inner.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn apply(&self, token: u64, state: SessionState) -> bool {
        if self.is_detached() {
            log::debug!("auth watcher detached; dropping session update (token {token})");
            return false;
        }
        let latest = self.inner.latest_token.load(Ordering::SeqCst);
        if token != latest {
            log::debug!("discarding stale session update (token {token}, latest {latest})");
            return false;
        }
        (self.inner.sink)(state);
        true
    }
}

/// Navigate to the profile editor. Session state is not touched.
pub fn edit_profile<N>(navigate: N)
where
    N: Fn(&str),
{
    navigate(AppRoute::Profile.path());
}

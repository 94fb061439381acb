//! REST helpers for the RideWise registration-status endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the lookup reports `Unavailable`, since auth events
//! only arrive in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`LookupError`]; callers decide how to
//! degrade. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{LookupError, RegistrationStatus};
use crate::config::NavConfig;

/// Answers whether a signed-in email finished RideWise onboarding. Enables mocking in tests.
#[async_trait(?Send)]
pub trait RegistrationLookup: Send + Sync {
    /// Look up the registration status for `email`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if the request fails, the backend answers
    /// with a non-success status, or the body cannot be parsed.
    async fn registration_status(&self, email: &str) -> Result<RegistrationStatus, LookupError>;
}

/// Lookup backed by `GET {base}/api/auth/user/{email}`.
#[derive(Clone, Debug)]
pub struct HttpRegistrationLookup {
    config: NavConfig,
}

impl HttpRegistrationLookup {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }
}

/// Shared lookup handle placed in Leptos context.
#[derive(Clone)]
pub struct LookupHandle(pub Arc<dyn RegistrationLookup>);

impl LookupHandle {
    pub fn new(lookup: impl RegistrationLookup + 'static) -> Self {
        Self(Arc::new(lookup))
    }

    pub fn http(config: NavConfig) -> Self {
        Self::new(HttpRegistrationLookup::new(config))
    }
}

#[async_trait(?Send)]
impl RegistrationLookup for HttpRegistrationLookup {
    async fn registration_status(&self, email: &str) -> Result<RegistrationStatus, LookupError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.registration_status_url(email);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| LookupError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(LookupError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| LookupError::Request(e.to_string()))?;
            parse_registration_status(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, email);
            Err(LookupError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_registration_status(body: &str) -> Result<RegistrationStatus, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))
}

//! Wire DTOs and errors for the registration-status endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Failures of the registration-status lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("registration lookup request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("registration lookup returned status {0}")]
    Status(u16),

    /// The response body was not a registration status document.
    #[error("registration lookup response parse failed: {0}")]
    Parse(String),

    /// HTTP lookups only run in the browser.
    #[error("registration lookup not available outside the browser")]
    Unavailable,
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Body of `GET /api/auth/user/{email}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    /// Whether the user finished onboarding. Absent means `false`.
    #[serde(default)]
    pub exists: bool,
    /// `"driver"` or `"passenger"`, when registered.
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

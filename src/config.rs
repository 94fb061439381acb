//! Client configuration for the RideWise API endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no runtime environment, so the API base URL is fixed
//! at build time through `RIDEWISE_API_BASE_URL` and falls back to the
//! hosted backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://ridewise-server.vercel.app";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    pub api_base_url: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl NavConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `RIDEWISE_API_BASE_URL`: defaults to the hosted RideWise backend
    pub fn from_build_env() -> Self {
        Self { api_base_url: resolve_api_base_url(option_env!("RIDEWISE_API_BASE_URL")) }
    }

    /// Endpoint answering whether `email` has finished RideWise onboarding.
    pub fn registration_status_url(&self, email: &str) -> String {
        format!("{}/api/auth/user/{email}", self.api_base_url)
    }
}

fn resolve_api_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Request handlers never read environment variables; binaries read them in `main` and hand the
//! raw values to the helpers below.

use crate::constants::{
    API_KEY_MARKER, DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::{MediError, MediResult};
use std::time::Duration;

/// Chat assistant configuration resolved at startup.
#[derive(Clone)]
pub struct CoreConfig {
    api_key: String,
    model: String,
    api_base_url: String,
    request_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The API key is validated here so a misconfigured server fails before it binds.
    pub fn new(
        api_key: &str,
        model: Option<String>,
        api_base_url: Option<String>,
        request_timeout: Duration,
    ) -> MediResult<Self> {
        let api_key = validate_api_key(api_key)?;

        Ok(Self {
            api_key,
            model: non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.into()),
            api_base_url: non_blank(api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            request_timeout,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Check that an API key is present and looks like a chat API secret key.
pub fn validate_api_key(value: &str) -> MediResult<String> {
    let key = value.trim();
    if key.is_empty() || !key.contains(API_KEY_MARKER) {
        return Err(MediError::InvalidConfig(
            "OpenAI API key is missing. Set environment variable OPENAI_API_KEY on the server."
                .into(),
        ));
    }
    Ok(key.to_string())
}

/// Parse the request timeout from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn request_timeout_from_env_value(value: Option<String>) -> MediResult<Duration> {
    match non_blank(value) {
        None => Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        Some(v) => {
            let secs: u64 = v.parse().map_err(|_| {
                MediError::InvalidConfig(format!(
                    "MEDIBOT_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {v:?}"
                ))
            })?;
            if secs == 0 {
                return Err(MediError::InvalidConfig(
                    "MEDIBOT_REQUEST_TIMEOUT_SECS must be greater than zero".into(),
                ));
            }
            Ok(Duration::from_secs(secs))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

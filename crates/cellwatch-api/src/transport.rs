// Shared transport configuration for building reqwest::Client instances.
//
// The backend is a plain REST service; the only cross-cutting concerns are
// the request timeout and the optional bearer token, both injected here so
// endpoint code never touches header plumbing.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Request timeout. `None` uses reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    /// Bearer token sent as `Authorization: Bearer ...` on every request.
    ///
    /// The identity provider that issues this token is outside this crate;
    /// callers hand us an already-provisioned credential.
    pub bearer_token: Option<SecretString>,
}

impl TransportConfig {
    /// Config with a timeout and no credentials.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            bearer_token: None,
        }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder().user_agent("cellwatch/0.1.0");

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref token) = self.bearer_token {
            let mut headers = HeaderMap::new();
            let value = format!("Bearer {}", token.expose_secret());
            let mut value =
                HeaderValue::from_str(&value).map_err(|_| crate::error::Error::Unauthorized {
                    message: "bearer token contains non-header characters".into(),
                })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        builder
            .build()
            .map_err(crate::error::Error::Transport)
    }
}

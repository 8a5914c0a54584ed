// Telemetry backend HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, query construction, and
// response decoding. All endpoint groups (traffic, alerts, mobility,
// stats) are implemented as inherent methods via separate files under
// `endpoints/` to keep this module focused on transport mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// HTTP client for the cellwatch telemetry backend.
///
/// The backend returns bare JSON payloads (no envelope); this client's job
/// is URL construction, status-code mapping, and decoding. A non-2xx
/// status becomes [`Error::Api`] with the body text preserved; a body that
/// fails to decode becomes [`Error::Deserialization`] carrying the raw
/// body for debugging.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a base URL (e.g. `http://localhost:8080/api`)
    /// and a [`TransportConfig`].
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path plus query pairs.
    ///
    /// The base URL's path prefix (commonly `/api`) is preserved; `path`
    /// is appended to it.
    pub(crate) fn endpoint_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.endpoint_url(path, query)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Send a bodyless POST request and decode the JSON response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.endpoint_url(path, query)?;
        debug!("POST {}", url);

        let resp = self.http.post(url).send().await.map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Send a bodyless POST request, discarding any response body.
    pub(crate) async fn post_no_content(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), Error> {
        let url = self.endpoint_url(path, query)?;
        debug!("POST {}", url);

        let resp = self.http.post(url).send().await.map_err(Error::Transport)?;
        Self::check_status(&resp)?;
        Ok(())
    }

    /// Map non-success statuses to errors, leaving the response untouched
    /// on success.
    fn check_status(resp: &reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized {
                message: "bearer token missing or rejected".into(),
            });
        }
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .into(),
            });
        }
        Ok(())
    }

    /// Decode a response body, mapping failures to the error taxonomy.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized {
                message: "bearer token missing or rejected".into(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .into()
                } else {
                    body
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

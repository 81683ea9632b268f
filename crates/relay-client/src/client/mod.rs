//! Submission client.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};
use url::Url;

use relay_core::Bundle;

use crate::auth::TokenProvider;
use crate::error::{SubmitError, SubmitResult};
use crate::types::{ClientConfig, SubmitOutcome, SubmitTarget};

mod form;
mod http;

use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("relay-client/", env!("CARGO_PKG_VERSION"));

/// Client for submitting result bundles to the dashboard.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    http: HttpBackend,
}

impl SubmitClient {
    pub fn new(config: ClientConfig) -> SubmitResult<Self> {
        let token_provider = config
            .token
            .as_ref()
            .map(TokenProvider::static_token)
            .unwrap_or_else(TokenProvider::from_env);

        Self::with_token_provider(config, token_provider)
    }

    pub fn with_token_provider(
        config: ClientConfig,
        token_provider: TokenProvider,
    ) -> SubmitResult<Self> {
        Url::parse(&config.base_url).map_err(|e| SubmitError::Config {
            message: format!("invalid base URL {}: {}", config.base_url, e),
        })?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| SubmitError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http: HttpBackend {
                client,
                base_url,
                token_provider,
                require_token: config.require_token,
            },
        })
    }

    pub fn from_env() -> SubmitResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Submit a bundle to the target's endpoint.
    ///
    /// With no usable token this either skips (lenient) or fails with
    /// [`SubmitError::Unauthenticated`] (strict); no request is made in
    /// either case. The call is made at most once — retrying on a
    /// [`SubmitError::Network`] is the caller's decision.
    pub async fn submit(
        &self,
        bundle: &Bundle,
        target: &SubmitTarget,
    ) -> SubmitResult<SubmitOutcome> {
        let token = match self.http.token_provider.token() {
            Some(token) if !token.is_empty() => token,
            _ => {
                if self.http.require_token {
                    return Err(SubmitError::Unauthenticated);
                }
                info!("no auth token configured, skipping submission");
                return Ok(SubmitOutcome::SkippedNoToken);
            }
        };

        let url = format!("{}/{}", self.http.base_url, target.path());
        debug!(url = %url, tests = bundle.tests.len(), "submitting result bundle");

        let payload = form::bundle_form(bundle)?;
        let id = self.http.post_bundle(&url, token, payload).await?;

        Ok(SubmitOutcome::Accepted(id))
    }

    /// Whether a token is configured.
    pub fn is_authenticated(&self) -> bool {
        self.http.token_provider.is_authenticated()
    }
}

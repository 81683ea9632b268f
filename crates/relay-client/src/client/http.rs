//! HTTP layer: the request itself, status mapping, submission id
//! extraction.
//!
//! This is the ONLY place for status code handling. client/mod.rs never
//! interprets status codes.

use chrono::Utc;
use reqwest::multipart::Form;
use tracing::debug;

use crate::auth::TokenProvider;
use crate::error::{SubmitError, SubmitResult};
use crate::types::SubmissionId;

/// Header carrying the submission token. The token travels only here,
/// never in the URL or the body.
pub(crate) const AUTH_HEADER: &str = "Auth-Token";

/// HTTP backend for making requests (holds reqwest client, auth, config).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token_provider: TokenProvider,
    pub(crate) require_token: bool,
}

impl HttpBackend {
    /// POST a multipart bundle; 2xx yields a submission id, everything
    /// else maps to an error.
    pub(crate) async fn post_bundle(
        &self,
        url: &str,
        token: &str,
        payload: Form,
    ) -> SubmitResult<SubmissionId> {
        let response = self
            .client
            .post(url)
            .header(AUTH_HEADER, token)
            .multipart(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| SubmitError::Network {
            message: format!("failed to read response body: {}", e),
        })?;

        let id = match body.trim() {
            "" => {
                debug!("empty response body, synthesizing submission id");
                SubmissionId::synthesized(url, Utc::now())
            }
            trimmed => SubmissionId::from_body(trimmed),
        };

        Ok(id)
    }
}

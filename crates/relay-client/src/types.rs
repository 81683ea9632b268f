//! Configuration and outcome types for the submission client.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL used when neither config nor environment name one.
pub const DEFAULT_BASE_URL: &str = "https://reports.relayci.dev";

/// Client configuration, resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the dashboard.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Submission token.
    #[serde(default)]
    pub token: Option<String>,

    /// Treat a missing token as a hard failure instead of skipping the
    /// submission.
    #[serde(default)]
    pub require_token: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            require_token: false,
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `SUBMIT_TO` | Base URL override |
    /// | `AUTH_TOKEN` | Submission token |
    /// | `RELAY_REQUIRE_TOKEN` | Missing token is a hard failure |
    /// | `RELAY_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SUBMIT_TO").unwrap_or_else(|_| default_base_url()),
            token: std::env::var("AUTH_TOKEN").ok().filter(|t| !t.is_empty()),
            require_token: std::env::var("RELAY_REQUIRE_TOKEN")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            timeout_secs: std::env::var("RELAY_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Require a token to be configured.
    pub fn with_require_token(mut self, require: bool) -> Self {
        self.require_token = require;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Where on the dashboard a submission lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTarget {
    pub team: String,
    pub project: String,
    pub build: String,
    pub environment: String,
}

impl SubmitTarget {
    pub fn new(
        team: impl Into<String>,
        project: impl Into<String>,
        build: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            team: team.into(),
            project: project.into(),
            build: build.into(),
            environment: environment.into(),
        }
    }

    /// Path of the submission endpoint relative to the base URL.
    pub fn path(&self) -> String {
        format!(
            "api/submit/{}/{}/{}/{}",
            self.team, self.project, self.build, self.environment
        )
    }
}

/// Identifier assigned to an accepted submission.
///
/// Taken from the response body when the service provides one; otherwise
/// synthesized from the endpoint and the submission time, so every accepted
/// submission has a printable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Derive an id from a non-empty response body. A JSON object body
    /// contributes its `id` field; anything else is used verbatim.
    pub(crate) fn from_body(body: &str) -> Self {
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) {
            match map.get("id") {
                Some(serde_json::Value::String(id)) => return Self(id.clone()),
                Some(serde_json::Value::Number(id)) => return Self(id.to_string()),
                _ => {}
            }
        }
        Self(body.to_string())
    }

    pub(crate) fn synthesized(endpoint: &str, at: DateTime<Utc>) -> Self {
        Self(format!("{}@{}", endpoint, at.timestamp()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a submit call that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service accepted the bundle.
    Accepted(SubmissionId),

    /// No token configured and the deployment does not require one; the
    /// submission was skipped without any request being made.
    SkippedNoToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_path_has_all_segments() {
        let target = SubmitTarget::new("team", "proj", "v1.0", "arm64");
        assert_eq!(target.path(), "api/submit/team/proj/v1.0/arm64");
    }

    #[test]
    fn id_from_plain_body() {
        assert_eq!(SubmissionId::from_body("1234").as_str(), "1234");
    }

    #[test]
    fn id_from_json_object_body() {
        assert_eq!(SubmissionId::from_body(r#"{"id": "run-7"}"#).as_str(), "run-7");
        assert_eq!(SubmissionId::from_body(r#"{"id": 42}"#).as_str(), "42");
    }

    #[test]
    fn json_body_without_id_is_used_verbatim() {
        let body = r#"{"status": "created"}"#;
        assert_eq!(SubmissionId::from_body(body).as_str(), body);
    }

    #[test]
    fn synthesized_id_names_the_endpoint() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let id = SubmissionId::synthesized("https://reports.example.com/api/submit/t/p/b/e", at);
        assert_eq!(
            id.as_str(),
            "https://reports.example.com/api/submit/t/p/b/e@1700000000"
        );
    }

    #[test]
    fn default_config_is_lenient() {
        let config = ClientConfig::default();
        assert!(!config.require_token);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}

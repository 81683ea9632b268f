//! Submission client for the Relay reporting API.
//!
//! Serializes a [`relay_core::Bundle`] into a multipart request and POSTs
//! it to the dashboard's submission endpoint with token-header
//! authentication.
//!
//! # Quick start
//!
//! ```no_run
//! use relay_client::{ClientConfig, SubmitClient, SubmitTarget};
//!
//! # async fn example(bundle: relay_core::Bundle) -> Result<(), relay_client::SubmitError> {
//! let client = SubmitClient::new(ClientConfig::from_env())?;
//! let target = SubmitTarget::new("lkft", "linux-next", "20260808", "default");
//! let outcome = client.submit(&bundle, &target).await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment variable | Description |
//! |----------------------|-------------|
//! | `SUBMIT_TO` | Dashboard base URL override |
//! | `AUTH_TOKEN` | Submission token (empty counts as unset) |
//! | `RELAY_REQUIRE_TOKEN` | Treat a missing token as a hard failure |
//! | `RELAY_TIMEOUT` | Request timeout in seconds (default: 30) |
//!
//! With no token configured the client either skips the submission
//! ([`SubmitOutcome::SkippedNoToken`]) or fails with
//! [`SubmitError::Unauthenticated`], depending on `require_token`. In both
//! cases no request is sent.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::TokenProvider;
pub use client::SubmitClient;
pub use error::{SubmitError, SubmitResult};
pub use types::{ClientConfig, SubmissionId, SubmitOutcome, SubmitTarget, DEFAULT_BASE_URL};

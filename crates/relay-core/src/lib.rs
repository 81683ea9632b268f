//! Core types for the Relay reporting client.
//!
//! This crate holds everything that happens before the network: parsing a
//! test-runner log into structured results, loading metric series, and
//! assembling the submission bundle. It performs no HTTP; that lives in
//! `relay-client`.
//!
//! The flow per invocation is strictly sequential:
//!
//! 1. [`logparse::parse_log`] turns the log into a [`TestResults`] mapping.
//! 2. [`Bundle::build`] combines results, metrics and the run context into
//!    an immutable [`Bundle`].
//! 3. The bundle is handed to the submission client by reference.

pub mod bundle;
pub mod config;
pub mod errors;
pub mod logparse;
pub mod metrics;
pub mod results;

pub use bundle::{Attachment, Bundle, Metadata};
pub use config::{RunContext, DEFAULT_ENVIRONMENT};
pub use errors::{CoreError, CoreResult};
pub use metrics::{MetricSeries, Metrics};
pub use results::{Outcome, TestResults};

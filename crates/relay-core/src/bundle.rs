//! The submission bundle: metadata, metrics, tests and attachments.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RunContext;
use crate::errors::{CoreError, CoreResult};
use crate::metrics::Metrics;
use crate::results::TestResults;

/// Fields the dashboard expects in the submitted metadata JSON.
///
/// Immutable once constructed; `datetime` is captured when the bundle is
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub job_id: String,
    pub job_url: String,
    pub build_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,
}

/// A file uploaded alongside the JSON parts, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}

impl Attachment {
    /// Read a file into an attachment, keeping only its final path
    /// component as the upload filename.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let data = fs::read(path).map_err(|e| CoreError::io(path, e))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { filename, data })
    }
}

/// The full payload submitted in one request.
///
/// Created fresh per invocation and handed to the submission client by
/// shared reference; never persisted.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub metadata: Metadata,
    pub metrics: Metrics,
    pub tests: TestResults,
    pub attachments: Vec<Attachment>,
}

impl Bundle {
    /// Assemble a bundle from the run context and collected artifacts.
    ///
    /// The three CI identifier fields must be non-empty; a missing one is a
    /// [`CoreError::Config`] here, not a deferred submission failure.
    pub fn build(
        ctx: &RunContext,
        metrics: Metrics,
        tests: TestResults,
        attachments: Vec<Attachment>,
    ) -> CoreResult<Self> {
        let metadata = Metadata {
            job_id: required(&ctx.job_id, "job_id")?,
            job_url: required(&ctx.job_url, "job_url")?,
            build_url: required(&ctx.build_url, "build_url")?,
            datetime: Some(Utc::now()),
        };

        Ok(Self {
            metadata,
            metrics,
            tests,
            attachments,
        })
    }
}

fn required(value: &str, field: &'static str) -> CoreResult<String> {
    if value.is_empty() {
        return Err(CoreError::Config { field });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENVIRONMENT;
    use crate::metrics::MetricSeries;
    use crate::results::Outcome;

    fn context() -> RunContext {
        RunContext {
            team: "lkft".into(),
            project: "linux-next".into(),
            build: "20260808".into(),
            environment: DEFAULT_ENVIRONMENT.into(),
            job_id: "1234".into(),
            job_url: "https://ci.example.com/job/1234".into(),
            build_url: "https://ci.example.com/build/99".into(),
        }
    }

    #[test]
    fn build_captures_metadata_and_timestamp() {
        let bundle = Bundle::build(&context(), Metrics::new(), TestResults::new(), vec![]).unwrap();
        assert_eq!(bundle.metadata.job_id, "1234");
        assert!(bundle.metadata.datetime.is_some());
    }

    #[test]
    fn empty_job_id_fails_at_build_time() {
        let mut ctx = context();
        ctx.job_id.clear();

        let err = Bundle::build(&ctx, Metrics::new(), TestResults::new(), vec![]).unwrap_err();
        assert!(matches!(err, CoreError::Config { field: "job_id" }));
    }

    #[test]
    fn empty_build_url_fails_at_build_time() {
        let mut ctx = context();
        ctx.build_url.clear();

        let err = Bundle::build(&ctx, Metrics::new(), TestResults::new(), vec![]).unwrap_err();
        assert!(matches!(err, CoreError::Config { field: "build_url" }));
    }

    #[test]
    fn metadata_json_round_trips() {
        let bundle = Bundle::build(&context(), Metrics::new(), TestResults::new(), vec![]).unwrap();

        let json = serde_json::to_string(&bundle.metadata).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle.metadata);
    }

    #[test]
    fn bundle_parts_round_trip_values() {
        let mut tests = TestResults::new();
        tests.insert("suite.case", Outcome::Pass);
        let metrics: Metrics = [MetricSeries::new("build/time", vec![12.5])]
            .into_iter()
            .collect();

        let bundle = Bundle::build(&context(), metrics.clone(), tests.clone(), vec![]).unwrap();

        let tests_back: TestResults =
            serde_json::from_str(&serde_json::to_string(&bundle.tests).unwrap()).unwrap();
        let metrics_back: Metrics =
            serde_json::from_str(&serde_json::to_string(&bundle.metrics).unwrap()).unwrap();
        assert_eq!(tests_back, tests);
        assert_eq!(metrics_back, metrics);
    }

    #[test]
    fn attachment_keeps_final_path_component() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boot.log");
        std::fs::write(&path, b"boot output").unwrap();

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.filename, "boot.log");
        assert_eq!(attachment.data, b"boot output");
    }

    #[test]
    fn missing_attachment_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Attachment::from_path(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}

//! Run context resolved once at startup.

/// Environment label used when the caller does not name one.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Everything the CLI resolves about the current run before any work
/// happens: routing identifiers for the dashboard and the CI job fields
/// recorded in the submission metadata. Passed down by reference; nothing
/// reads the process environment after this is built.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Team slug on the dashboard.
    pub team: String,
    /// Project slug on the dashboard.
    pub project: String,
    /// Build label, e.g. a version or a date stamp.
    pub build: String,
    /// Environment label, e.g. a board or distro name.
    pub environment: String,

    /// CI job identifier, unique per build.
    pub job_id: String,
    /// URL of the CI job page.
    pub job_url: String,
    /// URL of the build the job ran against.
    pub build_url: String,
}

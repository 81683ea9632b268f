use clap::{Parser, Subcommand};
use std::path::PathBuf;

use relay_core::DEFAULT_ENVIRONMENT;

#[derive(Parser)]
#[command(
    name = "relay",
    version,
    about = "CI result reporting client — parse a test log, bundle results and metrics, submit them to the dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a test log and submit the results to the dashboard
    Submit(SubmitArgs),
    /// Parse a test log and print the summary without submitting
    Parse(ParseArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Team slug on the dashboard
    #[arg(long)]
    pub team: String,

    /// Project slug on the dashboard
    #[arg(long)]
    pub project: String,

    /// Build label (default: current UTC date, YYYYMMDD)
    #[arg(long)]
    pub build: Option<String>,

    /// Environment label
    #[arg(long, default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Test-runner log to parse
    #[arg(long, default_value = "test.log")]
    pub log: PathBuf,

    /// Metrics JSON file (series name -> number or array of numbers)
    #[arg(long)]
    pub metrics: Option<PathBuf>,

    /// File to upload as an attachment (repeatable)
    #[arg(long = "attach")]
    pub attachments: Vec<PathBuf>,

    /// CI job id recorded in the submission metadata
    #[arg(long, env = "RELAY_JOB_ID")]
    pub job_id: String,

    /// URL of the CI job page
    #[arg(long, env = "RELAY_JOB_URL")]
    pub job_url: String,

    /// URL of the build the job ran against
    #[arg(long, env = "RELAY_BUILD_URL")]
    pub build_url: String,

    /// Dashboard base URL
    #[arg(long, env = "SUBMIT_TO")]
    pub url: Option<String>,

    /// Submission token (prefer the environment variable)
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Fail instead of skipping when no token is configured
    #[arg(long)]
    pub require_token: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Retry the submission once if the endpoint is unreachable
    #[arg(long)]
    pub retry: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ParseArgs {
    /// Test-runner log to parse
    #[arg(long, default_value = "test.log")]
    pub log: PathBuf,
}

use chrono::Utc;
use tracing::warn;

use relay_client::{ClientConfig, SubmitClient, SubmitError, SubmitOutcome, SubmitTarget};
use relay_core::{logparse, metrics, Attachment, Bundle, CoreError, Metrics, RunContext};

use super::super::args::SubmitArgs;
use super::summary::format_test_summary;
use crate::exit_codes;

pub(crate) async fn run(args: SubmitArgs) -> anyhow::Result<i32> {
    let ctx = RunContext {
        team: args.team.clone(),
        project: args.project.clone(),
        build: args
            .build
            .clone()
            .unwrap_or_else(|| Utc::now().format("%Y%m%d").to_string()),
        environment: args.environment.clone(),
        job_id: args.job_id.clone(),
        job_url: args.job_url.clone(),
        build_url: args.build_url.clone(),
    };

    let bundle = match assemble(&args, &ctx) {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    print!("{}", format_test_summary(&bundle.tests));
    let tests_failed = bundle.tests.has_failures();

    // clap already resolved the env fallbacks (SUBMIT_TO, AUTH_TOKEN), so
    // the config is built from the arguments alone.
    let mut config = ClientConfig::default()
        .with_require_token(args.require_token)
        .with_timeout_secs(args.timeout);
    if let Some(url) = &args.url {
        config = config.with_base_url(url.clone());
    }
    if let Some(token) = &args.token {
        config = config.with_token(token.clone());
    }

    let client = match SubmitClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let target = SubmitTarget::new(&ctx.team, &ctx.project, &ctx.build, &ctx.environment);
    let submit_failed = match submit_once_or_twice(&client, &bundle, &target, args.retry).await {
        Ok(SubmitOutcome::Accepted(id)) => {
            println!("submission accepted: {id}");
            false
        }
        Ok(SubmitOutcome::SkippedNoToken) => {
            println!("no token configured, submission skipped");
            false
        }
        Err(e) => {
            eprintln!("submission failed: {e}");
            true
        }
    };

    if tests_failed {
        return Ok(exit_codes::TESTS_FAILED);
    }
    if submit_failed {
        return Ok(exit_codes::SUBMIT_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}

fn assemble(args: &SubmitArgs, ctx: &RunContext) -> Result<Bundle, CoreError> {
    let tests = logparse::parse_log(&args.log)?;

    let series = match &args.metrics {
        Some(path) => metrics::load_metrics(path)?,
        None => Metrics::new(),
    };

    let mut attachments = Vec::with_capacity(args.attachments.len());
    for path in &args.attachments {
        attachments.push(Attachment::from_path(path)?);
    }

    Bundle::build(ctx, series, tests, attachments)
}

/// One submit call, plus at most one more when `--retry` is set and the
/// first attempt failed on the network. Rejections are never retried.
async fn submit_once_or_twice(
    client: &SubmitClient,
    bundle: &Bundle,
    target: &SubmitTarget,
    retry: bool,
) -> Result<SubmitOutcome, SubmitError> {
    match client.submit(bundle, target).await {
        Err(e) if retry && e.is_retryable() => {
            warn!(error = %e, "submission failed, retrying once");
            client.submit(bundle, target).await
        }
        other => other,
    }
}

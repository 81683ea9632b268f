//! Test-runner log parsing.
//!
//! The input is the raw stdout/stderr interleaving of a test run. Only lines
//! that look like a test record are consumed; everything else is skipped.
//! A recognized line has the shape
//!
//! ```text
//! test_<name> (<group>) ... <status>
//! ```
//!
//! where `<status>` is the last whitespace-delimited token on the line. A
//! status exactly equal to [`PASS_SENTINEL`] is a pass; any other status is
//! a fail.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{CoreError, CoreResult};
use crate::results::{Outcome, TestResults};

/// Status token that marks a passing test.
pub const PASS_SENTINEL: &str = "ok";

const TEST_PREFIX: &str = "test_";

/// One recognized test-record line.
#[derive(Debug, PartialEq, Eq)]
struct LineRecord<'a> {
    group: &'a str,
    name: &'a str,
    status: &'a str,
}

impl LineRecord<'_> {
    fn identifier(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }

    fn outcome(&self) -> Outcome {
        if self.status == PASS_SENTINEL {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

/// Tokenize one line into a record, or `None` if the line is not a test
/// record. Never fails.
fn tokenize(line: &str) -> Option<LineRecord<'_>> {
    let mut tokens = line.split_whitespace();

    let name = tokens.next()?.strip_prefix(TEST_PREFIX)?;
    let group = tokens
        .next()?
        .trim_start_matches('(')
        .trim_end_matches(')');
    // The status is the last token; a two-token line has none.
    let status = tokens.next_back()?;

    if name.is_empty() || group.is_empty() {
        return None;
    }

    Some(LineRecord {
        group,
        name,
        status,
    })
}

/// Parse a sequence of log lines into a result mapping.
///
/// Pure over its input: unrecognized lines are skipped (noted at debug
/// level), duplicate identifiers keep the last outcome seen, and a
/// pattern-free input yields an empty mapping.
pub fn parse_lines<I, S>(lines: I) -> TestResults
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = TestResults::new();
    for line in lines {
        let line = line.as_ref();
        match tokenize(line) {
            Some(record) => results.insert(record.identifier(), record.outcome()),
            None => {
                if !line.trim().is_empty() {
                    debug!(line, "skipping unrecognized log line");
                }
            }
        }
    }
    results
}

/// Read and parse a log file.
///
/// A missing or unreadable file is an [`CoreError::Io`]; an empty file is
/// an empty mapping, not an error.
pub fn parse_log(path: &Path) -> CoreResult<TestResults> {
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    Ok(parse_lines(text.lines()))
}

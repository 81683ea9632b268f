//! Console summary formatting. Deterministic, unit-testable.

use relay_core::TestResults;

/// Format the one-block test summary printed by both commands.
#[must_use]
pub(crate) fn format_test_summary(results: &TestResults) -> String {
    let mut out = format!(
        "{} tests: {} passed, {} failed\n",
        results.len(),
        results.passed_count(),
        results.failed_count()
    );
    for id in results.failed() {
        out.push_str("  FAIL ");
        out.push_str(id);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::Outcome;

    #[test]
    fn summary_lists_failures_in_order() {
        let mut results = TestResults::new();
        results.insert("g.a", Outcome::Pass);
        results.insert("g.b", Outcome::Fail);
        results.insert("g.c", Outcome::Fail);

        let text = format_test_summary(&results);
        assert_eq!(text, "3 tests: 1 passed, 2 failed\n  FAIL g.b\n  FAIL g.c\n");
    }

    #[test]
    fn summary_of_empty_results() {
        let text = format_test_summary(&TestResults::new());
        assert_eq!(text, "0 tests: 0 passed, 0 failed\n");
    }
}

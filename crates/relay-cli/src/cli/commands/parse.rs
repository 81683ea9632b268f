use super::super::args::ParseArgs;
use super::summary::format_test_summary;
use crate::exit_codes;

use relay_core::logparse;

pub(crate) fn run(args: ParseArgs) -> anyhow::Result<i32> {
    let results = match logparse::parse_log(&args.log) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    print!("{}", format_test_summary(&results));

    if results.has_failures() {
        return Ok(exit_codes::TESTS_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}

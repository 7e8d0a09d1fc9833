//! Test result tally rendered as a Jira wiki-markup table.

use crate::config::read_var;
use serde::Serialize;

/// Total number of tests that ran.
pub const TOTAL_TESTS_ENV: &str = "TOTAL_TESTS";
/// Number of passing tests.
pub const PASSED_TESTS_ENV: &str = "PASSED_TESTS";
/// Number of skipped tests.
pub const SKIPPED_TESTS_ENV: &str = "SKIPPED_TESTS";
/// Number of failing tests.
pub const FAILED_TESTS_ENV: &str = "FAILED_TESTS";

/// Rendered in place of a count that was not provided.
pub const MISSING_COUNT: &str = "None";

const HEADER: &str = "|Tests |Passed ✅ |Skipped ⏭️ |Failed ❌ ||";

/// Test counts as reported by the test step.
///
/// Counts are kept as the text the CI provided; they are displayed, never
/// checked for consistency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestTally {
    pub ran: Option<String>,
    pub passed: Option<String>,
    pub skipped: Option<String>,
    pub failed: Option<String>,
}

impl TestTally {
    /// Reads the counts from `TOTAL_TESTS`, `PASSED_TESTS`, `SKIPPED_TESTS`
    /// and `FAILED_TESTS`.
    pub fn from_env() -> Self {
        Self {
            ran: read_var(TOTAL_TESTS_ENV),
            passed: read_var(PASSED_TESTS_ENV),
            skipped: read_var(SKIPPED_TESTS_ENV),
            failed: read_var(FAILED_TESTS_ENV),
        }
    }

    /// Renders the two-row report table.
    #[must_use]
    pub fn to_table(&self) -> String {
        format!(
            "{HEADER}\n|Test Report |{} ran |{} passed |{} skipped |{} failed |",
            display(&self.ran),
            display(&self.passed),
            display(&self.skipped),
            display(&self.failed),
        )
    }

    /// Reads counts back out of a table produced by [`TestTally::to_table`].
    ///
    /// The placeholder for a missing count reads back as `None`. Returns
    /// `None` if the text is not a report table.
    #[must_use]
    pub fn parse_table(table: &str) -> Option<Self> {
        let (header, row) = table.split_once('\n')?;
        if header != HEADER {
            return None;
        }

        let row = row.strip_prefix("|Test Report |")?.strip_suffix(" |")?;
        let cells: Vec<&str> = row.split(" |").collect();
        let [ran, passed, skipped, failed] = cells.as_slice() else {
            return None;
        };

        Some(Self {
            ran: parse_cell(ran, "ran")?,
            passed: parse_cell(passed, "passed")?,
            skipped: parse_cell(skipped, "skipped")?,
            failed: parse_cell(failed, "failed")?,
        })
    }
}

fn display(count: &Option<String>) -> &str {
    count.as_deref().unwrap_or(MISSING_COUNT)
}

fn parse_cell(cell: &str, label: &str) -> Option<Option<String>> {
    let count = cell.strip_suffix(label)?.strip_suffix(' ')?;
    Some((count != MISSING_COUNT).then(|| count.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(ran: &str, passed: &str, skipped: &str, failed: &str) -> TestTally {
        TestTally {
            ran: Some(ran.to_string()),
            passed: Some(passed.to_string()),
            skipped: Some(skipped.to_string()),
            failed: Some(failed.to_string()),
        }
    }

    #[test]
    fn renders_exact_table() {
        let table = tally("10", "7", "1", "2").to_table();
        assert_eq!(
            table,
            "|Tests |Passed ✅ |Skipped ⏭️ |Failed ❌ ||\n|Test Report |10 ran |7 passed |1 skipped |2 failed |"
        );
    }

    #[test]
    fn renders_placeholder_for_missing_counts() {
        let table = TestTally::default().to_table();
        assert!(table.ends_with("|None ran |None passed |None skipped |None failed |"));
    }

    #[test]
    fn does_not_check_consistency() {
        let table = tally("3", "5", "abc", "-1").to_table();
        assert!(table.contains("|3 ran |5 passed |abc skipped |-1 failed |"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let report = tally("4", "4", "0", "0");
        assert_eq!(report.to_table(), report.to_table());
    }

    #[test]
    fn parse_recovers_counts() {
        let report = tally("12", "9", "2", "1");
        assert_eq!(TestTally::parse_table(&report.to_table()), Some(report));

        let partial = TestTally {
            ran: Some("5".to_string()),
            ..Default::default()
        };
        assert_eq!(TestTally::parse_table(&partial.to_table()), Some(partial));
    }

    #[test]
    fn parse_rejects_other_text() {
        assert_eq!(TestTally::parse_table("no table here"), None);
        assert_eq!(
            TestTally::parse_table(&format!("{HEADER}\n|Test Report |1 ran |")),
            None
        );
    }

    #[test]
    fn reads_counts_from_environment() {
        temp_env::with_vars(
            [
                (TOTAL_TESTS_ENV, Some("8")),
                (PASSED_TESTS_ENV, Some("8")),
                (SKIPPED_TESTS_ENV, Some("0")),
                (FAILED_TESTS_ENV, None),
            ],
            || {
                let report = TestTally::from_env();
                assert_eq!(report.ran.as_deref(), Some("8"));
                assert_eq!(report.failed, None);
            },
        );
    }
}

//! Rendering of coverage results for humans and machines.
//!
//! One line per lesson for terminals, a versioned JSON summary for CI
//! tooling. The gate decision itself stays with the caller.

use crate::schema::CoverageResult;
use serde::Serialize;

/// Cap on missing-line numbers embedded in JSON output without `--full`.
const MISSING_PREVIEW_CAP: usize = 20;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable coverage summary for a whole lesson set.
#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub schema_version: u32,
    pub complete_count: usize,
    pub incomplete_count: usize,
    pub results: Vec<ReportEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub lesson: String,
    pub document: Option<String>,
    pub source_line_count: usize,
    pub covered_line_count: usize,
    pub coverage_percent: f64,
    pub is_complete: bool,
    /// Exact count, even when `missing_lines` below is a preview.
    pub missing_line_count: usize,
    pub missing_lines: Vec<u64>,
    pub missing_lines_truncated: bool,
}

/// Build the JSON summary. `full` disables the missing-line preview cap.
pub fn build_report(results: &[CoverageResult], full: bool) -> CoverageReport {
    let complete_count = results.iter().filter(|result| result.is_complete).count();
    let entries = results
        .iter()
        .map(|result| {
            let missing_line_count = result.missing_lines.len();
            let cap = if full { missing_line_count } else { MISSING_PREVIEW_CAP };
            ReportEntry {
                lesson: result.lesson.clone(),
                document: result.document.clone(),
                source_line_count: result.source_line_count,
                covered_line_count: result.covered_line_count,
                coverage_percent: result.coverage_percent,
                is_complete: result.is_complete,
                missing_line_count,
                missing_lines: result.missing_lines.iter().take(cap).copied().collect(),
                missing_lines_truncated: missing_line_count > cap,
            }
        })
        .collect();

    CoverageReport {
        schema_version: REPORT_SCHEMA_VERSION,
        complete_count,
        incomplete_count: results.len() - complete_count,
        results: entries,
    }
}

/// One pass/fail line per lesson, in the shape the CI log grep expects.
pub fn render_line(result: &CoverageResult) -> String {
    let status = if result.is_complete { "PASS" } else { "FAIL" };
    let document = result.document.as_deref().unwrap_or("no source document");
    format!(
        "[{status}] {} ({document}) {}/{} ({:.2}%)",
        result.lesson, result.covered_line_count, result.source_line_count, result.coverage_percent
    )
}

/// Comma-joined missing-line detail, present only for incomplete lessons.
pub fn render_missing_lines(result: &CoverageResult) -> Option<String> {
    if result.is_complete {
        return None;
    }
    let joined = result
        .missing_lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("  missing lines: {joined}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(missing_lines: Vec<u64>) -> CoverageResult {
        let source_line_count = missing_lines.len().max(4);
        let covered_line_count = source_line_count - missing_lines.len();
        CoverageResult {
            lesson: "lean-5s".to_string(),
            document: Some("lesson-plan-1.md".to_string()),
            source_line_count,
            covered_line_count,
            coverage_percent: covered_line_count as f64 / source_line_count as f64 * 100.0,
            is_complete: missing_lines.is_empty(),
            missing_lines,
        }
    }

    #[test]
    fn pass_line_carries_counts_and_percent() {
        let line = render_line(&result(Vec::new()));
        assert_eq!(line, "[PASS] lean-5s (lesson-plan-1.md) 4/4 (100.00%)");
    }

    #[test]
    fn fail_line_rounds_percent_to_two_places() {
        let line = render_line(&result(vec![2, 3, 4]));
        assert_eq!(line, "[FAIL] lean-5s (lesson-plan-1.md) 1/4 (25.00%)");
    }

    #[test]
    fn missing_lines_render_only_on_failure() {
        assert_eq!(render_missing_lines(&result(Vec::new())), None);
        assert_eq!(
            render_missing_lines(&result(vec![2, 3, 4])).as_deref(),
            Some("  missing lines: 2, 3, 4")
        );
    }

    #[test]
    fn json_preview_caps_missing_lines_unless_full() {
        let missing: Vec<u64> = (1..=30).collect();
        let results = [result(missing)];

        let preview = build_report(&results, false);
        assert_eq!(preview.incomplete_count, 1);
        assert_eq!(preview.results[0].missing_line_count, 30);
        assert_eq!(preview.results[0].missing_lines.len(), 20);
        assert!(preview.results[0].missing_lines_truncated);

        let full = build_report(&results, true);
        assert_eq!(full.results[0].missing_lines.len(), 30);
        assert!(!full.results[0].missing_lines_truncated);
    }
}

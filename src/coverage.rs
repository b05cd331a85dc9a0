//! Source-coverage verification for lessons.
//!
//! Coverage is a set computation over 1-indexed line numbers: the union of
//! every cited range, block-level and full-document, must account for every
//! non-blank line of the lesson's source document. Verification is pure and
//! infallible; an uncovered line is a reported finding, not an error.

use crate::schema::{CoverageResult, Lesson};
use std::collections::BTreeSet;

/// 1-indexed numbers of lines whose trimmed content is non-empty.
///
/// `str::lines` treats `\n` and `\r\n` as a single split point and never
/// yields a phantom trailing entry, so both line-ending styles produce the
/// same set.
pub fn non_blank_lines(text: &str) -> BTreeSet<u64> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, _)| idx as u64 + 1)
        .collect()
}

/// Line numbers of `document` claimed by any block ref or full-document ref.
///
/// Refs into other documents are ignored. Overlapping and repeated ranges
/// collapse under set semantics.
pub fn covered_lines(lesson: &Lesson, document: &str) -> BTreeSet<u64> {
    let block_refs = lesson
        .spec
        .blocks
        .iter()
        .flat_map(|block| &block.source_refs);

    let mut covered = BTreeSet::new();
    for source_ref in block_refs.chain(&lesson.full_source_refs) {
        if source_ref.file != document {
            continue;
        }
        for line in source_ref.line_start..=source_ref.line_end {
            covered.insert(line);
        }
    }
    covered
}

/// Audit one lesson against its associated source document.
///
/// The document is the `file` of the lesson's first full-document ref. A
/// lesson with no full-document refs has nothing to check and passes
/// vacuously with `document = None`; an associated but empty document also
/// reports 100% but keeps its document id.
pub fn verify(lesson: &Lesson) -> CoverageResult {
    let Some(document) = lesson
        .full_source_refs
        .first()
        .map(|source_ref| source_ref.file.clone())
    else {
        return CoverageResult {
            lesson: lesson.spec.slug.clone(),
            document: None,
            source_line_count: 0,
            covered_line_count: 0,
            missing_lines: Vec::new(),
            coverage_percent: 100.0,
            is_complete: true,
        };
    };

    let source_lines = non_blank_lines(&lesson.raw_source_text);
    let covered = covered_lines(lesson, &document);
    let missing_lines: Vec<u64> = source_lines.difference(&covered).copied().collect();

    let source_line_count = source_lines.len();
    let covered_line_count = source_line_count - missing_lines.len();
    let coverage_percent = if source_line_count == 0 {
        100.0
    } else {
        covered_line_count as f64 / source_line_count as f64 * 100.0
    };
    let is_complete = missing_lines.is_empty();

    CoverageResult {
        lesson: lesson.spec.slug.clone(),
        document: Some(document),
        source_line_count,
        covered_line_count,
        missing_lines,
        coverage_percent,
        is_complete,
    }
}

/// Audit every lesson, preserving input order. Each result depends only on
/// its own lesson.
pub fn verify_all(lessons: &[Lesson]) -> Vec<CoverageResult> {
    lessons.iter().map(verify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{LessonBlock, LessonSpec, SourceRef};

    fn source_ref(file: &str, line_start: u64, line_end: u64) -> SourceRef {
        SourceRef {
            file: file.to_string(),
            line_start,
            line_end,
        }
    }

    fn lesson(text: &str, block_refs: Vec<SourceRef>, full_refs: Vec<SourceRef>) -> Lesson {
        Lesson {
            spec: LessonSpec {
                slug: "fixture".to_string(),
                title: "Fixture".to_string(),
                duration_mins: 55,
                audience: "test cohort".to_string(),
                aims: Vec::new(),
                outcomes: Vec::new(),
                blocks: vec![LessonBlock {
                    id: "fixture-block".to_string(),
                    title: "Block".to_string(),
                    start_min: 0,
                    end_min: 10,
                    teacher_actions: Vec::new(),
                    learner_actions: Vec::new(),
                    outputs: Vec::new(),
                    differentiation: None,
                    source_refs: block_refs,
                }],
                placement_links: Vec::new(),
                resources: Vec::new(),
                source_document: None,
                full_source_refs: Vec::new(),
            },
            raw_source_text: text.to_string(),
            full_source_refs: full_refs,
        }
    }

    const TEXT: &str = "A\n\nB\nC";

    #[test]
    fn full_citation_is_complete() {
        let fixture = lesson(
            TEXT,
            Vec::new(),
            vec![source_ref("plan.md", 1, 1), source_ref("plan.md", 3, 4)],
        );
        let result = verify(&fixture);

        assert_eq!(result.document.as_deref(), Some("plan.md"));
        assert_eq!(result.source_line_count, 3);
        assert_eq!(result.covered_line_count, 3);
        assert!(result.missing_lines.is_empty());
        assert!(result.is_complete);
        assert!((result.coverage_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gap_reports_missing_lines_ascending() {
        let fixture = lesson(TEXT, Vec::new(), vec![source_ref("plan.md", 1, 1)]);
        let result = verify(&fixture);

        assert_eq!(result.missing_lines, vec![3, 4]);
        assert_eq!(result.covered_line_count, 1);
        assert!(!result.is_complete);
        assert!((result.coverage_percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_and_overlapping_refs_are_idempotent() {
        let once = lesson(TEXT, Vec::new(), vec![source_ref("plan.md", 1, 1)]);
        let repeated = lesson(
            TEXT,
            vec![source_ref("plan.md", 1, 1)],
            vec![source_ref("plan.md", 1, 1), source_ref("plan.md", 1, 1)],
        );

        let once = verify(&once);
        let repeated = verify(&repeated);
        assert_eq!(once.covered_line_count, repeated.covered_line_count);
        assert_eq!(once.missing_lines, repeated.missing_lines);
    }

    #[test]
    fn adding_a_ref_never_grows_missing_lines() {
        let base = lesson(TEXT, Vec::new(), vec![source_ref("plan.md", 1, 1)]);
        let widened = lesson(
            TEXT,
            vec![source_ref("plan.md", 3, 4)],
            vec![source_ref("plan.md", 1, 1)],
        );

        let base = verify(&base);
        let widened = verify(&widened);
        assert!(widened.missing_lines.len() <= base.missing_lines.len());
        assert!(widened.is_complete);
    }

    #[test]
    fn self_citation_round_trips() {
        let text = "# Heading\n\nFirst point\nSecond point\n\nClosing line\n";
        let full_refs: Vec<SourceRef> = non_blank_lines(text)
            .into_iter()
            .map(|line| source_ref("plan.md", line, line))
            .collect();
        let result = verify(&lesson(text, Vec::new(), full_refs));

        assert!(result.is_complete);
        assert!(result.missing_lines.is_empty());
        assert!((result.coverage_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_lines_never_need_coverage() {
        let padded = "A\n\nB\nC\n   \n\t\n\n";
        let refs = vec![source_ref("plan.md", 1, 1), source_ref("plan.md", 3, 4)];
        let result = verify(&lesson(padded, Vec::new(), refs));

        assert_eq!(result.source_line_count, 3);
        assert!(result.missing_lines.is_empty());
        assert!(result.is_complete);
    }

    #[test]
    fn no_full_refs_passes_vacuously() {
        let result = verify(&lesson(TEXT, vec![source_ref("plan.md", 1, 4)], Vec::new()));

        assert_eq!(result.document, None);
        assert_eq!(result.source_line_count, 0);
        assert_eq!(result.covered_line_count, 0);
        assert!(result.missing_lines.is_empty());
        assert!(result.is_complete);
        assert!((result.coverage_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_document_keeps_its_association() {
        let result = verify(&lesson("", Vec::new(), vec![source_ref("plan.md", 1, 1)]));

        assert_eq!(result.document.as_deref(), Some("plan.md"));
        assert_eq!(result.source_line_count, 0);
        assert!(result.is_complete);
    }

    #[test]
    fn refs_into_other_documents_are_excluded() {
        let fixture = lesson(
            TEXT,
            vec![source_ref("other.md", 3, 4)],
            vec![source_ref("plan.md", 1, 1)],
        );
        let result = verify(&fixture);

        assert_eq!(result.missing_lines, vec![3, 4]);
        assert!(!result.is_complete);
    }

    #[test]
    fn crlf_and_lf_documents_agree() {
        let refs = vec![source_ref("plan.md", 1, 1), source_ref("plan.md", 3, 4)];
        let unix = verify(&lesson("A\n\nB\nC", Vec::new(), refs.clone()));
        let windows = verify(&lesson("A\r\n\r\nB\r\nC", Vec::new(), refs));

        assert_eq!(unix.source_line_count, windows.source_line_count);
        assert_eq!(unix.missing_lines, windows.missing_lines);
        assert_eq!(unix.is_complete, windows.is_complete);
    }

    #[test]
    fn verify_all_preserves_input_order() {
        let first = lesson(TEXT, Vec::new(), vec![source_ref("plan.md", 1, 4)]);
        let mut second = lesson(TEXT, Vec::new(), vec![source_ref("plan.md", 1, 1)]);
        second.spec.slug = "second".to_string();

        let results = verify_all(&[first, second]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].lesson, "fixture");
        assert_eq!(results[1].lesson, "second");
        assert!(results[0].is_complete);
        assert!(!results[1].is_complete);
    }
}

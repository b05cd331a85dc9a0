//! Schema types for lessons, citations, and coverage results.

use serde::{Deserialize, Serialize};

/// A claim that lines `[line_start, line_end]` of a named source document
/// support some structured content. Ranges are 1-indexed and inclusive;
/// overlapping or repeated ranges are legal and never double-counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub file: String,
    pub line_start: u64,
    pub line_end: u64,
}

/// Year-group variations attached to a block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Differentiation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub year1: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub year2: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixed: Vec<String>,
}

/// One timed structural sub-unit of a lesson.
///
/// `source_refs` justifies the block's content against specific lines of the
/// lesson's source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonBlock {
    pub id: String,
    pub title: String,
    pub start_min: u32,
    pub end_min: u32,
    pub teacher_actions: Vec<String>,
    pub learner_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<Differentiation>,
    pub source_refs: Vec<SourceRef>,
}

/// Authored form of a lesson, as it appears in a lesson-set file.
///
/// Full-document references come from `full_source_refs` when present;
/// otherwise they are derived from `source_document`, one single-line ref per
/// non-blank line. A spec carrying neither has no associated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSpec {
    pub slug: String,
    pub title: String,
    pub duration_mins: u32,
    pub audience: String,
    pub aims: Vec<String>,
    pub outcomes: Vec<String>,
    pub blocks: Vec<LessonBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placement_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub full_source_refs: Vec<SourceRef>,
}

/// A set of lesson specs, the JSON input format of the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSet {
    pub lessons: Vec<LessonSpec>,
}

/// A lesson materialized against its source document.
///
/// `raw_source_text` is the verbatim document text, kept on the lesson for
/// traceability; `full_source_refs` is the resolved full-document citation
/// list. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub spec: LessonSpec,
    pub raw_source_text: String,
    pub full_source_refs: Vec<SourceRef>,
}

/// Coverage verdict for one lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResult {
    pub lesson: String,
    /// Document the lesson was audited against; `None` when the lesson has
    /// no full-document references and nothing to check.
    pub document: Option<String>,
    pub source_line_count: usize,
    pub covered_line_count: usize,
    /// Uncovered non-blank line numbers, ascending.
    pub missing_lines: Vec<u64>,
    pub coverage_percent: f64,
    pub is_complete: bool,
}

//! Lesson materialization from authored specs and on-disk source documents.
//!
//! Each distinct source document is read exactly once during construction
//! and shared immutably across every lesson derived from it. The verifier
//! itself never touches the filesystem.

use crate::coverage;
use crate::schema::{Lesson, LessonSet, LessonSpec, SourceRef};
use anyhow::{Context, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Materialized lessons plus the document texts they were derived from.
#[derive(Debug)]
pub struct LessonRepository {
    lessons: Vec<Lesson>,
}

impl LessonRepository {
    /// Load every lesson in `set`, resolving source documents under `root`.
    pub fn load(root: &Path, set: &LessonSet) -> Result<Self> {
        let mut documents: BTreeMap<String, String> = BTreeMap::new();
        for spec in &set.lessons {
            let Some(document) = associated_document(spec) else {
                continue;
            };
            if let Entry::Vacant(entry) = documents.entry(document.to_string()) {
                let path = root.join(document);
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("read source document {}", path.display()))?;
                tracing::debug!(document, bytes = text.len(), "loaded source document");
                entry.insert(text);
            }
        }

        let lessons = set
            .lessons
            .iter()
            .map(|spec| materialize(spec, &documents))
            .collect();
        Ok(Self { lessons })
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn find(&self, slug: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.spec.slug == slug)
    }
}

/// Read a lesson set from a JSON file.
pub fn load_lesson_set(path: &Path) -> Result<LessonSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read lesson set {}", path.display()))?;
    let set: LessonSet = serde_json::from_str(&content)
        .with_context(|| format!("parse lesson set {}", path.display()))?;
    Ok(set)
}

/// Document a spec is audited against: the file of its first explicit
/// full-source ref, else the declared `source_document`.
fn associated_document(spec: &LessonSpec) -> Option<&str> {
    spec.full_source_refs
        .first()
        .map(|source_ref| source_ref.file.as_str())
        .or_else(|| spec.source_document.as_deref())
}

fn materialize(spec: &LessonSpec, documents: &BTreeMap<String, String>) -> Lesson {
    let raw_source_text = associated_document(spec)
        .and_then(|document| documents.get(document))
        .cloned()
        .unwrap_or_default();

    let full_source_refs = if spec.full_source_refs.is_empty() {
        match spec.source_document.as_deref() {
            Some(document) => derive_full_refs(document, &raw_source_text),
            None => Vec::new(),
        }
    } else {
        spec.full_source_refs.clone()
    };

    Lesson {
        spec: spec.clone(),
        raw_source_text,
        full_source_refs,
    }
}

/// One single-line ref per non-blank line: the comprehensive partition the
/// curriculum data ships with.
fn derive_full_refs(document: &str, text: &str) -> Vec<SourceRef> {
    coverage::non_blank_lines(text)
        .into_iter()
        .map(|line| SourceRef {
            file: document.to_string(),
            line_start: line,
            line_end: line,
        })
        .collect()
}

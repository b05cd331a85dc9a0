//! Command implementations wiring lesson sets through the verifier.

use crate::catalog;
use crate::cli::{ListArgs, ShowArgs, VerifyArgs};
use crate::coverage;
use crate::report;
use crate::repository::{self, LessonRepository};
use crate::schema::LessonSet;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::Path;

/// Run the coverage gate: print the report, then fail if any lesson is
/// incomplete.
pub fn run_verify(args: VerifyArgs) -> Result<()> {
    let set = resolve_lesson_set(args.lessons.as_deref())?;
    let repository = LessonRepository::load(&args.root, &set)?;
    let results = coverage::verify_all(repository.lessons());

    if args.json {
        let summary = report::build_report(&results, args.full);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for result in &results {
            println!("{}", report::render_line(result));
            if let Some(missing) = report::render_missing_lines(result) {
                println!("{missing}");
            }
        }
    }

    let incomplete = results.iter().filter(|result| !result.is_complete).count();
    if incomplete > 0 {
        return Err(anyhow!(
            "coverage incomplete for {incomplete} of {} lessons",
            results.len()
        ));
    }
    tracing::debug!(lessons = results.len(), "coverage complete");
    Ok(())
}

#[derive(Serialize)]
struct ListingEntry<'a> {
    slug: &'a str,
    title: &'a str,
    duration_mins: u32,
    block_count: usize,
    source_document: Option<&'a str>,
}

pub fn run_list(args: ListArgs) -> Result<()> {
    let set = resolve_lesson_set(args.lessons.as_deref())?;

    if args.json {
        let listing: Vec<ListingEntry<'_>> = set
            .lessons
            .iter()
            .map(|spec| ListingEntry {
                slug: &spec.slug,
                title: &spec.title,
                duration_mins: spec.duration_mins,
                block_count: spec.blocks.len(),
                source_document: spec.source_document.as_deref(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for spec in &set.lessons {
        println!(
            "{}  {} ({} min, {} blocks)",
            spec.slug,
            spec.title,
            spec.duration_mins,
            spec.blocks.len()
        );
    }
    Ok(())
}

pub fn run_show(args: ShowArgs) -> Result<()> {
    let set = resolve_lesson_set(args.lessons.as_deref())?;
    let repository = LessonRepository::load(&args.root, &set)?;
    let lesson = repository
        .find(&args.lesson)
        .ok_or_else(|| anyhow!("unknown lesson: {}", args.lesson))?;

    let spec = &lesson.spec;
    println!("{}: {}", spec.slug, spec.title);
    println!("audience: {}", spec.audience);
    println!("duration: {} min", spec.duration_mins);
    for aim in &spec.aims {
        println!("aim: {aim}");
    }
    for outcome in &spec.outcomes {
        println!("outcome: {outcome}");
    }

    for block in &spec.blocks {
        println!();
        println!(
            "[{:>2}-{:>2} min] {} ({})",
            block.start_min, block.end_min, block.title, block.id
        );
        for source_ref in &block.source_refs {
            println!(
                "  cites {}:{}-{}",
                source_ref.file, source_ref.line_start, source_ref.line_end
            );
        }
    }

    println!();
    let result = coverage::verify(lesson);
    println!("{}", report::render_line(&result));
    if let Some(missing) = report::render_missing_lines(&result) {
        println!("{missing}");
    }
    Ok(())
}

fn resolve_lesson_set(path: Option<&Path>) -> Result<LessonSet> {
    match path {
        Some(path) => repository::load_lesson_set(path),
        None => Ok(catalog::builtin_lesson_set()),
    }
}

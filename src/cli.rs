//! CLI argument parsing for the lesson-audit workflow.
//!
//! The CLI is intentionally thin: commands parse flags and hand off to the
//! workflow layer, so the same audit logic can be reused elsewhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the coverage audit.
#[derive(Parser, Debug)]
#[command(
    name = "laudit",
    version,
    about = "Source-coverage audit for structured lesson plans",
    after_help = "Commands:\n  verify [--lessons <PATH>] [--root <DIR>]  Audit citations against source documents\n  list [--lessons <PATH>]                   List lessons in a set\n  show --lesson <SLUG> [--root <DIR>]       Show one lesson's blocks and coverage\n\nExamples:\n  laudit verify\n  laudit verify --lessons lessons.json --root content --json --full\n  laudit list --json\n  laudit show --lesson lean-5s",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level audit commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Verify(VerifyArgs),
    List(ListArgs),
    Show(ShowArgs),
}

/// Verify command inputs for the coverage gate.
#[derive(Parser, Debug)]
#[command(about = "Audit lesson citations and fail on uncovered source lines")]
pub struct VerifyArgs {
    /// Lesson set JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    pub lessons: Option<PathBuf>,

    /// Directory source documents are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// Include full missing-line lists in JSON output
    #[arg(long)]
    pub full: bool,
}

/// List command inputs. Listing never touches source documents.
#[derive(Parser, Debug)]
#[command(about = "List lessons in a set")]
pub struct ListArgs {
    /// Lesson set JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    pub lessons: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Show command inputs for one lesson.
#[derive(Parser, Debug)]
#[command(about = "Show one lesson's blocks, citations, and coverage")]
pub struct ShowArgs {
    /// Slug of the lesson to show
    #[arg(long, value_name = "SLUG")]
    pub lesson: String,

    /// Lesson set JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    pub lessons: Option<PathBuf>,

    /// Directory source documents are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

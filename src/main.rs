use anyhow::Result;
use clap::Parser;

mod catalog;
mod cli;
mod coverage;
mod report;
mod repository;
mod schema;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Verify(args) => workflow::run_verify(args),
        Command::List(args) => workflow::run_list(args),
        Command::Show(args) => workflow::run_show(args),
    }
}

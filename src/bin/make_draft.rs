// src/bin/make_draft.rs

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

use blogkit::draft::{create_draft, drafts_dir_for_executable};

/// Create a new draft
#[derive(Parser, Debug)]
#[command(name = "make_draft", version = blogkit::crate_version())]
struct Args {
    /// Post title
    title: String,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let now = Local::now().fixed_offset();
    let drafts_dir = drafts_dir_for_executable(&std::env::current_exe()?);

    create_draft(&drafts_dir, &args.title, &now)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

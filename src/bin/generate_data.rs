// src/bin/generate_data.rs

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::process::ExitCode;
use std::path::PathBuf;

use blogkit::constants::DEFAULT_SAMPLE_FILE;
use blogkit::data_generation::generator::{create_data, GeneratorConfig};

/// Generate noisy samples of a linear trend and save them as a comma-delimited table.
#[derive(Parser, Debug)]
#[command(name = "generate_data", version = blogkit::crate_version(), about)]
struct Args {
    /// File to write the sample table to
    #[arg(default_value = DEFAULT_SAMPLE_FILE)]
    output: PathBuf,

    /// Also render the per-column mean/std error-bar chart to this PNG file
    #[arg(long, value_name = "PNG")]
    plot: Option<PathBuf>,

    /// Seed the noise generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = GeneratorConfig::default();
    let samples = create_data(
        &config,
        Some(args.output.as_path()),
        args.plot.as_deref(),
        &mut rng,
    )?;
    log::debug!(
        "Wrote {} repetitions of {} points",
        samples.repetitions(),
        samples.independent.len()
    );
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

// src/bin/make_plot.rs

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use std::path::PathBuf;

use blogkit::constants::{DEFAULT_PLOT_FILE, DEFAULT_SAMPLE_FILE};
use blogkit::data_input::table_parser::read_sample_table;
use blogkit::plot_functions::plot_sample_summary::{plot_column_summary, plot_row_summary};

/// Load a sample table and plot its mean and standard deviation as error bars.
#[derive(Parser, Debug)]
#[command(name = "make_plot", version = blogkit::crate_version(), about)]
struct Args {
    /// Comma-delimited sample table to read
    #[arg(default_value = DEFAULT_SAMPLE_FILE)]
    input: PathBuf,

    /// PNG file to write the chart to
    #[arg(short, long, default_value = DEFAULT_PLOT_FILE)]
    output: PathBuf,

    /// Treat the first row as independent-variable values and plot column
    /// statistics of the remaining rows against it
    #[arg(long)]
    first_row_is_x: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let table = read_sample_table(&args.input)?;

    if args.first_row_is_x {
        let samples = table.into_sample_set()?;
        plot_column_summary(&samples, &args.output)?;
    } else {
        plot_row_summary(&table, &args.output)?;
    }
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

use std::{path::PathBuf, process};

use clap::Parser;
use log::{debug, error};
use mmr_outputs_encoder::compute_outputs;

/// Packs MMR job outputs into the ABI encoding expected by the verifier
/// contract.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file holding the array of job outputs
    outputs_file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    debug!("Computing outputs of {}", cli.outputs_file.display());
    let encoded = compute_outputs(&cli.outputs_file).unwrap_or_else(|err| {
        error!("{}", err);
        process::exit(1);
    });

    println!("{encoded}");
}

//! Command line driver: loads optional calibration overrides, proves every
//! lemma, and writes proof certificates, transcripts, and a sweep report.

use std::error::Error;

use clap::Parser;

use ymg_cli::{generate_artifacts, load_calibration, Cli};
use ymg_core::params::Params;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let params = match &cli.calibration {
        Some(path) => load_calibration(path)?,
        None => Params::default(),
    };

    let (paths, hashes) = generate_artifacts(&params, &cli.out)?;
    println!("Generated:");
    println!(" - {}", paths.certificates.display());
    println!(" - {}", paths.transcripts.display());
    println!(" - {}", paths.sweep.display());
    println!("\nProof hashes:");
    for hash in hashes {
        println!("  {hash}");
    }
    Ok(())
}

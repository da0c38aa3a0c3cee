use std::path::PathBuf;

use clap::Parser;

/// Command line interface of the `ymg` artifact driver.
#[derive(Parser, Debug)]
#[command(name = "ymg", about = "Mass-gap lemma prover and artifact generator")]
pub struct Cli {
    /// JSON calibration file overriding the default parameters.
    #[arg(long)]
    pub calibration: Option<PathBuf>,
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "artifacts")]
    pub out: PathBuf,
}

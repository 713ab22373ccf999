//! # mzToken CLI
//!
//! Encode spectra into tokens, decode tokens back, and compare every
//! pipeline combination on generated data.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a JSON spectrum {"mz": [...], "intensity": [...]}
//! mztoken compress spectrum.json
//!
//! # Decode a token back to JSON
//! mztoken decompress <TOKEN>
//!
//! # Token sizes for every stage combination
//! mztoken bench --peaks 200
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

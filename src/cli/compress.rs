use anyhow::{Context, Result};
use log::{info, warn};
use std::io::Read;
use std::path::PathBuf;

use mztoken::pipeline::PipelineConfig;
use mztoken::spectrum::SpectrumArrays;

/// Read the whole input from a file, or stdin when no path is given
pub fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Encode a JSON spectrum into a token
pub fn run(input: Option<PathBuf>, config: PipelineConfig) -> Result<()> {
    let text = read_input(input.as_ref())?;
    let spectrum: SpectrumArrays =
        serde_json::from_str(&text).context("Input is not a JSON spectrum {\"mz\": [...], \"intensity\": [...]}")?;

    if let Err(msg) = spectrum.validate() {
        warn!("{}", msg);
    }

    let pipeline = config.build().context("Invalid pipeline configuration")?;
    info!("Format: {}", pipeline.format_id());
    info!("Peaks: {}", spectrum.len());

    let token = pipeline
        .compress_spectrum(&spectrum)
        .context("Compression failed")?;

    let decimal = spectrum.to_decimal_json().len();
    info!(
        "Token: {} chars ({:.2}x smaller than decimal JSON)",
        token.len(),
        decimal as f64 / token.len().max(1) as f64
    );

    println!("{}", token);
    Ok(())
}

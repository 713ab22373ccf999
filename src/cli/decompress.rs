use anyhow::{Context, Result};
use log::info;

use mztoken::pipeline::PipelineConfig;

use super::compress::read_input;

/// Decode a token back into a JSON spectrum
pub fn run(token: Option<String>, pretty: bool, config: PipelineConfig) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => read_input(None)?,
    };
    let token = token.trim();

    let pipeline = config.build().context("Invalid pipeline configuration")?;
    info!("Format: {}", pipeline.format_id());

    let spectrum = pipeline.decompress_spectrum(token).with_context(|| {
        format!(
            "Failed to decode token with format {}",
            pipeline.format_id()
        )
    })?;
    info!("Peaks: {}", spectrum.len());

    let json = if pretty {
        serde_json::to_string_pretty(&spectrum)?
    } else {
        serde_json::to_string(&spectrum)?
    };
    println!("{}", json);
    Ok(())
}

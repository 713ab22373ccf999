use anyhow::Result;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use mztoken::pipeline::PipelineConfig;
use mztoken::spectrum::SpectrumArrays;

/// Size and timing of one stage combination over the generated spectra
struct BenchRow {
    format_id: String,
    lossless: bool,
    exact: bool,
    token_chars: usize,
    decimal_chars: usize,
    elapsed: Duration,
}

impl BenchRow {
    fn ratio(&self) -> f64 {
        self.decimal_chars as f64 / self.token_chars.max(1) as f64
    }
}

/// Random spectra with sorted m/z in 100..2000 and positive intensities
fn generate_spectra(count: usize, peaks: usize, seed: u64) -> Vec<SpectrumArrays> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut mz: Vec<f32> = (0..peaks).map(|_| rng.random_range(100.0..2000.0)).collect();
            mz.sort_by(f32::total_cmp);
            let intensity = (0..peaks).map(|_| rng.random_range(1.0..1.0e6)).collect();
            SpectrumArrays::new(mz, intensity)
        })
        .collect()
}

fn evaluate(config: &PipelineConfig, spectra: &[SpectrumArrays]) -> mztoken::Result<BenchRow> {
    let pipeline = config.build()?;
    let start = Instant::now();
    let mut token_chars = 0;
    let mut decimal_chars = 0;
    let mut exact = true;

    for spectrum in spectra {
        let token = pipeline.compress_spectrum(spectrum)?;
        let decoded = pipeline.decompress_spectrum(&token)?;
        exact &= decoded == *spectrum;
        token_chars += token.len();
        decimal_chars += spectrum.to_decimal_json().len();
    }

    Ok(BenchRow {
        format_id: pipeline.format_id(),
        lossless: pipeline.is_lossless(),
        exact,
        token_chars,
        decimal_chars,
        elapsed: start.elapsed(),
    })
}

#[cfg(feature = "parallel")]
fn evaluate_all(configs: &[PipelineConfig], spectra: &[SpectrumArrays]) -> Vec<mztoken::Result<BenchRow>> {
    configs.par_iter().map(|c| evaluate(c, spectra)).collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(configs: &[PipelineConfig], spectra: &[SpectrumArrays]) -> Vec<mztoken::Result<BenchRow>> {
    configs.iter().map(|c| evaluate(c, spectra)).collect()
}

fn format_row(row: &BenchRow) -> String {
    let exact = match (row.lossless, row.exact) {
        (true, true) => "exact",
        (true, false) => "MISMATCH",
        (false, _) => "lossy",
    };
    let line = format!(
        "{:<40} {:>10} {:>8.2}x {:>10.1?}  {}",
        row.format_id,
        row.token_chars,
        row.ratio(),
        row.elapsed,
        exact
    );

    paint(line, exact)
}

#[cfg(feature = "colorized_output")]
fn paint(line: String, fidelity: &str) -> String {
    use console::style;
    match fidelity {
        "exact" => style(line).green().to_string(),
        "lossy" => style(line).yellow().to_string(),
        _ => style(line).red().bold().to_string(),
    }
}

#[cfg(not(feature = "colorized_output"))]
fn paint(line: String, _fidelity: &str) -> String {
    line
}

/// Token size of every stage combination on seeded random spectra
pub fn run(count: usize, peaks: usize, seed: u64) -> Result<()> {
    info!("mzToken Benchmark");
    info!("=================");
    info!("Spectra: {}, peaks per spectrum: {}, seed: {}", count, peaks, seed);

    let spectra = generate_spectra(count, peaks, seed);
    let configs: Vec<PipelineConfig> = PipelineConfig::combinations()
        .into_iter()
        .filter(PipelineConfig::is_viable)
        .collect();

    let mut rows = Vec::with_capacity(configs.len());
    for (config, result) in configs.iter().zip(evaluate_all(&configs, &spectra)) {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!("{:?} failed: {}", config, e),
        }
    }
    rows.sort_by_key(|row| row.token_chars);

    let decimal_chars: usize = spectra.iter().map(|s| s.to_decimal_json().len()).sum();
    println!("Decimal JSON baseline: {} chars", decimal_chars);
    println!(
        "{:<40} {:>10} {:>9} {:>10}  {}",
        "format", "chars", "ratio", "time", "fidelity"
    );
    for row in &rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

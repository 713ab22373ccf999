use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mztoken::pipeline::PipelineConfig;

mod bench;
mod compress;
mod config;
mod decompress;

use config::Config;

/// mzToken - compact text tokens for mass spectra
#[derive(Parser)]
#[command(name = "mztoken")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    pipeline: PipelineArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Named stage combination.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum PresetArg {
    /// f32 codec, Brotli, URL-safe base64
    #[default]
    Url,
    /// f32 codec, Brotli, base85
    B85,
    /// f32 codec, LZ-string URI component
    LzstringUri,
}

impl From<PresetArg> for PipelineConfig {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Url => PipelineConfig::url(),
            PresetArg::B85 => PipelineConfig::b85(),
            PresetArg::LzstringUri => PipelineConfig::lzstring_uri(),
        }
    }
}

/// Pipeline selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Stage combination to start from
    #[arg(short = 'p', long, value_enum, default_value = "url", global = true)]
    preset: PresetArg,

    /// Load pipeline settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Prefix tokens with their format identifier
    #[arg(long, global = true)]
    tagged: bool,
}

impl PipelineArgs {
    /// Preset, then config file, then flags
    pub fn resolve(&self) -> Result<PipelineConfig> {
        let mut pipeline = PipelineConfig::from(self.preset);
        if let Some(ref path) = self.config {
            pipeline = Config::from_file(path)?.pipeline.apply(pipeline);
        }
        if self.tagged {
            pipeline.tagged = true;
        }
        Ok(pipeline)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON spectrum into a token
    Compress {
        /// JSON file with `mz` and `intensity` arrays (stdin when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },

    /// Decode a token back into a JSON spectrum
    Decompress {
        /// Token to decode (stdin when omitted)
        #[arg(value_name = "TOKEN")]
        token: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Compare token sizes of every stage combination on random spectra
    Bench {
        /// Number of spectra to generate
        #[arg(short = 'n', long, default_value = "20")]
        spectra: usize,

        /// Peaks per spectrum
        #[arg(long, default_value = "100")]
        peaks: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compress { input } => compress::run(input, cli.pipeline.resolve()?),
        Commands::Decompress { token, pretty } => {
            decompress::run(token, pretty, cli.pipeline.resolve()?)
        }
        Commands::Bench {
            spectra,
            peaks,
            seed,
        } => bench::run(spectra, peaks, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mztoken::encode::EncoderKind;

    #[test]
    fn test_cli_parses_shared_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mztoken", "decompress", "abc", "--preset", "b85", "--tagged"])
            .unwrap();
        let pipeline = cli.pipeline.resolve().unwrap();
        assert_eq!(pipeline, PipelineConfig::b85().with_tag(true));
    }

    #[test]
    fn test_default_preset_is_url() {
        let cli = Cli::try_parse_from(["mztoken", "-vv", "compress"]).unwrap();
        assert_eq!(cli.verbosity(), 2);
        assert_eq!(cli.pipeline.resolve().unwrap(), PipelineConfig::url());
    }

    #[test]
    fn test_config_file_overrides_preset() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "[pipeline]\nencoder = { kind = \"lz-string\" }\n",
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["mztoken", "--config", &path, "--tagged", "compress"])
            .unwrap();
        let pipeline = cli.pipeline.resolve().unwrap();
        assert_eq!(pipeline.encoder, EncoderKind::LzString);
        assert_eq!(pipeline.spectrum, PipelineConfig::url().spectrum);
        assert!(pipeline.tagged);
    }
}

//! Command-line argument parsing.
//!
//! Flags given on the command line override values from `--config`.

use bs_core::{BookSamplerConfig, SampleKind, ScanAdvance};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Extracts a random sample
#[derive(Parser, Debug)]
#[command(name = "book-sampler", version, about = "Extracts a random sample")]
pub struct CliArgs {
    /// The file to sample, a name in the samples directory, or a directory
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// Number of words to cut off at
    #[arg(short = 'c', long = "cut-off", value_name = "N")]
    pub cut_off: Option<usize>,

    /// Minimum number of characters in a sentence
    #[arg(short = 'm', long = "min-words", value_name = "N")]
    pub min_words: Option<usize>,

    /// Specifies what to extract
    #[arg(short = 't', long = "sample-type", value_enum, default_value_t = SampleType::Fragment)]
    pub sample_type: SampleType,

    /// Sample library root (defaults to ~/.local/share/bookSampler/samples)
    #[arg(long, value_name = "DIR")]
    pub samples_dir: Option<PathBuf>,

    /// Seed for reproducible samples
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Resume sentence scanning after a closing quote
    #[arg(long)]
    pub advance_past_quotes: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleType {
    Paragraph,
    Sentence,
    Fragment,
}

impl From<SampleType> for SampleKind {
    fn from(value: SampleType) -> Self {
        match value {
            SampleType::Paragraph => SampleKind::Paragraph,
            SampleType::Sentence => SampleKind::Sentence,
            SampleType::Fragment => SampleKind::Fragment,
        }
    }
}

impl CliArgs {
    /// Merge the config file and flags, then clamp the length bounds.
    pub fn resolve_config(&self) -> bs_core::Result<BookSamplerConfig> {
        let mut config = match &self.config {
            Some(path) => BookSamplerConfig::from_json_file(path)?,
            None => BookSamplerConfig::default(),
        };

        if let Some(cut_off) = self.cut_off {
            config.sampler.cut_off_length = cut_off;
        }
        if let Some(min_words) = self.min_words {
            config.sampler.min_words_length = min_words;
        }
        if self.seed.is_some() {
            config.sampler.seed = self.seed;
        }
        if self.advance_past_quotes {
            config.sampler.scan_advance = ScanAdvance::Quotation;
        }
        if let Some(dir) = &self.samples_dir {
            config.library.samples_dir = Some(dir.clone());
        }

        config.sampler = config.sampler.normalized()?;
        Ok(config)
    }
}

//! Command-line front end for the book sampler.

pub mod cli;
pub mod logging;

use anyhow::{Context, Result};
use bs_core::library::{default_samples_dir, load_document, resolve_source};
use bs_core::SampleKind;
use bs_parser::{ExcerptSampler, TextParser};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use cli::{CliArgs, SampleType};

/// Resolve the requested book, load it and draw one excerpt.
pub fn run(args: &CliArgs) -> Result<String> {
    let config = args.resolve_config()?;

    let mut rng = match config.sampler.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let samples_dir = config.library.samples_dir.clone().or_else(default_samples_dir);
    let path = resolve_source(&args.filename, samples_dir.as_deref(), &mut rng)?;
    let text = load_document(&path).with_context(|| format!("failed to read {}", path.display()))?;

    let kind = SampleKind::from(args.sample_type);
    tracing::info!(path = %path.display(), %kind, "sampling book");

    let mut parser = TextParser::with_rng(text, &config.sampler, rng);
    Ok(parser.sample(kind)?)
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SamplerError};

pub const DEFAULT_CUT_OFF_LENGTH: usize = 5;
pub const DEFAULT_MIN_WORDS_LENGTH: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookSamplerConfig {
    pub sampler: SamplerConfig,
    pub library: LibraryConfig,
}

/// Segmentation settings handed to the text parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Maximum number of words in a fragment before it is cut.
    pub cut_off_length: usize,
    /// Minimum length of a sentence, counted in characters.
    pub min_words_length: usize,
    pub scan_advance: ScanAdvance,
    /// Seed for every random choice. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// How far the sentence scanner moves after a candidate that opens with a
/// curly quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanAdvance {
    /// Move past the first terminal punctuation mark only. Text inside the
    /// quote after that mark is scanned again.
    #[default]
    Terminal,
    /// Move past the closing quote.
    Quotation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Root of the sample library. Falls back to
    /// [`crate::library::default_samples_dir`] when unset.
    pub samples_dir: Option<PathBuf>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            cut_off_length: DEFAULT_CUT_OFF_LENGTH,
            min_words_length: DEFAULT_MIN_WORDS_LENGTH,
            scan_advance: ScanAdvance::default(),
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn new(cut_off_length: usize, min_words_length: usize) -> Self {
        Self {
            cut_off_length,
            min_words_length,
            ..Self::default()
        }
    }

    /// Raise the cut-off to the minimum length when it is smaller, then
    /// reject a minimum below one.
    pub fn normalized(mut self) -> Result<Self> {
        if self.cut_off_length < self.min_words_length {
            tracing::debug!(
                cut_off = self.cut_off_length,
                min_words = self.min_words_length,
                "raising cut-off to minimum length"
            );
            self.cut_off_length = self.min_words_length;
        }
        if self.min_words_length < 1 {
            return Err(SamplerError::InvalidConfig(
                "Must have a minimum word count of 1".into(),
            ));
        }
        Ok(self)
    }
}

impl BookSamplerConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = crate::library::read_text(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }
}

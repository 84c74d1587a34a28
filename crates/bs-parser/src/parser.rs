//! The text parser: owns a document, its paragraph index and a random
//! source.

use bs_core::{Result, SampleKind, SamplerConfig, SamplerError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use crate::{extract_fragment, extract_sentences, paragraph_spans, traits::ExcerptSampler};

/// Random excerpt source over one document.
///
/// Paragraphs are found once, when the parser is built. Sentences and
/// fragments are recomputed on every call from a freshly chosen paragraph.
pub struct TextParser<R = StdRng> {
    document: String,
    paragraphs: Vec<Range<usize>>,
    config: SamplerConfig,
    rng: R,
}

impl TextParser<StdRng> {
    /// Parser seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(document: impl Into<String>, config: &SamplerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(document, config, rng)
    }
}

impl<R: Rng> TextParser<R> {
    pub fn with_rng(document: impl Into<String>, config: &SamplerConfig, rng: R) -> Self {
        let document = document.into();
        let paragraphs = paragraph_spans(&document);
        tracing::debug!(
            bytes = document.len(),
            paragraphs = paragraphs.len(),
            "segmented document"
        );
        Self {
            document,
            paragraphs,
            config: config.clone(),
            rng,
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> + '_ {
        self.paragraphs.iter().map(|span| &self.document[span.clone()])
    }

    fn choose_paragraph(&mut self) -> Result<Range<usize>> {
        match self.paragraphs.choose(&mut self.rng) {
            Some(span) => Ok(span.clone()),
            None => {
                tracing::debug!("document has no paragraphs");
                Err(SamplerError::EmptySelection(SampleKind::Paragraph))
            }
        }
    }
}

impl<R: Rng> ExcerptSampler for TextParser<R> {
    fn random_paragraph(&mut self) -> Result<String> {
        let span = self.choose_paragraph()?;
        Ok(self.document[span].to_string())
    }

    fn random_sentence(&mut self) -> Result<String> {
        let span = self.choose_paragraph()?;
        let paragraph = &self.document[span.clone()];
        let sentences = extract_sentences(
            paragraph,
            self.config.min_words_length,
            self.config.scan_advance,
        );
        tracing::debug!(
            paragraph_offset = span.start,
            sentences = sentences.len(),
            "scanned paragraph"
        );

        match sentences.choose(&mut self.rng) {
            Some(sentence) => Ok(sentence.trim().to_string()),
            None => {
                tracing::debug!(paragraph_offset = span.start, "paragraph has no qualifying sentence");
                Err(SamplerError::EmptySelection(SampleKind::Sentence))
            }
        }
    }

    fn random_fragment(&mut self) -> Result<String> {
        let sentence = self.random_sentence()?;
        Ok(extract_fragment(&sentence, self.config.cut_off_length))
    }
}

use bs_core::{Result, SampleKind};

/// Something that hands out random excerpts of a loaded document.
pub trait ExcerptSampler {
    /// A whole paragraph.
    fn random_paragraph(&mut self) -> Result<String>;

    /// One sentence of a randomly chosen paragraph.
    fn random_sentence(&mut self) -> Result<String>;

    /// A random sentence, shortened to a fragment when it is too long.
    fn random_fragment(&mut self) -> Result<String>;

    fn sample(&mut self, kind: SampleKind) -> Result<String> {
        match kind {
            SampleKind::Paragraph => self.random_paragraph(),
            SampleKind::Sentence => self.random_sentence(),
            SampleKind::Fragment => self.random_fragment(),
        }
    }
}

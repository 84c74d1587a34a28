//! Excerpt extraction from plain-text books.
//!
//! A document is split into paragraphs (one per line that opens with a
//! letter), a paragraph into sentences (terminal punctuation or a curly-quote
//! span), and a sentence into a fragment (first clause or first N words).

pub mod fragment;
pub mod paragraph;
pub mod parser;
pub mod sentence;
pub mod traits;

pub use fragment::extract_fragment;
pub use paragraph::{extract_paragraphs, paragraph_spans};
pub use parser::TextParser;
pub use sentence::extract_sentences;
pub use traits::ExcerptSampler;

/// Opening curly quotation mark.
pub const QUOTE_START: char = '\u{201C}';
/// Closing curly quotation mark.
pub const QUOTE_END: char = '\u{201D}';
/// Appended to a fragment cut at the word limit.
pub const ELLIPSIS: &str = "...";

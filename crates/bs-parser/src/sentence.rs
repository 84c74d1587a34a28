//! Sentence extraction by first-match scanning.
//!
//! The scanner looks for the next `?`, `!` or `.` from its offset. A
//! candidate that opens with a curly quote runs to the closing quote
//! instead, so a quoted utterance stays whole. Candidates shorter than the
//! minimum length (in characters) are dropped.

use bs_core::ScanAdvance;
use regex::Regex;
use std::sync::LazyLock;

use crate::{QUOTE_END, QUOTE_START};

static RE_TERMINAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?!.]").unwrap());

/// All qualifying sentences of `paragraph`, leading whitespace stripped.
///
/// Text after the last terminal mark is never returned.
pub fn extract_sentences(
    paragraph: &str,
    min_words_length: usize,
    advance: ScanAdvance,
) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut offset = 0;

    while let Some(terminal) = RE_TERMINAL.find(&paragraph[offset..]) {
        let rest = &paragraph[offset..];
        let mut step = terminal.end();
        let mut candidate = rest[..terminal.end()].trim_start();

        if candidate.starts_with(QUOTE_START) {
            // An unclosed quote keeps the punctuation span.
            if let Some(close) = rest.find(QUOTE_END) {
                let quote_end = close + QUOTE_END.len_utf8();
                candidate = rest[..quote_end].trim_start();
                if advance == ScanAdvance::Quotation {
                    step = quote_end;
                }
            }
        }

        // step is at least one byte, so the scan always terminates
        offset += step;

        if candidate.chars().count() < min_words_length {
            continue;
        }
        sentences.push(candidate);
    }
    sentences
}

//! Fragment extraction: shorten a long sentence at its first comma, or
//! failing that at the word limit.

use crate::{ELLIPSIS, QUOTE_END, QUOTE_START};

/// Shorten `sentence` to at most `cut_off_length` words.
///
/// Short sentences come back unchanged. A quoted sentence keeps its closing
/// quote after the cut.
pub fn extract_fragment(sentence: &str, cut_off_length: usize) -> String {
    if word_count(sentence) <= cut_off_length {
        return sentence.to_string();
    }

    let quoted = sentence.starts_with(QUOTE_START);
    let clause = sentence.split(',').next().unwrap_or(sentence).trim();

    let mut fragment = if word_count(clause) <= cut_off_length {
        clause.to_string()
    } else {
        let mut cut = clause
            .split_whitespace()
            .take(cut_off_length)
            .collect::<Vec<_>>()
            .join(" ");
        cut.push_str(ELLIPSIS);
        cut
    };

    if quoted {
        fragment.push(QUOTE_END);
    }
    fragment
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

//! Paragraph extraction: one paragraph per line whose first token starts
//! with an ASCII letter.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static RE_LEADING_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]").unwrap());
// `\r\n` first so it wins over a lone `\r` at the same position.
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Byte ranges of the paragraphs in `text`, in document order.
///
/// Lines end at `\n`, `\r\n`, a lone `\r`, vertical tab, form feed, the
/// ASCII separators `\x1C`-`\x1E`, NEL and the Unicode line and paragraph
/// separators. Each range covers the line with trailing whitespace removed.
pub fn paragraph_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;

    for line_break in RE_LINE_BREAK.find_iter(text) {
        push_paragraph(&mut spans, text, start..line_break.start());
        start = line_break.end();
    }
    push_paragraph(&mut spans, text, start..text.len());
    spans
}

fn push_paragraph(spans: &mut Vec<Range<usize>>, text: &str, line: Range<usize>) {
    let trimmed = text[line.clone()].trim_end();
    if opens_with_letter(trimmed) {
        spans.push(line.start..line.start + trimmed.len());
    }
}

pub fn extract_paragraphs(text: &str) -> Vec<&str> {
    paragraph_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

// A line indented with whitespace has an empty first token.
fn opens_with_letter(line: &str) -> bool {
    let first_token = line.split(char::is_whitespace).next().unwrap_or("");
    RE_LEADING_LETTER.is_match(first_token)
}

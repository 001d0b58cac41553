//! Splitter for the two-part headline reply.
//!
//! The headline prompt asks for a `Headline:` line followed by `Variants:`
//! lines. Models do not always comply; there is deliberately no validation,
//! so malformed output degrades to whatever lands in the first line.

/// Split a headline reply into `(headline, variants)`.
///
/// The first line, minus a leading `Headline:` label, becomes the headline.
/// Every subsequent non-empty line, minus a leading `Variants:` label, is
/// trimmed and joined with a two-space separator.
pub fn parse_headlines(raw_text: &str) -> (String, String) {
    let mut lines = raw_text.lines();

    let headline = lines
        .next()
        .map(|line| strip_label(line, "Headline:"))
        .unwrap_or_default();

    let variants = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_label(line, "Variants:"))
        .collect::<Vec<_>>()
        .join("  ");

    (headline, variants)
}

fn strip_label(line: &str, label: &str) -> String {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(label)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

//! Cleanup of free-form model prose into display bullet lists.
//!
//! The fact-check, bias, and tone prompts ask for line-per-point prose, but
//! models sprinkle in bullet glyphs and half-closed `**` emphasis anyway.
//! Each surviving line gets at most one heading conversion; the unbalanced
//! patterns exist because stripping the leading marker run regularly eats the
//! opening `**` of a heading.

use crate::markup::{escape, Markup};
use regex::Regex;
use std::sync::OnceLock;

const BULLET_MARKERS: [char; 4] = ['-', '*', '•', ' '];

fn balanced_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*:").expect("balanced heading pattern"))
}

fn trailing_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+?)\*\*:").expect("trailing heading pattern"))
}

fn leading_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?):").expect("leading heading pattern"))
}

/// Convert multi-line model prose into an ordered list of display lines.
///
/// Per line: trim, strip the leading run of bullet markers, drop the line if
/// nothing remains, then apply the first matching heading conversion (if any).
/// Ordering is preserved from the source text.
pub fn normalize_bullets(raw_text: &str) -> Vec<Markup> {
    raw_text
        .lines()
        .filter_map(|line| {
            let stripped = line.trim().trim_start_matches(&BULLET_MARKERS[..]);
            if stripped.is_empty() {
                None
            } else {
                Some(emphasize_heading(&escape(stripped)))
            }
        })
        .collect()
}

/// Apply at most one heading-emphasis conversion; first pattern wins.
fn emphasize_heading(line: &str) -> Markup {
    for pattern in [balanced_heading(), trailing_heading(), leading_heading()] {
        if pattern.is_match(line) {
            let converted = pattern.replacen(line, 1, "<strong>$1</strong>:");
            return Markup::from_trusted(converted.into_owned());
        }
    }
    Markup::from_trusted(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &str) -> Vec<String> {
        normalize_bullets(raw)
            .into_iter()
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn bullet_markers_and_blank_lines_are_dropped() {
        let got = lines("- **Risk**: high\n\n* plain line");
        assert_eq!(got, vec!["<strong>Risk</strong>: high", "plain line"]);
    }

    #[test]
    fn balanced_heading_converts() {
        // No leading marker run, so the `**` pair survives intact.
        assert_eq!(lines("claim **Verdict**: false"), vec![
            "claim <strong>Verdict</strong>: false"
        ]);
    }

    #[test]
    fn unbalanced_trailing_marker_converts() {
        assert_eq!(lines("Framing**: sensational"), vec![
            "<strong>Framing</strong>: sensational"
        ]);
    }

    #[test]
    fn unbalanced_leading_marker_converts_mid_line() {
        // A line-initial `**` is consumed by marker stripping, so the leading
        // pattern only ever fires past the first word.
        assert_eq!(lines("note **Framing: sensational"), vec![
            "note <strong>Framing</strong>: sensational"
        ]);
    }

    #[test]
    fn at_most_one_conversion_per_line() {
        assert_eq!(lines("a **First**: x **Second**: y"), vec![
            "a <strong>First</strong>: x **Second**: y"
        ]);
    }

    #[test]
    fn plain_lines_pass_through_in_order() {
        let got = lines("first point\nsecond point\nthird point");
        assert_eq!(got, vec!["first point", "second point", "third point"]);
    }

    #[test]
    fn glyph_bullets_are_stripped() {
        assert_eq!(lines("• a point"), vec!["a point"]);
    }

    #[test]
    fn model_html_is_escaped() {
        assert_eq!(lines("- <em>sneaky</em> claim"), vec![
            "&lt;em&gt;sneaky&lt;/em&gt; claim"
        ]);
    }

    #[test]
    fn whitespace_only_input_yields_empty_list() {
        assert!(normalize_bullets("   \n\n \t \n").is_empty());
    }
}

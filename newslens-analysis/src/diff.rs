//! Word-level diff between an article and its rewrite.
//!
//! Both texts are whitespace-split and aligned with a classic
//! longest-common-subsequence edit script. The granularity is deliberately
//! word-sized: prose reads better as "this word was swapped" than as
//! character soup, and sentence-level would hide small edits entirely. No
//! case folding or punctuation normalization happens beyond the split.

use crate::markup::{escape, Markup};

/// One unit of the edit script, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffToken {
    Unchanged(String),
    Inserted(String),
    Deleted(String),
}

/// Compute the word-level edit script from `original` to `rewritten`.
///
/// Deletions surface at their position in the original; insertions at their
/// position in the rewrite. When the alignment ties, the deletion is emitted
/// first so a replaced run reads "removed, then added". Output is fully
/// deterministic for a given input pair.
pub fn diff_words(original: &str, rewritten: &str) -> Vec<DiffToken> {
    let a: Vec<&str> = original.split_whitespace().collect();
    let b: Vec<&str> = rewritten.split_whitespace().collect();

    // lcs[i][j] holds the LCS length of a[i..] vs b[j..]; the extra row and
    // column of zeros close the recurrence at the ends.
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut tokens = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            tokens.push(DiffToken::Unchanged(a[i].to_string()));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            tokens.push(DiffToken::Deleted(a[i].to_string()));
            i += 1;
        } else {
            tokens.push(DiffToken::Inserted(b[j].to_string()));
            j += 1;
        }
    }
    tokens.extend(a[i..].iter().map(|w| DiffToken::Deleted(w.to_string())));
    tokens.extend(b[j..].iter().map(|w| DiffToken::Inserted(w.to_string())));
    tokens
}

/// Render an edit script as safe inline markup.
///
/// Unchanged words pass through escaped; removed and added words get the
/// highlight spans the article view styles. Tokens are joined with single
/// spaces in script order.
pub fn render_diff(tokens: &[DiffToken]) -> Markup {
    let rendered: Vec<String> = tokens
        .iter()
        .map(|token| match token {
            DiffToken::Unchanged(word) => escape(word),
            DiffToken::Deleted(word) => format!(
                "<span style='background-color:#ffcccc;' title='Removed'>{}</span>",
                escape(word)
            ),
            DiffToken::Inserted(word) => format!(
                "<span style='background-color:#ccffcc;' title='Added'>{}</span>",
                escape(word)
            ),
        })
        .collect();
    Markup::from_trusted(rendered.join(" "))
}

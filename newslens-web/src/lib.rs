//! Article text source: URL in, capped plain paragraph text out.
//!
//! This is deliberately a narrow I/O wrapper. The pipeline consumes plain
//! text only; everything that can go wrong here (bad URL, network failure,
//! non-success status, unreadable body) is logged and absorbed into an empty
//! string, which downstream analysis treats as a low-signal article rather
//! than an error.

use newslens_common::{NewslensError, Result};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

/// Cap on extracted article text, in characters.
const MAX_ARTICLE_CHARS: usize = 5000;

fn paragraph_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Case-insensitive, dot-matches-newline; an unclosed trailing <p> is dropped.
    RE.get_or_init(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").expect("paragraph pattern"))
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"))
}

/// Fetches article pages and reduces them to plain paragraph text.
pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| NewslensError::Fetch(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch `url` and return its concatenated paragraph text, capped at the
    /// first 5000 characters. Never fails: any error yields an empty string.
    pub async fn fetch_article_text(&self, url: &str) -> String {
        match self.fetch_paragraphs(url).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%url, error = %err, "article fetch failed, returning empty text");
                String::new()
            }
        }
    }

    async fn fetch_paragraphs(&self, url: &str) -> Result<String> {
        let parsed =
            Url::parse(url).map_err(|e| NewslensError::Fetch(format!("invalid URL: {e}")))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| NewslensError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewslensError::Fetch(format!("HTTP {status}")));
        }

        let html = response
            .text()
            .await
            .map_err(|e| NewslensError::Fetch(e.to_string()))?;

        Ok(paragraph_text(&html))
    }
}

/// Concatenate the inner text of `<p>` elements, whitespace-collapsed and
/// capped at [`MAX_ARTICLE_CHARS`] characters.
fn paragraph_text(html: &str) -> String {
    let mut out = String::new();
    let mut char_count = 0usize;

    for cap in paragraph_pattern().captures_iter(html) {
        let inner = tag_pattern().replace_all(&cap[1], " ");
        let text = inner.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
            char_count += 1;
        }
        char_count += text.chars().count();
        out.push_str(&text);
        if char_count >= MAX_ARTICLE_CHARS {
            break;
        }
    }

    if char_count > MAX_ARTICLE_CHARS {
        out.chars().take(MAX_ARTICLE_CHARS).collect()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_are_extracted_and_joined() {
        let html = "<html><body><h1>Title</h1><p>First para.</p>\n<p class=\"lead\">Second\npara.</p></body></html>";
        assert_eq!(paragraph_text(html), "First para. Second para.");
    }

    #[test]
    fn inner_tags_are_stripped() {
        let html = "<p>Some <a href=\"/x\">linked</a> <em>text</em>.</p>";
        assert_eq!(paragraph_text(html), "Some linked text .");
    }

    #[test]
    fn non_paragraph_content_is_ignored() {
        let html = "<div>chrome</div><script>var p = 1;</script><p>the story</p>";
        assert_eq!(paragraph_text(html), "the story");
    }

    #[test]
    fn output_is_capped_to_the_first_5000_chars() {
        let long_para = format!("<p>{}</p>", "word ".repeat(3000));
        let text = paragraph_text(&long_para);
        assert_eq!(text.chars().count(), MAX_ARTICLE_CHARS);
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(paragraph_text("<html><body></body></html>"), "");
    }
}

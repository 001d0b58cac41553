//! Safe inline markup fragments.
//!
//! [`Markup`] holds HTML that is already safe to render verbatim. Outside this
//! crate the only way to build one is [`Markup::from_plain`], which escapes;
//! the diff renderer and the bullet normalizer assemble trusted fragments from
//! escaped pieces internally.

use serde::Serialize;
use std::fmt;

/// An inline HTML fragment that needs no further escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Escape `text` and wrap it. This is the only public constructor.
    pub fn from_plain(text: &str) -> Self {
        Self(escape(text))
    }

    /// Wrap a fragment this crate has already escaped piecewise.
    pub(crate) fn from_trusted(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTML-escape the five significant characters.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

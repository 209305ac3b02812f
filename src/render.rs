//! Hit-list rendering.
//!
//! Splits each hit's title into words, flags every word that case-insensitively
//! contains one of the hit's matched terms, and projects the word list into the
//! container HTML that replaces the target's contents on each render.

use crate::matcher::Hit;
use sha2::{Digest, Sha256};

/// Highlight class of one rendered word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMark {
    Mark,
    Unmarked,
}

impl WordMark {
    /// CSS class emitted for this mark
    pub fn as_class(&self) -> &'static str {
        match self {
            WordMark::Mark => "mark",
            WordMark::Unmarked => "unmarked",
        }
    }
}

/// One word of a hit's title together with its highlight flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWord {
    pub text: String,
    pub mark: WordMark,
}

/// Flatten the hit list into rendered title words.
///
/// A word is flagged [`WordMark::Mark`] when it case-insensitively contains
/// any term recorded for its own hit, [`WordMark::Unmarked`] otherwise.
pub fn highlight_words(hits: &[Hit]) -> Vec<RenderedWord> {
    let mut words = Vec::new();
    for hit in hits {
        for word in hit.candidate.title.split_whitespace() {
            let word_lower = word.to_lowercase();
            let marked = hit
                .matched_terms
                .iter()
                .any(|term| word_lower.contains(&term.to_lowercase()));
            words.push(RenderedWord {
                text: word.to_string(),
                mark: if marked {
                    WordMark::Mark
                } else {
                    WordMark::Unmarked
                },
            });
        }
    }
    words
}

/// Project rendered words into the container markup.
///
/// The container's contents are fully replaced with one `suggestion-title`
/// wrapper holding a span per word; an empty word list produces an empty
/// wrapper (the container is still cleared).
pub fn to_html(words: &[RenderedWord]) -> String {
    let spans: Vec<String> = words
        .iter()
        .map(|w| {
            format!(
                "<span class=\"{}\">{}</span>",
                w.mark.as_class(),
                escape_html(&w.text)
            )
        })
        .collect();
    format!("<div class=\"suggestion-title\">{}</div>", spans.join(" "))
}

/// Escape text for safe HTML emission
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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

/// Hex-encoded sha256 of a rendered container, for golden tests and the
/// CLI `--digest` flag.
pub fn render_digest(html: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(html.as_bytes());
    hex::encode(hasher.finalize())
}

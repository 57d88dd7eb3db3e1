//! Word-bounded summaries for listing pages.
//!
//! A summary is the leading words of a page body, headings and blank lines
//! filtered out, joined by single spaces and rendered to HTML. The word
//! budget comes from the caller (`-s` on the CLI, `summary.length` in
//! config).
//!
//! ## Boundary semantics — read before touching
//!
//! Two comparisons below check the summary's **character length** against
//! the **word budget**:
//!
//! - the `"..."` marker is appended when `text.len() > max_words`
//! - `is_full_content` is `text.len() < max_words`
//!
//! That is the long-standing wire behavior templates depend on
//! (`summary_is_content` in the data object), so it is kept exactly — even
//! though `is_full_content` does not literally mean "summary equals the
//! full body". Do not "fix" either comparison to count words or characters
//! consistently without versioning the data-object contract.

use crate::tools::{Markdown, ToolError};

/// A rendered summary plus the flag exposed as `summary_is_content`.
#[derive(Debug, Clone)]
pub struct Summary {
    pub html: String,
    pub is_full_content: bool,
}

/// Derive a summary from a raw markdown body.
///
/// Lines that are empty or start with `#` are discarded (the raw line, no
/// trimming — an indented `#` survives); the rest are flattened into one
/// word sequence and the first `max_words` words are kept. A body with zero
/// qualifying words yields an empty summary, still passed through the
/// markdown converter.
pub fn summarize(
    markdown: &dyn Markdown,
    body: &str,
    max_words: usize,
) -> Result<Summary, ToolError> {
    let words: Vec<&str> = body
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .collect();

    let take = words.len().min(max_words);
    let mut text = words[..take].join(" ");

    // Character count vs word budget, per the module docs.
    if text.len() > max_words {
        text.push_str("...");
    }
    let is_full_content = text.len() < max_words;

    let html = markdown.to_html(&text)?;
    Ok(Summary {
        html,
        is_full_content,
    })
}

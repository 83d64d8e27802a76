//! Biography text to paragraph markup.
//!
//! The bio is written like LaTeX source: a single line break is a soft wrap
//! inside a paragraph, two or more consecutive line breaks end the paragraph.
//! Inline HTML (links, emphasis) is passed through untouched; the bio is
//! authored content, not visitor input.

use maud::{html, Markup, PreEscaped};

/// Split raw bio text into trimmed, non-empty paragraphs.
pub fn process_bio(raw: &str) -> Vec<String> {
    let text = raw.replace("\r\n", "\n");
    split_paragraphs(&text)
        .into_iter()
        .map(|paragraph| {
            paragraph
                .split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}

/// Render the bio as a sequence of `<p>` blocks.
pub fn render_bio(raw: &str) -> Markup {
    html! {
        @for paragraph in process_bio(raw) {
            p class="mb-4" { (PreEscaped(paragraph)) }
        }
    }
}

/// Split on every run of two or more `\n`.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i] == b'\n' {
            i += 1;
        }
        if i - run_start >= 2 {
            parts.push(&text[start..run_start]);
            start = i;
        }
    }
    parts.push(&text[start..]);
    parts
}

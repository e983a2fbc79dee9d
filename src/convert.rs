//! Markdown to HTML conversion.
//!
//! A thin wrapper over pulldown-cmark's HTML renderer. No extensions are
//! enabled, so the output follows plain CommonMark.

use pulldown_cmark::{Options, Parser, html};

/// Renders `markdown` to an HTML string.
///
/// Never fails: every string is valid CommonMark input. Raw HTML in the
/// source is passed through untouched.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    // HTML is usually a bit longer than its markdown source.
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;

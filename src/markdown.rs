//! Markdown rendering for work item history entries.
//!
//! The work item `System.History` field accepts HTML, so the markdown draft
//! is rendered to HTML before it is attached to the JSON-patch payload.

use pulldown_cmark::{Options, Parser, html};

/// Render a CommonMark document to an HTML fragment.
///
/// Tables and strikethrough are enabled since both are common in review
/// notes and Azure DevOps renders them.
#[must_use]
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

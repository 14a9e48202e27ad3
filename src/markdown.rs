//! Markdown Rendering
//!
//! Renders the static informational pages with pulldown-cmark. Raw HTML
//! in the source is escaped rather than passed through.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Parse markdown to HTML with tables and strikethrough enabled
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

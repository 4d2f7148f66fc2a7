//! Markdown rendering for the generated review.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render Markdown to HTML safe to inject with `inner_html`.
///
/// Raw HTML in the source is stripped by the sanitizer.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, options());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    ammonia::clean(&html_output)
}

/// Plain text of rendered Markdown, as a reader sees it.
///
/// Markup and raw HTML are dropped; each block ends with a newline.
pub fn markdown_to_text(content: &str) -> String {
    let mut text = String::new();
    for event in Parser::new_ext(content, options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableRow
                | TagEnd::TableHead,
            ) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Event::End(TagEnd::TableCell) => text.push('\t'),
            _ => {}
        }
    }
    text.trim_end().to_string()
}

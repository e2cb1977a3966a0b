//! Markdown to HTML using pulldown-cmark and syntect.
//!
//! - GitHub flavoured extensions (tables, strikethrough, task lists, footnotes)
//! - Single newlines rendered as `<br />`
//! - Fenced code highlighted with CSS classes (`ClassStyle::Spaced`), so the
//!   site stylesheet decides the colours
//! - `<img>` tags get `loading="lazy"` and `decoding="async"` unless present

use once_cell::sync::Lazy;
use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag};
use regex::{Captures, Regex};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::ports::{MarkdownRenderer, RenderError};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

// A `>` inside a quoted attribute value does not end the tag.
static IMG_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("valid img regex")
});

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\s([^\s"'>/=]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?"#)
        .expect("valid attribute regex")
});

/// Stateless renderer; the syntax definitions are loaded once per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulldownMarkdownRenderer;

impl PulldownMarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, Self::options());

        let mut events = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_string)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(Tag::CodeBlock(_)) => {
                    if let Some((lang, code)) = code_block.take() {
                        let html = highlight_block(lang.as_deref(), &code)?;
                        events.push(Event::Html(html.into()));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            }
        }

        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());

        Ok(augment_images(&output))
    }
}

/// Renders one fenced block. Unknown or missing languages fall back to
/// escaped plain text.
fn highlight_block(lang: Option<&str>, code: &str) -> Result<String, RenderError> {
    let syntax = lang.and_then(|token| SYNTAX_SET.find_syntax_by_token(token));

    let body = match syntax {
        Some(syntax) => {
            let mut generator =
                ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
            for line in LinesWithEndings::from(code) {
                generator
                    .parse_html_for_line_which_includes_newline(line)
                    .map_err(|e| RenderError::Highlight(e.to_string()))?;
            }
            generator.finalize()
        }
        None => escape_html(code),
    };

    let class = lang
        .map(|l| format!(" class=\"language-{}\"", escape_html(l)))
        .unwrap_or_default();

    Ok(format!("<pre class=\"code\"><code{}>{}</code></pre>\n", class, body))
}

fn augment_images(html: &str) -> String {
    IMG_TAG
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[0];
            let (head, close) = match tag.strip_suffix("/>") {
                Some(head) => (head.trim_end(), " />"),
                None => (&tag[..tag.len() - 1], ">"),
            };

            let mut out = head.to_string();
            if !has_attribute(tag, "loading") {
                out.push_str(" loading=\"lazy\"");
            }
            if !has_attribute(tag, "decoding") {
                out.push_str(" decoding=\"async\"");
            }
            out.push_str(close);
            out
        })
        .into_owned()
}

/// Whether the tag declares `name` as an attribute. Quoted values are
/// skipped, so `alt="loading=x"` or `data-loading` do not count.
fn has_attribute(tag: &str, name: &str) -> bool {
    let attributes = tag.strip_prefix("<img").unwrap_or(tag);
    ATTRIBUTE
        .captures_iter(attributes)
        .any(|caps| caps[1].eq_ignore_ascii_case(name))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> String {
        PulldownMarkdownRenderer::new().render(md).unwrap()
    }

    #[test]
    fn renders_basic_markdown() {
        let html = render("# Title\n\nSome **bold** text");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn single_newline_becomes_line_break() {
        let html = render("first line\nsecond line");
        assert!(html.contains("first line<br />"));
        assert!(html.contains("second line"));
    }

    #[test]
    fn renders_gfm_extensions() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn known_language_is_highlighted_with_classes() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre class=\"code\"><code class=\"language-rust\">"));
        assert!(html.contains("<span class=\"source rust\">"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn unknown_language_is_escaped_plain_text() {
        let html = render("```nosuchlang\n<b>x</b> & y\n```");
        assert!(html.contains("<code class=\"language-nosuchlang\">&lt;b&gt;x&lt;/b&gt; &amp; y\n</code>"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn code_block_without_language_has_no_class() {
        let html = render("```\nplain\n```");
        assert!(html.contains("<pre class=\"code\"><code>plain\n</code></pre>"));
    }

    #[test]
    fn images_get_lazy_loading() {
        let html = render("![cat](https://example.com/cat.png)");
        assert!(html.contains(
            "<img src=\"https://example.com/cat.png\" alt=\"cat\" loading=\"lazy\" decoding=\"async\" />"
        ));
    }

    #[test]
    fn existing_image_attributes_are_kept() {
        let html = augment_images("<img src=\"a.png\" loading=\"eager\">");
        assert_eq!(html, "<img src=\"a.png\" loading=\"eager\" decoding=\"async\">");

        let html = augment_images("<img src=\"a.png\" decoding=\"sync\" loading=\"eager\" />");
        assert_eq!(html, "<img src=\"a.png\" decoding=\"sync\" loading=\"eager\" />");
    }

    #[test]
    fn lookalike_attributes_do_not_block_defaults() {
        let html = augment_images("<img src=\"a.png\" data-loading=\"x\" alt=\"decoding=sync\">");
        assert_eq!(
            html,
            "<img src=\"a.png\" data-loading=\"x\" alt=\"decoding=sync\" loading=\"lazy\" decoding=\"async\">"
        );
    }

    #[test]
    fn quoted_angle_bracket_stays_inside_the_tag() {
        let html = augment_images("<img alt=\"a > b\" src=\"c.png\"> after");
        assert_eq!(
            html,
            "<img alt=\"a > b\" src=\"c.png\" loading=\"lazy\" decoding=\"async\"> after"
        );
    }

    #[test]
    fn attribute_names_match_case_insensitively() {
        let html = augment_images("<img src=\"a.png\" LOADING=\"eager\" Decoding=\"sync\">");
        assert_eq!(html, "<img src=\"a.png\" LOADING=\"eager\" Decoding=\"sync\">");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }
}

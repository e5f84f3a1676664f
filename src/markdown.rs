//! Post Markdown Renderer
//!
//! Extends pulldown-cmark with:
//! - Raw HTML escaped instead of passed through
//! - Bare `http(s)://` and `www.` URLs turned into links
//! - Syntax highlighting for fenced code (syntect)
//! - `javascript:` link and image targets neutralized

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r"(?:https?://|www\.)[^\s<>]+").expect("URL pattern is valid"))
}

/// Render post content to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal { link_depth: usize },
    InCodeBlock { lang: Option<String>, content: String },
}

/// Transform parser events: escape HTML, linkify text, highlight code
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal { link_depth: 0 };

    for event in parser {
        match state {
            State::Normal { ref mut link_depth } => match event {
                // --- Code Blocks (Highlighting) ---
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                // --- Links & Images ---
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    *link_depth += 1;
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::End(TagEnd::Link) => {
                    *link_depth = link_depth.saturating_sub(1);
                    events.push(Event::End(TagEnd::Link));
                }
                Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }

                // --- Raw HTML is shown as text ---
                Event::Html(html) | Event::InlineHtml(html) => events.push(Event::Text(html)),

                // --- Bare URLs ---
                Event::Text(text) if *link_depth == 0 && url_pattern().is_match(&text) => {
                    events.extend(linkify(&text));
                }

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal { link_depth: 0 };
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let fallback = || format!("<pre><code>{}</code></pre>", escape_html(code));
    let Some(theme) = get_theme() else { return fallback() };
    let ss = get_syntax_set();

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| fallback())
}

// Characters escaped inside generated href attributes
const HREF_ENCODE_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") || scheme.starts_with("data:text") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Split text into plain runs and anchors for each URL found.
fn linkify(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut last = 0;

    for m in url_pattern().find_iter(text) {
        let raw = m.as_str();
        let url = raw.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '\'', '"']);
        if url.is_empty() {
            continue;
        }
        if m.start() > last {
            events.push(Event::Text(CowStr::from(text[last..m.start()].to_string())));
        }

        let href = if url.starts_with("www.") { format!("https://{}", url) } else { url.to_string() };
        let href = utf8_percent_encode(&href, HREF_ENCODE_SET).to_string();
        events.push(Event::Html(CowStr::from(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(&href),
            escape_html(url)
        ))));
        last = m.start() + url.len();
    }

    if last < text.len() {
        events.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("Hello <script>alert(1)</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let block = parse_markdown("<div onclick=\"x()\">hi</div>");
        assert!(!block.contains("<div"));
    }

    #[test]
    fn test_bare_urls_are_linked() {
        let html = parse_markdown("See https://example.com/a, or www.rust-lang.org.");
        assert!(html.contains(r#"<a href="https://example.com/a" target="_blank" rel="noopener noreferrer">https://example.com/a</a>,"#));
        assert!(html.contains(r#"<a href="https://www.rust-lang.org" target="_blank""#));
        assert!(html.contains(">www.rust-lang.org</a>."));
    }

    #[test]
    fn test_existing_links_not_relinked() {
        let html = parse_markdown("[https://a.dev](https://a.dev)");
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_script_links_neutralized() {
        let html = parse_markdown("[click](javascript:alert(1))");
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_code_blocks_highlighted_and_escaped() {
        let html = parse_markdown("```rust\nfn main() { let x = 1 < 2; }\n```");
        assert!(html.contains("<pre"));
        assert!(!html.contains("1 < 2"));
        let plain = parse_markdown("```\n<b>\n```");
        assert!(plain.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_markdown_basics() {
        let html = parse_markdown("## Title\n\n> quote\n\n- a\n- b");
        assert!(html.contains("<h2>Title</h2>"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<li>a</li>"));
    }
}

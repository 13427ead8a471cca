//! Configured `pulldown-cmark` renderer.

use super::highlight::Highlighter;
use crate::util::escape_html;
use once_cell::sync::Lazy;
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd,
    TextMergeStream,
};
use regex::Regex;
use std::collections::VecDeque;
use std::sync::Arc;

static BARE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("valid bare url regex"));

const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']'];

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "file:", "data:"];
const ALLOWED_DATA_PREFIXES: &[&str] = &[
    "data:image/gif;",
    "data:image/png;",
    "data:image/jpeg;",
    "data:image/webp;",
];

/// Whether a link or image destination may be emitted as an attribute.
///
/// Script-capable schemes are refused; `data:` is allowed only for raster
/// images. Whitespace and control characters are ignored while matching.
fn is_safe_destination(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if ALLOWED_DATA_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
    {
        return true;
    }
    !BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

/// Renderer feature switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Pass raw HTML in documents through; when off it is shown as text.
    pub html: bool,
    /// Turn bare `http(s)://` URLs in text into links.
    pub linkify: bool,
    /// Smart quotes and dashes.
    pub typographer: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            html: false,
            linkify: true,
            typographer: true,
        }
    }
}

/// Markdown renderer shared by every consumer of one site.
#[derive(Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
    highlighter: Option<Arc<dyn Highlighter>>,
}

impl std::fmt::Debug for MarkdownRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownRenderer")
            .field("options", &self.options)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

impl MarkdownRenderer {
    pub fn new(options: MarkdownOptions, highlighter: Option<Arc<dyn Highlighter>>) -> Self {
        Self {
            options,
            highlighter,
        }
    }

    pub fn options(&self) -> MarkdownOptions {
        self.options
    }

    /// Renders `markdown` to an HTML fragment.
    ///
    /// Leading whitespace is ignored so indented documents do not turn into
    /// one code block.
    pub fn render(&self, markdown: &str) -> String {
        let source = markdown.trim_start();
        if source.is_empty() {
            return String::new();
        }

        let mut parser_options = Options::empty();
        parser_options.insert(Options::ENABLE_TABLES);
        parser_options.insert(Options::ENABLE_STRIKETHROUGH);
        parser_options.insert(Options::ENABLE_TASKLISTS);
        if self.options.typographer {
            parser_options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }

        let allow_html = self.options.html;
        let parser = Parser::new_ext(source, parser_options).map(move |event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) if !allow_html => Event::Text(raw),
            other => other,
        });
        let events = DocumentEvents::new(
            TextMergeStream::new(parser),
            self.options.linkify,
            self.highlighter.clone(),
        );

        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, events);
        out
    }
}

/// Text of the first level-1 heading, if any.
///
/// Leading whitespace is ignored, as in [`MarkdownRenderer::render`].
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut inside = false;
    let mut text = String::new();
    for event in Parser::new(markdown.trim_start()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => inside = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if inside => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                inside = false;
                text.clear();
            }
            Event::Text(value) | Event::Code(value) if inside => text.push_str(&value),
            _ => {}
        }
    }
    None
}

struct PendingImage {
    src: String,
    title: String,
    alt: String,
    safe: bool,
}

/// Rewrites code blocks, images and bare URLs in an event stream.
struct DocumentEvents<'a, I> {
    inner: I,
    linkify: bool,
    highlighter: Option<Arc<dyn Highlighter>>,
    pending: VecDeque<Event<'a>>,
    /// One flag per open link: whether its start tag was emitted.
    links: Vec<bool>,
    code: Option<(String, String)>,
    image: Option<PendingImage>,
}

impl<'a, I> DocumentEvents<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn new(inner: I, linkify: bool, highlighter: Option<Arc<dyn Highlighter>>) -> Self {
        Self {
            inner,
            linkify,
            highlighter,
            pending: VecDeque::new(),
            links: Vec::new(),
            code: None,
            image: None,
        }
    }

    fn code_block_html(&self, language: &str, code: &str) -> String {
        let body = self
            .highlighter
            .as_ref()
            .and_then(|highlighter| {
                let known = if language.is_empty() {
                    None
                } else {
                    highlighter.highlight(code, language)
                };
                known.or_else(|| highlighter.highlight_auto(code))
            })
            .unwrap_or_else(|| escape_html(code));

        if language.is_empty() {
            format!("<pre><code>{body}</code></pre>\n")
        } else {
            format!(
                "<pre><code class=\"language-{}\">{body}</code></pre>\n",
                escape_html(language)
            )
        }
    }

    fn image_html(image: &PendingImage) -> String {
        let title = if image.title.is_empty() {
            String::new()
        } else {
            format!(" title=\"{}\"", escape_html(&image.title))
        };
        format!(
            "<img src=\"{}\" alt=\"{}\"{title} loading=\"lazy\" decoding=\"async\">",
            escape_html(&image.src),
            escape_html(&image.alt)
        )
    }

    /// Splits text around bare URLs, queueing link events for each match.
    fn linkify_text(&mut self, text: CowStr<'a>) -> Event<'a> {
        let mut cursor = 0;
        let mut queued = Vec::new();
        for found in BARE_URL_RE.find_iter(&text) {
            let url = found.as_str().trim_end_matches(URL_TRAILING_PUNCTUATION);
            if url.len() <= "https://".len() {
                continue;
            }
            let start = found.start();
            let end = start + url.len();
            if start > cursor {
                queued.push(Event::Text(text[cursor..start].to_string().into()));
            }
            queued.push(Event::Start(Tag::Link {
                link_type: LinkType::Autolink,
                dest_url: url.to_string().into(),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            queued.push(Event::Text(url.to_string().into()));
            queued.push(Event::End(TagEnd::Link));
            cursor = end;
        }

        if queued.is_empty() {
            return Event::Text(text);
        }
        if cursor < text.len() {
            queued.push(Event::Text(text[cursor..].to_string().into()));
        }
        let mut queued = queued.into_iter();
        let first = queued.next().unwrap_or(Event::Text(CowStr::Borrowed("")));
        self.pending.extend(queued);
        first
    }
}

impl<'a, I> Iterator for DocumentEvents<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        loop {
            let event = self.inner.next()?;

            if let Some((_, buffer)) = self.code.as_mut() {
                match event {
                    Event::Text(text) => {
                        buffer.push_str(&text);
                        continue;
                    }
                    Event::End(TagEnd::CodeBlock) => {
                        let (language, code) = self.code.take().unwrap_or_default();
                        return Some(Event::Html(self.code_block_html(&language, &code).into()));
                    }
                    _ => continue,
                }
            }

            if let Some(image) = self.image.as_mut() {
                match event {
                    Event::Text(text) | Event::Code(text) => {
                        image.alt.push_str(&text);
                        continue;
                    }
                    Event::End(TagEnd::Image) => {
                        let image = self.image.take()?;
                        if !image.safe {
                            return Some(Event::Text(image.alt.into()));
                        }
                        return Some(Event::InlineHtml(Self::image_html(&image).into()));
                    }
                    _ => continue,
                }
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().unwrap_or_default().to_string()
                        }
                        CodeBlockKind::Indented => String::new(),
                    };
                    self.code = Some((language, String::new()));
                }
                Event::Start(Tag::Image {
                    dest_url, title, ..
                }) => {
                    self.image = Some(PendingImage {
                        safe: is_safe_destination(&dest_url),
                        src: dest_url.to_string(),
                        title: title.to_string(),
                        alt: String::new(),
                    });
                }
                Event::Start(Tag::Link { ref dest_url, .. }) => {
                    let safe = is_safe_destination(dest_url);
                    self.links.push(safe);
                    if safe {
                        return Some(event);
                    }
                }
                Event::End(TagEnd::Link) => {
                    if self.links.pop().unwrap_or(true) {
                        return Some(event);
                    }
                }
                Event::Text(text) if self.linkify && self.links.is_empty() => {
                    return Some(self.linkify_text(text));
                }
                other => return Some(other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{first_heading, MarkdownOptions, MarkdownRenderer};
    use crate::markdown::highlight::ClassHighlighter;
    use std::sync::Arc;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new(MarkdownOptions::default(), None)
    }

    #[test]
    fn renders_basic_markdown() {
        let html = renderer().render("# Hello\n\nThis is **bold**.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(renderer().render(""), "");
        assert_eq!(renderer().render("  \n\t"), "");
    }

    #[test]
    fn leading_indentation_does_not_become_code() {
        let html = renderer().render("      # Title");
        assert!(html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn raw_html_is_escaped_by_default() {
        let html = renderer().render("hi <script>alert(1)</script>\n\n<div>block</div>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<div>"));
    }

    #[test]
    fn raw_html_passes_when_enabled() {
        let renderer = MarkdownRenderer::new(
            MarkdownOptions {
                html: true,
                ..MarkdownOptions::default()
            },
            None,
        );
        assert!(renderer.render("<div>block</div>\n").contains("<div>block</div>"));
    }

    #[test]
    fn bare_urls_become_links_outside_existing_links() {
        let html = renderer().render("see https://example.com/a. and [x](https://b.example)");
        assert!(html.contains(r#"<a href="https://example.com/a">https://example.com/a</a>."#));
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn linkify_can_be_disabled() {
        let renderer = MarkdownRenderer::new(
            MarkdownOptions {
                linkify: false,
                ..MarkdownOptions::default()
            },
            None,
        );
        assert!(!renderer.render("https://example.com").contains("<a "));
    }

    #[test]
    fn images_render_lazy_with_escaped_alt() {
        let html = renderer().render(r#"![a <b> *alt*](img/p.png "Cap")"#);
        assert!(html.contains(
            r#"<img src="img/p.png" alt="a &lt;b&gt; alt" title="Cap" loading="lazy" decoding="async">"#
        ));
    }

    #[test]
    fn code_blocks_are_escaped_and_tagged() {
        let html = renderer().render("```rust\nlet a = 1 < 2;\n```\n");
        assert!(html.contains(r#"<pre><code class="language-rust">let a = 1 &lt; 2;"#));
    }

    #[test]
    fn code_blocks_use_highlighter() {
        let renderer =
            MarkdownRenderer::new(MarkdownOptions::default(), Some(Arc::new(ClassHighlighter)));
        let html = renderer.render("```sh\n# comment\nls\n```\n");
        assert!(html.contains(r#"<span class="hljs-comment"># comment</span>"#));
    }

    #[test]
    fn urls_in_code_are_not_linkified() {
        let html = renderer().render("`https://example.com`\n\n```\nhttps://example.com\n```\n");
        assert!(!html.contains("<a "));
    }

    #[test]
    fn typographer_curls_quotes() {
        let html = renderer().render("\"quoted\"");
        assert!(html.contains('\u{201c}'));
    }

    #[test]
    fn script_destinations_render_as_plain_text() {
        let html = renderer()
            .render("[click](javascript:alert(1)) ![i](JavaScript:alert(2)) [v]( VBSCRIPT:x )");
        assert_eq!(html, "<p>click i v</p>\n");
    }

    #[test]
    fn file_and_non_image_data_destinations_are_refused() {
        let html = renderer().render("[f](file:///etc/passwd) [d](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!html.contains("<a "));
        assert!(html.contains("f d"));
    }

    #[test]
    fn image_data_and_http_destinations_are_kept() {
        let html = renderer().render("![dot](data:image/png;base64,AAAA) [ok](https://example.com)");
        assert!(html.contains(r#"<img src="data:image/png;base64,AAAA" alt="dot""#));
        assert!(html.contains(r#"<a href="https://example.com">ok</a>"#));
    }

    #[test]
    fn first_heading_reads_level_one_only() {
        assert_eq!(
            first_heading("## Sub\n\n# Main `title`\n"),
            Some("Main title".to_string())
        );
        assert_eq!(first_heading("no heading"), None);
    }

    #[test]
    fn first_heading_matches_rendered_heading_after_indentation() {
        let source = "    # Title\n\nbody";
        assert!(renderer().render(source).contains("<h1>Title</h1>"));
        assert_eq!(first_heading(source), Some("Title".to_string()));
    }
}

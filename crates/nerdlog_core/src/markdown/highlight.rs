//! Syntax highlighting hook for fenced code blocks.

use crate::util::escape_html;

/// Produces highlighted HTML for a code block body.
///
/// Implementations return `None` when they cannot handle the input; the
/// renderer then falls back to auto-detection and finally to escaped text.
/// Returned HTML is inserted as-is inside `<pre><code>`.
pub trait Highlighter: Send + Sync {
    /// Highlights `code` written in `language`.
    fn highlight(&self, code: &str, language: &str) -> Option<String>;

    /// Highlights `code` with an unknown language.
    fn highlight_auto(&self, code: &str) -> Option<String> {
        let _ = code;
        None
    }
}

/// Minimal highlighter that marks comment lines for a fixed language set.
///
/// Lines starting with the language's comment marker are wrapped in
/// `<span class="hljs-comment">`; everything else is escaped verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassHighlighter;

impl ClassHighlighter {
    fn comment_marker(language: &str) -> Option<&'static str> {
        match language.to_ascii_lowercase().as_str() {
            "rust" | "rs" | "js" | "javascript" | "ts" | "typescript" | "c" | "cpp" | "go"
            | "java" => Some("//"),
            "sh" | "bash" | "shell" | "python" | "py" | "toml" | "yaml" | "yml" => Some("#"),
            "sql" | "lua" => Some("--"),
            _ => None,
        }
    }
}

impl Highlighter for ClassHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        let marker = Self::comment_marker(language)?;
        let mut out = String::with_capacity(code.len());
        for line in code.split_inclusive('\n') {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            if body.trim_start().starts_with(marker) {
                out.push_str(r#"<span class="hljs-comment">"#);
                out.push_str(&escape_html(body));
                out.push_str("</span>");
            } else {
                out.push_str(&escape_html(body));
            }
            out.push_str(newline);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassHighlighter, Highlighter};

    #[test]
    fn wraps_comment_lines_and_escapes_code() {
        let html = ClassHighlighter
            .highlight("// note\nlet x = a < b;\n", "rust")
            .expect("rust is known");
        assert_eq!(
            html,
            "<span class=\"hljs-comment\">// note</span>\nlet x = a &lt; b;\n"
        );
    }

    #[test]
    fn unknown_language_is_declined() {
        assert!(ClassHighlighter.highlight("x", "brainfuck").is_none());
        assert!(ClassHighlighter.highlight_auto("x").is_none());
    }
}

//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
/// - Autolinks
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.autolink = true;

    let html_output = render(markdown, &options);

    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_extensions() {
        let html = markdown_to_html("# Title\n\n~~old~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(html.contains("hello"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_code_fence() {
        let html = markdown_to_html("```rust\nlet x = 1;\n```\n");
        assert!(html.contains("<pre>"));
        assert!(html.contains("let x = 1;"));
    }
}

//! HTML → Markdown conversion for the transport body.
//!
//! The body editor hands us an HTML string; the backend expects lightweight
//! markup. Conversion is a pure function and cheap, so callers recompute it
//! on every read instead of caching — a stale preview is worse than a
//! redundant conversion.

/// Convert an HTML body to Markdown using the htmd library.
///
/// htmd handles any well-formed HTML; if it rejects the input anyway, the
/// raw text is passed through unchanged rather than failing the preview or
/// the submission.
pub fn html_to_markup(html: &str) -> String {
    let converter = htmd::HtmlToMarkdown::new();
    match converter.convert(html) {
        Ok(md) => md,
        Err(e) => {
            tracing::warn!(error = %e, "HTML conversion failed, passing body through raw");
            html.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_markup("hello world"), "hello world");
    }

    #[test]
    fn test_bold_and_italic() {
        let md = html_to_markup("<p>a <strong>bold</strong> and <em>italic</em> word</p>");
        assert!(md.contains("**bold**"), "got: {md}");
        assert!(md.contains("*italic*") || md.contains("_italic_"), "got: {md}");
    }

    #[test]
    fn test_paragraphs_become_blank_line_separated() {
        let md = html_to_markup("<p>first</p><p>second</p>");
        assert!(md.contains("first"));
        assert!(md.contains("second"));
        assert!(md.contains("\n"), "paragraphs should be separated, got: {md}");
    }

    #[test]
    fn test_link_conversion() {
        let md = html_to_markup(r#"<a href="https://example.com">site</a>"#);
        assert!(md.contains("[site](https://example.com)"), "got: {md}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_markup(""), "");
    }
}

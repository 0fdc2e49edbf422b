//! Styled-text primitives panels render into.
//!
//! A panel produces [`Line`]s of [`Span`]s; the terminal backend decides
//! what a [`Tone`] looks like. Widths are measured in display columns, not
//! bytes.

use unicode_width::UnicodeWidthStr;

/// Foreground accent applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Regular body text.
    #[default]
    Default,
    /// De-emphasized text (hints, code snippets).
    Muted,
    /// Section headings.
    Heading,
    /// Passing statuses.
    Success,
    /// Failing statuses.
    Failure,
    /// Interactive hints and in-progress indicators.
    Accent,
}

/// A run of uniformly styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Text content.
    pub content: String,
    /// Foreground accent.
    pub tone: Tone,
    /// Bold flag.
    pub bold: bool,
}

impl Span {
    /// Create an unstyled span.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tone: Tone::default(),
            bold: false,
        }
    }

    /// Set the tone.
    #[must_use]
    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Render bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.content.width()
    }
}

impl From<&str> for Span {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Span {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// One rendered row of a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Spans in display order.
    pub spans: Vec<Span>,
}

impl Line {
    /// Empty line.
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Line from any number of spans.
    #[must_use]
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    /// Append a span.
    #[must_use]
    pub fn push(mut self, span: impl Into<Span>) -> Self {
        self.spans.push(span.into());
        self
    }

    /// Concatenated text content, styling dropped. Mostly for assertions.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.content.as_str()).collect()
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Truncate to at most `width` display columns, dropping whole
    /// characters from the end.
    #[must_use]
    pub fn truncated(mut self, width: usize) -> Self {
        let mut remaining = width;
        let mut kept = Vec::new();
        for span in self.spans.drain(..) {
            if remaining == 0 {
                break;
            }
            let span_width = span.width();
            if span_width <= remaining {
                remaining -= span_width;
                kept.push(span);
            } else {
                let mut clipped = String::new();
                for ch in span.content.chars() {
                    let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
                    if ch_width > remaining {
                        break;
                    }
                    remaining -= ch_width;
                    clipped.push(ch);
                }
                if !clipped.is_empty() {
                    kept.push(Span {
                        content: clipped,
                        tone: span.tone,
                        bold: span.bold,
                    });
                }
                break;
            }
        }
        Self { spans: kept }
    }
}

impl From<&str> for Line {
    fn from(content: &str) -> Self {
        Self::from_spans([Span::new(content)])
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self::from_spans([span])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_span_builder() {
        let span = Span::new("ok").tone(Tone::Success).bold();
        assert_eq!(span.content, "ok");
        assert_eq!(span.tone, Tone::Success);
        assert!(span.bold);
    }

    #[test]
    fn test_line_text_concatenates() {
        let line = Line::new().push("a").push(Span::new("b").tone(Tone::Muted));
        assert_eq!(line.text(), "ab");
    }

    #[test]
    fn test_width_counts_columns_not_bytes() {
        // CJK characters occupy two columns each.
        let line = Line::from("漢字");
        assert_eq!(line.width(), 4);
        assert_eq!(Line::from("abc").width(), 3);
    }

    #[test]
    fn test_truncated_keeps_prefix() {
        let line = Line::new().push("hello ").push("world");
        let cut = line.truncated(8);
        assert_eq!(cut.text(), "hello wo");
    }

    #[test]
    fn test_truncated_never_splits_wide_chars() {
        let cut = Line::from("漢字").truncated(3);
        assert_eq!(cut.text(), "漢");
        assert_eq!(cut.width(), 2);
    }

    #[test]
    fn test_truncated_preserves_styling() {
        let line = Line::new().push(Span::new("abcdef").tone(Tone::Failure));
        let cut = line.truncated(3);
        assert_eq!(cut.spans.len(), 1);
        assert_eq!(cut.spans[0].tone, Tone::Failure);
    }

    proptest! {
        #[test]
        fn prop_truncated_fits_width(content in ".{0,64}", width in 0usize..32) {
            let cut = Line::from(content.as_str()).truncated(width);
            prop_assert!(cut.width() <= width);
        }

        #[test]
        fn prop_truncated_is_prefix(content in "[a-z ]{0,64}", width in 0usize..32) {
            let cut = Line::from(content.as_str()).truncated(width);
            prop_assert!(content.starts_with(&cut.text()));
        }
    }
}

//! Text display width utilities for proper Unicode handling
//!
//! Widths are measured over raw bytes so that text which is not valid UTF-8
//! still gets a width: malformed bytes count as the code point of their value.
//! Measurement stops at the first NUL byte.

use crate::utf8::Decoder;
use crate::width::classify_width;

const NEWLINE: u32 = '\n' as u32;

/// Return the display width of a string, accounting for CJK double-width characters.
///
/// For multi-line strings this is the width of the widest line.
pub fn display_width(s: &str) -> usize {
    text_display_width(s, None)
}

/// Maximum display width across the `\n`-separated lines of `text`.
///
/// With `max_bytes`, measurement stops once the cursor has moved past that
/// byte offset; a character starting at or before `max_bytes` still counts.
/// Control characters occupy no columns.
pub fn text_display_width(text: impl AsRef<[u8]>, max_bytes: Option<usize>) -> usize {
    let mut decoder = Decoder::new(text.as_ref());
    let mut width = 0;
    let mut max_width = 0;

    while let Some(ch) = decoder.next() {
        if ch.code_point == NEWLINE {
            width = 0;
        } else {
            width += classify_width(ch.code_point).columns();
        }
        max_width = max_width.max(width);

        if max_bytes.is_some_and(|cap| decoder.position() > cap) {
            break;
        }
    }

    max_width
}

/// Byte range of one line (newline excluded) and its display width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
    pub width: usize,
}

impl LineSpan {
    /// The line's bytes within the measured text, or `None` if `text` is too
    /// short to hold the span
    pub fn bytes<'a>(&self, text: &'a [u8]) -> Option<&'a [u8]> {
        text.get(self.start..self.end)
    }
}

/// Per-line widths of a text and the widest of them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineWidths {
    pub max_width: usize,
    pub lines: Vec<LineSpan>,
}

impl LineWidths {
    pub fn widths(&self) -> Vec<usize> {
        self.lines.iter().map(|l| l.width).collect()
    }

    /// Spaces needed to right-pad each line to `target` columns
    pub fn padding(&self, target: usize) -> Vec<usize> {
        self.lines
            .iter()
            .map(|l| target.saturating_sub(l.width))
            .collect()
    }
}

/// Measure every line of `text`.
///
/// Lines are split on `\n` up to the first NUL byte. A trailing newline does
/// not open another line, so `"A\n"` has one line and `""` has none. The `\r`
/// of a CRLF line ending is left out of the line's span.
pub fn line_widths(text: impl AsRef<[u8]>) -> LineWidths {
    let bytes = text.as_ref();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let bytes = &bytes[..end];

    let mut lines = Vec::new();
    let mut start = 0;
    while start < bytes.len() {
        let line_end = bytes[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(bytes.len(), |i| start + i);
        let width = text_display_width(&bytes[start..], Some(line_end - start));
        let crlf = line_end < bytes.len() && line_end > start && bytes[line_end - 1] == b'\r';
        let content_end = if crlf {
            line_end - 1
        } else {
            line_end
        };
        lines.push(LineSpan {
            start,
            end: content_end,
            width,
        });
        start = line_end + 1;
    }

    LineWidths {
        max_width: text_display_width(bytes, None),
        lines,
    }
}

//! 突然の死 banner rendering
//!
//! ```text
//! ＿人人人人＿
//! ＞突然の死＜
//! ￣Y^Y^Y^Y^￣
//! ```
//!
//! Every message line is right-padded with spaces so the closing marker lines
//! up, using the display width of the line rather than its byte length.

use crate::text::{display_width, line_widths, LineSpan};

/// Message shown when nothing else is configured
pub const DEFAULT_MESSAGE: &str = "突然の死";

/// Glyphs that make up the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerChars {
    pub top_left: &'static str,
    pub top: &'static str,
    pub top_right: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub bottom_left: &'static str,
    pub bottom: &'static str,
    pub bottom_right: &'static str,
}

pub const FULLWIDTH_CHARS: BannerChars = BannerChars {
    top_left: "＿",
    top: "人",
    top_right: "＿",
    left: "＞",
    right: "＜",
    bottom_left: "￣",
    bottom: "Y^",
    bottom_right: "￣",
};

pub const ASCII_CHARS: BannerChars = BannerChars {
    top_left: "_",
    top: "^",
    top_right: "_",
    left: ">",
    right: "<",
    bottom_left: "-",
    bottom: "Y^",
    bottom_right: "-",
};

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct BannerOptions {
    /// Use plain ASCII glyphs instead of fullwidth ones
    pub ascii: bool,
}

impl BannerOptions {
    fn chars(&self) -> &'static BannerChars {
        if self.ascii {
            &ASCII_CHARS
        } else {
            &FULLWIDTH_CHARS
        }
    }
}

/// Smallest width >= `content` that both border segments tile exactly
fn frame_width(content: usize, top: usize, bottom: usize) -> usize {
    let top = top.max(1);
    let bottom = bottom.max(1);
    let mut width = content;
    while width % top != 0 || width % bottom != 0 {
        width += 1;
    }
    width
}

fn push_border(out: &mut Vec<u8>, left: &str, segment: &str, right: &str, width: usize) {
    let count = width / display_width(segment).max(1);
    out.extend_from_slice(left.as_bytes());
    for _ in 0..count {
        out.extend_from_slice(segment.as_bytes());
    }
    out.extend_from_slice(right.as_bytes());
    out.push(b'\n');
}

/// Render the banner around arbitrary bytes.
///
/// The message is copied through unchanged, so malformed UTF-8 in the input
/// ends up in the output as-is. The message ends at its first NUL byte.
pub fn render_banner_bytes(message: &[u8], options: &BannerOptions) -> Vec<u8> {
    let chars = options.chars();
    let measured = line_widths(message);
    let width = frame_width(
        measured.max_width,
        display_width(chars.top),
        display_width(chars.bottom),
    );

    let mut lines = measured.lines;
    if lines.is_empty() {
        lines.push(LineSpan {
            start: 0,
            end: 0,
            width: 0,
        });
    }

    let mut out = Vec::with_capacity(message.len() + (lines.len() + 2) * (width + 8));
    push_border(&mut out, chars.top_left, chars.top, chars.top_right, width);
    for line in &lines {
        out.extend_from_slice(chars.left.as_bytes());
        out.extend_from_slice(line.bytes(message).unwrap_or_default());
        out.resize(out.len() + width.saturating_sub(line.width), b' ');
        out.extend_from_slice(chars.right.as_bytes());
        out.push(b'\n');
    }
    push_border(
        &mut out,
        chars.bottom_left,
        chars.bottom,
        chars.bottom_right,
        width,
    );
    out
}

/// Render the banner around a message
pub fn render_banner(message: &str, options: &BannerOptions) -> String {
    String::from_utf8_lossy(&render_banner_bytes(message.as_bytes(), options)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_width() {
        assert_eq!(frame_width(8, 2, 2), 8);
        assert_eq!(frame_width(7, 2, 2), 8);
        assert_eq!(frame_width(3, 1, 2), 4);
        assert_eq!(frame_width(0, 2, 2), 0);
    }

    #[test]
    fn test_render_default_message() {
        let output = render_banner(DEFAULT_MESSAGE, &BannerOptions::default());
        insta::assert_snapshot!(output.trim_end(), @r"
        ＿人人人人＿
        ＞突然の死＜
        ￣Y^Y^Y^Y^￣
        ");
    }

    #[test]
    fn test_render_multiline_pads_lines() {
        let output = render_banner("Hello\n突然の死", &BannerOptions::default());
        insta::assert_snapshot!(output.trim_end(), @r"
        ＿人人人人＿
        ＞Hello   ＜
        ＞突然の死＜
        ￣Y^Y^Y^Y^￣
        ");
    }

    #[test]
    fn test_render_odd_width_rounds_up() {
        let output = render_banner("abc", &BannerOptions::default());
        assert_eq!(output, "＿人人＿\n＞abc ＜\n￣Y^Y^￣\n");
    }

    #[test]
    fn test_render_ascii() {
        let output = render_banner("abc", &BannerOptions { ascii: true });
        assert_eq!(output, "_^^^^_\n>abc <\n-Y^Y^-\n");
        assert!(!output.contains('人'));
    }

    #[test]
    fn test_render_empty_message() {
        let output = render_banner("", &BannerOptions::default());
        assert_eq!(output, "＿＿\n＞＜\n￣￣\n");
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let with = render_banner("突然の死\n", &BannerOptions::default());
        let without = render_banner("突然の死", &BannerOptions::default());
        assert_eq!(with, without);
    }

    #[test]
    fn test_every_row_has_same_width() {
        let message = "突然の死\ne\u{0301}clair\nｆｕｌｌ ｗｉｄｔｈ\n\tx";
        let output = render_banner(message, &BannerOptions::default());
        let rows = crate::text::line_widths(&output).widths();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|&w| w == rows[0]), "{:?}", rows);
    }

    #[test]
    fn test_crlf_message_keeps_markers_aligned() {
        let output = render_banner("ab\r\ncd", &BannerOptions { ascii: true });
        assert_eq!(output, "_^^_\n>ab<\n>cd<\n-Y^-\n");
        assert!(!output.contains('\r'));
    }

    #[test]
    fn test_malformed_bytes_pass_through() {
        let output = render_banner_bytes(&[b'a', 0xFF, b'b'], &BannerOptions { ascii: true });
        assert!(output.windows(3).any(|w| w == [b'a', 0xFF, b'b']));
    }
}

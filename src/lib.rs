//! suddendeath - Terminal display width of UTF-8 text, and the 突然の死 banner
//!
//! # Display Width Example
//! ```
//! use suddendeath::text_display_width;
//!
//! assert_eq!(text_display_width("A", None), 1);
//! assert_eq!(text_display_width("突然", None), 4);
//! // The widest line wins
//! assert_eq!(text_display_width("A\nBB", None), 2);
//! ```
//!
//! # Per-line Widths Example
//! ```
//! use suddendeath::line_widths;
//!
//! let lines = line_widths("A\nBB");
//! assert_eq!(lines.max_width, 2);
//! assert_eq!(lines.widths(), vec![1, 2]);
//! ```
//!
//! # Classification Example
//! ```
//! use suddendeath::{classify_width, WidthClass};
//!
//! assert_eq!(classify_width('中' as u32), WidthClass::Wide);
//! assert_eq!(classify_width(0x0301), WidthClass::Invisible);
//! assert_eq!(classify_width(0x07), WidthClass::NonPrintable);
//! ```
//!
//! # Decoding Example
//! ```
//! use suddendeath::{decode_next, Utf8Char};
//!
//! // A lone lead byte decodes as itself
//! assert_eq!(
//!     decode_next(&[0xC2], 0, None),
//!     Some(Utf8Char { code_point: 0xC2, len: 1 })
//! );
//! assert_eq!(decode_next(b"", 0, None), None);
//! ```
//!
//! # Banner Example
//! ```
//! use suddendeath::{render_banner, BannerOptions};
//!
//! let output = render_banner("突然の死", &BannerOptions::default());
//! assert_eq!(output, "＿人人人人＿\n＞突然の死＜\n￣Y^Y^Y^Y^￣\n");
//! ```

mod banner;
mod config;
mod error;
mod text;
mod utf8;
mod width;

pub use banner::{
    render_banner, render_banner_bytes, BannerChars, BannerOptions, ASCII_CHARS,
    DEFAULT_MESSAGE, FULLWIDTH_CHARS,
};
pub use config::{Config, MessageSource};
pub use error::SuddenDeathError;
pub use text::{display_width, line_widths, text_display_width, LineSpan, LineWidths};
pub use utf8::{decode_next, CodePoint, Decoder, Utf8Char};
pub use width::{char_width, classify_width, in_table, Interval, WidthClass, COMBINING};

//! Lenient UTF-8 decoding
//!
//! Decodes one code point at a time and never rejects input: a malformed or
//! truncated sequence decodes as its lead byte with a length of 1, so a caller
//! stepping through a buffer always makes forward progress.

use std::iter::FusedIterator;

/// A Unicode code point as produced by the decoder.
///
/// Legacy 5 and 6 byte sequences can yield values above `0x10FFFF`, up to
/// `0x7FFF_FFFF`.
pub type CodePoint = u32;

/// Encoded length of a sequence, indexed by its lead byte.
///
/// Continuation bytes (`0x80..=0xBF`) and the unused `0xFE`/`0xFF` map to 1 so
/// that a stray byte is consumed on its own.
#[rustfmt::skip]
const UTF8_LEN: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 1, 1,
];

/// One decoded character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Char {
    /// Decoded value, or the raw lead byte for a malformed sequence
    pub code_point: CodePoint,
    /// Bytes consumed, always at least 1
    pub len: usize,
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Length of the sequence starting at `bytes[0]`, or 1 if it is malformed or
/// cut short.
fn sequence_len(bytes: &[u8]) -> usize {
    let len = UTF8_LEN[bytes[0] as usize] as usize;
    match bytes.get(1..len) {
        Some(tail) if tail.iter().copied().all(is_continuation) => len,
        _ => 1,
    }
}

/// Decode the character at `offset`.
///
/// Bytes at or past `limit` (when given) are treated as absent. Returns `None`
/// at the end of the readable region or on a NUL byte; every `Some` consumes at
/// least one byte.
pub fn decode_next(bytes: &[u8], offset: usize, limit: Option<usize>) -> Option<Utf8Char> {
    let end = limit.map_or(bytes.len(), |l| l.min(bytes.len()));
    let region = bytes.get(offset..end)?;
    let lead = *region.first()?;
    if lead == 0 {
        return None;
    }

    let len = sequence_len(region);
    let code_point = if len == 1 {
        CodePoint::from(lead)
    } else {
        let payload = CodePoint::from(lead & (0x7F >> len));
        region[1..len]
            .iter()
            .fold(payload, |acc, &b| (acc << 6) | CodePoint::from(b & 0x3F))
    };

    Some(Utf8Char { code_point, len })
}

/// Lazy code point stream over a byte buffer
///
/// Stops at the first NUL byte or at the limit. Cloning or calling
/// [`Decoder::reset`] restarts the stream.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    limit: Option<usize>,
    done: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Decoder {
            bytes,
            pos: 0,
            limit: None,
            done: false,
        }
    }

    /// Decode no further than byte offset `limit`
    pub fn with_limit(bytes: &'a [u8], limit: usize) -> Self {
        Decoder {
            limit: Some(limit),
            ..Decoder::new(bytes)
        }
    }

    /// Byte offset of the next character
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.done = false;
    }
}

impl Iterator for Decoder<'_> {
    type Item = Utf8Char;

    fn next(&mut self) -> Option<Utf8Char> {
        if self.done {
            return None;
        }
        match decode_next(self.bytes, self.pos, self.limit) {
            Some(ch) => {
                self.pos += ch.len;
                Some(ch)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for Decoder<'_> {}

//! Per code point display width classification

use crate::utf8::CodePoint;

/// Display width class of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// Takes no column: NUL, combining marks, format characters
    Invisible,
    /// One column
    Narrow,
    /// Two columns: CJK, Hangul, fullwidth forms
    Wide,
    /// C0/C1 control characters and DEL
    NonPrintable,
}

impl WidthClass {
    /// Columns this class adds to a line. Control characters occupy no space.
    pub fn columns(self) -> usize {
        match self {
            WidthClass::Invisible | WidthClass::NonPrintable => 0,
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
        }
    }

    /// wcwidth-style value: -1 for non-printable, otherwise the column count
    pub fn value(self) -> i8 {
        match self {
            WidthClass::NonPrintable => -1,
            WidthClass::Invisible => 0,
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
        }
    }

    pub fn is_printable(self) -> bool {
        self != WidthClass::NonPrintable
    }
}

/// Inclusive code point range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: u16,
    pub last: u16,
}

const fn iv(first: u16, last: u16) -> Interval {
    Interval { first, last }
}

/// Non-spacing and enclosing combining marks plus zero-width format
/// characters. Sorted by `first`, non-overlapping.
#[rustfmt::skip]
pub static COMBINING: &[Interval] = &[
    iv(0x0300, 0x034E), iv(0x0360, 0x0362), iv(0x0483, 0x0486),
    iv(0x0488, 0x0489), iv(0x0591, 0x05A1), iv(0x05A3, 0x05B9),
    iv(0x05BB, 0x05BD), iv(0x05BF, 0x05BF), iv(0x05C1, 0x05C2),
    iv(0x05C4, 0x05C4), iv(0x064B, 0x0655), iv(0x0670, 0x0670),
    iv(0x06D6, 0x06E4), iv(0x06E7, 0x06E8), iv(0x06EA, 0x06ED),
    iv(0x070F, 0x070F), iv(0x0711, 0x0711), iv(0x0730, 0x074A),
    iv(0x07A6, 0x07B0), iv(0x0901, 0x0902), iv(0x093C, 0x093C),
    iv(0x0941, 0x0948), iv(0x094D, 0x094D), iv(0x0951, 0x0954),
    iv(0x0962, 0x0963), iv(0x0981, 0x0981), iv(0x09BC, 0x09BC),
    iv(0x09C1, 0x09C4), iv(0x09CD, 0x09CD), iv(0x09E2, 0x09E3),
    iv(0x0A02, 0x0A02), iv(0x0A3C, 0x0A3C), iv(0x0A41, 0x0A42),
    iv(0x0A47, 0x0A48), iv(0x0A4B, 0x0A4D), iv(0x0A70, 0x0A71),
    iv(0x0A81, 0x0A82), iv(0x0ABC, 0x0ABC), iv(0x0AC1, 0x0AC5),
    iv(0x0AC7, 0x0AC8), iv(0x0ACD, 0x0ACD), iv(0x0B01, 0x0B01),
    iv(0x0B3C, 0x0B3C), iv(0x0B3F, 0x0B3F), iv(0x0B41, 0x0B43),
    iv(0x0B4D, 0x0B4D), iv(0x0B56, 0x0B56), iv(0x0B82, 0x0B82),
    iv(0x0BC0, 0x0BC0), iv(0x0BCD, 0x0BCD), iv(0x0C3E, 0x0C40),
    iv(0x0C46, 0x0C48), iv(0x0C4A, 0x0C4D), iv(0x0C55, 0x0C56),
    iv(0x0CBF, 0x0CBF), iv(0x0CC6, 0x0CC6), iv(0x0CCC, 0x0CCD),
    iv(0x0D41, 0x0D43), iv(0x0D4D, 0x0D4D), iv(0x0DCA, 0x0DCA),
    iv(0x0DD2, 0x0DD4), iv(0x0DD6, 0x0DD6), iv(0x0E31, 0x0E31),
    iv(0x0E34, 0x0E3A), iv(0x0E47, 0x0E4E), iv(0x0EB1, 0x0EB1),
    iv(0x0EB4, 0x0EB9), iv(0x0EBB, 0x0EBC), iv(0x0EC8, 0x0ECD),
    iv(0x0F18, 0x0F19), iv(0x0F35, 0x0F35), iv(0x0F37, 0x0F37),
    iv(0x0F39, 0x0F39), iv(0x0F71, 0x0F7E), iv(0x0F80, 0x0F84),
    iv(0x0F86, 0x0F87), iv(0x0F90, 0x0F97), iv(0x0F99, 0x0FBC),
    iv(0x0FC6, 0x0FC6), iv(0x102D, 0x1030), iv(0x1032, 0x1032),
    iv(0x1036, 0x1037), iv(0x1039, 0x1039), iv(0x1058, 0x1059),
    iv(0x1160, 0x11FF), iv(0x17B7, 0x17BD), iv(0x17C6, 0x17C6),
    iv(0x17C9, 0x17D3), iv(0x180B, 0x180E), iv(0x18A9, 0x18A9),
    iv(0x200B, 0x200F), iv(0x202A, 0x202E), iv(0x206A, 0x206F),
    iv(0x20D0, 0x20E3), iv(0x302A, 0x302F), iv(0x3099, 0x309A),
    iv(0xFB1E, 0xFB1E), iv(0xFE20, 0xFE23), iv(0xFEFF, 0xFEFF),
    iv(0xFFF9, 0xFFFB),
];

/// Whether `cp` falls in one of the intervals of a sorted, non-overlapping table
pub fn in_table(cp: CodePoint, table: &[Interval]) -> bool {
    let (Some(lo), Some(hi)) = (table.first(), table.last()) else {
        return false;
    };
    if cp < u32::from(lo.first) || cp > u32::from(hi.last) {
        return false;
    }
    table
        .binary_search_by(|iv| {
            if u32::from(iv.last) < cp {
                std::cmp::Ordering::Less
            } else if u32::from(iv.first) > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

fn is_wide(cp: CodePoint) -> bool {
    matches!(cp,
        0x1100..=0x115F // Hangul Jamo initial consonants
        | 0xAC00..=0xD7A3 // Hangul syllables
        | 0xF900..=0xFAFF // CJK compatibility ideographs
        | 0xFE30..=0xFE6F // CJK compatibility forms
        | 0xFF00..=0xFF5F // Fullwidth forms
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x2FFFF)
        // CJK through Yi, except 《》〚〛 and U+303F
        || ((0x2E80..=0xA4CF).contains(&cp) && cp & !0x0011 != 0x300A && cp != 0x303F)
}

/// Classify the display width of a code point
pub fn classify_width(cp: CodePoint) -> WidthClass {
    if cp == 0 {
        return WidthClass::Invisible;
    }
    if cp < 0x20 || (0x7F..0xA0).contains(&cp) {
        return WidthClass::NonPrintable;
    }
    if in_table(cp, COMBINING) {
        return WidthClass::Invisible;
    }
    if is_wide(cp) {
        WidthClass::Wide
    } else {
        WidthClass::Narrow
    }
}

/// Width class of a `char`
pub fn char_width(c: char) -> WidthClass {
    classify_width(c as CodePoint)
}

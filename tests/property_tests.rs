use proptest::prelude::*;
use suddendeath::{
    classify_width, decode_next, line_widths, render_banner, text_display_width, BannerOptions,
    Decoder, WidthClass, COMBINING,
};

/// Characters drawn from the combining table
fn combining_char() -> impl Strategy<Value = char> {
    (0..COMBINING.len())
        .prop_flat_map(|i| u32::from(COMBINING[i].first)..=u32::from(COMBINING[i].last))
        .prop_filter_map("not a scalar value", char::from_u32)
}

proptest! {
    #[test]
    fn ascii_width_is_length(s in "[ -~]{0,200}") {
        prop_assert_eq!(text_display_width(&s, None), s.len());
    }

    #[test]
    fn ascii_matches_unicode_width(s in "[ -~]{0,200}") {
        prop_assert_eq!(
            text_display_width(&s, None),
            unicode_width::UnicodeWidthStr::width(s.as_str())
        );
    }

    #[test]
    fn combining_only_is_zero(chars in prop::collection::vec(combining_char(), 0..50)) {
        let s: String = chars.into_iter().collect();
        prop_assert_eq!(text_display_width(&s, None), 0);
    }

    #[test]
    fn repeated_ideograph_is_double(n in 0usize..200) {
        let s = "中".repeat(n);
        prop_assert_eq!(text_display_width(&s, None), 2 * n);
    }

    #[test]
    fn decoder_always_progresses(bytes in prop::collection::vec(1u8..=255, 0..300)) {
        let mut offset = 0;
        while let Some(ch) = decode_next(&bytes, offset, None) {
            prop_assert!(ch.len >= 1);
            offset += ch.len;
        }
        prop_assert_eq!(offset, bytes.len());
    }

    #[test]
    fn decoder_respects_limit(bytes in prop::collection::vec(any::<u8>(), 0..300), limit in 0usize..300) {
        let mut decoder = Decoder::with_limit(&bytes, limit);
        while decoder.next().is_some() {}
        prop_assert!(decoder.position() <= limit.min(bytes.len()));
    }

    #[test]
    fn decoder_matches_std_for_valid_utf8(s in "\\PC{0,100}") {
        let expected: Vec<u32> = s.chars().map(|c| c as u32).collect();
        let decoded: Vec<u32> = Decoder::new(s.as_bytes()).map(|c| c.code_point).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn classification_is_pure(cp in 0u32..0x7FFF_FFFF) {
        prop_assert_eq!(classify_width(cp), classify_width(cp));
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let width = text_display_width(&bytes, None);
        let lines = line_widths(&bytes);
        prop_assert_eq!(lines.max_width, width);
        for line in &lines.lines {
            prop_assert!(line.width <= width);
        }
    }

    #[test]
    fn banner_rows_share_one_width(lines in prop::collection::vec("[a-z中 ]{0,12}", 1..6)) {
        let message = lines.join("\n");
        let output = render_banner(&message, &BannerOptions::default());
        let rows = line_widths(&output).widths();
        prop_assert!(rows.iter().all(|&w| w == rows[0]));
    }

    #[test]
    fn width_class_columns_match_value(cp in 0u32..0x110000) {
        let class = classify_width(cp);
        match class {
            WidthClass::NonPrintable => prop_assert_eq!(class.columns(), 0),
            _ => prop_assert_eq!(class.columns() as i8, class.value()),
        }
    }
}

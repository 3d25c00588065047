#![cfg(test)]

use crate::fonts::FontLibrary;
use crate::text::{truncate_chars, truncate_to_width, wrap};
use deckline_style::FontSpec;
use proptest::prelude::*;

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z&,/-]{1,14}", 0..24).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn rewrapping_wrapped_lines_is_stable(text in words(), width in 20.0f32..400.0, bold in any::<bool>()) {
        let fonts = FontLibrary::standard();
        let font = if bold { FontSpec::bold(10.0) } else { FontSpec::regular(10.0) };

        let lines = wrap(&text, &fonts, &font, width);
        let again = wrap(&lines.join(" "), &fonts, &font, width);
        prop_assert_eq!(lines, again);
    }

    #[test]
    fn lines_fit_unless_they_hold_a_single_word(text in words(), width in 20.0f32..400.0) {
        let fonts = FontLibrary::standard();
        let font = FontSpec::regular(9.0);

        for line in wrap(&text, &fonts, &font, width) {
            let fits = fonts.measure(&line, &font) <= width;
            prop_assert!(fits || !line.contains(' '), "{:?} overflows {}", line, width);
        }
    }

    #[test]
    fn wrapping_keeps_every_word_in_order(text in words(), width in 20.0f32..400.0) {
        let fonts = FontLibrary::standard();
        let font = FontSpec::regular(11.0);

        let lines = wrap(&text, &fonts, &font, width);
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(rejoined, original);
    }

    #[test]
    fn char_truncation_never_exceeds_the_cap(text in ".{0,120}", cap in 3usize..80) {
        let out = truncate_chars(&text, cap);
        prop_assert!(out.chars().count() <= cap);
        if text.chars().count() <= cap {
            prop_assert_eq!(out, text);
        }
    }

    #[test]
    fn width_truncation_fits(text in words(), width in 0.0f32..300.0) {
        let fonts = FontLibrary::standard();
        let font = FontSpec::regular(10.0);
        let out = truncate_to_width(&text, &fonts, &font, width);
        prop_assert!(fonts.measure(&out, &font) <= width);
    }
}

//! WinAnsi (cp1252) handling for the base-14 fonts.
//!
//! The PDF backend writes simple Type1 fonts with `WinAnsiEncoding`, so every
//! drawn string has to be representable in that code page. `normalize` is the
//! single place text is folded into that repertoire; metrics and rendering
//! both go through it so measured and drawn widths agree.

use std::borrow::Cow;

/// The WinAnsi byte for `ch`, if the code page has one.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(code)
}

/// Folds text into what WinAnsi can show. Arrows become `->`, tabs become
/// spaces, and any other unencodable character becomes `?`.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| win_ansi_code(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '→' | '⟶' | '➜' => out.push_str("->"),
            '←' => out.push_str("<-"),
            '\t' | '\n' | '\r' => out.push(' '),
            c if win_ansi_code(c).is_some() => out.push(c),
            _ => out.push('?'),
        }
    }
    Cow::Owned(out)
}

/// Encodes text as WinAnsi bytes for a PDF string operand.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    normalize(text)
        .chars()
        .map(|c| win_ansi_code(c).unwrap_or(b'?'))
        .collect()
}

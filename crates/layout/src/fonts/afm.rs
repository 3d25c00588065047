//! Advance widths of the PDF base-14 Helvetica faces, in 1/1000 em, for the
//! printable ASCII range `' '..='~'`. Values are taken from the Adobe Font
//! Metrics files that ship with every conforming PDF reader.

pub(crate) const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' .. '9'
    278, 278, 584, 584, 584, 556, 1015, // ':' .. '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' .. 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' .. 'Z'
    278, 278, 278, 469, 556, 333, // '[' .. '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' .. 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' .. 'z'
    334, 260, 334, 584, // '{' .. '~'
];

pub(crate) const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' .. '9'
    333, 333, 584, 584, 584, 611, 975, // ':' .. '@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A' .. 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' .. 'Z'
    333, 278, 333, 584, 556, 333, // '[' .. '`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a' .. 'm'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n' .. 'z'
    389, 280, 389, 584, // '{' .. '~'
];

/// Widths of the WinAnsi punctuation above 0x7f that templates actually use.
/// Anything else in the upper half falls back to the face's digit width.
pub(crate) fn upper_half_width(code: u8, bold: bool) -> u16 {
    match (code, bold) {
        (0x85, _) => 1000,              // ellipsis
        (0x95, _) => 350,               // bullet
        (0x96, _) => 556,               // endash
        (0x97, _) => 1000,              // emdash
        (0x91 | 0x92, false) => 222,    // quoteleft, quoteright
        (0x91 | 0x92, true) => 278,
        (0x93 | 0x94, false) => 333,    // quotedblleft, quotedblright
        (0x93 | 0x94, true) => 500,
        (0xa0, _) => 278,               // nbsp
        (0xb7, _) => 278,               // periodcentered
        (0xbb | 0xab, _) => 556,        // guillemots
        _ => 556,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_printable_ascii() {
        assert_eq!(HELVETICA.len(), ('~' as usize) - (' ' as usize) + 1);
        assert_eq!(HELVETICA[('W' as usize) - 32], 944);
        assert_eq!(HELVETICA_BOLD[('m' as usize) - 32], 889);
        assert_eq!(HELVETICA[('i' as usize) - 32], 222);
    }
}

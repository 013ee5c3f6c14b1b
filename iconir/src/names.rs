//! Resolve a source file's stem to the character it maps.
//!
//! Follows the same conventions a font editor applies when asked to create a
//! mapped character by name: a literal character, or a `uniXXXX` / `uX...X`
//! unicode name.

/// The character a glyph name maps, if we can tell.
///
/// Single-character names map themselves; otherwise the `uni1234` and
/// `u10FFFF` forms are understood. Anything else is unmappable and the
/// caller is expected to fail the compile.
pub fn char_for_name(name: &str) -> Option<char> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(c);
    }
    uni_to_unicode(name).or_else(|| u_to_unicode(name))
}

fn is_uppercase_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}

// https://github.com/fonttools/fonttools/blob/8697f91cdc/Lib/fontTools/agl.py#L5200
fn uni_to_unicode(name: &str) -> Option<char> {
    let digits = name.strip_prefix("uni")?;
    if digits.len() != 4 || !digits.bytes().all(is_uppercase_hex) {
        return None;
    }
    let uv = u32::from_str_radix(digits, 16).expect("checked above");
    if (0xD800..=0xDFFF).contains(&uv) {
        return None;
    }
    char::from_u32(uv)
}

// https://github.com/fonttools/fonttools/blob/8697f91cdc/Lib/fontTools/agl.py#L5219
fn u_to_unicode(name: &str) -> Option<char> {
    let value = name.strip_prefix('u')?;
    if !value.bytes().all(is_uppercase_hex) || !(4..=6).contains(&value.len()) {
        return None;
    }

    let uv = u32::from_str_radix(value, 16).ok()?;
    if (0..=0xD7FF).contains(&uv) || (0xE000..=0x10FFFF).contains(&uv) {
        char::from_u32(uv)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::literal_ascii("A", Some('A'))]
    #[case::literal_accented("ä", Some('ä'))]
    #[case::literal_symbol("▲", Some('▲'))]
    #[case::uni_letter("uni0041", Some('A'))]
    #[case::uni_symbol("uni266D", Some('\u{266D}'))]
    #[case::uni_too_short("uni41", None)]
    #[case::uni_lowercase_hex("uni004a", None)]
    #[case::uni_two_values("uni00410042", None)]
    #[case::uni_not_hex("uniGHIJ", None)]
    #[case::uni_low_surrogate("uniD800", None)]
    #[case::uni_high_surrogate("uniDFFF", None)]
    #[case::u_letter("u0041", Some('A'))]
    #[case::u_supplementary("u1F4A9", Some('\u{1F4A9}'))]
    #[case::u_max_scalar("u10FFFF", Some('\u{10FFFF}'))]
    #[case::u_past_unicode("u110000", None)]
    #[case::u_surrogate("uD800", None)]
    #[case::ligature("ff", None)]
    #[case::descriptive("arrow-up", None)]
    #[case::empty("", None)]
    fn name_to_char(#[case] name: &str, #[case] expected: Option<char>) {
        assert_eq!(expected, char_for_name(name));
    }
}

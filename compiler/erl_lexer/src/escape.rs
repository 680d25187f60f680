//! Escape sequence decoding.
//!
//! Turns the inner text of quoted literals (and `$`-char bodies) into the
//! decoded run-time character sequence. Recognized escapes: `\b \d \e \f \n
//! \r \s \t \v`, octal `\OOO` (1-3 digits), hex `\xHH` and `\x{H...}`,
//! control `\^X`, and quoted delimiters/backslash. An unrecognized escape
//! decodes to the escaped character itself.

/// Resolve a single-letter escape to its replacement.
///
/// Returns `None` for characters that are not single-letter escapes (the
/// caller then handles octal/hex/control forms or passes the character
/// through).
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        'd' => Some('\u{7f}'),
        'e' => Some('\u{1b}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        's' => Some(' '),
        't' => Some('\t'),
        'v' => Some('\u{b}'),
        _ => None,
    }
}

/// Decode the inner text of a quoted literal (delimiters already stripped).
///
/// Returns `None` when an octal/hex/control escape is malformed or denotes
/// no valid character.
pub(crate) fn decode_quoted(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let esc = chars.next()?;
        match esc {
            '0'..='7' => {
                let mut value = esc as u32 - '0' as u32;
                let mut taken = 1;
                while taken < 3 {
                    match chars.peek() {
                        Some(&d) if d.is_digit(8) => {
                            value = value * 8 + (d as u32 - '0' as u32);
                            chars.next();
                            taken += 1;
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(value)?);
            }
            'x' => {
                let mut value = 0u32;
                if chars.peek() == Some(&'{') {
                    chars.next();
                    let mut any = false;
                    loop {
                        match chars.next()? {
                            '}' => break,
                            d => {
                                value = value.checked_mul(16)?.checked_add(d.to_digit(16)?)?;
                                any = true;
                            }
                        }
                    }
                    if !any {
                        return None;
                    }
                } else {
                    for _ in 0..2 {
                        value = value * 16 + chars.next()?.to_digit(16)?;
                    }
                }
                out.push(char::from_u32(value)?);
            }
            '^' => {
                let c = chars.next()?;
                out.push(char::from_u32(c as u32 & 0x1f)?);
            }
            other => out.push(resolve_escape(other).unwrap_or(other)),
        }
    }

    Some(out)
}

/// Decode a `$`-char literal body (the text after `$`).
pub(crate) fn decode_char(body: &str) -> Option<char> {
    let decoded = decode_quoted(body)?;
    let mut chars = decoded.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode_quoted("hello"), Some("hello".to_string()));
        assert_eq!(decode_quoted(""), Some(String::new()));
    }

    #[test]
    fn letter_escapes() {
        assert_eq!(decode_quoted(r"a\nb"), Some("a\nb".to_string()));
        assert_eq!(decode_quoted(r"\s"), Some(" ".to_string()));
        assert_eq!(decode_quoted(r"\e\d"), Some("\u{1b}\u{7f}".to_string()));
    }

    #[test]
    fn unknown_escape_decodes_to_the_character() {
        assert_eq!(decode_quoted(r"\q"), Some("q".to_string()));
        assert_eq!(decode_quoted(r#"\""#), Some("\"".to_string()));
        assert_eq!(decode_quoted(r"\\"), Some("\\".to_string()));
    }

    #[test]
    fn octal_escapes_are_maximal_up_to_three_digits() {
        assert_eq!(decode_quoted(r"\101"), Some("A".to_string()));
        assert_eq!(decode_quoted(r"\1018"), Some("A8".to_string()));
        assert_eq!(decode_quoted(r"\7abc"), Some("\u{7}abc".to_string()));
    }

    #[test]
    fn hex_escapes_in_both_forms() {
        assert_eq!(decode_quoted(r"\x41"), Some("A".to_string()));
        assert_eq!(decode_quoted(r"\x{1f600}"), Some("\u{1f600}".to_string()));
        assert_eq!(decode_quoted(r"\x{}"), None);
        assert_eq!(decode_quoted(r"\xg1"), None);
    }

    #[test]
    fn control_escapes() {
        assert_eq!(decode_quoted(r"\^G"), Some("\u{7}".to_string()));
        assert_eq!(decode_quoted(r"\^g"), Some("\u{7}".to_string()));
    }

    #[test]
    fn char_bodies() {
        assert_eq!(decode_char("a"), Some('a'));
        assert_eq!(decode_char(r"\n"), Some('\n'));
        assert_eq!(decode_char(r"\x{1f600}"), Some('\u{1f600}'));
        assert_eq!(decode_char(" "), Some(' '));
        assert_eq!(decode_char("ab"), None);
    }
}

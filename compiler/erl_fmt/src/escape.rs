//! Escape normalization for quoted literals.
//!
//! Walks the raw source body of a quoted literal and its decoded character
//! sequence in lockstep, one cursor over each. Every escape is re-emitted in
//! canonical spelling and checked against the decoded value it claims to
//! represent; any misalignment between the two cursors aborts the literal
//! with [`FormatError::EscapeMismatch`] instead of emitting corrupted text.

use crate::error::FormatError;

/// Decoded value of a single-letter escape. Unknown letters decode to
/// themselves.
fn resolve(c: char) -> char {
    match c {
        'b' => '\u{8}',
        'd' => '\u{7f}',
        'e' => '\u{1b}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        's' => ' ',
        't' => '\t',
        'v' => '\u{b}',
        other => other,
    }
}

/// Normalize the escapes in the body of a quoted literal.
///
/// `inner` is the source text between the delimiters (or after `$` for a
/// character literal), `values` the decoded character sequence it
/// represents. `quote` is the active quote character for string and atom
/// bodies; `None` marks character-literal context, where the `\s` shorthand
/// is kept rather than expanded.
///
/// # Errors
///
/// Fails when the source and the decoded values cannot be advanced in
/// matching lockstep.
pub(crate) fn normalize(
    inner: &str,
    values: &[char],
    quote: Option<char>,
) -> Result<String, FormatError> {
    let mismatch = || FormatError::EscapeMismatch {
        text: inner.to_string(),
    };

    let mut out = String::with_capacity(inner.len());
    let mut src = inner.chars().peekable();
    let mut vals = values.iter().copied();

    while let Some(c) = src.next() {
        if c != '\\' {
            if vals.next() != Some(c) {
                return Err(mismatch());
            }
            out.push(c);
            continue;
        }
        let esc = src.next().ok_or_else(mismatch)?;
        let value = vals.next().ok_or_else(mismatch)?;
        match esc {
            'x' => {
                let braced = src.peek() == Some(&'{');
                let mut digits = String::new();
                if braced {
                    src.next();
                    loop {
                        match src.next() {
                            Some('}') => break,
                            Some(d) if d.is_ascii_hexdigit() => digits.push(d),
                            _ => return Err(mismatch()),
                        }
                    }
                } else {
                    for _ in 0..2 {
                        match src.next() {
                            Some(d) if d.is_ascii_hexdigit() => digits.push(d),
                            _ => return Err(mismatch()),
                        }
                    }
                }
                let code = u32::from_str_radix(&digits, 16).map_err(|_| mismatch())?;
                if char::from_u32(code) != Some(value) {
                    return Err(mismatch());
                }
                // Uppercase the digits, keep the original syntactic form.
                if braced {
                    out.push_str("\\x{");
                    out.push_str(&digits.to_uppercase());
                    out.push('}');
                } else {
                    out.push_str("\\x");
                    out.push_str(&digits.to_uppercase());
                }
            }
            '0'..='7' => {
                // Maximal octal run of up to three digits, never inventing
                // digits absent from the source.
                let mut digits = String::new();
                digits.push(esc);
                while digits.len() < 3 {
                    match src.peek() {
                        Some(&d) if d.is_digit(8) => {
                            digits.push(d);
                            src.next();
                        }
                        _ => break,
                    }
                }
                let code = u32::from_str_radix(&digits, 8).map_err(|_| mismatch())?;
                if char::from_u32(code) != Some(value) {
                    return Err(mismatch());
                }
                out.push('\\');
                out.push_str(&digits);
            }
            's' => {
                if value != ' ' {
                    return Err(mismatch());
                }
                // The shorthand collapses to a plain space inside quotes;
                // character literals keep it.
                if quote.is_some() {
                    out.push(' ');
                } else {
                    out.push_str("\\s");
                }
            }
            '^' => {
                let ctl = src.next().ok_or_else(mismatch)?;
                if char::from_u32(ctl as u32 & 0x1f) != Some(value) {
                    return Err(mismatch());
                }
                out.push_str("\\^");
                out.push(ctl);
            }
            _ => {
                if resolve(esc) != value {
                    return Err(mismatch());
                }
                // The backslash stays only where it is semantically
                // necessary.
                if Some(esc) == quote || esc == '\\' || esc != value {
                    out.push('\\');
                    out.push(esc);
                } else {
                    out.push(esc);
                }
            }
        }
    }

    if vals.next().is_some() {
        return Err(mismatch());
    }
    Ok(out)
}

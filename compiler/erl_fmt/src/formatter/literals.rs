//! Literal canonicalization.
//!
//! Literals keep their original spelling wherever it is already canonical:
//! digit grouping, radix prefixes, and quote style survive, only case and
//! escape spelling are normalized.

use crate::error::FormatError;
use crate::escape;
use erl_doc::Doc;
use erl_ir::{is_bare_atom, is_reserved};

/// Radix literals uppercase their digit portion; decimal literals are never
/// re-cased.
pub(crate) fn integer_doc(text: &str) -> Doc {
    match text.split_once('#') {
        Some((base, digits)) => Doc::text(format!("{base}#{}", digits.to_uppercase())),
        None => Doc::text(text),
    }
}

/// Everything after the decimal point is lowercased, which normalizes the
/// exponent marker.
pub(crate) fn float_doc(text: &str) -> Doc {
    match text.split_once('.') {
        Some((int_part, rest)) => Doc::text(format!("{int_part}.{}", rest.to_lowercase())),
        None => Doc::text(text),
    }
}

/// A space character always renders as `$\s`, whatever its source spelling.
pub(crate) fn char_doc(text: &str, value: char) -> Result<Doc, FormatError> {
    if value == ' ' {
        return Ok(Doc::text("$\\s"));
    }
    let body = text.strip_prefix('$').unwrap_or(text);
    let body = escape::normalize(body, &[value], None)?;
    Ok(Doc::text(format!("${body}")))
}

/// Atoms stay bare when they can, quoted otherwise.
pub(crate) fn atom_doc(text: &str, value: &str) -> Result<Doc, FormatError> {
    if !is_reserved(value) && is_bare_atom(value) {
        return Ok(Doc::text(value));
    }
    let chars: Vec<char> = value.chars().collect();
    let inner = match text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        Some(inner) => escape::normalize(inner, &chars, Some('\''))?,
        // A bare spelling for a value that needs quoting carries no escapes.
        None => value.to_string(),
    };
    Ok(Doc::text(format!("'{inner}'")))
}

pub(crate) fn string_doc(text: &str, value: &str) -> Result<Doc, FormatError> {
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    let chars: Vec<char> = value.chars().collect();
    let inner = escape::normalize(inner, &chars, Some('"'))?;
    Ok(Doc::text(format!("\"{inner}\"")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(doc: &Doc) -> String {
        doc.render(80)
    }

    #[test]
    fn radix_digits_are_uppercased() {
        assert_eq!(rendered(&integer_doc("16#ff")), "16#FF");
        assert_eq!(rendered(&integer_doc("16#DEAD_beef")), "16#DEAD_BEEF");
    }

    #[test]
    fn decimal_integers_are_untouched() {
        assert_eq!(rendered(&integer_doc("1_000")), "1_000");
        assert_eq!(rendered(&integer_doc("42")), "42");
    }

    #[test]
    fn float_exponent_marker_is_lowercased() {
        assert_eq!(rendered(&float_doc("1.0E2")), "1.0e2");
        assert_eq!(rendered(&float_doc("3.14")), "3.14");
        assert_eq!(rendered(&float_doc("1.5E-3")), "1.5e-3");
    }

    #[test]
    fn space_char_always_renders_as_shorthand() {
        assert_eq!(rendered(&char_doc("$ ", ' ').unwrap()), "$\\s");
        assert_eq!(rendered(&char_doc(r"$\s", ' ').unwrap()), "$\\s");
        assert_eq!(rendered(&char_doc(r"$\040", ' ').unwrap()), "$\\s");
    }

    #[test]
    fn char_escapes_are_normalized() {
        assert_eq!(rendered(&char_doc(r"$\n", '\n').unwrap()), r"$\n");
        assert_eq!(rendered(&char_doc(r"$\x{1f600}", '\u{1f600}').unwrap()), r"$\x{1F600}");
        assert_eq!(rendered(&char_doc("$a", 'a').unwrap()), "$a");
    }

    #[test]
    fn bare_atoms_stay_bare() {
        assert_eq!(rendered(&atom_doc("hello", "hello").unwrap()), "hello");
        assert_eq!(rendered(&atom_doc("a@b_1", "a@b_1").unwrap()), "a@b_1");
    }

    #[test]
    fn needlessly_quoted_atoms_are_unquoted() {
        assert_eq!(rendered(&atom_doc("'hello'", "hello").unwrap()), "hello");
    }

    #[test]
    fn quoted_atoms_stay_quoted_when_they_must() {
        assert_eq!(rendered(&atom_doc("'Hello'", "Hello").unwrap()), "'Hello'");
        assert_eq!(
            rendered(&atom_doc("'hello world'", "hello world").unwrap()),
            "'hello world'",
        );
        assert_eq!(rendered(&atom_doc("'case'", "case").unwrap()), "'case'");
    }

    #[test]
    fn string_hex_escapes_are_uppercased() {
        assert_eq!(
            rendered(&string_doc(r#""\x{1f600}""#, "\u{1f600}").unwrap()),
            r#""\x{1F600}""#,
        );
    }
}

//! Reserved words and the bare-atom test.
//!
//! Length-bucketed keyword lookup in the style of the lexer's cooking layer:
//! reserved words range from 2 to 7 characters, so anything outside that
//! range is rejected without comparisons.

/// Whether `text` is a reserved word of the language.
///
/// Reserved words can never be written as bare atoms; the formatter quotes
/// them and the lexer resolves them to keyword or operator tokens.
#[inline]
pub fn is_reserved(text: &str) -> bool {
    let len = text.len();
    if !(2..=7).contains(&len) {
        return false;
    }
    match len {
        2 => matches!(text, "if" | "of" | "or"),
        3 => matches!(
            text,
            "and" | "bor" | "bsl" | "bsr" | "div" | "end" | "fun" | "not" | "rem" | "try" | "xor"
        ),
        4 => matches!(text, "band" | "bnot" | "bxor" | "case" | "cond" | "else" | "when"),
        5 => matches!(text, "after" | "begin" | "catch" | "maybe"),
        6 => matches!(text, "orelse"),
        7 => matches!(text, "andalso" | "receive"),
        _ => false,
    }
}

/// Whether an atom name can be written without quotes: a lowercase letter
/// followed by letters, digits, underscores, or `@`.
///
/// Reservedness is a separate check; `is_bare_atom("and")` is true even
/// though `and` must still be quoted.
pub fn is_bare_atom(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
}

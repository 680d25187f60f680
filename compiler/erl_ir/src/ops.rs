//! Operator precedence table and classification sets.
//!
//! The table follows the Erlang operator grammar: each binary operator maps
//! to a `(left, op, right)` precedence triple describing how tightly it binds
//! on each side. Higher numbers bind tighter. An operand is legal in a slot
//! without parentheses only if its own operator precedence is at least the
//! slot precedence.
//!
//! Associativity is encoded in the triple itself: left-associative operators
//! have `left == op`, right-associative ones `right == op`, and
//! non-associative operators (the comparisons) neither.
//!
//! The two classification sets are fixed style policy, not grammar:
//! [`forces_nested_parens`] members parenthesize any nested operator
//! expression, and two distinct [`exclusive_bool_op`] members nesting always
//! parenthesize the inner one. Note `bor` is deliberately absent from the
//! first set while its siblings `band`/`bxor`/`bsl`/`bsr` are members.

/// `(left, op, right)` binding strengths for a binary operator.
pub type PrecTriple = (u16, u16, u16);

/// Associativity of a binary operator, derived from its triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    None,
}

/// Look up the precedence triple for a binary operator symbol.
///
/// Returns `None` for symbols absent from the table; callers must report
/// that rather than defaulting.
pub fn binop_prec(op: &str) -> Option<PrecTriple> {
    match op {
        "=" | "!" => Some((150, 100, 100)),
        "orelse" => Some((160, 150, 150)),
        "andalso" => Some((200, 160, 160)),
        "==" | "/=" | "=<" | "<" | ">=" | ">" | "=:=" | "=/=" => Some((300, 200, 300)),
        "++" | "--" => Some((400, 300, 300)),
        "+" | "-" | "bor" | "bxor" | "bsl" | "bsr" | "or" | "xor" => Some((400, 400, 500)),
        "*" | "/" | "div" | "rem" | "band" | "and" => Some((500, 500, 600)),
        _ => None,
    }
}

/// Look up the `(op, operand)` precedence pair for a unary operator symbol.
pub fn unop_prec(op: &str) -> Option<(u16, u16)> {
    match op {
        "catch" => Some((0, 100)),
        "+" | "-" | "bnot" | "not" => Some((600, 700)),
        _ => None,
    }
}

/// Associativity of a binary operator, or `None` if the symbol is unknown.
pub fn binop_assoc(op: &str) -> Option<Assoc> {
    let (left, prec, right) = binop_prec(op)?;
    Some(if left == prec {
        Assoc::Left
    } else if right == prec {
        Assoc::Right
    } else {
        Assoc::None
    })
}

/// Operators that parenthesize any nested operator expression.
///
/// `bor` is intentionally not a member; see the module docs.
pub fn forces_nested_parens(op: &str) -> bool {
    matches!(op, "band" | "bxor" | "bsl" | "bsr" | "++" | "--")
}

/// The mutually-exclusive boolean operators: when two distinct members nest,
/// the inner one is parenthesized.
pub fn exclusive_bool_op(op: &str) -> bool {
    matches!(op, "andalso" | "orelse")
}

/// Whether a unary operator reads as a word and needs a space before its
/// operand.
pub fn word_unop(op: &str) -> bool {
    matches!(op, "not" | "bnot" | "catch")
}

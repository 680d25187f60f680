//! Minimal re-parenthesization decisions.
//!
//! The formatter drops every parenthesis the parser erased and re-inserts
//! exactly the set needed for the output to re-parse to the same operator
//! tree, plus the two fixed style policies from the operator table: members
//! of the forcing set parenthesize any nested operator expression, and two
//! distinct mutually-exclusive boolean operators never nest bare.

use crate::error::FormatError;
use erl_ir::{binop_assoc, binop_prec, exclusive_bool_op, forces_nested_parens, Assoc};

/// Which side of a binary operator an operand occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Left,
    Right,
}

/// Whether a binary operand of a binary parent needs parentheses.
///
/// `slot_prec` is the precedence the occupied slot demands.
///
/// # Errors
///
/// Fails when either operator is missing from the precedence table.
pub(crate) fn binary_in_binary(
    parent: &str,
    child: &str,
    slot: Slot,
    slot_prec: u16,
) -> Result<bool, FormatError> {
    let (_, child_prec, _) = lookup(child)?;
    if child == parent {
        // An associativity-matching slot flattens the chain.
        let assoc = binop_assoc(parent).ok_or_else(|| FormatError::UnknownOperator {
            op: parent.to_string(),
        })?;
        return Ok(match assoc {
            Assoc::Left => slot != Slot::Left,
            Assoc::Right => slot != Slot::Right,
            Assoc::None => true,
        });
    }
    Ok(forces_nested_parens(parent)
        || (exclusive_bool_op(parent) && exclusive_bool_op(child))
        || child_prec < slot_prec)
}

/// Whether a unary operand of a binary parent needs parentheses.
///
/// Only `catch` does; every other unary operator binds tighter than any
/// binary operator.
pub(crate) fn unary_in_binary(child: &str) -> bool {
    child == "catch"
}

/// Whether a unary operand of a unary parent needs parentheses.
///
/// Identical `not`/`bnot` chains nest bare; everything else is
/// parenthesized.
pub(crate) fn unary_in_unary(parent: &str, child: &str) -> bool {
    !(matches!(parent, "not" | "bnot") && child == parent)
}

fn lookup(op: &str) -> Result<erl_ir::ops::PrecTriple, FormatError> {
    binop_prec(op).ok_or_else(|| FormatError::UnknownOperator { op: op.to_string() })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn matching_associativity_slot_flattens() {
        // `+` is left-associative, so a `+` child flattens on the left only.
        assert!(!binary_in_binary("+", "+", Slot::Left, 400).unwrap());
        assert!(binary_in_binary("+", "+", Slot::Right, 500).unwrap());
        // `++` is right-associative, the mirror image.
        assert!(binary_in_binary("++", "++", Slot::Left, 400).unwrap());
        assert!(!binary_in_binary("++", "++", Slot::Right, 300).unwrap());
    }

    #[test]
    fn non_associative_operators_always_parenthesize_themselves() {
        assert!(binary_in_binary("==", "==", Slot::Left, 300).unwrap());
        assert!(binary_in_binary("==", "==", Slot::Right, 300).unwrap());
    }

    #[test]
    fn looser_child_is_parenthesized() {
        // `(1 + 2) * 3`
        assert!(binary_in_binary("*", "+", Slot::Left, 500).unwrap());
        // `1 + 2 * 3`
        assert!(!binary_in_binary("+", "*", Slot::Right, 500).unwrap());
    }

    #[test]
    fn forcing_set_parenthesizes_any_child() {
        assert!(binary_in_binary("bsl", "+", Slot::Right, 500).unwrap());
        assert!(binary_in_binary("++", "*", Slot::Right, 300).unwrap());
        // `bor` is outside the forcing set: a tighter child stays bare.
        assert!(!binary_in_binary("bor", "*", Slot::Right, 500).unwrap());
    }

    #[test]
    fn distinct_exclusive_bool_operators_never_nest_bare() {
        assert!(binary_in_binary("orelse", "andalso", Slot::Left, 160).unwrap());
        assert!(binary_in_binary("andalso", "orelse", Slot::Right, 160).unwrap());
    }

    #[test]
    fn unknown_child_operator_is_reported() {
        assert!(matches!(
            binary_in_binary("+", "<=>", Slot::Left, 400),
            Err(FormatError::UnknownOperator { op }) if op == "<=>",
        ));
    }

    #[test]
    fn catch_is_the_only_parenthesized_unary_operand() {
        assert!(unary_in_binary("catch"));
        assert!(!unary_in_binary("-"));
        assert!(!unary_in_binary("not"));
    }

    #[test]
    fn identical_not_chains_nest_bare() {
        assert!(!unary_in_unary("not", "not"));
        assert!(!unary_in_unary("bnot", "bnot"));
        assert!(unary_in_unary("not", "bnot"));
        assert!(unary_in_unary("-", "-"));
        assert!(unary_in_unary("catch", "not"));
    }
}

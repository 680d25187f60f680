//! Operator expression layout.
//!
//! A binary expression is a choice between one line and a break after the
//! operator. The left operand inherits the indent its own continuation
//! lines should use; the right operand starts a fresh anchor, so the
//! algebra's column tracking handles right-nested chains by itself.

use crate::error::FormatError;
use crate::formatter::expr_doc;
use crate::rules::parentheses::{self, Slot};
use erl_doc::Doc;
use erl_ir::{binop_prec, unop_prec, word_unop, Form};

fn unknown(op: &str) -> FormatError {
    FormatError::UnknownOperator { op: op.to_string() }
}

pub(crate) fn unary_doc(op: &str, operand: &Form) -> Result<Doc, FormatError> {
    let (_, slot_prec) = unop_prec(op).ok_or_else(|| unknown(op))?;
    let operand_doc = match operand {
        Form::UnaryOp {
            op: child,
            operand: inner,
        } => {
            if parentheses::unary_in_unary(op, child) {
                parenthesized(operand)?
            } else {
                unary_doc(child, inner)?
            }
        }
        Form::BinaryOp { op: child, .. } => {
            let (_, child_prec, _) = binop_prec(child).ok_or_else(|| unknown(child))?;
            if child_prec < slot_prec {
                parenthesized(operand)?
            } else {
                expr_doc(operand, 0)?
            }
        }
        _ => expr_doc(operand, 0)?,
    };
    let prefix = if word_unop(op) {
        Doc::text(format!("{op} "))
    } else {
        Doc::text(op)
    };
    Ok(prefix.combine(operand_doc))
}

pub(crate) fn binary_doc(
    op: &str,
    left: &Form,
    right: &Form,
    indent: usize,
) -> Result<Doc, FormatError> {
    let (left_slot, _, right_slot) = binop_prec(op).ok_or_else(|| unknown(op))?;
    let left_doc = operand_doc(op, left, Slot::Left, left_slot, indent)?;
    let right_doc = operand_doc(op, right, Slot::Right, right_slot, 0)?;

    let flat = left_doc
        .clone()
        .combine(Doc::text(format!(" {op} ")))
        .combine(right_doc.clone())
        .single_line();
    let broken = left_doc
        .combine(Doc::text(format!(" {op}")))
        .flush()
        .combine(Doc::spaces(indent))
        .combine(right_doc);
    Ok(Doc::choice(flat, broken))
}

fn operand_doc(
    parent: &str,
    operand: &Form,
    slot: Slot,
    slot_prec: u16,
    indent: usize,
) -> Result<Doc, FormatError> {
    match operand {
        Form::BinaryOp { op, left, right } => {
            if parentheses::binary_in_binary(parent, op, slot, slot_prec)? {
                parenthesized(operand)
            } else {
                binary_doc(op, left, right, indent)
            }
        }
        Form::UnaryOp { op, operand: inner } => {
            if parentheses::unary_in_binary(op) {
                parenthesized(operand)
            } else {
                unary_doc(op, inner)
            }
        }
        _ => expr_doc(operand, indent),
    }
}

fn parenthesized(form: &Form) -> Result<Doc, FormatError> {
    Ok(Doc::text("(")
        .combine(expr_doc(form, 0)?)
        .combine(Doc::text(")")))
}

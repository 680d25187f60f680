//! Form-to-document construction.
//!
//! One recursive dispatch over the form kind. Containers share the
//! bracketed-sequence layout: a flat candidate joined with `", "` and a
//! broken candidate with one element per line behind a four-column step.

pub(crate) mod literals;
pub(crate) mod operators;

use crate::error::FormatError;
use erl_doc::Doc;
use erl_ir::{BinElement, Form};

/// Indentation step for broken layouts.
pub(crate) const INDENT: usize = 4;

/// Build the document for `form`.
///
/// `indent` is the continuation indent a binary operator at this position
/// uses when its layout breaks.
pub(crate) fn expr_doc(form: &Form, indent: usize) -> Result<Doc, FormatError> {
    match form {
        Form::Integer { text, .. } => Ok(literals::integer_doc(text)),
        Form::Float { text, .. } => Ok(literals::float_doc(text)),
        Form::Char { text, value } => literals::char_doc(text, *value),
        Form::Atom { text, value } => literals::atom_doc(text, value),
        Form::String { text, value } => literals::string_doc(text, value),
        Form::Var { name } => Ok(Doc::text(name)),
        Form::Concat { segments } => concat_doc(segments),
        Form::UnaryOp { op, operand } => operators::unary_doc(op, operand),
        Form::BinaryOp { op, left, right } => operators::binary_doc(op, left, right, indent),
        Form::Tuple { elements } => container_doc("{", "}", elements),
        Form::List { elements } => container_doc("[", "]", elements),
        Form::Cons { head, tail } => cons_doc(head, tail),
        Form::Binary { elements } => binary_doc(elements),
    }
}

/// Adjacent string segments: one line separated by single spaces, or one
/// segment per line at the same column.
fn concat_doc(segments: &[Form]) -> Result<Doc, FormatError> {
    let docs = segments
        .iter()
        .map(|s| expr_doc(s, 0))
        .collect::<Result<Vec<_>, _>>()?;
    let horizontal = Doc::reduce(
        |a, b| a.combine(Doc::text(" ")).combine(b),
        docs.clone(),
    )
    .single_line();
    let vertical = Doc::reduce(|a, b| a.flush().combine(b), docs);
    Ok(Doc::choice(horizontal, vertical))
}

fn container_doc(open: &str, close: &str, elements: &[Form]) -> Result<Doc, FormatError> {
    if elements.is_empty() {
        return Ok(Doc::text(format!("{open}{close}")));
    }
    let docs = elements
        .iter()
        .map(|e| expr_doc(e, INDENT))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sequence_doc(open, close, docs))
}

/// The shared bracketed-sequence layout.
fn sequence_doc(open: &str, close: &str, docs: Vec<Doc>) -> Doc {
    let horizontal = Doc::text(open)
        .combine(Doc::reduce(
            |a, b| a.combine(Doc::text(", ")).combine(b),
            docs.clone(),
        ))
        .combine(Doc::text(close))
        .single_line();
    let joined = Doc::reduce(|a, b| a.combine(Doc::text(",")).flush().combine(b), docs);
    let vertical = Doc::text(open)
        .flush()
        .combine(Doc::spaces(INDENT).combine(joined).flush())
        .combine(Doc::text(close));
    Doc::choice(horizontal, vertical)
}

/// `head | tail`, on one line or with the pipe opening the second line. The
/// enclosing list supplies the brackets.
fn cons_doc(head: &Form, tail: &Form) -> Result<Doc, FormatError> {
    let head_doc = expr_doc(head, INDENT)?;
    let tail_doc = expr_doc(tail, 0)?;
    let flat = head_doc
        .clone()
        .combine(Doc::text(" | "))
        .combine(tail_doc.clone())
        .single_line();
    let broken = head_doc.flush().combine(Doc::text("| ")).combine(tail_doc);
    Ok(Doc::choice(flat, broken))
}

fn binary_doc(elements: &[BinElement]) -> Result<Doc, FormatError> {
    if elements.is_empty() {
        return Ok(Doc::text("<<>>"));
    }
    let docs = elements
        .iter()
        .map(bin_element_doc)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sequence_doc("<<", ">>", docs))
}

/// One segment of bit syntax: expression, optional `:Size`, optional
/// `/Spec-Spec` chain.
fn bin_element_doc(element: &BinElement) -> Result<Doc, FormatError> {
    // The grammar admits a bare unary prefix other than `catch` here;
    // everything else goes through the maximal-precedence wrapper.
    let mut doc = match &element.expr {
        Form::UnaryOp { op, operand } if op != "catch" => operators::unary_doc(op, operand)?,
        expr => max_prec_doc(expr)?,
    };
    if let Some(size) = &element.size {
        doc = doc.combine(Doc::text(":")).combine(max_prec_doc(size)?);
    }
    if !element.specifiers.is_empty() {
        let specs = element.specifiers.iter().map(|spec| match spec.size {
            Some(unit) => Doc::text(format!("{}:{unit}", spec.name)),
            None => Doc::text(spec.name.as_str()),
        });
        doc = doc.combine(Doc::text("/")).combine(Doc::reduce(
            |a, b| a.combine(Doc::text("-")).combine(b),
            specs,
        ));
    }
    Ok(doc)
}

/// Operator expressions in maximal-precedence positions are always
/// parenthesized.
fn max_prec_doc(form: &Form) -> Result<Doc, FormatError> {
    match form {
        Form::UnaryOp { .. } | Form::BinaryOp { .. } => Ok(Doc::text("(")
            .combine(expr_doc(form, 0)?)
            .combine(Doc::text(")"))),
        _ => expr_doc(form, 0),
    }
}

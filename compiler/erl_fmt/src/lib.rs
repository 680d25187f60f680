//! Expression formatter for erlkit.
//!
//! Converts a parsed [`erl_ir::Form`] tree into an [`erl_doc::Doc`] and
//! renders it under a line-width budget. Output is value-preserving and
//! minimally parenthesized: re-parsing it yields a tree with the same
//! literal values and operator structure, and formatting that tree again
//! reproduces the text byte for byte.
//!
//! The transform is pure and per-form: formatting one form never touches
//! state shared with another, so independent forms can be formatted
//! concurrently without coordination.

mod error;
mod escape;
mod formatter;
mod rules;

pub use error::FormatError;

use erl_doc::Doc;
use erl_ir::Form;

/// Default line-width budget.
pub const DEFAULT_WIDTH: usize = 80;

/// Build the layout document for a single form.
///
/// # Errors
///
/// Fails when a literal's source text and decoded value disagree, or when
/// an operator is missing from the precedence table.
pub fn form_doc(form: &Form) -> Result<Doc, FormatError> {
    formatter::expr_doc(form, formatter::INDENT)
}

/// Format a single form under a line-width budget.
#[tracing::instrument(level = "debug", skip(form), fields(kind = form.kind_name()))]
pub fn format_form(form: &Form, max_width: usize) -> Result<String, FormatError> {
    Ok(form_doc(form)?.render(max_width))
}

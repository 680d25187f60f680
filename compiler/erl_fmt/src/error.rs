//! Formatting error types.

use thiserror::Error;

/// Errors produced while building a document for a form.
///
/// Both variants are contract violations rather than recoverable
/// conditions: the input tree and its source-text annotations disagree, or
/// the operator table is stale. Formatting of the offending form aborts;
/// sibling forms are unaffected because each form is formatted in its own
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The source text of a quoted literal and its decoded value could not
    /// be walked in lockstep.
    #[error("escape sequences in `{text}` do not match the decoded value")]
    EscapeMismatch { text: String },

    /// An operator symbol is missing from the precedence table.
    #[error("operator `{op}` is missing from the precedence table")]
    UnknownOperator { op: String },
}

//! Parse error types.

use erl_ir::Span;
use erl_lexer::LexError;
use thiserror::Error;

/// Errors produced while parsing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found} at {span}")]
    Unexpected {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    Eof { expected: String },

    #[error("operator `{op}` at {span} cannot follow the preceding expression without parentheses")]
    NonAssociative { op: String, span: Span },
}

//! Lex error types.

use erl_ir::Span;
use thiserror::Error;

/// Errors produced while lexing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unrecognized token at {span}")]
    InvalidToken { span: Span },

    #[error("invalid escape sequence in literal at {span}")]
    InvalidEscape { span: Span },

    #[error("invalid radix in integer literal at {span}")]
    InvalidRadix { span: Span },

    #[error("numeric literal out of range at {span}")]
    InvalidNumber { span: Span },
}

impl LexError {
    /// The source span the error points at.
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidToken { span }
            | LexError::InvalidEscape { span }
            | LexError::InvalidRadix { span }
            | LexError::InvalidNumber { span } => *span,
        }
    }
}

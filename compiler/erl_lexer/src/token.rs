//! Cooked tokens.
//!
//! Every token keeps the exact source slice it was lexed from; the formatter
//! relies on that slice to preserve literal spellings.

use erl_ir::Span;
use std::fmt;

/// A cooked token: kind, original text, and source span.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} `{}` @ {}", self.kind, self.text, self.span)
    }
}

/// Token kinds for the expression subset.
///
/// Literal kinds carry the decoded run-time value; the spelling lives in
/// [`Token::text`]. Operators (symbols and words alike) share [`TokenKind::Op`]
/// with the symbol in the text slice.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    Integer { value: i128 },
    Float { value: f64 },
    Char { value: char },
    Atom { value: String },
    Str { value: String },
    Var,
    /// Operator symbol or word; `text` holds the symbol.
    Op,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    BinOpen,
    BinClose,
    Comma,
    Pipe,
    Colon,
    /// A reserved word with no role in the expression subset.
    Reserved,
}

impl TokenKind {
    /// Human-readable description for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Integer { .. } => "integer literal",
            TokenKind::Float { .. } => "float literal",
            TokenKind::Char { .. } => "char literal",
            TokenKind::Atom { .. } => "atom",
            TokenKind::Str { .. } => "string literal",
            TokenKind::Var => "variable",
            TokenKind::Op => "operator",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::BinOpen => "`<<`",
            TokenKind::BinClose => "`>>`",
            TokenKind::Comma => "`,`",
            TokenKind::Pipe => "`|`",
            TokenKind::Colon => "`:`",
            TokenKind::Reserved => "reserved word",
        }
    }
}

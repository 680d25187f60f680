//! Lexer for the erlkit expression language, built on logos.
//!
//! Produces cooked [`Token`]s that keep the exact source slice alongside the
//! decoded literal value, so downstream formatting can preserve spellings
//! while reasoning about run-time values.

mod escape;
mod error;
mod token;

pub use error::LexError;
pub use token::{Token, TokenKind};

use erl_ir::Span;
use logos::Logos;

/// Raw token from logos, before literal cooking.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"%[^\n]*")]
enum RawToken {
    #[regex(r"[0-9][0-9_]*#[0-9a-zA-Z][0-9a-zA-Z_]*")]
    RadixInteger,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    Float,
    #[regex(r"[0-9][0-9_]*")]
    Integer,
    #[regex(r"\$(\\(\^.|x\{[0-9a-fA-F]+\}|x[0-9a-fA-F][0-9a-fA-F]|[0-7][0-7]?[0-7]?|.)|.)")]
    Char,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    QuotedAtom,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    #[regex(r"[a-z][a-zA-Z0-9_@]*")]
    Word,
    #[regex(r"[A-Z_][a-zA-Z0-9_@]*")]
    Var,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<<")]
    BinOpen,
    #[token(">>")]
    BinClose,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token(":")]
    Colon,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("=")]
    #[token("!")]
    #[token("==")]
    #[token("/=")]
    #[token("=<")]
    #[token("<")]
    #[token(">=")]
    #[token(">")]
    #[token("=:=")]
    #[token("=/=")]
    #[token("++")]
    #[token("--")]
    OpSymbol,
}

/// Operator words: keywords that act as unary or binary operators in
/// expressions.
fn operator_word(text: &str) -> bool {
    matches!(
        text,
        "and"
            | "andalso"
            | "band"
            | "bnot"
            | "bor"
            | "bsl"
            | "bsr"
            | "bxor"
            | "catch"
            | "div"
            | "not"
            | "or"
            | "orelse"
            | "rem"
            | "xor"
    )
}

/// Lex `source` into cooked tokens.
///
/// # Errors
///
/// Fails on unrecognized input and on literals whose escapes or radix do not
/// decode to a value.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let text = lexer.slice();
        let span = Span::from(lexer.span());
        let raw = raw.map_err(|()| LexError::InvalidToken { span })?;
        let kind = cook(raw, text, span)?;
        tokens.push(Token::new(kind, text, span));
    }

    Ok(tokens)
}

/// Turn a raw token into a cooked one, decoding literal values.
fn cook(raw: RawToken, text: &str, span: Span) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::Integer => TokenKind::Integer {
            value: decode_integer(text, span)?,
        },
        RawToken::RadixInteger => TokenKind::Integer {
            value: decode_radix_integer(text, span)?,
        },
        RawToken::Float => {
            let digits: String = text.chars().filter(|&c| c != '_').collect();
            let value = digits
                .parse::<f64>()
                .map_err(|_| LexError::InvalidNumber { span })?;
            TokenKind::Float { value }
        }
        RawToken::Char => {
            let body = &text[1..];
            let value = escape::decode_char(body).ok_or(LexError::InvalidEscape { span })?;
            TokenKind::Char { value }
        }
        RawToken::QuotedAtom => {
            let inner = &text[1..text.len() - 1];
            let value =
                escape::decode_quoted(inner).ok_or(LexError::InvalidEscape { span })?;
            TokenKind::Atom { value }
        }
        RawToken::Str => {
            let inner = &text[1..text.len() - 1];
            let value =
                escape::decode_quoted(inner).ok_or(LexError::InvalidEscape { span })?;
            TokenKind::Str { value }
        }
        RawToken::Word => {
            if operator_word(text) {
                TokenKind::Op
            } else if erl_ir::is_reserved(text) {
                TokenKind::Reserved
            } else {
                TokenKind::Atom {
                    value: text.to_string(),
                }
            }
        }
        RawToken::Var => TokenKind::Var,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::BinOpen => TokenKind::BinOpen,
        RawToken::BinClose => TokenKind::BinClose,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Colon => TokenKind::Colon,
        RawToken::OpSymbol => TokenKind::Op,
    };
    Ok(kind)
}

fn decode_integer(text: &str, span: Span) -> Result<i128, LexError> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    digits
        .parse::<i128>()
        .map_err(|_| LexError::InvalidNumber { span })
}

fn decode_radix_integer(text: &str, span: Span) -> Result<i128, LexError> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (base, rest) = digits
        .split_once('#')
        .ok_or(LexError::InvalidRadix { span })?;
    let base = base
        .parse::<u32>()
        .map_err(|_| LexError::InvalidRadix { span })?;
    if !(2..=36).contains(&base) {
        return Err(LexError::InvalidRadix { span });
    }
    i128::from_str_radix(rest, base).map_err(|_| LexError::InvalidNumber { span })
}

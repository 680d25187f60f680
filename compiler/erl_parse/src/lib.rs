//! Parser for the erlkit expression language.
//!
//! Turns source text into an [`erl_ir::Form`] tree via [`parse_expr`]. The
//! parser accepts exactly the guard-expression subset the formatter handles:
//! literals, variables, unary and binary operators, tuples, lists (proper
//! and improper), and bit syntax. Comprehensions, calls, maps, and clause
//! constructs are out of scope and reported as parse errors.

mod error;
mod parser;

pub use error::ParseError;

use erl_ir::Form;
use parser::Parser;

/// Parse a single expression from `source`.
///
/// The whole input must be consumed; trailing tokens are an error.
///
/// # Errors
///
/// Fails on lexical errors, on syntax the expression grammar does not
/// cover, and on non-associative operator chains that would need
/// parentheses.
#[tracing::instrument(level = "trace", skip(source))]
pub fn parse_expr(source: &str) -> Result<Form, ParseError> {
    let tokens = erl_lexer::lex(source)?;
    Parser::new(tokens).parse()
}

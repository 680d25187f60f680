//! Abstract form tree for Erlang expressions.
//!
//! The types here are produced by `erl_parse` and consumed read-only by
//! `erl_fmt`. A [`Form`] is an immutable, already-parsed tree value; literal
//! leaves carry both the exact source text slice (so the formatter can
//! preserve digit case, underscores, and escape spellings) and the decoded
//! run-time value.
//!
//! # Modules
//!
//! - [`form`]: the form node itself plus binary-element payloads
//! - [`ops`]: the static operator precedence table and classification sets
//! - [`keywords`]: reserved words and the bare-atom test
//! - [`span`]: byte spans for tokens and diagnostics

pub mod form;
pub mod keywords;
pub mod ops;
pub mod span;

pub use form::{BinElement, Form, TypeSpec};
pub use keywords::{is_bare_atom, is_reserved};
pub use ops::{
    binop_assoc, binop_prec, exclusive_bool_op, forces_nested_parens, unop_prec, word_unop, Assoc,
};
pub use span::Span;

//! Document algebra for width-aware pretty printing.
//!
//! A [`Doc`] is a layout-agnostic description of formatted output. Formatters
//! build documents bottom-up out of a small closed set of combinators; the
//! renderer then linearizes one document into text under a line-width budget
//! in a single left-to-right scan.
//!
//! # Combinators
//!
//! - [`Doc::text`]: an atomic, unbreakable fragment
//! - [`Doc::spaces`]: n columns of indentation content
//! - [`Doc::combine`]: sequential concatenation, continuing on the same line;
//!   later lines of the right document keep the column where it began
//! - [`Doc::flush`]: a forced line break after the document, resetting the
//!   column to the document's own starting column
//! - [`Doc::choice`]: a preferred document and a fallback, resolved at render
//!   time by a width-fit test
//! - [`Doc::single_line`]: render ignoring internal choices and breaks
//! - [`Doc::reduce`]: left-fold a sequence pairwise through a combinator
//!
//! The fit test for a choice is evaluated lazily against the remaining width
//! with early exit, so rendering cost stays near-linear in document size
//! rather than exponential in nesting depth.

mod doc;
mod render;

pub use doc::Doc;

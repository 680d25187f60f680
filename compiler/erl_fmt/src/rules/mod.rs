//! Formatting rules that are policy rather than layout.

pub(crate) mod parentheses;

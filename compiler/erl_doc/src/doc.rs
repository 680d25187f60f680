//! The document value and its constructors.

use std::fmt;
use std::rc::Rc;

/// A layout-agnostic document.
///
/// Immutable once built; constructed bottom-up by formatters and discarded
/// after rendering. Children are reference-counted, so cloning a document
/// is O(1) and the same operand subtree can sit in both branches of a
/// [`Doc::Choice`] without being duplicated — total document size stays
/// linear in the input tree, not exponential in nesting depth.
#[derive(Clone, PartialEq, Eq)]
pub enum Doc {
    /// Atomic text fragment with known display width.
    Text(String),
    /// N columns of indentation content.
    Spaces(usize),
    /// Left then right, continuing on the same line. Later lines of the
    /// right document are aligned at the column where it began.
    Combine(Rc<Doc>, Rc<Doc>),
    /// The document, then a forced line break resetting the column to the
    /// document's starting column.
    Flush(Rc<Doc>),
    /// Preferred document, fallback document. The preferred one is chosen
    /// when it renders without a forced break inside the remaining width.
    Choice(Rc<Doc>, Rc<Doc>),
    /// Render purely flat, ignoring internal choices and breaks.
    SingleLine(Rc<Doc>),
}

impl Doc {
    /// An atomic text fragment.
    pub fn text(s: impl Into<String>) -> Doc {
        Doc::Text(s.into())
    }

    /// `n` columns of indentation.
    pub fn spaces(n: usize) -> Doc {
        Doc::Spaces(n)
    }

    /// The empty document.
    pub fn nil() -> Doc {
        Doc::Text(String::new())
    }

    /// Concatenate `self` then `other` on the same line.
    pub fn combine(self, other: Doc) -> Doc {
        Doc::Combine(Rc::new(self), Rc::new(other))
    }

    /// Force a line break after `self`.
    pub fn flush(self) -> Doc {
        Doc::Flush(Rc::new(self))
    }

    /// Render `self` flat, ignoring internal choices and breaks.
    pub fn single_line(self) -> Doc {
        Doc::SingleLine(Rc::new(self))
    }

    /// Prefer `preferred`; fall back to `fallback` when it does not fit.
    pub fn choice(preferred: Doc, fallback: Doc) -> Doc {
        Doc::Choice(Rc::new(preferred), Rc::new(fallback))
    }

    /// Left-fold `docs` pairwise through `f`. An empty sequence yields the
    /// empty document.
    pub fn reduce<F>(f: F, docs: impl IntoIterator<Item = Doc>) -> Doc
    where
        F: Fn(Doc, Doc) -> Doc,
    {
        let mut iter = docs.into_iter();
        let Some(first) = iter.next() else {
            return Doc::nil();
        };
        iter.fold(first, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloning_shares_children() {
        let operand = Doc::text("operand");
        let doc = Doc::choice(operand.clone().single_line(), operand.flush());
        let copy = doc.clone();
        match (&doc, &copy) {
            (Doc::Choice(a, _), Doc::Choice(b, _)) => assert!(Rc::ptr_eq(a, b)),
            _ => panic!("expected a choice"),
        }
    }
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Doc::Text(s) => write!(f, "Text({s:?})"),
            Doc::Spaces(n) => write!(f, "Spaces({n})"),
            Doc::Combine(a, b) => f.debug_tuple("Combine").field(a).field(b).finish(),
            Doc::Flush(d) => f.debug_tuple("Flush").field(d).finish(),
            Doc::Choice(a, b) => f.debug_tuple("Choice").field(a).field(b).finish(),
            Doc::SingleLine(d) => f.debug_tuple("SingleLine").field(d).finish(),
        }
    }
}

//! Expression form nodes.
//!
//! A [`Form`] is one parsed Erlang expression. The set of kinds is closed:
//! literals, variables, string concatenation, unary/binary operator
//! applications, and the bracketed containers (tuple, list, cons, binary).
//!
//! Literal leaves carry the exact original source slice in `text` alongside
//! the decoded run-time value. The formatter reads `text` to preserve radix
//! style, underscores, and escape spellings; the decoded value drives escape
//! normalization and value-preservation checks.

/// One parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    /// Integer literal. `text` is the source spelling (`42`, `1_000`, `16#ff`),
    /// `value` the decoded integer.
    Integer { text: String, value: i128 },
    /// Float literal. `text` is the source spelling (`1.0E2`), `value` the
    /// decoded float.
    Float { text: String, value: f64 },
    /// Character literal including the `$` prefix (`$a`, `$\n`).
    Char { text: String, value: char },
    /// Atom literal. `text` is as written (possibly quoted), `value` the
    /// decoded atom name.
    Atom { text: String, value: String },
    /// String literal including the double quotes. `value` is the decoded
    /// character sequence.
    String { text: String, value: String },
    /// Variable reference.
    Var { name: String },
    /// Adjacent string literals forming one concatenation.
    Concat { segments: Vec<Form> },
    /// Unary operator application. `op` is the operator symbol (`-`, `not`,
    /// `bnot`, `catch`).
    UnaryOp { op: String, operand: Box<Form> },
    /// Binary operator application.
    BinaryOp {
        op: String,
        left: Box<Form>,
        right: Box<Form>,
    },
    /// Tuple `{...}`.
    Tuple { elements: Vec<Form> },
    /// List `[...]`. A trailing cons cell appears as the last element.
    List { elements: Vec<Form> },
    /// Cons cell `Head | Tail`. Brackets come from the enclosing list.
    Cons { head: Box<Form>, tail: Box<Form> },
    /// Bit-syntax binary `<<...>>`.
    Binary { elements: Vec<BinElement> },
}

/// One segment of a bit-syntax binary: `Expr[:Size][/Spec-Spec...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinElement {
    pub expr: Form,
    pub size: Option<Form>,
    pub specifiers: Vec<TypeSpec>,
}

/// A type specifier entry: a bare name (`binary`) or a `name:size` pair
/// (`unit:8`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub size: Option<u64>,
}

impl Form {
    /// Short name of the node kind, for traces and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Form::Integer { .. } => "integer",
            Form::Float { .. } => "float",
            Form::Char { .. } => "char",
            Form::Atom { .. } => "atom",
            Form::String { .. } => "string",
            Form::Var { .. } => "var",
            Form::Concat { .. } => "concat",
            Form::UnaryOp { .. } => "unary_op",
            Form::BinaryOp { .. } => "binary_op",
            Form::Tuple { .. } => "tuple",
            Form::List { .. } => "list",
            Form::Cons { .. } => "cons",
            Form::Binary { .. } => "binary",
        }
    }

    /// Structural equality on decoded values and operator structure,
    /// ignoring source spelling.
    ///
    /// Two trees compare equal here when they denote the same value and the
    /// same grouping, even if one was written `16#ff` and the other `16#FF`.
    /// Floats compare by bit pattern so formatting cannot smuggle a value
    /// change through rounding.
    pub fn value_eq(&self, other: &Form) -> bool {
        match (self, other) {
            (Form::Integer { value: a, .. }, Form::Integer { value: b, .. }) => a == b,
            (Form::Float { value: a, .. }, Form::Float { value: b, .. }) => {
                a.to_bits() == b.to_bits()
            }
            (Form::Char { value: a, .. }, Form::Char { value: b, .. }) => a == b,
            (Form::Atom { value: a, .. }, Form::Atom { value: b, .. }) => a == b,
            (Form::String { value: a, .. }, Form::String { value: b, .. }) => a == b,
            (Form::Var { name: a }, Form::Var { name: b }) => a == b,
            (Form::Concat { segments: a }, Form::Concat { segments: b }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.value_eq(y))
            }
            (
                Form::UnaryOp { op: a, operand: x },
                Form::UnaryOp { op: b, operand: y },
            ) => a == b && x.value_eq(y),
            (
                Form::BinaryOp {
                    op: a,
                    left: al,
                    right: ar,
                },
                Form::BinaryOp {
                    op: b,
                    left: bl,
                    right: br,
                },
            ) => a == b && al.value_eq(bl) && ar.value_eq(br),
            (Form::Tuple { elements: a }, Form::Tuple { elements: b })
            | (Form::List { elements: a }, Form::List { elements: b }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.value_eq(y))
            }
            (
                Form::Cons { head: ah, tail: at },
                Form::Cons { head: bh, tail: bt },
            ) => ah.value_eq(bh) && at.value_eq(bt),
            (Form::Binary { elements: a }, Form::Binary { elements: b }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.value_eq(y))
            }
            _ => false,
        }
    }
}

impl BinElement {
    /// Value equality for binary elements; see [`Form::value_eq`].
    pub fn value_eq(&self, other: &BinElement) -> bool {
        let size_eq = match (&self.size, &other.size) {
            (None, None) => true,
            (Some(a), Some(b)) => a.value_eq(b),
            _ => false,
        };
        self.expr.value_eq(&other.expr) && size_eq && self.specifiers == other.specifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str, value: i128) -> Form {
        Form::Integer {
            text: text.into(),
            value,
        }
    }

    #[test]
    fn value_eq_ignores_spelling() {
        assert!(int("16#ff", 255).value_eq(&int("16#FF", 255)));
        assert!(!int("255", 255).value_eq(&int("256", 256)));
    }

    #[test]
    fn value_eq_checks_operator_structure() {
        let a = Form::BinaryOp {
            op: "+".into(),
            left: Box::new(int("1", 1)),
            right: Box::new(int("2", 2)),
        };
        let b = Form::BinaryOp {
            op: "-".into(),
            left: Box::new(int("1", 1)),
            right: Box::new(int("2", 2)),
        };
        assert!(!a.value_eq(&b));
        assert!(a.value_eq(&a.clone()));
    }

    #[test]
    fn value_eq_floats_by_bits() {
        let a = Form::Float {
            text: "1.0E2".into(),
            value: 100.0,
        };
        let b = Form::Float {
            text: "1.0e2".into(),
            value: 100.0,
        };
        assert!(a.value_eq(&b));
    }
}

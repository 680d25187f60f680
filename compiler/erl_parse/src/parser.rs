//! Recursive-descent expression parser with precedence climbing.
//!
//! The climb uses the same `(left, op, right)` triples as the formatter
//! (`erl_ir::ops`), so the grammar and the re-parenthesization logic can
//! never disagree about binding. Each parsed sub-expression carries the
//! precedence of its top operator; an infix operator may extend it only if
//! that precedence satisfies the operator's left slot, which is what rejects
//! non-associative chains like `1 < 2 < 3`.

use crate::error::ParseError;
use erl_ir::ops::PrecTriple;
use erl_ir::{binop_prec, unop_prec, BinElement, Form, Span, TypeSpec};
use erl_lexer::{Token, TokenKind};

/// Precedence of primary expressions: literals, variables, containers, and
/// parenthesized expressions. Matches the grammar's maximal precedence.
const PRIMARY_PREC: u16 = 900;

/// A parsed sub-expression together with the precedence of its top operator.
struct Parsed {
    form: Form,
    prec: u16,
}

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Parse a single expression spanning the whole token stream.
    pub(crate) fn parse(mut self) -> Result<Form, ParseError> {
        let parsed = self.expr(0)?;
        if let Some(tok) = self.peek() {
            return Err(ParseError::Unexpected {
                expected: "end of input".to_string(),
                found: format!("{} `{}`", tok.kind.describe(), tok.text),
                span: tok.span,
            });
        }
        Ok(parsed.form)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<(), ParseError> {
        match self.peek() {
            Some(tok) if tok.kind == *kind => {
                self.bump();
                Ok(())
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError::Unexpected {
                expected: expected.to_string(),
                found: format!("{} `{}`", tok.kind.describe(), tok.text),
                span: tok.span,
            },
            None => ParseError::Eof {
                expected: expected.to_string(),
            },
        }
    }

    /// Precedence climb: parse an expression whose top operator binds at
    /// least as tightly as `min`.
    fn expr(&mut self, min: u16) -> Result<Parsed, ParseError> {
        let mut lhs = self.prefix(min)?;
        while let Some((op, span, triple)) = self.peek_binop() {
            let (left, prec, right) = triple;
            if prec < min {
                break;
            }
            if lhs.prec < left {
                return Err(ParseError::NonAssociative { op, span });
            }
            self.bump();
            let rhs = self.expr(right)?;
            lhs = Parsed {
                form: Form::BinaryOp {
                    op,
                    left: Box::new(lhs.form),
                    right: Box::new(rhs.form),
                },
                prec,
            };
        }
        Ok(lhs)
    }

    fn peek_binop(&self) -> Option<(String, Span, PrecTriple)> {
        let tok = self.peek()?;
        if tok.kind != TokenKind::Op {
            return None;
        }
        let triple = binop_prec(&tok.text)?;
        Some((tok.text.clone(), tok.span, triple))
    }

    fn prefix(&mut self, min: u16) -> Result<Parsed, ParseError> {
        if let Some(tok) = self.peek() {
            if tok.kind == TokenKind::Op {
                if let Some((prec, right)) = unop_prec(&tok.text) {
                    if prec < min {
                        return Err(self.unexpected("an expression"));
                    }
                    let op = tok.text.clone();
                    self.bump();
                    let operand = self.unary_operand(&op, right)?;
                    return Ok(Parsed {
                        form: Form::UnaryOp {
                            op,
                            operand: Box::new(operand),
                        },
                        prec,
                    });
                }
            }
        }
        self.primary()
    }

    /// Parse the operand of a unary operator. Identical `not`/`bnot` chains
    /// nest directly without parentheses.
    fn unary_operand(&mut self, op: &str, right: u16) -> Result<Form, ParseError> {
        if matches!(op, "not" | "bnot") {
            if let Some(tok) = self.peek() {
                if tok.kind == TokenKind::Op && tok.text == op {
                    self.bump();
                    let operand = self.unary_operand(op, right)?;
                    return Ok(Form::UnaryOp {
                        op: op.to_string(),
                        operand: Box::new(operand),
                    });
                }
            }
        }
        Ok(self.expr(right)?.form)
    }

    /// Primary expressions: literals, variables, containers, parenthesized
    /// expressions. These are exactly the grammar's maximal-precedence forms.
    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let Some(tok) = self.peek().cloned() else {
            return Err(ParseError::Eof {
                expected: "an expression".to_string(),
            });
        };
        let form = match tok.kind {
            TokenKind::Integer { value } => {
                self.bump();
                Form::Integer {
                    text: tok.text,
                    value,
                }
            }
            TokenKind::Float { value } => {
                self.bump();
                Form::Float {
                    text: tok.text,
                    value,
                }
            }
            TokenKind::Char { value } => {
                self.bump();
                Form::Char {
                    text: tok.text,
                    value,
                }
            }
            TokenKind::Atom { value } => {
                self.bump();
                Form::Atom {
                    text: tok.text,
                    value,
                }
            }
            TokenKind::Str { .. } => self.string_or_concat(),
            TokenKind::Var => {
                self.bump();
                Form::Var { name: tok.text }
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.expr(0)?;
                self.expect(&TokenKind::RParen, "`)`")?;
                inner.form
            }
            TokenKind::LBrace => self.tuple()?,
            TokenKind::LBracket => self.list()?,
            TokenKind::BinOpen => self.binary()?,
            _ => return Err(self.unexpected("an expression")),
        };
        Ok(Parsed {
            form,
            prec: PRIMARY_PREC,
        })
    }

    /// One string literal, or several adjacent ones forming a concatenation.
    fn string_or_concat(&mut self) -> Form {
        let mut segments = Vec::new();
        while let Some(tok) = self.peek() {
            if let TokenKind::Str { value } = &tok.kind {
                segments.push(Form::String {
                    text: tok.text.clone(),
                    value: value.clone(),
                });
                self.bump();
            } else {
                break;
            }
        }
        if segments.len() == 1 {
            segments.remove(0)
        } else {
            Form::Concat { segments }
        }
    }

    fn tuple(&mut self) -> Result<Form, ParseError> {
        self.bump(); // `{`
        let mut elements = Vec::new();
        if self.peek().is_some_and(|t| t.kind == TokenKind::RBrace) {
            self.bump();
            return Ok(Form::Tuple { elements });
        }
        loop {
            elements.push(self.expr(0)?.form);
            if self.peek().is_some_and(|t| t.kind == TokenKind::Comma) {
                self.bump();
                continue;
            }
            self.expect(&TokenKind::RBrace, "`,` or `}`")?;
            break;
        }
        Ok(Form::Tuple { elements })
    }

    fn list(&mut self) -> Result<Form, ParseError> {
        self.bump(); // `[`
        let mut elements = Vec::new();
        if self.peek().is_some_and(|t| t.kind == TokenKind::RBracket) {
            self.bump();
            return Ok(Form::List { elements });
        }
        loop {
            let elem = self.expr(0)?.form;
            if self.peek().is_some_and(|t| t.kind == TokenKind::Comma) {
                elements.push(elem);
                self.bump();
                continue;
            }
            if self.peek().is_some_and(|t| t.kind == TokenKind::Pipe) {
                self.bump();
                let tail = self.expr(0)?.form;
                elements.push(Form::Cons {
                    head: Box::new(elem),
                    tail: Box::new(tail),
                });
                self.expect(&TokenKind::RBracket, "`]`")?;
                break;
            }
            elements.push(elem);
            self.expect(&TokenKind::RBracket, "`,`, `|`, or `]`")?;
            break;
        }
        Ok(Form::List { elements })
    }

    fn binary(&mut self) -> Result<Form, ParseError> {
        self.bump(); // `<<`
        let mut elements = Vec::new();
        if self.peek().is_some_and(|t| t.kind == TokenKind::BinClose) {
            self.bump();
            return Ok(Form::Binary { elements });
        }
        loop {
            elements.push(self.bin_element()?);
            if self.peek().is_some_and(|t| t.kind == TokenKind::Comma) {
                self.bump();
                continue;
            }
            self.expect(&TokenKind::BinClose, "`,` or `>>`")?;
            break;
        }
        Ok(Form::Binary { elements })
    }

    /// One binary segment: `Expr[:Size][/Spec-Spec...]`. The expression is a
    /// maximal-precedence form, optionally under a unary operator other than
    /// `catch`.
    fn bin_element(&mut self) -> Result<BinElement, ParseError> {
        let expr = match self.peek() {
            Some(tok)
                if tok.kind == TokenKind::Op
                    && matches!(tok.text.as_str(), "+" | "-" | "bnot" | "not") =>
            {
                let op = tok.text.clone();
                self.bump();
                Form::UnaryOp {
                    op,
                    operand: Box::new(self.primary()?.form),
                }
            }
            _ => self.primary()?.form,
        };

        let size = if self.peek().is_some_and(|t| t.kind == TokenKind::Colon) {
            self.bump();
            Some(self.primary()?.form)
        } else {
            None
        };

        let specifiers = if self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Op && t.text == "/")
        {
            self.bump();
            self.type_specs()?
        } else {
            Vec::new()
        };

        Ok(BinElement {
            expr,
            size,
            specifiers,
        })
    }

    fn type_specs(&mut self) -> Result<Vec<TypeSpec>, ParseError> {
        let mut specs = Vec::new();
        loop {
            let name = match self.peek() {
                Some(tok) => {
                    if let TokenKind::Atom { value } = &tok.kind {
                        let name = value.clone();
                        self.bump();
                        name
                    } else {
                        return Err(self.unexpected("a type specifier"));
                    }
                }
                None => return Err(self.unexpected("a type specifier")),
            };
            let size = if self.peek().is_some_and(|t| t.kind == TokenKind::Colon) {
                self.bump();
                match self.peek() {
                    Some(tok) => {
                        if let TokenKind::Integer { value } = tok.kind {
                            let size = u64::try_from(value)
                                .map_err(|_| self.unexpected("a unit size"))?;
                            self.bump();
                            Some(size)
                        } else {
                            return Err(self.unexpected("a unit size"));
                        }
                    }
                    None => return Err(self.unexpected("a unit size")),
                }
            } else {
                None
            };
            specs.push(TypeSpec { name, size });
            if self
                .peek()
                .is_some_and(|t| t.kind == TokenKind::Op && t.text == "-")
            {
                self.bump();
                continue;
            }
            break;
        }
        Ok(specs)
    }
}

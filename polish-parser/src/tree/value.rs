use crate::tokenizer::{Token, TokenKind};
use rug::Integer;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation stored in an operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
}

impl BinOpKind {
    /// Returns the symbol used for the operation in prefix and infix notation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        }
    }

    /// Applies the operation to two integers.
    pub fn apply(self, lhs: &Integer, rhs: &Integer) -> Integer {
        match self {
            Self::Add => Integer::from(lhs + rhs),
            Self::Sub => Integer::from(lhs - rhs),
            Self::Mul => Integer::from(lhs * rhs),
        }
    }

    /// Returns the operation corresponding to the given token kind, if it is an operator.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Int | TokenKind::Name => None,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A numeric literal, such as `15`, `-3` or `007`.
///
/// The text is kept exactly as written, and is what the literal prints as and is compared by;
/// `007` and `7` are different literals with the same value. The value is only used for
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    value: Integer,
    text: String,
}

impl Literal {
    /// Reads a numeric literal: an optional leading `-` followed by one or more digits.
    ///
    /// Returns [`None`] if the text is not a numeric literal.
    pub fn parse(text: &str) -> Option<Self> {
        if TokenKind::classify(text) != TokenKind::Int {
            return None;
        }

        // every `-?[0-9]+` is a valid integer, so this only fails for non-literals
        text.parse::<Integer>()
            .ok()
            .map(|value| Self { value, text: text.to_string() })
    }

    /// Returns the value of the literal.
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Returns the literal as written.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Creates the literal in its canonical decimal form.
impl From<Integer> for Literal {
    fn from(value: Integer) -> Self {
        let text = value.to_string();
        Self { value, text }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The value held by a single node of an expression tree.
///
/// Every token falls in exactly one of these classes: an operator symbol, a numeric literal
/// (optional leading `-` followed by one or more digits), or a variable (anything else).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A binary operator, such as `+`.
    Op(BinOpKind),

    /// A numeric literal, such as `15` or `-3`.
    Int(Literal),

    /// A variable, such as `x` or `abc`.
    Var(String),
}

impl Value {
    /// Creates the value a token represents.
    pub fn from_token(token: &Token) -> Self {
        Self::from_kind(token.kind, token.lexeme)
    }

    /// Creates the value for text of the given kind.
    fn from_kind(kind: TokenKind, text: &str) -> Self {
        if let Some(op) = BinOpKind::from_token_kind(kind) {
            return Self::Op(op);
        }

        match kind {
            // the fallback is never taken for text the tokenizer classified as `Int`
            TokenKind::Int => Literal::parse(text)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Var(text.to_string())),
            _ => Self::Var(text.to_string()),
        }
    }

    /// Creates a variable value.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Returns true if the value is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Op(_))
    }

    /// Returns true if the value is a numeric literal.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if the value is a variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Returns the operator, if the value is one.
    pub fn as_operator(&self) -> Option<BinOpKind> {
        match self {
            Self::Op(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns the literal, if the value is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Int(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns the value of the literal, if the value is a numeric literal.
    pub fn as_integer(&self) -> Option<&Integer> {
        self.as_literal().map(Literal::value)
    }

    /// Returns true if the value is the literal `n`, written in canonical form. `01` and `-0` are
    /// not `1` and `0`.
    pub fn is_integer(&self, n: i32) -> bool {
        self.as_literal().map_or(false, |literal| literal.text() == n.to_string())
    }
}

impl From<BinOpKind> for Value {
    fn from(op: BinOpKind) -> Self {
        Self::Op(op)
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Self::Int(literal)
    }
}

impl From<Integer> for Value {
    fn from(int: Integer) -> Self {
        Self::Int(Literal::from(int))
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Self::from(Integer::from(int))
    }
}

impl From<i32> for Value {
    fn from(int: i32) -> Self {
        Self::from(Integer::from(int))
    }
}

/// Classifies the text as a token would be classified.
impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::from_kind(TokenKind::classify(text), text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Op(op) => write!(f, "{}", op),
            Self::Int(literal) => write!(f, "{}", literal),
            Self::Var(name) => f.write_str(name),
        }
    }
}

pub mod error;

use crate::{
    tokenizer::{tokenize_complete, Token},
    tree::{ExprTree, Node, Value},
};
use error::{ExpectedEof, UnexpectedEof};
use log::{debug, trace};
use polish_error::{Error, ErrorKind};
use std::ops::Range;

/// What to do with tokens left over after a complete expression has been parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Ignore any leftover tokens. `+ 1 2 3` parses as `+ 1 2`.
    #[default]
    Lenient,

    /// Reject leftover tokens with an [`ExpectedEof`] error.
    Strict,
}

/// A recursive-descent parser for arithmetic expressions in prefix notation.
///
/// The parser consumes its tokens strictly in order, like a queue: each node of the tree takes
/// the next token, and an operator node then parses its entire left subtree before its right
/// subtree starts.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns true if every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an [`UnexpectedEof`] error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| self.error(UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Parses a single expression from the start of the token stream, ignoring any tokens that
    /// follow it.
    pub fn try_parse(&mut self) -> Result<ExprTree, Error> {
        self.parse_node().map(ExprTree::from)
    }

    /// Parses a single expression. All the tokens must be consumed by the expression; if not, an
    /// [`ExpectedEof`] error is returned.
    pub fn try_parse_full(&mut self) -> Result<ExprTree, Error> {
        let tree = self.try_parse()?;
        if self.is_exhausted() {
            Ok(tree)
        } else {
            let start = self.span().start;
            Err(Error::new(vec![start..self.eof_span().end], ExpectedEof))
        }
    }

    /// Parses a single expression, treating leftover tokens according to the given mode.
    pub fn try_parse_with(&mut self, mode: ParseMode) -> Result<ExprTree, Error> {
        match mode {
            ParseMode::Lenient => self.try_parse(),
            ParseMode::Strict => self.try_parse_full(),
        }
    }

    /// Builds the subtree starting at the next token.
    fn parse_node(&mut self) -> Result<Node, Error> {
        let token = self.next_token()?;
        let value = Value::from_token(&token);
        trace!("dequeued `{}` at {:?}", token.lexeme, token.span);

        if value.is_operator() {
            let left = self.parse_node()?;
            let right = self.parse_node()?;
            Ok(Node::branch(value, left, right))
        } else {
            Ok(Node::leaf(value))
        }
    }
}

/// Parses an arithmetic expression in prefix notation into a tree.
///
/// Tokens are separated by single spaces. `+`, `-` and `*` are binary operators; numeric literals
/// are integers with an optional leading `-`; anything else is a variable. Tokens after the first
/// complete expression are ignored (see [`prefix2tree_strict`] to reject them).
///
/// ```
/// use polish_parser::{fmt::to_infix, prefix2tree};
///
/// let tree = prefix2tree("+ 2 - 4 5").unwrap();
/// assert_eq!(tree.size(), 5);
/// assert_eq!(to_infix(&tree).unwrap(), "(2+(4-5))");
///
/// assert!(prefix2tree("+ 5 - 4").is_err());
/// ```
pub fn prefix2tree(expression: &str) -> Result<ExprTree, Error> {
    let tree = Parser::new(expression).try_parse()?;
    debug!("parsed {:?} into {} nodes", expression, tree.size());
    Ok(tree)
}

/// Parses an arithmetic expression in prefix notation into a tree, failing if any tokens are left
/// over after the first complete expression.
pub fn prefix2tree_strict(expression: &str) -> Result<ExprTree, Error> {
    let tree = Parser::new(expression).try_parse_full()?;
    debug!("parsed {:?} into {} nodes", expression, tree.size());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use crate::tree::BinOpKind;
    use pretty_assertions::assert_eq;
    use super::*;

    fn int(n: i32) -> Value {
        Value::from(n)
    }

    #[test]
    fn single_leaf() {
        let tree = prefix2tree("hi").unwrap();
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.root().unwrap().value(), &Value::var("hi"));
    }

    #[test]
    fn each_operator() {
        for (source, op) in [("+ 5 10", BinOpKind::Add), ("- 5 10", BinOpKind::Sub), ("* 5 10", BinOpKind::Mul)] {
            let tree = prefix2tree(source).unwrap();
            let root = tree.root().unwrap();
            assert_eq!(tree.size(), 3);
            assert_eq!(root.value(), &Value::Op(op));
            assert_eq!(root.left().unwrap().value(), &int(5));
            assert_eq!(root.right().unwrap().value(), &int(10));
        }
    }

    #[test]
    fn nested_right() {
        let tree = prefix2tree("+ 5 - 4 3").unwrap();
        let root = tree.root().unwrap();
        let right = root.right().unwrap();
        assert_eq!(tree.size(), 5);
        assert_eq!(root.left().unwrap().value(), &int(5));
        assert_eq!(right.value(), &Value::Op(BinOpKind::Sub));
        assert_eq!(right.left().unwrap().value(), &int(4));
        assert_eq!(right.right().unwrap().value(), &int(3));
    }

    #[test]
    fn left_subtree_consumes_first() {
        let tree = prefix2tree("- * a b c").unwrap();
        assert_eq!(tree, ExprTree::from(Node::branch(
            BinOpKind::Sub,
            Node::branch(BinOpKind::Mul, Node::leaf("a"), Node::leaf("b")),
            Node::leaf("c"),
        )));
    }

    #[test]
    fn negative_literal() {
        let tree = prefix2tree("-1").unwrap();
        assert_eq!(tree.root().unwrap().value(), &int(-1));
    }

    #[test]
    fn missing_operand() {
        let err = prefix2tree("+ 5 - 4").unwrap_err();
        assert!(err.kind_is::<UnexpectedEof>());
        assert_eq!(err.spans, vec![7..7]);

        assert!(prefix2tree("+ 1 +").unwrap_err().kind_is::<UnexpectedEof>());
        assert!(prefix2tree("-").unwrap_err().kind_is::<UnexpectedEof>());
    }

    #[test]
    fn trailing_tokens_lenient() {
        let tree = prefix2tree("+ 1 2 3 4").unwrap();
        assert_eq!(tree, prefix2tree("+ 1 2").unwrap());
    }

    #[test]
    fn trailing_tokens_strict() {
        let err = prefix2tree_strict("+ 1 2 3 4").unwrap_err();
        assert!(err.kind_is::<ExpectedEof>());
        assert_eq!(err.spans, vec![6..9]);

        assert!(prefix2tree_strict("+ 1 2").is_ok());
    }

    #[test]
    fn parse_with_mode() {
        assert!(Parser::new("x y").try_parse_with(ParseMode::Lenient).is_ok());
        assert!(Parser::new("x y").try_parse_with(ParseMode::Strict).is_err());
    }

    #[test]
    fn empty_tokens_are_variables() {
        let tree = prefix2tree("+ 1  2").unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.right().unwrap().value(), &Value::var(""));
        assert!(prefix2tree_strict("+ 1  2").is_err());
    }
}

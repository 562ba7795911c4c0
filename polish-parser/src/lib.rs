//! Parsing and printing of arithmetic expressions written in prefix (Polish) notation.
//!
//! An expression such as `* - 1 + b 3 d` is parsed by [`prefix2tree`] into an [`ExprTree`], a
//! binary tree whose internal nodes are the operators `+`, `-` and `*`, and whose leaves are
//! integer literals and variables. Trees can be rendered back to text with [`to_prefix`] and
//! [`to_infix`], compared position-by-position with [`equals`], and checked for the shape of an
//! arithmetic expression with [`is_arithmetic_expression`].
//!
//! ```
//! use polish_parser::{equals, prefix2tree, to_infix, to_prefix};
//!
//! let tree = prefix2tree("* - 1 + b 3 d").unwrap();
//! assert_eq!(to_infix(&tree).unwrap(), "((1-(b+3))*d)");
//!
//! let round_trip = prefix2tree(&to_prefix(&tree).unwrap()).unwrap();
//! assert!(equals(&tree, &round_trip));
//! ```
//!
//! Rewriting trees (constant folding, algebraic simplification and substitution) lives in the
//! `polish-compute` crate.

pub mod fmt;
pub mod parser;
pub mod tokenizer;
pub mod tree;

pub use fmt::{to_infix, to_prefix};
pub use parser::{prefix2tree, prefix2tree_strict, ParseMode, Parser};
pub use tree::{equals, validate::is_arithmetic_expression, BinOpKind, ExprTree, Literal, Node, Value};

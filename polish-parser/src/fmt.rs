//! Rendering of expression trees as prefix and infix text.

use crate::tree::{validate::validated_root, ExprTree, Node};
use polish_error::Error;
use std::fmt::{Display, Formatter, Result};

/// Wraps a [`Node`] to display the subtree rooted at it in prefix notation: the value, followed by
/// the left and right subtrees, separated by single spaces.
///
/// The subtree is written as-is, without checking that it is a valid arithmetic expression.
pub struct Prefix<'a>(pub &'a Node);

impl Display for Prefix<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.0.value())?;
        for child in [self.0.left(), self.0.right()].into_iter().flatten() {
            write!(f, " {}", Prefix(child))?;
        }
        Ok(())
    }
}

/// Wraps a [`Node`] to display the subtree rooted at it in fully parenthesized infix notation,
/// with no spaces around operators, such as `((1-(b+3))*d)`.
///
/// The subtree is written as-is, without checking that it is a valid arithmetic expression.
pub struct Infix<'a>(pub &'a Node);

impl Display for Infix<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0.children() {
            (None, None) => write!(f, "{}", self.0.value()),
            (left, right) => {
                write!(f, "(")?;
                if let Some(left) = left {
                    write!(f, "{}", Infix(left))?;
                }
                write!(f, "{}", self.0.value())?;
                if let Some(right) = right {
                    write!(f, "{}", Infix(right))?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Returns the tree as an expression in prefix notation.
///
/// Fails if the tree is not a valid arithmetic expression.
///
/// ```
/// use polish_parser::{fmt::to_prefix, prefix2tree};
///
/// let tree = prefix2tree("* - 1 + b 3 d").unwrap();
/// assert_eq!(to_prefix(&tree).unwrap(), "* - 1 + b 3 d");
/// ```
pub fn to_prefix(tree: &ExprTree) -> std::result::Result<String, Error> {
    validated_root(tree).map(|root| Prefix(root).to_string())
}

/// Returns the tree as a fully parenthesized expression in infix notation.
///
/// Fails if the tree is not a valid arithmetic expression.
///
/// ```
/// use polish_parser::{fmt::to_infix, prefix2tree};
///
/// let tree = prefix2tree("* - 1 + b 3 d").unwrap();
/// assert_eq!(to_infix(&tree).unwrap(), "((1-(b+3))*d)");
/// ```
pub fn to_infix(tree: &ExprTree) -> std::result::Result<String, Error> {
    validated_root(tree).map(|root| Infix(root).to_string())
}

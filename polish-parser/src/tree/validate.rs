//! Checks that a tree has the shape of an arithmetic expression.
//!
//! A tree is a valid arithmetic expression if every node is one of:
//!
//! - a leaf holding a numeric literal or a variable, or
//! - a node holding an operator, with exactly two children that are themselves valid.
//!
//! In particular, operators never appear at leaves, literals and variables never have children,
//! and no node has exactly one child. A tree made of a single literal or variable is valid; the
//! empty tree is not.

use polish_error::Error;
use super::{
    error::{EmptyTree, OperandWithChildren, OperatorLeaf, SingleChild},
    ExprTree,
    Node,
};

/// Returns true if the tree is a valid arithmetic expression.
///
/// ```
/// use polish_parser::{prefix2tree, tree::{validate::is_arithmetic_expression, ExprTree}};
///
/// assert!(is_arithmetic_expression(&prefix2tree("* - 1 + b 3 d").unwrap()));
///
/// let mut tree = ExprTree::new();
/// tree.add_root("-").add_left("1");
/// assert!(!is_arithmetic_expression(&tree));
/// ```
pub fn is_arithmetic_expression(tree: &ExprTree) -> bool {
    validate(tree).is_ok()
}

/// Checks that the tree is a valid arithmetic expression, returning an error describing the first
/// offending node (in pre-order) if not.
pub fn validate(tree: &ExprTree) -> Result<(), Error> {
    let root = tree.root().ok_or_else(|| Error::without_span(EmptyTree))?;
    validate_node(root)
}

/// Checks that the subtree rooted at the given node is a valid arithmetic expression.
pub fn validate_node(node: &Node) -> Result<(), Error> {
    match node.children() {
        (None, None) => {
            if node.value().is_operator() {
                Err(Error::without_span(OperatorLeaf { symbol: node.value().to_string() }))
            } else {
                Ok(())
            }
        },
        (Some(left), Some(right)) => {
            if !node.value().is_operator() {
                return Err(Error::without_span(OperandWithChildren {
                    value: node.value().to_string(),
                }));
            }
            validate_node(left)?;
            validate_node(right)
        },
        _ => Err(Error::without_span(SingleChild { value: node.value().to_string() })),
    }
}

/// Returns the root of the tree if the tree is a valid arithmetic expression.
pub fn validated_root(tree: &ExprTree) -> Result<&Node, Error> {
    validate(tree)?;
    tree.root().ok_or_else(|| Error::without_span(EmptyTree))
}

/// Returns the root of the tree for modification if the tree is a valid arithmetic expression.
pub fn validated_root_mut(tree: &mut ExprTree) -> Result<&mut Node, Error> {
    validate(tree)?;
    tree.root_mut().ok_or_else(|| Error::without_span(EmptyTree))
}

#[cfg(test)]
mod tests {
    use crate::prefix2tree;
    use super::*;

    #[test]
    fn valid_trees() {
        for source in ["1", "X", "-1", "+ 1 2", "+ 1 - 2 3", "* - 1 + b 3 d", "- + a b + a b"] {
            let tree = prefix2tree(source).unwrap();
            assert!(is_arithmetic_expression(&tree), "{source}");
        }
    }

    #[test]
    fn empty_tree() {
        let err = validate(&ExprTree::new()).unwrap_err();
        assert!(err.kind_is::<EmptyTree>());
    }

    #[test]
    fn operator_leaf() {
        let mut tree = ExprTree::new();
        let root = tree.add_root("+");
        root.add_left("1");
        root.add_right("+");

        let err = validate(&tree).unwrap_err();
        assert!(err.kind_is::<OperatorLeaf>());
    }

    #[test]
    fn lone_operator() {
        let mut tree = ExprTree::new();
        tree.add_root("*");
        assert!(validate(&tree).unwrap_err().kind_is::<OperatorLeaf>());
    }

    #[test]
    fn single_child_at_root() {
        let mut tree = ExprTree::new();
        tree.add_root("-").add_left("1");

        let err = validate(&tree).unwrap_err();
        assert!(err.kind_is::<SingleChild>());
    }

    #[test]
    fn single_child_below_root() {
        let mut tree = ExprTree::new();
        let root = tree.add_root("+");
        root.add_left("1");
        root.add_right("-").add_right("2");

        let err = validate(&tree).unwrap_err();
        assert!(err.kind_is::<SingleChild>());
    }

    #[test]
    fn operand_with_children() {
        let mut tree = ExprTree::new();
        let root = tree.add_root("x");
        root.add_left("1");
        root.add_right("2");
        assert!(validate(&tree).unwrap_err().kind_is::<OperandWithChildren>());

        let mut tree = ExprTree::new();
        let root = tree.add_root("+");
        root.add_left("y");
        let inner = root.add_right("7");
        inner.add_left("1");
        inner.add_right("2");
        assert!(validate(&tree).unwrap_err().kind_is::<OperandWithChildren>());
    }
}

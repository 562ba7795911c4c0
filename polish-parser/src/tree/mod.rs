//! The binary expression tree that prefix expressions are parsed into.
//!
//! An [`ExprTree`] owns an optional root [`Node`], and every [`Node`] exclusively owns its left
//! and right subtrees. There is no sharing between nodes and no parent links; a position in the
//! tree is simply a reference to the [`Node`] at that position.
//!
//! The container itself does not enforce that a tree is a valid arithmetic expression. Trees can
//! be built by hand in any shape (including nodes with exactly one child), and
//! [`validate::validate`] checks the shape when it matters.

pub mod error;
pub mod validate;
pub mod value;

use crate::{fmt::Prefix, parser::prefix2tree};
use error::ChildrenAlreadyAttached;
use polish_error::Error;
use std::{fmt, str::FromStr};
pub use value::{BinOpKind, Literal, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single node of an expression tree, along with the subtrees it owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The value stored at this position.
    value: Value,

    /// The left subtree, if any.
    left: Option<Box<Node>>,

    /// The right subtree, if any.
    right: Option<Box<Node>>,
}

impl Node {
    /// Creates a node with no children.
    pub fn leaf(value: impl Into<Value>) -> Self {
        Self { value: value.into(), left: None, right: None }
    }

    /// Creates a node with the given left and right subtrees.
    pub fn branch(value: impl Into<Value>, left: Node, right: Node) -> Self {
        Self {
            value: value.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Returns the value stored at this node.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the value stored at this node, returning the previous value.
    pub fn set(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Returns the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns the left subtree for modification, if any.
    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    /// Returns the right subtree for modification, if any.
    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    /// Returns both subtrees.
    pub fn children(&self) -> (Option<&Node>, Option<&Node>) {
        (self.left(), self.right())
    }

    /// Returns both subtrees for modification.
    pub fn children_mut(&mut self) -> (Option<&mut Node>, Option<&mut Node>) {
        (self.left.as_deref_mut(), self.right.as_deref_mut())
    }

    /// Returns the number of children of this node (0, 1, or 2).
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Sets the left subtree of this node to a new leaf, returning the new leaf. Any existing
    /// left subtree is discarded.
    pub fn add_left(&mut self, value: impl Into<Value>) -> &mut Node {
        self.left.insert(Box::new(Node::leaf(value))).as_mut()
    }

    /// Sets the right subtree of this node to a new leaf, returning the new leaf. Any existing
    /// right subtree is discarded.
    pub fn add_right(&mut self, value: impl Into<Value>) -> &mut Node {
        self.right.insert(Box::new(Node::leaf(value))).as_mut()
    }

    /// Moves the given subtrees under this node, which must be a leaf.
    pub fn attach(&mut self, left: Node, right: Node) -> Result<(), Error> {
        if !self.is_leaf() {
            return Err(Error::without_span(ChildrenAlreadyAttached {
                value: self.value.to_string(),
            }));
        }

        self.left = Some(Box::new(left));
        self.right = Some(Box::new(right));
        Ok(())
    }

    /// Detaches both subtrees of this node, turning it into a leaf.
    pub fn remove_children(&mut self) -> (Option<Node>, Option<Node>) {
        (
            self.left.take().map(|node| *node),
            self.right.take().map(|node| *node),
        )
    }

    /// Replaces this node with its left subtree, discarding the right subtree. Does nothing if
    /// there is no left subtree.
    pub fn promote_left(&mut self) {
        if let Some(left) = self.left.take() {
            *self = *left;
        }
    }

    /// Replaces this node with its right subtree, discarding the left subtree. Does nothing if
    /// there is no right subtree.
    pub fn promote_right(&mut self) {
        if let Some(right) = self.right.take() {
            *self = *right;
        }
    }

    /// Returns the number of nodes in the subtree rooted at this node.
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Node::size) + self.right().map_or(0, Node::size)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Prefix(self))
    }
}

/// A binary tree of [`Value`]s.
///
/// The empty tree is the result of [`ExprTree::new`] and is never a valid arithmetic expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExprTree {
    root: Option<Node>,
}

impl ExprTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the tree to a new leaf, returning the new root. Any existing nodes are
    /// discarded.
    pub fn add_root(&mut self, value: impl Into<Value>) -> &mut Node {
        self.root.insert(Node::leaf(value))
    }

    /// Returns the root of the tree, if the tree is not empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns the root of the tree for modification, if the tree is not empty.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    /// Consumes the tree, returning its root.
    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }
}

impl From<Node> for ExprTree {
    fn from(root: Node) -> Self {
        Self { root: Some(root) }
    }
}

impl FromStr for ExprTree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        prefix2tree(s)
    }
}

/// Returns true if both trees have the same shape, and the same value at every position.
///
/// Two empty trees are equal.
///
/// ```
/// use polish_parser::{prefix2tree, tree::equals};
///
/// let a = prefix2tree("+ 1 2").unwrap();
/// assert!(equals(&a, &prefix2tree("+ 1 2").unwrap()));
/// assert!(!equals(&a, &prefix2tree("+ 2 1").unwrap()));
/// ```
pub fn equals(a: &ExprTree, b: &ExprTree) -> bool {
    nodes_equal(a.root(), b.root())
}

/// Returns true if the subtrees at the given positions are identical. Two absent positions are
/// identical; an absent and a present position are not.
///
/// The subtrees do not need to be valid arithmetic expressions.
pub fn nodes_equal(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            a.value() == b.value()
                && nodes_equal(a.left(), b.left())
                && nodes_equal(a.right(), b.right())
        },
        (a, b) => a.is_none() && b.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn build_by_hand() {
        let mut tree = ExprTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);

        let root = tree.add_root("+");
        root.add_left("3");
        root.add_right("x");

        assert_eq!(tree.size(), 3);
        let root = tree.root().unwrap();
        assert_eq!(root.value(), &Value::Op(BinOpKind::Add));
        assert_eq!(root.left().unwrap().value(), &Value::from(3));
        assert_eq!(root.right().unwrap().value(), &Value::var("x"));
        assert_eq!(root.num_children(), 2);
    }

    #[test]
    fn set_returns_previous() {
        let mut node = Node::leaf("x");
        assert_eq!(node.set(5), Value::var("x"));
        assert_eq!(node.value(), &Value::from(5));
    }

    #[test]
    fn attach_to_leaf() {
        let mut node = Node::leaf("*");
        node.attach(Node::leaf("a"), Node::branch("-", Node::leaf(4), Node::leaf(5))).unwrap();
        assert_eq!(node.size(), 5);
        assert_eq!(node.to_string(), "* a - 4 5");
    }

    #[test]
    fn attach_to_branch() {
        let mut node = Node::branch("+", Node::leaf(1), Node::leaf(2));
        let err = node.attach(Node::leaf(3), Node::leaf(4)).unwrap_err();
        assert!(err.kind_is::<ChildrenAlreadyAttached>());
        assert_eq!(node.to_string(), "+ 1 2");
    }

    #[test]
    fn remove_children() {
        let mut node = Node::branch("+", Node::leaf(1), Node::leaf("y"));
        let (left, right) = node.remove_children();
        assert_eq!(left, Some(Node::leaf(1)));
        assert_eq!(right, Some(Node::leaf("y")));
        assert!(node.is_leaf());
    }

    #[test]
    fn promote() {
        let inner = Node::branch("-", Node::leaf("a"), Node::leaf("b"));
        let mut node = Node::branch("*", Node::leaf(1), inner.clone());
        node.promote_right();
        assert_eq!(node, inner);

        let mut node = Node::branch("+", inner.clone(), Node::leaf(0));
        node.promote_left();
        assert_eq!(node, inner);

        let mut leaf = Node::leaf("z");
        leaf.promote_left();
        assert_eq!(leaf, Node::leaf("z"));
    }

    #[test]
    fn structural_equality() {
        let a = prefix2tree("- + a b + a b").unwrap();
        let b = prefix2tree("- + a b + a b").unwrap();
        let c = prefix2tree("- + a b + b a").unwrap();
        assert!(equals(&a, &b));
        assert!(!equals(&a, &c));
        assert!(equals(&ExprTree::new(), &ExprTree::new()));
        assert!(!equals(&a, &ExprTree::new()));
        assert!(!equals(&prefix2tree("007").unwrap(), &prefix2tree("7").unwrap()));
    }

    #[test]
    fn equality_on_malformed_subtrees() {
        let mut a = Node::leaf("-");
        a.add_left("1");
        let mut b = Node::leaf("-");
        b.add_right("1");
        assert!(!nodes_equal(Some(&a), Some(&b)));
        assert!(nodes_equal(Some(&a), Some(&a.clone())));
        assert!(nodes_equal(None, None));
        assert!(!nodes_equal(Some(&a), None));
    }

    #[test]
    fn from_str() {
        let tree: ExprTree = "+ 2 15".parse().unwrap();
        assert_eq!(tree.size(), 3);
    }
}

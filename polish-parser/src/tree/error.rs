use ariadne::Fmt;
use polish_attrs::ErrorKind;
use polish_error::EXPR;

/// The tree has no nodes at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "the expression tree is empty")]
pub struct EmptyTree;

/// An operator was found at a leaf, where it has nothing to operate on.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("operator `{}` has no operands", self.symbol),
    help = format!("operators must have exactly {} children", "two".fg(EXPR)),
)]
pub struct OperatorLeaf {
    /// The symbol of the operator.
    pub symbol: String,
}

/// A numeric literal or variable was found with children.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not an operator, but has children", self.value),
    help = "only `+`, `-` and `*` may have children",
)]
pub struct OperandWithChildren {
    /// The literal or variable.
    pub value: String,
}

/// A node has exactly one child.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has exactly one child", self.value),
    help = format!("a node is either a leaf or has {} children", "two".fg(EXPR)),
)]
pub struct SingleChild {
    /// The value of the node.
    pub value: String,
}

/// Subtrees were attached to a node that already has children.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot attach subtrees to `{}`, which is not a leaf", self.value),
    help = "subtrees can only be attached to a leaf",
)]
pub struct ChildrenAlreadyAttached {
    /// The value of the node.
    pub value: String,
}

//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the operator node to simplify as an
//! argument, and returns `Some(rewrite)` describing how to rewrite the node if the rule applies,
//! or `None` if the rule does not apply. Rules only inspect the node and its two children; the
//! children are expected to have been simplified already.

pub mod add;
pub mod fold;
pub mod multiply;
pub mod subtract;

use crate::step_collector::StepCollector;
use polish_parser::tree::{BinOpKind, Node, Value};
use super::step::Step;

/// How a node is rewritten by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The node's subtrees are discarded, and the node becomes a leaf with the given value.
    Leaf(Value),

    /// The node is replaced by its left subtree; the right subtree is discarded.
    PromoteLeft,

    /// The node is replaced by its right subtree; the left subtree is discarded.
    PromoteRight,
}

impl Rewrite {
    /// Applies the rewrite to the node in place.
    pub fn apply(self, node: &mut Node) {
        match self {
            Self::Leaf(value) => {
                node.remove_children();
                node.set(value);
            },
            Self::PromoteLeft => node.promote_left(),
            Self::PromoteRight => node.promote_right(),
        }
    }
}

/// If the node is an operator with two children, calls the given function with the operator and
/// both children.
///
/// Returns `Some(rewrite)` with the rewrite the function chose, if any.
pub(crate) fn do_operands(
    node: &Node,
    f: impl Fn(BinOpKind, &Node, &Node) -> Option<Rewrite>,
) -> Option<Rewrite> {
    match (node.value(), node.left(), node.right()) {
        (Value::Op(op), Some(left), Some(right)) => f(*op, left, right),
        _ => None,
    }
}

/// If the node is the given operator with two children, calls the given function with both
/// children.
///
/// Returns `Some(rewrite)` with the rewrite the function chose, if any.
pub(crate) fn do_operation(
    node: &Node,
    kind: BinOpKind,
    f: impl Fn(&Node, &Node) -> Option<Rewrite>,
) -> Option<Rewrite> {
    do_operands(node, |op, left, right| {
        if op == kind {
            f(left, right)
        } else {
            None
        }
    })
}

/// Returns true if the node is not a numeric literal, i.e. it is a variable or an operator.
pub(crate) fn is_symbolic(node: &Node) -> bool {
    !node.value().is_int()
}

/// Applies the first rule that matches, folding constants before trying any identity.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    fold::fold_constants(node, step_collector)
        .or_else(|| multiply::all(node, step_collector))
        .or_else(|| add::all(node, step_collector))
        .or_else(|| subtract::all(node, step_collector))
}

//! Simplification rules for subtraction.

use crate::step_collector::StepCollector;
use polish_parser::tree::{nodes_equal, BinOpKind, Node, Value};
use super::{do_operation, is_symbolic, Rewrite, Step};

/// `- a 0 = a`
///
/// There is no counterpart for a zero on the left; `- 0 a` is the negation of `a`.
pub fn subtract_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_operation(node, BinOpKind::Sub, |left, right| {
        if right.value().is_integer(0) && is_symbolic(left) {
            Some(Rewrite::PromoteLeft)
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `- a a = 0`
///
/// `a` may be a variable or a whole subtree; the two sides must be structurally equal, so
/// `- + a b + b a` is left alone. This check walks both subtrees and then discards them, so it is
/// linear in their size.
pub fn subtract_self(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_operation(node, BinOpKind::Sub, |left, right| {
        if is_symbolic(left) && nodes_equal(Some(left), Some(right)) {
            Some(Rewrite::Leaf(Value::from(0)))
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractSelf);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    subtract_zero(node, step_collector)
        .or_else(|| subtract_self(node, step_collector))
}

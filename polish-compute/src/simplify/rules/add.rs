//! Simplification rules for addition.

use crate::step_collector::StepCollector;
use polish_parser::tree::{BinOpKind, Node};
use super::{do_operation, is_symbolic, Rewrite, Step};

/// `+ 0 a = a`
/// `+ a 0 = a`
pub fn add_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_operation(node, BinOpKind::Add, |left, right| {
        if left.value().is_integer(0) && is_symbolic(right) {
            Some(Rewrite::PromoteRight)
        } else if right.value().is_integer(0) && is_symbolic(left) {
            Some(Rewrite::PromoteLeft)
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    add_zero(node, step_collector)
}

//! Constant folding.

use crate::step_collector::StepCollector;
use polish_parser::tree::{Node, Value};
use super::{do_operands, Rewrite, Step};

/// Replaces an operation on two numeric literals with its result.
///
/// `+ 2 15 = 17`
/// `- 2 3 = -1`
/// `* 4 5 = 20`
pub fn fold_constants(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_operands(node, |op, left, right| {
        let lhs = left.value().as_integer()?;
        let rhs = right.value().as_integer()?;
        Some(Rewrite::Leaf(Value::from(op.apply(lhs, rhs))))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Fold);
    Some(opt)
}

//! Simplification rules for multiplication.

use crate::step_collector::StepCollector;
use polish_parser::tree::{BinOpKind, Node, Value};
use super::{do_operation, is_symbolic, Rewrite, Step};

/// `* 1 a = a`
/// `* a 1 = a`
pub fn multiply_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_operation(node, BinOpKind::Mul, |left, right| {
        if left.value().is_integer(1) && is_symbolic(right) {
            Some(Rewrite::PromoteRight)
        } else if right.value().is_integer(1) && is_symbolic(left) {
            Some(Rewrite::PromoteLeft)
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `* 0 a = 0`
/// `* a 0 = 0`
pub fn multiply_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_operation(node, BinOpKind::Mul, |left, right| {
        if (left.value().is_integer(0) && is_symbolic(right))
            || (right.value().is_integer(0) && is_symbolic(left))
        {
            Some(Rewrite::Leaf(Value::from(0)))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    multiply_one(node, step_collector)
        .or_else(|| multiply_zero(node, step_collector))
}

#[cfg(test)]
mod tests {
    use polish_parser::prefix2tree;
    use pretty_assertions::assert_eq;
    use super::*;

    fn root(source: &str) -> Node {
        prefix2tree(source).unwrap().into_root().unwrap()
    }

    #[test]
    fn one() {
        assert_eq!(multiply_one(&root("* 1 a"), &mut ()), Some(Rewrite::PromoteRight));
        assert_eq!(multiply_one(&root("* + a b 1"), &mut ()), Some(Rewrite::PromoteLeft));
        assert_eq!(multiply_one(&root("* 1 5"), &mut ()), None);
        assert_eq!(multiply_one(&root("+ 1 a"), &mut ()), None);
        assert_eq!(multiply_one(&root("* 01 a"), &mut ()), None);
    }

    #[test]
    fn zero() {
        let mut steps = Vec::new();
        assert_eq!(multiply_zero(&root("* 0 + a b"), &mut steps), Some(Rewrite::Leaf(Value::from(0))));
        assert_eq!(multiply_zero(&root("* x 0"), &mut steps), Some(Rewrite::Leaf(Value::from(0))));
        assert_eq!(multiply_zero(&root("* 2 x"), &mut steps), None);
        assert_eq!(multiply_zero(&root("* -0 x"), &mut steps), None);
        assert_eq!(steps, vec![Step::MultiplyZero, Step::MultiplyZero]);
    }
}

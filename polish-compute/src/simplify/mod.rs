//! Simplification of expression trees.
//!
//! Two simplifiers are provided, both of which rewrite the tree in place, bottom-up:
//!
//! - [`simplify`] folds constants: every operator whose two operands are numeric literals is
//!   replaced by the result.
//! - [`simplify_fancy`] also folds constants, and additionally applies the identities
//!   `* 1 a = a`, `* 0 a = 0`, `+ 0 a = a`, `- a 0 = a` and `- a a = 0`.
//!
//! Children are always simplified before their parent, so a rewrite that exposes a new
//! opportunity further up the tree is picked up in the same pass: `- + x 0 x` becomes `- x x`,
//! then `0`. A single pass reaches a fixed point; simplifying a simplified tree changes nothing.

pub mod rules;
pub mod step;

use crate::step_collector::StepCollector;
use log::{debug, trace};
use polish_error::Error;
use polish_parser::{
    fmt::Prefix,
    tree::{validate::validated_root_mut, ExprTree, Node},
};
use rules::Rewrite;
pub use step::Step;

/// A set of rules, tried at a single operator node after its children have been simplified.
type RuleSet = fn(&Node, &mut dyn StepCollector<Step>) -> Option<Rewrite>;

/// Folds constants in the tree, in place.
///
/// Fails if the tree is not a valid arithmetic expression, in which case it is left untouched.
///
/// ```
/// use polish_compute::simplify;
/// use polish_parser::{prefix2tree, to_prefix};
///
/// let mut tree = prefix2tree("- x + 1 2").unwrap();
/// simplify(&mut tree).unwrap();
/// assert_eq!(to_prefix(&tree).unwrap(), "- x 3");
/// ```
pub fn simplify(tree: &mut ExprTree) -> Result<(), Error> {
    simplify_with(tree, rules::fold::fold_constants, &mut ())
}

/// Folds constants in the tree, in place, returning a [`Step::Fold`] for every operator that was
/// folded.
pub fn simplify_with_steps(tree: &mut ExprTree) -> Result<Vec<Step>, Error> {
    let mut steps = Vec::new();
    simplify_with(tree, rules::fold::fold_constants, &mut steps)?;
    Ok(steps)
}

/// Folds constants and applies algebraic identities to the tree, in place.
///
/// Fails if the tree is not a valid arithmetic expression, in which case it is left untouched.
///
/// ```
/// use polish_compute::simplify_fancy;
/// use polish_parser::{prefix2tree, to_prefix};
///
/// let mut tree = prefix2tree("- * 1 x * x 1").unwrap();
/// simplify_fancy(&mut tree).unwrap();
/// assert_eq!(to_prefix(&tree).unwrap(), "0");
/// ```
pub fn simplify_fancy(tree: &mut ExprTree) -> Result<(), Error> {
    simplify_with(tree, rules::all, &mut ())
}

/// Folds constants and applies algebraic identities to the tree, in place, returning the step
/// taken at every rewritten node in the order they were taken.
pub fn simplify_fancy_with_steps(tree: &mut ExprTree) -> Result<Vec<Step>, Error> {
    let mut steps = Vec::new();
    simplify_with(tree, rules::all, &mut steps)?;
    Ok(steps)
}

/// Validates the tree, then simplifies it with the given rules.
fn simplify_with(
    tree: &mut ExprTree,
    rules: RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(), Error> {
    let root = validated_root_mut(tree)?;
    let before = root.size();
    simplify_node(root, rules, step_collector);
    debug!("simplified {} nodes into {}", before, root.size());
    Ok(())
}

/// Simplifies the subtree rooted at the given node, children first.
fn simplify_node(node: &mut Node, rules: RuleSet, step_collector: &mut dyn StepCollector<Step>) {
    if !node.value().is_operator() {
        return;
    }

    let (left, right) = node.children_mut();
    for child in [left, right].into_iter().flatten() {
        simplify_node(child, rules, step_collector);
    }

    if let Some(rewrite) = rules(node, step_collector) {
        trace!("rewriting `{}` with {:?}", Prefix(node), rewrite);
        rewrite.apply(node);
    }
}

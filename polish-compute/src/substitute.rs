//! Substitution of integer values for variables.

use crate::error::{EmptyBindings, InvalidVariableName, UnboundValue};
use log::{debug, trace};
use polish_error::Error;
use polish_parser::{
    tokenizer::TokenKind,
    tree::{validate::validated_root_mut, ExprTree, Node, Value},
};
use rug::Integer;
use std::collections::HashMap;

/// Checks that the name could appear as a variable in a parsed expression.
fn check_name(name: &str) -> Result<(), Error> {
    if TokenKind::classify(name) == TokenKind::Name {
        Ok(())
    } else {
        Err(Error::without_span(InvalidVariableName { name: name.to_string() }))
    }
}

/// Replaces every occurrence of the variable `name` in the tree with `value`, in place.
///
/// Only variable leaves are replaced; an operator or literal with the same text is never touched.
/// Names that can never be variables (`+`, `-`, `*` and integer literals) are rejected with an
/// [`InvalidVariableName`] error.
///
/// Fails if the tree is not a valid arithmetic expression, in which case it is left untouched.
///
/// ```
/// use polish_compute::substitute;
/// use polish_parser::{prefix2tree, to_prefix};
///
/// let mut tree = prefix2tree("+ c - c c").unwrap();
/// substitute(&mut tree, "c", 5).unwrap();
/// assert_eq!(to_prefix(&tree).unwrap(), "+ 5 - 5 5");
/// ```
pub fn substitute(tree: &mut ExprTree, name: &str, value: i64) -> Result<(), Error> {
    check_name(name)?;
    let root = validated_root_mut(tree)?;

    let value = Integer::from(value);
    let count = substitute_node(root, &|var| (var == name).then_some(&value));
    debug!("substituted {} for `{}` at {} positions", value, name, count);
    Ok(())
}

/// Replaces every variable bound in `bindings` with its value, in place.
///
/// `bindings` may map names to `i64` or to `Option<i64>`. Each variable is replaced at most once;
/// the substituted values are never substituted again, so the order of the bindings does not
/// matter. Variables with no binding are left alone.
///
/// Fails if the tree is not a valid arithmetic expression, if there are no bindings at all
/// ([`EmptyBindings`]), if a name is bound to [`None`] ([`UnboundValue`]), or if a name can never
/// be a variable ([`InvalidVariableName`]). All of these are checked before the tree is modified.
///
/// ```
/// use polish_compute::substitute_all;
/// use polish_parser::{prefix2tree, to_prefix};
/// use std::collections::HashMap;
///
/// let mut tree = prefix2tree("* x + y z").unwrap();
/// let bindings: HashMap<String, i64> = HashMap::from([("x".to_string(), 2), ("y".to_string(), -3)]);
/// substitute_all(&mut tree, &bindings).unwrap();
/// assert_eq!(to_prefix(&tree).unwrap(), "* 2 + -3 z");
/// ```
pub fn substitute_all<V>(tree: &mut ExprTree, bindings: &HashMap<String, V>) -> Result<(), Error>
where
    V: Copy + Into<Option<i64>>,
{
    if bindings.is_empty() {
        return Err(Error::without_span(EmptyBindings));
    }

    let values = bindings
        .iter()
        .map(|(name, value)| {
            check_name(name)?;
            let value: Option<i64> = (*value).into();
            value
                .map(|value| (name.as_str(), Integer::from(value)))
                .ok_or_else(|| Error::without_span(UnboundValue { name: name.clone() }))
        })
        .collect::<Result<HashMap<_, _>, _>>()?;

    let root = validated_root_mut(tree)?;
    let count = substitute_node(root, &|var| values.get(var));
    debug!("substituted {} bindings at {} positions", values.len(), count);
    Ok(())
}

/// Replaces each variable for which `lookup` returns a value, returning the number of
/// replacements.
fn substitute_node<'v>(node: &mut Node, lookup: &dyn Fn(&str) -> Option<&'v Integer>) -> usize {
    let replacement = match node.value() {
        Value::Var(name) => lookup(name),
        _ => None,
    };

    match replacement {
        Some(value) => {
            trace!("replacing `{}` with {}", node.value(), value);
            node.set(value.clone());
            1
        },
        None => {
            let (left, right) = node.children_mut();
            [left, right]
                .into_iter()
                .flatten()
                .map(|child| substitute_node(child, lookup))
                .sum()
        },
    }
}

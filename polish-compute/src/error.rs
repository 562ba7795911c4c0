use ariadne::Fmt;
use polish_attrs::ErrorKind;
use polish_error::EXPR;

/// A batch substitution was requested with no bindings at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no variable bindings were given",
    help = format!("provide at least one {} binding", "name = value".fg(EXPR)),
)]
pub struct EmptyBindings;

/// A variable in a batch substitution is bound to no value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("variable `{}` is not bound to a value", self.name),
    help = "remove the binding, or give it an integer value",
)]
pub struct UnboundValue {
    /// The name of the variable.
    pub name: String,
}

/// The name to substitute is an operator symbol or an integer literal, so it can never name a
/// variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be used as a variable name", self.name),
    help = format!(
        "variable names are any token that is not {} or an integer literal",
        "`+`, `-` or `*`".fg(EXPR),
    ),
)]
pub struct InvalidVariableName {
    /// The rejected name.
    pub name: String,
}

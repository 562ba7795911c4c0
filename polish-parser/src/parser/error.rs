use ariadne::Fmt;
use polish_attrs::ErrorKind;
use polish_error::EXPR;

/// The token stream ran out while an operand was still expected, such as in `+ 5 - 4`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "operand".fg(EXPR))],
    help = "every `+`, `-` and `*` takes exactly two operands",
)]
pub struct UnexpectedEof;

/// A complete expression was parsed, but more tokens followed it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "tokens".fg(EXPR))],
    help = "an expression in prefix notation has exactly one top-level operator or operand",
)]
pub struct ExpectedEof;

use ariadne::Fmt;
use polish_attrs::ErrorKind;
use polish_error::EXPR;

/// The line started with `:`, but did not name a known command.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", self.name),
    labels = ["this command"],
    help = format!("the commands are {}", "`:bindings`, `:unbind <name>` and `:mode <mode>`".fg(EXPR)),
)]
pub struct UnknownCommand {
    /// The name of the command, without the leading `:`.
    pub name: String,
}

/// A command that takes an argument was given none.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing argument",
    labels = ["this command needs an argument"],
    help = format!("usage: {}", self.usage.fg(EXPR)),
)]
pub struct MissingArgument {
    /// How the command is meant to be used.
    pub usage: &'static str,
}

/// A command that takes no argument was given one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected argument",
    labels = ["remove this argument"],
    help = format!("usage: {}", self.usage.fg(EXPR)),
)]
pub struct UnexpectedArgument {
    /// How the command is meant to be used.
    pub usage: &'static str,
}

/// The value of a binding is not an integer that fits in 64 bits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot bind `{}`", self.value),
    labels = ["this value"],
    help = format!("bindings take a {} integer value", "64-bit".fg(EXPR)),
)]
pub struct InvalidBinding {
    /// The text of the value.
    pub value: String,
}

/// `:mode` was given something other than a simplification mode.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown simplification mode `{}`", self.mode),
    labels = ["this mode"],
    help = format!("the modes are {}", "`none`, `fold` and `fancy`".fg(EXPR)),
)]
pub struct InvalidMode {
    /// The rejected mode.
    pub mode: String,
}

/// `:unbind` was given a variable that has no binding.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not bound", self.name),
    labels = ["this variable"],
    help = format!("use {} to list the bound variables", "`:bindings`".fg(EXPR)),
)]
pub struct NotBound {
    /// The name of the variable.
    pub name: String,
}

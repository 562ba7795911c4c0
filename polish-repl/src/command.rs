use crate::{
    error::{InvalidBinding, InvalidMode, MissingArgument, UnexpectedArgument, UnknownCommand},
    session::SimplifyMode,
};
use clap::ValueEnum;
use polish_compute::error::InvalidVariableName;
use polish_error::Error;
use polish_parser::tokenizer::TokenKind;
use std::ops::Range;

/// A single line of input to the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `name = <int>`: bind a variable for the following lines.
    Bind {
        name: &'a str,
        value: i64,
    },

    /// `:unbind name`: remove a binding.
    Unbind(&'a str),

    /// `:bindings`: list the current bindings.
    Bindings,

    /// `:mode none|fold|fancy`: change how expressions are simplified.
    Mode(SimplifyMode),

    /// Anything else: an expression in prefix notation.
    Eval(&'a str),
}

impl<'a> Command<'a> {
    /// Identifies the command on the given line.
    ///
    /// Spans in the returned errors point into `line`.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        if let Some(rest) = line.strip_prefix(':') {
            return Self::parse_command(line, rest);
        }

        // exactly three tokens with `=` in the middle; anything else is an expression
        if let &[name, "=", value] = line.split(' ').collect::<Vec<_>>().as_slice() {
            check_variable_name(name, 0..name.len())?;
            let value_span = line.len() - value.len()..line.len();
            let value = value
                .parse::<i64>()
                .map_err(|_| Error::new(vec![value_span], InvalidBinding { value: value.to_string() }))?;
            return Ok(Self::Bind { name, value });
        }

        Ok(Self::Eval(line))
    }

    /// Parses a `:`-prefixed command. `rest` is the line without the leading `:`.
    fn parse_command(line: &'a str, rest: &'a str) -> Result<Self, Error> {
        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (rest, None),
        };
        let name_span = 0..name.len() + 1;
        let arg_span = (name_span.end + 1).min(line.len())..line.len();

        match (name, arg) {
            ("bindings", None) => Ok(Self::Bindings),
            ("bindings", Some(_)) => Err(Error::new(vec![arg_span], UnexpectedArgument {
                usage: ":bindings",
            })),
            ("unbind", Some(var)) => Ok(Self::Unbind(var)),
            ("unbind", None) => Err(Error::new(vec![name_span], MissingArgument {
                usage: ":unbind <name>",
            })),
            ("mode", Some(mode)) => <SimplifyMode as ValueEnum>::from_str(mode, true)
                .map(Self::Mode)
                .map_err(|_| Error::new(vec![arg_span], InvalidMode { mode: mode.to_string() })),
            ("mode", None) => Err(Error::new(vec![name_span], MissingArgument {
                usage: ":mode none|fold|fancy",
            })),
            _ => Err(Error::new(vec![name_span], UnknownCommand { name: name.to_string() })),
        }
    }
}

/// Checks that the name could appear as a variable in an expression.
pub fn check_variable_name(name: &str, span: Range<usize>) -> Result<(), Error> {
    if TokenKind::classify(name) == TokenKind::Name {
        Ok(())
    } else {
        Err(Error::new(vec![span], InvalidVariableName { name: name.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn expressions() {
        assert_eq!(Command::parse("+ 1 2").unwrap(), Command::Eval("+ 1 2"));
        assert_eq!(Command::parse("x").unwrap(), Command::Eval("x"));
        assert_eq!(Command::parse("x = 1 2").unwrap(), Command::Eval("x = 1 2"));
        assert_eq!(Command::parse("").unwrap(), Command::Eval(""));
    }

    #[test]
    fn bindings() {
        assert_eq!(Command::parse("x = 5").unwrap(), Command::Bind { name: "x", value: 5 });
        assert_eq!(Command::parse("abc = -12").unwrap(), Command::Bind { name: "abc", value: -12 });
    }

    #[test]
    fn invalid_bindings() {
        let err = Command::parse("x = y").unwrap_err();
        assert!(err.kind_is::<InvalidBinding>());
        assert_eq!(err.spans, vec![4..5]);

        let err = Command::parse("x = 99999999999999999999").unwrap_err();
        assert!(err.kind_is::<InvalidBinding>());

        let err = Command::parse("+ = 1").unwrap_err();
        assert!(err.kind_is::<InvalidVariableName>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse(":bindings").unwrap(), Command::Bindings);
        assert_eq!(Command::parse(":unbind x").unwrap(), Command::Unbind("x"));
        assert_eq!(Command::parse(":mode fold").unwrap(), Command::Mode(SimplifyMode::Fold));
        assert_eq!(Command::parse(":mode none").unwrap(), Command::Mode(SimplifyMode::Off));
        assert_eq!(Command::parse(":mode FANCY").unwrap(), Command::Mode(SimplifyMode::Fancy));
    }

    #[test]
    fn invalid_commands() {
        let err = Command::parse(":frobnicate").unwrap_err();
        assert!(err.kind_is::<UnknownCommand>());
        assert_eq!(err.spans, vec![0..11]);

        let err = Command::parse(":mode loud").unwrap_err();
        assert!(err.kind_is::<InvalidMode>());
        assert_eq!(err.spans, vec![6..10]);

        assert!(Command::parse(":mode").unwrap_err().kind_is::<MissingArgument>());
        assert!(Command::parse(":unbind").unwrap_err().kind_is::<MissingArgument>());
        assert!(Command::parse(":bindings x").unwrap_err().kind_is::<UnexpectedArgument>());
    }
}

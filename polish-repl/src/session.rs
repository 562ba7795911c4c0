//! State carried between the lines fed to the REPL.

use crate::{command::{check_variable_name, Command}, error::NotBound};
use clap::ValueEnum;
use polish_compute::{simplify_fancy_with_steps, simplify_with_steps, substitute_all, Step};
use polish_error::Error;
use polish_parser::{to_infix, to_prefix, ParseMode, Parser};
use std::collections::{BTreeMap, HashMap};

/// How expressions are simplified before they are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SimplifyMode {
    /// Print expressions as they were written.
    #[value(name = "none")]
    Off,

    /// Fold constant subexpressions.
    Fold,

    /// Fold constants and apply algebraic identities.
    #[default]
    Fancy,
}

/// How expressions are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Prefix notation, on one line.
    Prefix,

    /// Fully parenthesized infix notation, on one line.
    Infix,

    /// Prefix notation, followed by infix notation on the next line.
    #[default]
    Both,
}

/// Options controlling how each expression is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: SimplifyMode,
    pub format: OutputFormat,
    pub parse_mode: ParseMode,

    /// Print the simplification steps taken before each result.
    pub steps: bool,
}

/// A REPL session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,

    /// Values substituted into every expression.
    bindings: HashMap<String, i64>,
}

impl Session {
    /// Creates a session with no bindings.
    pub fn new(config: Config) -> Self {
        Self { config, bindings: HashMap::new() }
    }

    /// Binds a variable for every following expression, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: i64) -> Result<(), Error> {
        check_variable_name(name, 0..name.len())?;
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Runs one line of input, returning the text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, Error> {
        match Command::parse(line)? {
            Command::Bind { name, value } => {
                self.bindings.insert(name.to_string(), value);
                Ok(None)
            },
            Command::Unbind(name) => match self.bindings.remove(name) {
                Some(_) => Ok(None),
                None => Err(Error::new(vec![line.len() - name.len()..line.len()], NotBound {
                    name: name.to_string(),
                })),
            },
            Command::Bindings => Ok(Some(self.list_bindings())),
            Command::Mode(mode) => {
                self.config.mode = mode;
                Ok(None)
            },
            Command::Eval(expression) => self.evaluate(expression).map(Some),
        }
    }

    /// Parses, substitutes and simplifies the expression, returning it formatted for output.
    pub fn evaluate(&self, expression: &str) -> Result<String, Error> {
        let mut tree = Parser::new(expression).try_parse_with(self.config.parse_mode)?;
        if !self.bindings.is_empty() {
            substitute_all(&mut tree, &self.bindings)?;
        }

        let steps = match self.config.mode {
            SimplifyMode::Off => Vec::new(),
            SimplifyMode::Fold => simplify_with_steps(&mut tree)?,
            SimplifyMode::Fancy => simplify_fancy_with_steps(&mut tree)?,
        };

        let mut lines = Vec::new();
        if self.config.steps {
            lines.push(format_steps(&steps));
        }
        match self.config.format {
            OutputFormat::Prefix => lines.push(to_prefix(&tree)?),
            OutputFormat::Infix => lines.push(to_infix(&tree)?),
            OutputFormat::Both => {
                lines.push(to_prefix(&tree)?);
                lines.push(to_infix(&tree)?);
            },
        }
        Ok(lines.join("\n"))
    }

    /// Lists the bindings, one per line, sorted by name.
    fn list_bindings(&self) -> String {
        if self.bindings.is_empty() {
            return "no bindings".to_string();
        }

        self.bindings
            .iter()
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .map(|(name, value)| format!("{} = {}", name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn format_steps(steps: &[Step]) -> String {
    if steps.is_empty() {
        return "steps: none".to_string();
    }

    let steps = steps.iter().map(|step| format!("{:?}", step)).collect::<Vec<_>>();
    format!("steps: {}", steps.join(", "))
}

#[cfg(test)]
mod tests {
    use polish_compute::error::InvalidVariableName;
    use polish_parser::parser::error::{ExpectedEof, UnexpectedEof};
    use pretty_assertions::assert_eq;
    use super::*;

    fn session(mode: SimplifyMode, format: OutputFormat) -> Session {
        Session::new(Config { mode, format, ..Config::default() })
    }

    #[test]
    fn default_output() {
        let mut session = Session::default();
        assert_eq!(
            session.execute("* - 1 + b 3 d").unwrap().unwrap(),
            "* - 1 + b 3 d\n((1-(b+3))*d)",
        );
        assert_eq!(session.execute("- * 1 c + c 0").unwrap().unwrap(), "0\n0");
    }

    #[test]
    fn modes() {
        let mut session = session(SimplifyMode::Off, OutputFormat::Prefix);
        assert_eq!(session.execute("+ 1 * x 1").unwrap().unwrap(), "+ 1 * x 1");

        session.execute(":mode fold").unwrap();
        assert_eq!(session.execute("+ 1 * x 1").unwrap().unwrap(), "+ 1 * x 1");
        assert_eq!(session.execute("+ 1 * 2 1").unwrap().unwrap(), "3");

        session.execute(":mode fancy").unwrap();
        assert_eq!(session.execute("+ 1 * x 1").unwrap().unwrap(), "+ 1 x");
    }

    #[test]
    fn bind_and_unbind() {
        let mut session = session(SimplifyMode::Fancy, OutputFormat::Infix);
        assert_eq!(session.execute("x = 4").unwrap(), None);
        assert_eq!(session.execute("* x y").unwrap().unwrap(), "(4*y)");
        assert_eq!(session.execute("- x 4").unwrap().unwrap(), "0");

        session.execute("y = -2").unwrap();
        assert_eq!(session.execute(":bindings").unwrap().unwrap(), "x = 4\ny = -2");

        session.execute(":unbind x").unwrap();
        assert_eq!(session.execute("* x y").unwrap().unwrap(), "(x*-2)");

        let err = session.execute(":unbind x").unwrap_err();
        assert!(err.kind_is::<NotBound>());
        assert_eq!(err.spans, vec![8..9]);

        session.execute(":unbind y").unwrap();
        assert_eq!(session.execute(":bindings").unwrap().unwrap(), "no bindings");
    }

    #[test]
    fn bind_rejects_literals() {
        let mut session = Session::default();
        assert!(session.bind("7", 1).unwrap_err().kind_is::<InvalidVariableName>());
        session.bind("n", 7).unwrap();
        assert_eq!(session.execute("n").unwrap().unwrap(), "7\n7");
    }

    #[test]
    fn steps() {
        let mut session = Session::new(Config {
            format: OutputFormat::Prefix,
            steps: true,
            ..Config::default()
        });
        assert_eq!(
            session.execute("- + x 0 * 2 3").unwrap().unwrap(),
            "steps: AddZero, Fold\n- x 6",
        );
        assert_eq!(session.execute("x").unwrap().unwrap(), "steps: none\nx");
    }

    #[test]
    fn strict_parsing() {
        let mut lenient = Session::default();
        assert_eq!(lenient.execute("+ 1 2 3").unwrap().unwrap(), "3\n3");

        let mut strict = Session::new(Config { parse_mode: ParseMode::Strict, ..Config::default() });
        assert!(strict.execute("+ 1 2 3").unwrap_err().kind_is::<ExpectedEof>());
    }

    #[test]
    fn parse_errors() {
        let mut session = Session::default();
        let err = session.execute("+ 5 - 4").unwrap_err();
        assert!(err.kind_is::<UnexpectedEof>());
        assert_eq!(err.spans, vec![7..7]);
    }
}

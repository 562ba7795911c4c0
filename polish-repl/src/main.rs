mod command;
mod error;
mod session;

use clap::Parser;
use log::{debug, LevelFilter};
use polish_error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::{Config, OutputFormat, Session, SimplifyMode};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};

/// Parse, simplify and print arithmetic expressions in prefix notation.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File containing one expression or command per line. If omitted, lines are read from stdin,
    /// or an interactive session is started when stdin is a terminal.
    file: Option<PathBuf>,

    /// How to simplify each expression.
    #[arg(long, value_enum, default_value_t = SimplifyMode::Fancy)]
    simplify: SimplifyMode,

    /// How to print each expression.
    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Substitute a value for a variable in every expression. May be repeated.
    #[arg(long = "bind", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, i64)>,

    /// Print the simplification steps taken for each expression.
    #[arg(long)]
    steps: bool,

    /// Reject tokens left over after a complete expression.
    #[arg(long)]
    strict: bool,

    /// The most verbose log messages to print to stderr.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            mode: self.simplify,
            format: self.format,
            parse_mode: if self.strict {
                polish_parser::ParseMode::Strict
            } else {
                polish_parser::ParseMode::Lenient
            },
            steps: self.steps,
        }
    }
}

/// Parses a `--bind` argument of the form `name=value`.
fn parse_binding(arg: &str) -> Result<(String, i64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `NAME=VALUE`, found `{}`", arg))?;
    let value = value
        .parse::<i64>()
        .map_err(|err| format!("invalid value for `{}`: {}", name, err))?;
    Ok((name.to_string(), value))
}

/// Report the error to stderr, highlighting the part of `line` it points at.
fn report(err: &Error, line: &str) {
    if err.report_to_stderr("input", line).is_err() {
        eprintln!("{}", err);
    }
}

/// Runs every non-empty line of the input, printing the results. Returns true if every line
/// succeeded.
fn execute_all(input: &str, session: &mut Session) -> bool {
    let mut success = true;
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        match session.execute(line) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => (),
            Err(err) => {
                report(&err, line);
                success = false;
            },
        }
    }
    success
}

/// Runs the interactive session until end of input.
fn repl(session: &mut Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        match session.execute(&input) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => (),
            Err(err) => report(&err, &input),
        }
        Ok(())
    }

    loop {
        match process_line(&mut rl, session) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("could not initialize logging: {}", err);
    }
    debug!("{:?}", args);

    let mut session = Session::new(args.config());
    for (name, value) in &args.bindings {
        if let Err(err) = session.bind(name, *value) {
            report(&err, name);
            return ExitCode::FAILURE;
        }
    }

    let input = if let Some(path) = &args.file {
        // run source file
        fs::read_to_string(path)
            .map_err(|err| format!("could not read `{}`: {}", path.display(), err))
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map(|_| input)
            .map_err(|err| format!("could not read stdin: {}", err))
    } else {
        // run the repl / interactive mode
        return match repl(&mut session) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            },
        };
    };

    match input {
        Ok(input) => {
            if execute_all(&input, &mut session) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}

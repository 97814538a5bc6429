use crate::calc::{Calculator, SharedCalc};
use crate::config::Config;
use crate::help;
use crate::session::{self, Mode, Printer, PromptReader};
use anyhow::Context;
use nix::unistd::isatty;
use std::io::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Version,
    Help,
    Evaluate(Vec<String>),
}

impl Invocation {
    // `--version` and `--help` only count as the sole argument.
    pub fn parse<T: Into<String>, TS: IntoIterator<Item = T>>(args: TS) -> Self {
        let args = args.into_iter().map(|s| s.into()).collect::<Vec<String>>();
        if args.len() == 1 {
            match args[0].as_str() {
                "--version" => return Self::Version,
                "--help" => return Self::Help,
                _ => (),
            }
        }
        Self::Evaluate(args)
    }
}

fn stdin_is_terminal() -> bool {
    isatty(nix::libc::STDIN_FILENO).unwrap_or(false)
}

pub fn run(program: &str, invocation: Invocation, config: &Config) -> anyhow::Result<i32> {
    let calc = Calculator::new();
    let stdout = io::stdout();

    match invocation {
        Invocation::Version => {
            write!(stdout.lock(), "{}", help::version()).context("Failed to write to stdout.")?;
            Ok(0)
        }
        Invocation::Help => {
            write!(stdout.lock(), "{}", help::usage(program, calc.registry()))
                .context("Failed to write to stdout.")?;
            Ok(0)
        }
        Invocation::Evaluate(args) => {
            let mode = Mode::select(args, stdin_is_terminal());
            tracing::debug!(?mode, "selected input mode");

            let mut printer = Printer::new(io::stdout(), io::stderr(), config.precision);
            let calc = SharedCalc::new(calc);
            match mode {
                Mode::Arguments(args) => session::run_arguments(&calc, &args, &mut printer),
                Mode::Stream => {
                    let stdin = io::stdin();
                    let mut reader = session::IOReader::new_stdin(&stdin);
                    session::run_stream(&calc, &mut reader, &mut printer)
                }
                Mode::Interactive => {
                    let mut reader = PromptReader::new(&calc, config);
                    session::run_interactive(&calc, &mut reader, &mut printer, config)
                }
            }
        }
    }
}

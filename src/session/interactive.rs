use super::{History, Printer, Reader};
use crate::calc::SharedCalc;
use crate::config::Config;
use crate::help;
use std::io::{self, Write};

enum Exit {
    Quit,
    EndOfInput,
    Failed(anyhow::Error),
}

pub fn run_interactive<T, O, E>(
    calc: &SharedCalc,
    reader: &mut T,
    printer: &mut Printer<O, E>,
    config: &Config,
) -> anyhow::Result<i32>
where
    T: Reader + History,
    O: Write,
    E: Write,
{
    if let Some(path) = &config.history_file {
        match reader.load(path) {
            Ok(()) => (),
            Err(e) if is_missing(&e) => {
                tracing::debug!(path = %path.display(), "no history file yet");
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(path = %path.display(), %error, "failed to load history");
            }
        }
    }

    let exit = prompt_loop(calc, reader, printer);

    if let Some(path) = &config.history_file {
        if let Err(e) = reader.save(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    match exit {
        Exit::Quit => Ok(0),
        Exit::EndOfInput => {
            printer.text("^D")?;
            Ok(0)
        }
        Exit::Failed(e) => {
            printer.error(&format!("Readline Error: {}", e))?;
            Ok(1)
        }
    }
}

fn is_missing(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|cause| cause.kind() == io::ErrorKind::NotFound)
}

fn prompt_loop<T, O, E>(calc: &SharedCalc, reader: &mut T, printer: &mut Printer<O, E>) -> Exit
where
    T: Reader + History,
    O: Write,
    E: Write,
{
    if let Err(e) = printer.text(&help::version_line()) {
        return Exit::Failed(e);
    }
    if let Err(e) = printer.text(help::short_help()) {
        return Exit::Failed(e);
    }

    loop {
        let line = match reader.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => return Exit::EndOfInput,
            Err(e) => return Exit::Failed(e),
        };

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            reader.add_entry(&line);
        }

        let res = if trimmed.is_empty() {
            printer.text(help::short_help())
        } else if help::HELP_KEYWORDS.contains(&trimmed) {
            let text = calc.with_ref(|c| help::core_help(c.registry()));
            printer.text(&text)
        } else if help::QUIT_KEYWORDS.contains(&trimmed) {
            return Exit::Quit;
        } else {
            printer.report(calc, &line, None).map(|_| ())
        };

        if let Err(e) = res {
            return Exit::Failed(e);
        }
    }
}

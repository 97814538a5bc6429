mod batch;
mod interactive;
mod io;
mod printer;
mod prompt;

pub use batch::{run_arguments, run_stream};
pub use interactive::run_interactive;
pub use io::IOReader;
pub use printer::Printer;
pub use prompt::{CalcHelper, PromptReader};

use std::path::Path;

pub trait Reader {
    fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

pub trait History {
    fn add_entry(&mut self, line: &str);
    fn load(&mut self, path: &Path) -> anyhow::Result<()>;
    fn save(&mut self, path: &Path) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Arguments(Vec<String>),
    Stream,
    Interactive,
}

impl Mode {
    pub fn select(args: Vec<String>, stdin_is_tty: bool) -> Self {
        if !args.is_empty() {
            Self::Arguments(args)
        } else if stdin_is_tty {
            Self::Interactive
        } else {
            Self::Stream
        }
    }
}

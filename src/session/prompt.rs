use super::{History, Reader};
use crate::calc::SharedCalc;
use crate::complete;
use crate::config::Config;
use anyhow::Context as _;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config as EditorConfig, Context, Editor, Helper};
use std::fs;
use std::path::Path;

pub struct CalcHelper(SharedCalc);

impl CalcHelper {
    pub fn new(calc: &SharedCalc) -> Self {
        Self(calc.clone())
    }

    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = complete::word_start(line, pos);
        let prefix = &line[start..pos];
        let pairs = self.0.with_ref(|calc| {
            calc.complete(prefix)
                .map(|c| Pair {
                    display: c.name.to_string(),
                    replacement: format!("{}{}", c.name, c.delimiter()),
                })
                .collect::<Vec<_>>()
        });
        (start, pairs)
    }
}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CalcHelper {
    type Hint = String;
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

impl Helper for CalcHelper {}

pub struct PromptReader {
    editor: Editor<CalcHelper>,
    prompt: String,
}

impl Reader for PromptReader {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(s) => Ok(Some(s)),
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl History for PromptReader {
    fn add_entry(&mut self, line: &str) {
        self.editor.add_history_entry(line);
    }

    fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to load history from {}.", path.display()))?;
        for line in text.lines().filter(|l| !l.is_empty()) {
            self.editor.add_history_entry(line);
        }
        Ok(())
    }

    // Plain text, one entry per line; the editor keeps only the newest entries.
    fn save(&mut self, path: &Path) -> anyhow::Result<()> {
        let mut text = String::new();
        for entry in self.editor.history().iter() {
            text.push_str(entry);
            text.push('\n');
        }
        fs::write(path, text)
            .with_context(|| format!("Failed to save history to {}.", path.display()))
    }
}

impl PromptReader {
    pub fn new(calc: &SharedCalc, config: &Config) -> Self {
        let editor_config = EditorConfig::builder()
            .max_history_size(config.history_size)
            .history_ignore_dups(false)
            .completion_type(CompletionType::List)
            .build();
        let mut editor = Editor::with_config(editor_config);
        editor.set_helper(Some(CalcHelper::new(calc)));
        Self {
            editor,
            prompt: config.prompt.clone(),
        }
    }
}

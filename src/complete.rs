use crate::registry::Registry;
use crate::vars::VariableStore;

pub const WORD_BREAKS: &str = " ()+-*/%^?:,=!<>|&\t";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateKind {
    Function,
    Constant,
    Variable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub kind: CandidateKind,
}

impl<'a> Candidate<'a> {
    pub fn delimiter(&self) -> char {
        match self.kind {
            CandidateKind::Function => '(',
            CandidateKind::Constant | CandidateKind::Variable => ' ',
        }
    }
}

// Functions, then constants, then variables in creation order.
pub fn candidates<'a>(
    registry: &'a Registry,
    vars: &'a VariableStore,
    prefix: &'a str,
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    let functions = registry.functions().map(|f| Candidate {
        name: f.name,
        kind: CandidateKind::Function,
    });
    let constants = registry.constants().map(|c| Candidate {
        name: c.name,
        kind: CandidateKind::Constant,
    });
    let variables = vars.names().map(|name| Candidate {
        name,
        kind: CandidateKind::Variable,
    });

    functions
        .chain(constants)
        .chain(variables)
        .filter(move |c| c.name.starts_with(prefix))
}

pub fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| WORD_BREAKS.contains(*c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

mod shared;

pub use shared::SharedCalc;

use crate::complete::{self, Candidate};
use crate::diagnostic::Diagnostic;
use crate::engine;
use crate::registry::{Prng, Registry};
use crate::vars::VariableStore;

#[derive(Debug)]
pub struct Calculator {
    registry: Registry,
    vars: VariableStore,
    rng: Prng,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_rng(Prng::from_time())
    }

    pub fn with_rng(rng: Prng) -> Self {
        Self {
            registry: Registry::standard(),
            vars: VariableStore::new(),
            rng,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn vars(&self) -> &VariableStore {
        &self.vars
    }

    // On success the first result becomes `_`.
    pub fn evaluate(&mut self, line: &str) -> Result<Vec<f64>, Diagnostic> {
        let program = engine::compile(line, &self.registry, &mut self.vars).map_err(|e| {
            tracing::trace!(line, error = %e, "compile failed");
            Diagnostic::from(e)
        })?;

        let results = program.eval(&mut self.vars, &mut self.rng);
        tracing::trace!(line, ?results, "evaluated");
        if let Some(first) = results.first() {
            self.vars.set_last_result(*first);
        }
        Ok(results)
    }

    pub fn complete<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = Candidate<'a>> + 'a {
        complete::candidates(&self.registry, &self.vars, prefix)
    }
}

use std::collections::HashMap;

pub const LAST_RESULT: &str = "_";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VarId(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct VariableStore {
    names: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, VarId>,
}

impl Default for VariableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableStore {
    pub fn new() -> Self {
        let mut store = Self {
            names: Vec::new(),
            values: Vec::new(),
            index: HashMap::new(),
        };
        store.insert(LAST_RESULT);
        store
    }

    fn insert(&mut self, name: &str) -> VarId {
        let id = VarId(self.names.len());
        self.names.push(name.to_string());
        self.values.push(0.0);
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn get_or_create(&mut self, name: &str) -> VarId {
        match self.index.get(name) {
            Some(id) => *id,
            None => {
                tracing::debug!(name, "creating variable");
                self.insert(name)
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<VarId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: VarId) -> f64 {
        self.values[id.0]
    }

    pub fn set(&mut self, id: VarId, value: f64) {
        self.values[id.0] = value;
    }

    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.lookup(name).map(|id| self.get(id))
    }

    pub fn last_result(&self) -> f64 {
        self.values[0]
    }

    pub fn set_last_result(&mut self, value: f64) {
        self.values[0] = value;
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names[1..].iter().map(|s| s.as_str())
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        name == LAST_RESULT
    }
}

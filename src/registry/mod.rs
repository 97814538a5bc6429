mod builtins;
mod random;

pub use random::Prng;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Fixed(n) => count == n,
            Arity::Variadic => count >= 1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic => write!(f, "variadic"),
        }
    }
}

// `Stateful` bodies must be paired with a `volatile` descriptor.
#[derive(Clone, Copy)]
pub enum Body {
    Pure(fn(&[f64]) -> f64),
    Stateful(fn(&mut Prng, &[f64]) -> f64),
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Body::Pure(_) => write!(f, "Pure"),
            Body::Stateful(_) => write!(f, "Stateful"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub volatile: bool,
    pub body: Body,
}

impl FunctionDescriptor {
    pub fn call(&self, rng: &mut Prng, args: &[f64]) -> f64 {
        match self.body {
            Body::Pure(f) => f(args),
            Body::Stateful(f) => f(rng, args),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Infix,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy)]
pub enum Mapping {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mapping::Unary(_) => write!(f, "Unary"),
            Mapping::Binary(_) => write!(f, "Binary"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OperatorDescriptor {
    pub symbol: &'static str,
    pub fixity: Fixity,
    pub precedence: u8,
    pub assoc: Assoc,
    pub mapping: Mapping,
}

#[derive(Debug)]
pub struct Registry {
    constants: Vec<Constant>,
    functions: Vec<FunctionDescriptor>,
    operators: Vec<OperatorDescriptor>,
}

impl Registry {
    pub fn standard() -> Self {
        Self {
            constants: builtins::constants(),
            functions: builtins::functions(),
            operators: builtins::operators(),
        }
    }

    pub fn lookup_constant(&self, name: &str) -> Option<f64> {
        self.constants
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value)
    }

    pub fn lookup_function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn lookup_operator(&self, symbol: &str, fixity: Fixity) -> Option<&OperatorDescriptor> {
        self.operators
            .iter()
            .find(|op| op.symbol == symbol && op.fixity == fixity)
    }

    pub fn constants(&self) -> impl Iterator<Item = &Constant> {
        self.constants.iter()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.functions.iter()
    }

    pub fn operators(&self) -> impl Iterator<Item = &OperatorDescriptor> {
        self.operators.iter()
    }
}

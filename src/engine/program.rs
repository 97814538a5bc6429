use crate::registry::{Body, FunctionDescriptor, Prng};
use crate::vars::{VarId, VariableStore};

#[derive(Clone, Debug)]
pub enum Expr {
    Value(f64),
    Var(VarId),
    Unary(fn(f64) -> f64, Box<Expr>),
    Binary(fn(f64, f64) -> f64, Box<Expr>, Box<Expr>),
    Ternary(Box<Expr>, Box<Expr>, Box<Expr>),
    Call(FunctionDescriptor, Vec<Expr>),
    Assign(VarId, Box<Expr>),
}

impl Expr {
    pub fn value(&self) -> Option<f64> {
        match self {
            Expr::Value(x) => Some(*x),
            _ => None,
        }
    }

    // Variable reads, assignments and volatile calls are never folded.
    pub fn fold(self) -> Self {
        match self {
            Expr::Unary(f, arg) => match (*arg).fold() {
                Expr::Value(x) => Expr::Value(f(x)),
                arg => Expr::Unary(f, Box::new(arg)),
            },
            Expr::Binary(f, lhs, rhs) => match ((*lhs).fold(), (*rhs).fold()) {
                (Expr::Value(a), Expr::Value(b)) => Expr::Value(f(a, b)),
                (lhs, rhs) => Expr::Binary(f, Box::new(lhs), Box::new(rhs)),
            },
            Expr::Ternary(cond, then, else_) => {
                let (then, else_) = ((*then).fold(), (*else_).fold());
                match (*cond).fold() {
                    Expr::Value(c) if c != 0.0 => then,
                    Expr::Value(_) => else_,
                    cond => Expr::Ternary(Box::new(cond), Box::new(then), Box::new(else_)),
                }
            }
            Expr::Call(func, args) => {
                let args = args.into_iter().map(Expr::fold).collect::<Vec<_>>();
                let values = args.iter().filter_map(Expr::value).collect::<Vec<_>>();
                match func.body {
                    Body::Pure(f) if !func.volatile && values.len() == args.len() => {
                        Expr::Value(f(&values))
                    }
                    _ => Expr::Call(func, args),
                }
            }
            Expr::Assign(id, value) => Expr::Assign(id, Box::new((*value).fold())),
            expr => expr,
        }
    }

    pub fn eval(&self, vars: &mut VariableStore, rng: &mut Prng) -> f64 {
        match self {
            Expr::Value(x) => *x,
            Expr::Var(id) => vars.get(*id),
            Expr::Unary(f, arg) => f(arg.eval(vars, rng)),
            Expr::Binary(f, lhs, rhs) => {
                let a = lhs.eval(vars, rng);
                let b = rhs.eval(vars, rng);
                f(a, b)
            }
            Expr::Ternary(cond, then, else_) => {
                if cond.eval(vars, rng) != 0.0 {
                    then.eval(vars, rng)
                } else {
                    else_.eval(vars, rng)
                }
            }
            Expr::Call(func, args) => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(arg.eval(vars, rng));
                }
                func.call(rng, &values)
            }
            Expr::Assign(id, value) => {
                let v = value.eval(vars, rng);
                vars.set(*id, v);
                v
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Program {
    exprs: Vec<Expr>,
}

impl Program {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Self {
            exprs: exprs.into_iter().map(Expr::fold).collect(),
        }
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    pub fn eval(&self, vars: &mut VariableStore, rng: &mut Prng) -> Vec<f64> {
        let mut results = Vec::with_capacity(self.exprs.len());
        for expr in self.exprs.iter() {
            results.push(expr.eval(vars, rng));
        }
        results
    }
}

mod error;
mod lexer;
mod parser;
mod program;

pub use error::{EngineError, ErrorCode};
pub use program::{Expr, Program};

use crate::registry::Registry;
use crate::vars::{VarId, VariableStore};

pub trait Resolver {
    fn resolve(&mut self, name: &str) -> VarId;

    #[allow(unused_variables)]
    fn is_reserved(&self, name: &str) -> bool {
        false
    }
}

impl Resolver for VariableStore {
    fn resolve(&mut self, name: &str) -> VarId {
        self.get_or_create(name)
    }

    fn is_reserved(&self, name: &str) -> bool {
        VariableStore::is_reserved(self, name)
    }
}

pub fn compile(
    text: &str,
    registry: &Registry,
    resolver: &mut dyn Resolver,
) -> Result<Program, EngineError> {
    let lexemes = lexer::tokenize(text);
    let exprs = parser::Compiler::new(registry, resolver, lexemes).compile_line()?;
    Ok(Program::new(exprs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Prng;
    use pretty_assertions::assert_eq;

    struct Fixture {
        registry: Registry,
        vars: VariableStore,
        rng: Prng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                registry: Registry::standard(),
                vars: VariableStore::new(),
                rng: Prng::from_seed(1),
            }
        }

        fn run(&mut self, text: &str) -> Result<Vec<f64>, EngineError> {
            let program = compile(text, &self.registry, &mut self.vars)?;
            Ok(program.eval(&mut self.vars, &mut self.rng))
        }

        fn one(&mut self, text: &str) -> f64 {
            let results = self.run(text).unwrap();
            assert_eq!(results.len(), 1, "{}", text);
            results[0]
        }

        fn fail(&mut self, text: &str) -> (ErrorCode, String, usize) {
            let e = self.run(text).unwrap_err();
            (e.code, e.token, e.pos)
        }
    }

    #[test]
    fn precedence() {
        let mut f = Fixture::new();
        assert_eq!(f.one("1 + 2 * 3"), 7.0);
        assert_eq!(f.one("(1 + 2) * 3"), 9.0);
        assert_eq!(f.one("2 ^ 3 ^ 2"), 512.0);
        assert_eq!(f.one("-2 ^ 2"), -4.0);
        assert_eq!(f.one("2 * -3 + 1"), -5.0);
        assert_eq!(f.one("+3"), 3.0);
        assert_eq!(f.one("10 - 4 - 3"), 3.0);
        assert_eq!(f.one("1 + 1 == 2 && 3 > 2"), 1.0);
        assert_eq!(f.one("0 || 0"), 0.0);
    }

    #[test]
    fn floor_modulo_operator() {
        let mut f = Fixture::new();
        assert_eq!(f.one("7 % 3"), 1.0);
        assert_eq!(f.one("-7 % 3"), 2.0);
        assert_eq!(f.one("1 + 7 % 3 * 2"), 3.0);
    }

    #[test]
    fn functions_and_constants() {
        let mut f = Fixture::new();
        assert_eq!(f.one("sin(pi / 2)"), 1.0);
        assert_eq!(f.one("max(1, 5, 3)"), 5.0);
        assert_eq!(f.one("clamp(7, 0, 1)"), 1.0);
        assert_eq!(f.one("e"), std::f64::consts::E);
    }

    #[test]
    fn ternary_is_lazy() {
        let mut f = Fixture::new();
        assert_eq!(f.one("1 ? 2 : 3"), 2.0);
        assert_eq!(f.one("0 ? 2 : 0 ? 3 : 4"), 4.0);
        f.run("c = 0").unwrap();
        assert_eq!(f.one("c ? (t = 1) : (u = 2)"), 2.0);
        assert_eq!(f.vars.value_of("t"), Some(0.0));
        assert_eq!(f.vars.value_of("u"), Some(2.0));
    }

    #[test]
    fn multiple_items_and_assignment() {
        let mut f = Fixture::new();
        assert_eq!(f.run("a = 5, a + 1, b = a * 2").unwrap(), vec![5.0, 6.0, 10.0]);
        assert_eq!(f.vars.value_of("b"), Some(10.0));
        assert_eq!(f.run("x = y = 3").unwrap(), vec![3.0]);
        assert_eq!(f.vars.value_of("x"), Some(3.0));
        assert_eq!(f.vars.value_of("y"), Some(3.0));
    }

    #[test]
    fn nullary_calls() {
        let mut f = Fixture::new();
        let x = f.one("random()");
        assert!((0.0..1.0).contains(&x));
        assert_eq!(f.fail("random(1)"), (ErrorCode::TooManyParams, "random".into(), 0));
    }

    #[test]
    fn seeded_sequences_repeat() {
        let mut f = Fixture::new();
        let first = f.run("seed(3), random(), gaussian()").unwrap();
        let second = f.run("seed(3), random(), gaussian()").unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0], 3.0);
    }

    #[test]
    fn eof_errors() {
        let mut f = Fixture::new();
        assert_eq!(f.fail(""), (ErrorCode::UnexpectedEof, "".into(), 0));
        assert_eq!(f.fail("1 +"), (ErrorCode::UnexpectedEof, "".into(), 3));
        assert_eq!(f.fail("1,"), (ErrorCode::UnexpectedEof, "".into(), 2));
        assert_eq!(f.fail("(1 + 2"), (ErrorCode::MissingParens, "".into(), 6));
        assert_eq!(f.fail("max(1, 2"), (ErrorCode::MissingParens, "".into(), 8));
        assert_eq!(f.fail("1 ? 2"), (ErrorCode::MissingElseClause, "".into(), 5));
    }

    #[test]
    fn token_errors() {
        let mut f = Fixture::new();
        assert_eq!(f.fail("1/0*nope("), (ErrorCode::UnexpectedParens, "(".into(), 8));
        assert_eq!(f.fail("1 2"), (ErrorCode::UnexpectedValue, "2".into(), 2));
        assert_eq!(f.fail("2 * * 3"), (ErrorCode::UnexpectedOperator, "*".into(), 4));
        assert_eq!(f.fail("1 + $"), (ErrorCode::UnassignableToken, "$".into(), 4));
        assert_eq!(f.fail("sin"), (ErrorCode::UnexpectedFunction, "sin".into(), 0));
        assert_eq!(f.fail("1,,2"), (ErrorCode::UnexpectedArgSep, ",".into(), 2));
        assert_eq!(f.fail("1 : 2"), (ErrorCode::MisplacedColon, ":".into(), 2));
        assert_eq!(f.fail("()"), (ErrorCode::UnexpectedParens, ")".into(), 1));
        assert_eq!(f.fail("1 x"), (ErrorCode::UnexpectedVariable, "x".into(), 2));
    }

    #[test]
    fn arity_errors() {
        let mut f = Fixture::new();
        assert_eq!(f.fail("1 + atan2(1)"), (ErrorCode::TooFewParams, "atan2".into(), 4));
        assert_eq!(f.fail("sin(1, 2)"), (ErrorCode::TooManyParams, "sin".into(), 0));
        assert_eq!(f.fail("sum()"), (ErrorCode::TooFewParams, "sum".into(), 0));
    }

    #[test]
    fn protected_names() {
        let mut f = Fixture::new();
        assert_eq!(f.fail("pi = 3"), (ErrorCode::NotAssignable, "pi".into(), 0));
        assert_eq!(f.fail("1, sin = 3"), (ErrorCode::NotAssignable, "sin".into(), 3));
        assert_eq!(f.fail("_ = 3"), (ErrorCode::ReservedName, "_".into(), 0));
        assert_eq!(f.fail("3 = 4"), (ErrorCode::UnexpectedOperator, "=".into(), 2));
        assert_eq!(f.one("pi"), std::f64::consts::PI);
    }

    #[test]
    fn names_before_an_error_are_created() {
        let mut f = Fixture::new();
        assert!(f.run("q +").is_err());
        assert_eq!(f.vars.value_of("q"), Some(0.0));

        // nothing after the failure point is touched
        assert!(f.run("r + ) + s").is_err());
        assert!(f.vars.lookup("r").is_some());
        assert!(f.vars.lookup("s").is_none());
    }

    #[test]
    fn folding_keeps_volatile_calls() {
        let registry = Registry::standard();
        let mut vars = VariableStore::new();

        let program = compile("2 * sin(0) + 1", &registry, &mut vars).unwrap();
        assert_eq!(program.exprs()[0].value(), Some(1.0));

        let program = compile("random() * 2", &registry, &mut vars).unwrap();
        assert!(program.exprs()[0].value().is_none());

        let program = compile("k + 1", &registry, &mut vars).unwrap();
        assert!(program.exprs()[0].value().is_none());
    }

    #[test]
    fn ieee_results() {
        let mut f = Fixture::new();
        assert_eq!(f.one("1/0"), f64::INFINITY);
        assert!(f.one("sqrt(-1)").is_nan());
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let mut f = Fixture::new();
        let n = 100_000;

        let parens = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        let e = f.run(&parens).unwrap_err();
        assert_eq!(e.code, ErrorCode::TooDeep);
        assert!(e.pos < n);
        let d = crate::diagnostic::Diagnostic::from(e);
        assert_eq!(d.message(), "Expression is nested too deeply");

        let signs = format!("{}1", "-".repeat(n));
        assert_eq!(f.run(&signs).unwrap_err().code, ErrorCode::TooDeep);

        let powers = format!("2{}", "^1".repeat(n));
        assert_eq!(f.run(&powers).unwrap_err().code, ErrorCode::TooDeep);

        let sum = format!("1{}", "+1".repeat(n));
        assert_eq!(f.run(&sum).unwrap_err().code, ErrorCode::TooDeep);
    }

    #[test]
    fn moderate_nesting_still_works() {
        let mut f = Fixture::new();
        let n = 100;
        assert_eq!(f.one(&format!("{}7{}", "(".repeat(n), ")".repeat(n))), 7.0);
        assert_eq!(f.one(&format!("{}3", "-".repeat(n))), 3.0);
        assert_eq!(f.one(&format!("0{}", "+1".repeat(n))), 100.0);
    }
}

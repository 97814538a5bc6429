use super::{Arity, Assoc, Body, Constant, Fixity, FunctionDescriptor, Mapping, OperatorDescriptor};
use std::f64::consts;

pub fn constants() -> Vec<Constant> {
    vec![
        Constant {
            name: "pi",
            value: consts::PI,
        },
        Constant {
            name: "e",
            value: consts::E,
        },
    ]
}

fn pure(name: &'static str, arity: Arity, f: fn(&[f64]) -> f64) -> FunctionDescriptor {
    FunctionDescriptor {
        name,
        arity,
        volatile: false,
        body: Body::Pure(f),
    }
}

fn unary(name: &'static str, f: fn(&[f64]) -> f64) -> FunctionDescriptor {
    pure(name, Arity::Fixed(1), f)
}

pub fn functions() -> Vec<FunctionDescriptor> {
    vec![
        unary("deg", |x| x[0] * 180.0 / consts::PI),
        unary("rad", |x| x[0] * consts::PI / 180.0),
        unary("sin", |x| x[0].sin()),
        unary("asin", |x| x[0].asin()),
        unary("cos", |x| x[0].cos()),
        unary("acos", |x| x[0].acos()),
        unary("tan", |x| x[0].tan()),
        unary("atan", |x| x[0].atan()),
        pure("atan2", Arity::Fixed(2), |x| x[0].atan2(x[1])),
        unary("sinh", |x| x[0].sinh()),
        unary("asinh", |x| x[0].asinh()),
        unary("cosh", |x| x[0].cosh()),
        unary("acosh", |x| x[0].acosh()),
        unary("tanh", |x| x[0].tanh()),
        unary("atanh", |x| x[0].atanh()),
        pure("pow", Arity::Fixed(2), |x| x[0].powf(x[1])),
        unary("exp", |x| x[0].exp()),
        unary("exp2", |x| x[0].exp2()),
        unary("exp10", |x| 10f64.powf(x[0])),
        unary("log", |x| x[0].ln()),
        unary("ln", |x| x[0].ln()),
        unary("log2", |x| x[0].log2()),
        unary("log10", |x| x[0].log10()),
        unary("sqrt", |x| x[0].sqrt()),
        unary("cbrt", |x| x[0].cbrt()),
        unary("abs", |x| x[0].abs()),
        unary("sign", |x| sign(x[0])),
        unary("fract", |x| x[0] - x[0].floor()),
        unary("int", |x| x[0].trunc()),
        unary("ceil", |x| x[0].ceil()),
        unary("floor", |x| x[0].floor()),
        unary("round", |x| x[0].round()),
        unary("rint", |x| x[0].round_ties_even()),
        unary("trunc", |x| x[0].trunc()),
        pure("mod", Arity::Fixed(2), |x| floor_mod(x[0], x[1])),
        pure("min", Arity::Variadic, |x| x.iter().copied().fold(f64::INFINITY, f64::min)),
        pure("max", Arity::Variadic, |x| {
            x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        }),
        pure("sum", Arity::Variadic, |x| x.iter().sum()),
        pure("avg", Arity::Variadic, |x| x.iter().sum::<f64>() / x.len() as f64),
        pure("med", Arity::Variadic, median),
        pure("clamp", Arity::Fixed(3), |x| clamp(x[0], x[1], x[2])),
        pure("step", Arity::Fixed(2), |x| if x[0] < x[1] { 0.0 } else { 1.0 }),
        pure("smoothstep", Arity::Fixed(3), |x| {
            let t = clamp((x[0] - x[1]) / (x[2] - x[1]), 0.0, 1.0);
            t * t * (3.0 - t * 2.0)
        }),
        pure("mix", Arity::Fixed(3), |x| x[0] * (1.0 - x[2]) + x[1] * x[2]),
        FunctionDescriptor {
            name: "random",
            arity: Arity::Fixed(0),
            volatile: true,
            body: Body::Stateful(|rng, _| rng.uniform()),
        },
        FunctionDescriptor {
            name: "gaussian",
            arity: Arity::Fixed(0),
            volatile: true,
            body: Body::Stateful(|rng, _| rng.normal()),
        },
        FunctionDescriptor {
            name: "seed",
            arity: Arity::Fixed(1),
            volatile: true,
            body: Body::Stateful(|rng, x| {
                rng.reseed(x[0] as u64);
                x[0]
            }),
        },
    ]
}

fn infix(
    symbol: &'static str,
    precedence: u8,
    assoc: Assoc,
    f: fn(f64, f64) -> f64,
) -> OperatorDescriptor {
    OperatorDescriptor {
        symbol,
        fixity: Fixity::Infix,
        precedence,
        assoc,
        mapping: Mapping::Binary(f),
    }
}

fn prefix(symbol: &'static str, f: fn(f64) -> f64) -> OperatorDescriptor {
    OperatorDescriptor {
        symbol,
        fixity: Fixity::Prefix,
        precedence: 6,
        assoc: Assoc::Right,
        mapping: Mapping::Unary(f),
    }
}

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

pub fn operators() -> Vec<OperatorDescriptor> {
    use Assoc::{Left, Right};

    vec![
        infix("||", 1, Left, |a, b| truth(a != 0.0 || b != 0.0)),
        infix("&&", 2, Left, |a, b| truth(a != 0.0 && b != 0.0)),
        infix("==", 4, Left, |a, b| truth(a == b)),
        infix("!=", 4, Left, |a, b| truth(a != b)),
        infix("<", 4, Left, |a, b| truth(a < b)),
        infix(">", 4, Left, |a, b| truth(a > b)),
        infix("<=", 4, Left, |a, b| truth(a <= b)),
        infix(">=", 4, Left, |a, b| truth(a >= b)),
        infix("+", 5, Left, |a, b| a + b),
        infix("-", 5, Left, |a, b| a - b),
        infix("*", 6, Left, |a, b| a * b),
        infix("/", 6, Left, |a, b| a / b),
        infix("%", 6, Left, floor_mod),
        infix("^", 7, Right, f64::powf),
        prefix("-", |x| -x),
        // lets an explicit sign like `+3` parse
        prefix("+", |x| x),
    ]
}

fn floor_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

fn clamp(x: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(x))
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

fn median(x: &[f64]) -> f64 {
    let mut values = x.to_vec();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

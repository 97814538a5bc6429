use combine::parser::char::{digit, string};
use combine::parser::combinator::recognize;
use combine::stream::position::{IndexPositioner, Stream as PositionStream};
use combine::{any, attempt, choice, many, one_of, optional, position, satisfy};
use combine::{skip_many, skip_many1, token};
use combine::{Parser, Stream};

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Symbol(&'static str),
    Unknown(char),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    pub pos: usize,
}

impl Lexeme {
    pub fn end(&self) -> usize {
        self.pos + self.text.chars().count()
    }

    pub fn is(&self, symbol: &str) -> bool {
        matches!(self.token, Token::Symbol(s) if s == symbol)
    }
}

// Longer symbols first so `<=` is not read as `<` `=`.
const SYMBOLS: [&str; 20] = [
    "&&", "||", "<=", ">=", "==", "!=", "+", "-", "*", "/", "%", "^", "<", ">", "=", "?", ":",
    ",", "(", ")",
];

fn blanks<I: Stream<Token = char>>() -> impl Parser<I, Output = ()> {
    skip_many(satisfy(|c: char| c.is_whitespace()))
}

fn number<I: Stream<Token = char>>() -> impl Parser<I, Output = String> {
    recognize((
        choice((
            skip_many1(digit()).skip(optional((token('.'), skip_many(digit())))),
            token('.').with(skip_many1(digit())),
        )),
        optional(attempt((
            one_of("eE".chars()),
            optional(one_of("+-".chars())),
            skip_many1(digit()),
        ))),
    ))
}

fn identifier<I: Stream<Token = char>>() -> impl Parser<I, Output = String> {
    recognize((
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        skip_many(satisfy(|c: char| c.is_ascii_alphanumeric() || c == '_')),
    ))
}

fn symbol<I: Stream<Token = char>>() -> impl Parser<I, Output = &'static str> {
    choice(SYMBOLS.map(|s| attempt(string(s))))
}

fn lexeme<I>() -> impl Parser<I, Output = Lexeme>
where
    I: Stream<Token = char, Position = usize>,
{
    (
        position(),
        choice((
            attempt(number()).map(|text: String| {
                let value = text.parse().unwrap_or(f64::NAN);
                (Token::Number(value), text)
            }),
            identifier().map(|text: String| (Token::Ident(text.clone()), text)),
            symbol().map(|s: &'static str| (Token::Symbol(s), s.to_string())),
            any().map(|c: char| (Token::Unknown(c), c.to_string())),
        )),
    )
        .skip(blanks())
        .map(|(pos, (token, text))| Lexeme { token, text, pos })
}

// Never fails: characters that start no token become `Token::Unknown`.
pub fn tokenize(input: &str) -> Vec<Lexeme> {
    let stream = PositionStream::with_positioner(input, IndexPositioner::new());
    match blanks().with(many::<Vec<_>, _, _>(lexeme())).parse(stream) {
        Ok((lexemes, _)) => lexemes,
        Err(e) => {
            tracing::warn!(error = %e, input, "tokenizer stopped early");
            Vec::new()
        }
    }
}

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnexpectedEof,
    UnassignableToken,
    UnexpectedOperator,
    UnexpectedValue,
    UnexpectedVariable,
    UnexpectedFunction,
    UnexpectedParens,
    UnexpectedArgSep,
    UnexpectedConditional,
    MisplacedColon,
    MissingParens,
    MissingElseClause,
    TooFewParams,
    TooManyParams,
    NotAssignable,
    ReservedName,
    TooDeep,
}

impl ErrorCode {
    pub fn message(self, token: &str) -> String {
        match self {
            Self::UnexpectedEof => String::from("Unexpected end of expression"),
            Self::UnassignableToken => format!("Unexpected token \"{}\"", token),
            Self::UnexpectedOperator => format!("Unexpected operator \"{}\"", token),
            Self::UnexpectedValue => format!("Unexpected value \"{}\"", token),
            Self::UnexpectedVariable => format!("Unexpected variable \"{}\"", token),
            Self::UnexpectedFunction => format!("Unexpected function \"{}\"", token),
            Self::UnexpectedParens => format!("Unexpected parenthesis \"{}\"", token),
            Self::UnexpectedArgSep => String::from("Unexpected argument separator"),
            Self::UnexpectedConditional => format!("Unexpected conditional \"{}\"", token),
            Self::MisplacedColon => String::from("Misplaced colon"),
            Self::MissingParens => String::from("Missing parenthesis"),
            Self::MissingElseClause => String::from("If-then-else operator is missing an else clause"),
            Self::TooFewParams => format!("Too few parameters for function \"{}\"", token),
            Self::TooManyParams => format!("Too many parameters for function \"{}\"", token),
            Self::NotAssignable => format!("\"{}\" cannot be assigned to", token),
            Self::ReservedName => format!("\"{}\" is reserved and cannot be assigned to", token),
            Self::TooDeep => String::from("Expression is nested too deeply"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{} at position {pos}", .code.message(&.token))]
pub struct EngineError {
    pub code: ErrorCode,
    pub token: String,
    pub pos: usize,
}

impl EngineError {
    pub fn new<T: Into<String>>(code: ErrorCode, token: T, pos: usize) -> Self {
        Self {
            code,
            token: token.into(),
            pos,
        }
    }
}

use crate::engine::{EngineError, ErrorCode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub pos: usize,
    pub token: String,
}

impl Diagnostic {
    pub fn new<T: Into<String>>(code: ErrorCode, token: T, pos: usize) -> Self {
        let mut token = token.into();
        if token.ends_with(' ') {
            token.pop();
        }
        Self { code, pos, token }
    }

    // End-of-input offsets already point one past the last character.
    pub fn column(&self) -> usize {
        let column = match self.code {
            ErrorCode::UnexpectedEof => self.pos,
            _ => self.pos + 1,
        };
        column.max(1)
    }

    pub fn message(&self) -> String {
        self.code.message(&self.token)
    }

    pub fn format(&self, expr: &str, prefix: Option<&str>) -> String {
        let message = match prefix {
            Some(prefix) => format!("{}: {}", prefix, self.message()),
            None => self.message(),
        };
        format!(
            "{}\n{}\n{}^",
            message,
            expr,
            " ".repeat(self.column() - 1)
        )
    }
}

impl From<EngineError> for Diagnostic {
    fn from(e: EngineError) -> Self {
        Self::new(e.code, e.token, e.pos)
    }
}

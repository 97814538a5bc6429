//! A numeric expression evaluator with implicit variables, caret-annotated
//! diagnostics and three input modes: arguments, a piped stream and an
//! interactive prompt.

pub mod calc;
pub mod cli;
pub mod complete;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod format;
pub mod help;
pub mod logging;
pub mod registry;
pub mod session;
pub mod vars;

pub use calc::{Calculator, SharedCalc};
pub use diagnostic::Diagnostic;

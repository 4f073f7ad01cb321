use crate::outcome::Failure;
use thiserror::Error;

/// A failure surfaced to the caller by [`run`](crate::run::run)
///
/// Owns its text so it can outlive the input and travel through `?` into
/// any error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error. expect '{expected}'. Found '{actual} instead.'")]
pub struct ParseError {
    pub expected: String,
    pub actual: String,
}

impl<'code> From<Failure<'code>> for ParseError {
    fn from(failure: Failure<'code>) -> Self {
        ParseError {
            expected: failure.expected().to_string(),
            actual: failure.actual().to_string(),
        }
    }
}

/// A pattern that does not compile as a regular expression
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    pub source: regex_automata::meta::BuildError,
}

/// Any error this crate returns
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

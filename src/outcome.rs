use std::borrow::Cow;

/// Outcome of running a parser once against some input
pub type ParseResult<'code, T> = Result<Success<'code, T>, Failure<'code>>;

/// A successful parse step: the produced value and the input left after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success<'code, T> {
    pub value: T,
    /// Unconsumed suffix of the input the parser was given
    pub rest: &'code str,
}

impl<'code, T> Success<'code, T> {
    pub fn new(value: T, rest: &'code str) -> Self {
        Success { value, rest }
    }

    /// Transform the value, keeping `rest` as is
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<'code, U> {
        Success {
            value: f(self.value),
            rest: self.rest,
        }
    }
}

/// A failed parse step
///
/// `expected` describes what would have matched and `actual` is the input at
/// the point of failure (or, for synthetic failures, a description of it).
/// Failures are plain values: combinators inspect them and may recover by
/// trying something else, only [`run`](crate::run::run) turns them into an
/// error for the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected '{expected}', found '{actual}'")]
pub struct Failure<'code> {
    expected: Cow<'static, str>,
    actual: Cow<'code, str>,
    /// Failures of the alternatives a `one_of` tried, in the order tried
    alternatives: Vec<Failure<'code>>,
}

impl<'code> Failure<'code> {
    pub fn new(expected: impl Into<Cow<'static, str>>, actual: impl Into<Cow<'code, str>>) -> Self {
        Failure {
            expected: expected.into(),
            actual: actual.into(),
            alternatives: Vec::new(),
        }
    }

    /// Attach the failures of the alternatives that were tried before giving up
    pub fn with_alternatives(mut self, alternatives: Vec<Failure<'code>>) -> Self {
        self.alternatives = alternatives;
        self
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn alternatives(&self) -> &[Failure<'code>] {
        &self.alternatives
    }

    /// The failure that made it furthest into the input
    ///
    /// Walks nested alternatives down to the leaves and picks the one with the
    /// shortest remaining input. Earlier alternatives win ties. A failure
    /// without alternatives is its own likely failure.
    pub fn likely(&self) -> &Failure<'code> {
        self.alternatives
            .iter()
            .map(Failure::likely)
            .min_by_key(|failure| failure.actual.len())
            .unwrap_or(self)
    }
}

/// Build a successful result
pub fn success<'code, T>(value: T, rest: &'code str) -> ParseResult<'code, T> {
    Ok(Success::new(value, rest))
}

/// Build a failed result
pub fn failure<'code, T>(
    expected: impl Into<Cow<'static, str>>,
    actual: impl Into<Cow<'code, str>>,
) -> ParseResult<'code, T> {
    Err(Failure::new(expected, actual))
}

use crate::outcome::{Failure, ParseResult, Success};
use crate::parser::Parser;
use std::borrow::Cow;
use std::fmt;

/// The state a [`go`] script runs against: the input not consumed so far
///
/// A script is fresh for every parse, so nothing carries over between runs
/// of the same `go` parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script<'code> {
    rest: &'code str,
}

impl<'code> Script<'code> {
    fn new(input: &'code str) -> Self {
        Script { rest: input }
    }

    /// Run `parser` on the remaining input and hand back its value
    ///
    /// On success the script moves past what the parser consumed. On failure
    /// the script does not move and the parser's failure is returned as is,
    /// ready to be propagated with `?`.
    pub fn bind<P>(&mut self, parser: P) -> Result<P::Output, Failure<'code>>
    where
        P: Parser<'code>,
    {
        let Success { value, rest } = parser.parse(self.rest)?;
        self.rest = rest;
        Ok(value)
    }

    /// The input not consumed so far
    pub fn rest(&self) -> &'code str {
        self.rest
    }

    /// Fail at the current position, for checks no single parser expresses
    pub fn fail<T>(&self, expected: impl Into<Cow<'static, str>>) -> Result<T, Failure<'code>> {
        Err(Failure::new(expected, self.rest))
    }
}

/// Parser combinator that runs a script of dependent parse steps
///
/// The script is a closure that binds sub-parsers one after another through
/// [`Script::bind`], names their values, and finally returns a value built
/// from them. The first failing step ends the script and becomes the result
/// of the whole parser, unchanged.
pub struct Go<F> {
    script: F,
}

impl<F> Go<F> {
    pub fn new(script: F) -> Self {
        Go { script }
    }
}

impl<F> fmt::Debug for Go<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Go").field("script", &"<function>").finish()
    }
}

impl<'code, F, T> Parser<'code> for Go<F>
where
    F: Fn(&mut Script<'code>) -> Result<T, Failure<'code>>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut script = Script::new(input);
        let value = (self.script)(&mut script)?;
        Ok(Success::new(value, script.rest))
    }
}

/// Convenience function to create a Go parser
///
/// ```
/// use parsego::{Parser, go, literal, pattern};
///
/// let element = go(|s| {
///     s.bind(literal("<"))?;
///     let tag = s.bind(pattern("[^>]*").expect("valid pattern"))?;
///     s.bind(literal(">"))?;
///     let content = s.bind(pattern("[^<]*").expect("valid pattern"))?;
///     s.bind(literal(format!("</{}>", tag)))?;
///     Ok(format!("{}: {}", tag, content))
/// });
///
/// assert_eq!(element.parse("<h1>title</h1>").unwrap().value, "h1: title");
/// assert!(element.parse("<h1>title</h2>").is_err());
/// ```
pub fn go<'code, F, T>(script: F) -> Go<F>
where
    F: Fn(&mut Script<'code>) -> Result<T, Failure<'code>>,
{
    Go::new(script)
}

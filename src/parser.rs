use crate::outcome::ParseResult;
use std::fmt;
use std::rc::Rc;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// Returns the parsed value and the unconsumed suffix on success, or a
    /// [`Failure`](crate::Failure) describing what was expected. Failures
    /// must not consume input and parsing must be free of side effects, so
    /// the same parser can be run any number of times.
    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Parser backed by a plain function from input to result
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (self.f)(input)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

/// Turn a function `&str -> ParseResult` into a parser
pub fn from_fn<'code, F, T>(f: F) -> FromFn<F>
where
    F: Fn(&'code str) -> ParseResult<'code, T>,
{
    FromFn { f }
}

/// Type-erased, cheaply clonable parser
///
/// Lets parsers of different concrete types share one type, e.g. to store
/// them in the same `Vec` or to name the return type of a grammar function.
pub struct BoxedParser<'code, T> {
    inner: Rc<dyn Parser<'code, Output = T> + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + 'code,
    {
        BoxedParser {
            inner: Rc::new(parser),
        }
    }
}

impl<'code, T> Clone for BoxedParser<'code, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.inner.parse(input)
    }
}

impl<'code, T> fmt::Debug for BoxedParser<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: 'code,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

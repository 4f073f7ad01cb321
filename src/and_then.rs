use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::fmt;

/// Parser combinator that builds its second parser from the first one's value
///
/// This is the monadic bind of the library: the next step may depend on
/// what was parsed so far. [`go`](crate::go::go) is the straight-line form of
/// a chain of these.
pub struct AndThen<P, F> {
    parser: P,
    next: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        AndThen { parser, next }
    }
}

impl<P, F> fmt::Debug for AndThen<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen")
            .field("parser", &self.parser)
            .field("next", &"<function>")
            .finish()
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let step = self.parser.parse(input)?;
        (self.next)(step.value).parse(step.rest)
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'code, P, F, Q>(parser: P, next: F) -> AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    AndThen::new(parser, next)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, next: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        AndThen::new(self, next)
    }
}

/// Implement AndThenExt for all parsers
impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}

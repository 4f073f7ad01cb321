use crate::outcome::{Failure, ParseResult, Success};
use crate::parser::Parser;

/// Expected text of the failure reported when every alternative fails
pub const ONE_OF_EXPECTED: &str = "one of the given parsers to succeed";

/// A group of alternative parsers producing the same output type
///
/// Implemented for `Vec<P>`, `[P; N]` and tuples of up to twelve parsers.
pub trait Alternatives<'code> {
    type Output;

    /// Try each alternative in order against the same `input` and return the
    /// first success, or every failure in the order they were tried.
    fn parse_first(&self, input: &'code str)
    -> Result<Success<'code, Self::Output>, Vec<Failure<'code>>>;
}

fn parse_first_of_slice<'code, P>(
    parsers: &[P],
    input: &'code str,
) -> Result<Success<'code, P::Output>, Vec<Failure<'code>>>
where
    P: Parser<'code>,
{
    let mut failures = Vec::with_capacity(parsers.len());

    for parser in parsers {
        match parser.parse(input) {
            Ok(step) => return Ok(step),
            Err(failure) => failures.push(failure),
        }
    }

    Err(failures)
}

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(
        &self,
        input: &'code str,
    ) -> Result<Success<'code, Self::Output>, Vec<Failure<'code>>> {
        parse_first_of_slice(self.as_slice(), input)
    }
}

impl<'code, P, const N: usize> Alternatives<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(
        &self,
        input: &'code str,
    ) -> Result<Success<'code, Self::Output>, Vec<Failure<'code>>> {
        parse_first_of_slice(self.as_slice(), input)
    }
}

macro_rules! impl_alternatives_for_tuples {
    ($($acc:ident)+; $head:ident $($tail:ident)*) => {
        impl_alternatives_for_tuples!($($acc)+;);
        impl_alternatives_for_tuples!($($acc)+ $head; $($tail)*);
    };
    ($($parser:ident)+;) => {
        #[allow(non_snake_case)]
        impl<'code, O, $($parser: Parser<'code, Output = O>),+> Alternatives<'code> for ($($parser,)+) {
            type Output = O;

            fn parse_first(
                &self,
                input: &'code str,
            ) -> Result<Success<'code, Self::Output>, Vec<Failure<'code>>> {
                let ($($parser,)+) = self;
                let mut failures = Vec::new();
                $(
                    match $parser.parse(input) {
                        Ok(step) => return Ok(step),
                        Err(failure) => failures.push(failure),
                    }
                )+
                Err(failures)
            }
        }
    };
}

impl_alternatives_for_tuples!(P1; P2 P3 P4 P5 P6 P7 P8 P9 P10 P11 P12);

/// The failure reported when every alternative failed at `input`
///
/// Only its own label shows up in messages; the individual failures are
/// kept as [`Failure::alternatives`] for diagnostics.
fn all_failed<'code>(input: &'code str, failures: Vec<Failure<'code>>) -> Failure<'code> {
    Failure::new(ONE_OF_EXPECTED, format!("every parser failed at {}", input))
        .with_alternatives(failures)
}

/// Parser combinator that returns the first alternative to succeed
///
/// Every alternative sees the original input; order decides ambiguity.
#[derive(Debug, Clone)]
pub struct OneOf<A> {
    alternatives: A,
}

impl<A> OneOf<A> {
    pub fn new(alternatives: A) -> Self {
        OneOf { alternatives }
    }
}

impl<'code, A> Parser<'code> for OneOf<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.alternatives
            .parse_first(input)
            .map_err(|failures| all_failed(input, failures))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'code, A>(alternatives: A) -> OneOf<A>
where
    A: Alternatives<'code>,
{
    OneOf::new(alternatives)
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Behaves like `one_of((parser1, parser2))`.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (&self.parser1, &self.parser2)
            .parse_first(input)
            .map_err(|failures| all_failed(input, failures))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

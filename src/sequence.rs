use crate::outcome::{ParseResult, Success};
use crate::parser::Parser;

/// A group of parsers that can be run one after another
///
/// Implemented for `Vec<P>` and `[P; N]`, which collect their values into a
/// `Vec`, and for tuples of up to twelve parsers of different types, which
/// collect into a tuple of the same arity.
pub trait Sequence<'code> {
    type Output;

    /// Run every parser in order, each on the rest the previous one left.
    /// The first failure is returned as is.
    fn parse_each(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

fn parse_slice<'code, P>(parsers: &[P], input: &'code str) -> ParseResult<'code, Vec<P::Output>>
where
    P: Parser<'code>,
{
    let mut values = Vec::with_capacity(parsers.len());
    let mut rest = input;

    for parser in parsers {
        let step = parser.parse(rest)?;
        values.push(step.value);
        rest = step.rest;
    }

    Ok(Success::new(values, rest))
}

impl<'code, P> Sequence<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_each(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        parse_slice(self.as_slice(), input)
    }
}

impl<'code, P, const N: usize> Sequence<'code> for [P; N]
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_each(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        parse_slice(self.as_slice(), input)
    }
}

macro_rules! impl_sequence_for_tuples {
    ($($acc:ident)+; $head:ident $($tail:ident)*) => {
        impl_sequence_for_tuples!($($acc)+;);
        impl_sequence_for_tuples!($($acc)+ $head; $($tail)*);
    };
    ($($parser:ident)+;) => {
        #[allow(non_snake_case)]
        impl<'code, $($parser: Parser<'code>),+> Sequence<'code> for ($($parser,)+) {
            type Output = ($($parser::Output,)+);

            fn parse_each(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
                let ($($parser,)+) = self;
                let rest = input;
                $(let Success { value: $parser, rest } = $parser.parse(rest)?;)+
                Ok(Success::new(($($parser,)+), rest))
            }
        }
    };
}

impl_sequence_for_tuples!(P1; P2 P3 P4 P5 P6 P7 P8 P9 P10 P11 P12);

/// Parser combinator that runs a group of parsers in order and collects their values
#[derive(Debug, Clone)]
pub struct Seq<S> {
    parsers: S,
}

impl<S> Seq<S> {
    pub fn new(parsers: S) -> Self {
        Seq { parsers }
    }
}

impl<'code, S> Parser<'code> for Seq<S>
where
    S: Sequence<'code>,
{
    type Output = S::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parsers.parse_each(input)
    }
}

/// Convenience function to create a Seq parser
///
/// ```
/// use parsego::{Parser, integer, literal, sequence};
///
/// let parser = sequence((literal("<"), integer(), literal(">")));
/// let result = parser.parse("<3>ss").unwrap();
/// assert_eq!(result.value, ("<", 3, ">"));
/// assert_eq!(result.rest, "ss");
/// ```
pub fn sequence<'code, S>(parsers: S) -> Seq<S>
where
    S: Sequence<'code>,
{
    Seq::new(parsers)
}

use crate::outcome::{ParseResult, Success};
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Greedy: it keeps going until the parser fails, then succeeds with every
/// value collected so far. Runs as a loop, so the number of repetitions is
/// not limited by stack depth.
///
/// An occurrence that succeeds without consuming input ends the repetition
/// and its value is dropped; otherwise it would match forever.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::new();
        let mut rest = input;

        // Many matches zero or more, so the final failure is not propagated
        while let Ok(step) = self.parser.parse(rest) {
            if step.rest.len() == rest.len() {
                break;
            }
            values.push(step.value);
            rest = step.rest;
        }

        Ok(Success::new(values, rest))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

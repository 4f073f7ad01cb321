use crate::outcome::{ParseResult, failure, success};
use crate::parser::Parser;

/// Parser that only succeeds once the whole input has been consumed
#[derive(Debug, Clone, Copy, Default)]
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        if input.is_empty() {
            success((), input)
        } else {
            failure("end of input", input)
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}

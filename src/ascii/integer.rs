use crate::outcome::{ParseResult, Success, failure};
use crate::parser::Parser;

/// Parser that matches one or more ASCII digits and returns them as a u64
pub fn integer<'code>() -> impl Parser<'code, Output = u64> {
    Integer
}

struct Integer;

impl<'code> Parser<'code> for Integer {
    type Output = u64;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());

        if end == 0 {
            return failure("an integer", input);
        }

        let (digits, rest) = input.split_at(end);
        match digits.parse::<u64>() {
            Ok(value) => Ok(Success::new(value, rest)),
            Err(_) => failure("an integer that fits in 64 bits", input),
        }
    }
}

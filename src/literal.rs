use crate::outcome::{ParseResult, Success, failure};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string at the start of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: Cow<'static, str>,
}

impl Literal {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl<'code> Parser<'code> for Literal {
    /// The matched slice of the input, equal to the literal text
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match input.strip_prefix(self.text.as_ref()) {
            Some(rest) => Ok(Success::new(&input[..self.text.len()], rest)),
            // Clone is cheap for &'static text, allocates for owned text
            None => failure(self.text.clone(), input),
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(text: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(text)
}

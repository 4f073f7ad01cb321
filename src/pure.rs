use crate::outcome::{ParseResult, success};
use crate::parser::Parser;

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        success(self.value.clone(), input)
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T>(value: T) -> Pure<T>
where
    T: Clone,
{
    Pure::new(value)
}

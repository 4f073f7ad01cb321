use crate::error::PatternError;
use crate::outcome::{ParseResult, Success, failure};
use crate::parser::Parser;
use regex::Regex;
use regex_automata::{Anchored, Input, meta};

#[derive(Debug, Clone)]
enum Matcher {
    /// Compiled here; searched with an anchored start
    Anchored(meta::Regex),
    /// Compiled by the caller with its own builder options
    Given(Regex),
}

/// Parser that matches a regular expression anchored at the start of the input
///
/// The expression is compiled once when the parser is built and is never
/// rewritten, so every valid expression is accepted as written.
#[derive(Debug, Clone)]
pub struct Pattern {
    matcher: Matcher,
    source: String,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = meta::Regex::new(source).map_err(|err| PatternError {
            pattern: source.to_string(),
            source: err,
        })?;

        Ok(Self {
            matcher: Matcher::Anchored(regex),
            source: source.to_string(),
        })
    }

    /// Match with an already compiled expression, keeping its builder options
    ///
    /// Only a match starting at the first character counts. A failed attempt
    /// may search further into the input than one built by [`Pattern::new`].
    pub fn from_regex(regex: &Regex) -> Self {
        Self {
            matcher: Matcher::Given(regex.clone()),
            source: regex.as_str().to_string(),
        }
    }

    /// The expression as written
    pub fn source(&self) -> &str {
        &self.source
    }

    fn match_end(&self, input: &str) -> Option<usize> {
        match &self.matcher {
            Matcher::Anchored(regex) => regex
                .find(Input::new(input).anchored(Anchored::Yes))
                .map(|matched| matched.end()),
            // Leftmost-first: a match at 0 is reported before any later one
            Matcher::Given(regex) => regex
                .find(input)
                .filter(|matched| matched.start() == 0)
                .map(|matched| matched.end()),
        }
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = &'code str;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.match_end(input) {
            Some(end) => Ok(Success::new(&input[..end], &input[end..])),
            None => failure(self.source.clone(), input),
        }
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(source: &str) -> Result<Pattern, PatternError> {
    Pattern::new(source)
}

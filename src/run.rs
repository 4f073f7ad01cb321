use crate::error::ParseError;
use crate::outcome::Success;
use crate::parser::Parser;

/// Run `parser` once over `input`
///
/// This is where a failure stops being a value the combinators can recover
/// from and becomes an error for the caller.
pub fn run<'code, P>(parser: &P, input: &'code str) -> Result<Success<'code, P::Output>, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    Ok(parser.parse(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::outcome::{failure, success};
    use crate::parser::from_fn;

    #[test]
    fn test_run_returns_success() {
        let parser = from_fn(|_| success("data", "rest"));
        assert_eq!(run(&parser, "input").unwrap(), Success::new("data", "rest"));
    }

    #[test]
    fn test_run_raises_failure() {
        let parser = from_fn(|_| failure::<()>("a", "b"));
        let error = run(&parser, "input").unwrap_err();

        assert_eq!(
            error,
            ParseError {
                expected: "a".to_string(),
                actual: "b".to_string(),
            }
        );
        assert_eq!(error.to_string(), "Parse error. expect 'a'. Found 'b instead.'");
    }

    #[test]
    fn test_run_literal() {
        let parser = literal("+");

        assert_eq!(run(&parser, "+ss").unwrap(), Success::new("+", "ss"));
        assert_eq!(
            run(&parser, "ss+").unwrap_err().to_string(),
            "Parse error. expect '+'. Found 'ss+ instead.'"
        );
    }
}

use parsego::{
    Failure, Parser, Success, apply, eof, failure, from_fn, go, integer, literal, many, one_of,
    run, sequence,
};
use pretty_assertions::assert_eq;

type BinaryOp = fn(f64, f64) -> f64;

/// One of `+ - * /`, yielding the function it stands for
fn operator<'code>() -> impl Parser<'code, Output = BinaryOp> {
    from_fn(|input| {
        let symbol = one_of((literal("+"), literal("-"), literal("*"), literal("/")));
        match symbol.parse(input) {
            Ok(step) => {
                let op: BinaryOp = match step.value {
                    "+" => |a, b| a + b,
                    "-" => |a, b| a - b,
                    "*" => |a, b| a * b,
                    _ => |a, b| a / b,
                };
                Ok(Success::new(op, step.rest))
            }
            Err(_) => failure("an operator", input),
        }
    })
}

/// Integers joined by operators, folded strictly left to right
fn expression<'code>() -> impl Parser<'code, Output = f64> {
    go(|s| {
        let first = s.bind(integer())?;
        let rest = s.bind(many(sequence((operator(), integer()))))?;
        s.bind(eof())?;

        Ok(rest
            .into_iter()
            .fold(first as f64, |acc, (op, n)| op(acc, n as f64)))
    })
}

#[test]
fn operator_yields_its_function() {
    for (input, a, b, expected) in [
        ("+ss", 1.0, 2.0, 3.0),
        ("-ss", 1.0, 2.0, -1.0),
        ("*ss", 1.0, 2.0, 2.0),
        ("/ss", 1.0, 2.0, 0.5),
    ] {
        let step = operator().parse(input).unwrap();
        assert_eq!(step.rest, "ss");
        assert_eq!((step.value)(a, b), expected, "input: {}", input);
    }
}

#[test]
fn operator_failure_names_the_category() {
    assert_eq!(
        operator().parse("ss/").unwrap_err(),
        Failure::new("an operator", "ss/")
    );
}

#[test]
fn expression_folds_left_to_right() {
    let result = run(&expression(), "1-2+3*4").unwrap();
    assert_eq!(result, Success::new(8.0, ""));
}

#[test]
fn expression_single_integer() {
    assert_eq!(run(&expression(), "42").unwrap(), Success::new(42.0, ""));
}

#[test]
fn expression_requires_end_of_input() {
    let error = run(&expression(), "1+2 ").unwrap_err();
    assert_eq!(error.to_string(), "Parse error. expect 'end of input'. Found '  instead.'");
}

#[test]
fn expression_dangling_operator_stops_repetition() {
    // `many` gives up on "+" without an integer, so eof sees it
    let error = run(&expression(), "1+").unwrap_err();
    assert_eq!(error.expected, "end of input");
    assert_eq!(error.actual, "+");
}

#[test]
fn go_can_replace_apply() {
    let with_apply = apply(
        |(a, op, b)| op(a as f64, b as f64),
        (integer(), operator(), integer()),
    );
    let with_go = go(|s| {
        let a = s.bind(integer())?;
        let op = s.bind(operator())?;
        let b = s.bind(integer())?;
        s.bind(eof())?;
        Ok(op(a as f64, b as f64))
    });

    assert_eq!(run(&with_apply, "1-2").unwrap(), Success::new(-1.0, ""));
    assert_eq!(run(&with_go, "1-2").unwrap(), Success::new(-1.0, ""));
}

#[test]
fn same_parser_same_result() {
    let parser = expression();
    for input in ["1-2+3*4", "7", "1+", "x"] {
        assert_eq!(parser.parse(input), parser.parse(input), "input: {}", input);
    }
}

use crate::map::Map;
use crate::sequence::{Seq, Sequence};

/// Parser combinator that runs a group of parsers in order and combines their values
///
/// Shorthand for mapping over a [`sequence`](crate::sequence::sequence): the
/// combining function receives everything the group collected, a tuple for
/// tuple groups (destructure it in the closure's parameter) or a `Vec` for
/// `Vec` and array groups. The first failure is returned as is.
///
/// ```
/// use parsego::{Parser, apply, integer, literal, one_of};
///
/// let parser = apply(
///     |(a, op, b)| if op == "-" { a as i64 - b as i64 } else { a as i64 + b as i64 },
///     (integer(), one_of((literal("+"), literal("-"))), integer()),
/// );
///
/// let result = parser.parse("1-2").unwrap();
/// assert_eq!(result.value, -1);
/// assert_eq!(result.rest, "");
/// ```
pub fn apply<'code, F, S, U>(combine: F, parsers: S) -> Map<Seq<S>, F>
where
    S: Sequence<'code>,
    F: Fn(S::Output) -> U,
{
    Map::new(Seq::new(parsers), combine)
}

use crate::outcome::{ParseResult, failure};
use crate::parser::Parser;
use std::fmt;
use std::rc::{Rc, Weak};

/// Expected text when a recursive parser runs without a definition behind it
const UNDEFINED: &str = "a defined recursive parser";

type Slot<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

enum Handle<'code, T> {
    /// Returned by [`recursive`]; keeps the definition alive
    Owned(Rc<Slot<'code, T>>),
    /// Handed to the definition itself, so it does not own itself
    Borrowed(Weak<Slot<'code, T>>),
}

/// A parser that can refer to itself while it is being defined
///
/// Built by [`recursive`]. The self reference is a weak handle to the
/// definition that is resolved at parse time, rather than by unrolling the
/// grammar at construction.
pub struct Recursive<'code, T> {
    handle: Handle<'code, T>,
}

impl<'code, T> Clone for Recursive<'code, T> {
    fn clone(&self) -> Self {
        let handle = match &self.handle {
            Handle::Owned(slot) => Handle::Owned(Rc::clone(slot)),
            Handle::Borrowed(slot) => Handle::Borrowed(Weak::clone(slot)),
        };
        Recursive { handle }
    }
}

impl<'code, T> fmt::Debug for Recursive<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owned = matches!(self.handle, Handle::Owned(_));
        f.debug_struct("Recursive").field("owned", &owned).finish()
    }
}

impl<'code, T> Parser<'code> for Recursive<'code, T> {
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match &self.handle {
            Handle::Owned(slot) => slot.parse(input),
            Handle::Borrowed(slot) => match slot.upgrade() {
                Some(slot) => slot.parse(input),
                None => failure(UNDEFINED, input),
            },
        }
    }
}

/// Define a parser in terms of itself
///
/// `define` receives a handle to the parser being defined and returns its
/// definition. The handle only borrows the definition, so a self-referencing
/// grammar does not leak.
///
/// ```
/// use parsego::{Parser, Recursive, go, literal, one_of, pure, recursive};
///
/// // Balanced brackets, counting the pairs
/// let pairs: Recursive<'_, u32> = recursive(|pairs| {
///     one_of((
///         go(move |s| {
///             s.bind(literal("["))?;
///             let inner = s.bind(&pairs)?;
///             s.bind(literal("]"))?;
///             let after = s.bind(&pairs)?;
///             Ok(1 + inner + after)
///         }),
///         pure(0),
///     ))
/// });
///
/// assert_eq!(pairs.parse("[[]][]").unwrap().value, 3);
/// ```
pub fn recursive<'code, T, P, F>(define: F) -> Recursive<'code, T>
where
    F: FnOnce(Recursive<'code, T>) -> P,
    P: Parser<'code, Output = T> + 'code,
{
    // The weak handle cannot be upgraded until `define` has returned
    let slot: Rc<Slot<'code, T>> = Rc::new_cyclic(|this| {
        let parser = define(Recursive {
            handle: Handle::Borrowed(this.clone()),
        });
        Box::new(parser) as Slot<'code, T>
    });

    Recursive {
        handle: Handle::Owned(slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go::go;
    use crate::literal::literal;
    use crate::many::many;
    use crate::one_of::one_of;
    use crate::outcome::{Failure, Success};
    use crate::pure::pure;

    /// Zero-or-more repetition written as a self-referencing alternative:
    /// one occurrence followed by the rest, or nothing at all
    fn many_by_recursion<'code, P>(parser: P) -> Recursive<'code, Vec<P::Output>>
    where
        P: Parser<'code> + 'code,
        P::Output: Clone + 'code,
    {
        recursive(|this| {
            one_of((
                go(move |s| {
                    let head = s.bind(&parser)?;
                    let mut tail: Vec<P::Output> = s.bind(&this)?;
                    tail.insert(0, head);
                    Ok(tail)
                }),
                pure(Vec::new()),
            ))
        })
    }

    #[test]
    fn test_recursive_definition_of_many_agrees_with_many() {
        let by_recursion = many_by_recursion(literal("x"));
        let by_loop = many(literal("x"));

        for input in ["xxxab", "ab", "", "xxxx", "axx"] {
            assert_eq!(by_recursion.parse(input), by_loop.parse(input), "input: {}", input);
        }
        assert_eq!(
            by_recursion.parse("xxxab").unwrap(),
            Success::new(vec!["x", "x", "x"], "ab")
        );
    }

    #[test]
    fn test_nested_lists() {
        // A list is "[" followed by lists and a closing "]"; yields the nesting depth
        let list: Recursive<'_, usize> = recursive(|list| {
            go(move |s| {
                s.bind(literal("["))?;
                let children = s.bind(many(&list))?;
                s.bind(literal("]"))?;
                Ok(1 + children.into_iter().max().unwrap_or(0))
            })
        });

        assert_eq!(list.parse("[]").unwrap(), Success::new(1, ""));
        assert_eq!(list.parse("[[][[]]]rest").unwrap(), Success::new(3, "rest"));
        assert_eq!(list.parse("[[]").unwrap_err(), Failure::new("]", ""));
    }

    #[test]
    fn test_clones_share_the_definition() {
        let parser = recursive(|_| literal("a"));
        let clone = parser.clone();

        assert_eq!(clone.parse("ab").unwrap(), Success::new("a", "b"));
    }

    #[test]
    fn test_handle_fails_once_definition_is_dropped() {
        let mut escaped = None;
        let parser = recursive(|this| {
            escaped = Some(this);
            literal("a")
        });
        assert!(escaped.as_ref().is_some_and(|handle| handle.parse("a").is_ok()));

        drop(parser);
        let handle = escaped.take();
        assert_eq!(
            handle.map(|handle| handle.parse("a")),
            Some(Err(Failure::new(UNDEFINED, "a")))
        );
    }

    #[test]
    fn test_handle_used_during_definition_is_undefined() {
        let mut early = None;
        let _parser = recursive(|this| {
            early = Some(this.parse("a"));
            literal("a")
        });

        assert_eq!(early, Some(Err(Failure::new(UNDEFINED, "a"))));
    }
}

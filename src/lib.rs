//! # parsego - Parser Combinator Library
//!
//! Parsers over text that compose into parsers for whole grammars. A parser
//! takes the remaining input and returns either a value plus the rest of the
//! input, or a [`Failure`] describing what it expected to see.
//!
//! - **Failures are values**: combinators inspect them to backtrack; only
//!   [`run`] turns one into an error
//! - **Straight-line grammars**: [`go`] binds the values of sub-parsers to
//!   names, so later steps can depend on earlier ones
//! - **Recursion**: [`recursive`] and [`lazy`] let grammars refer to themselves
//! - **Zero-copy**: values such as literal and pattern matches borrow from the input
//!
//! ```
//! use parsego::{Parser, eof, go, integer, literal, many, one_of, run, sequence};
//!
//! let expression = go(|s| {
//!     let first = s.bind(integer())?;
//!     let rest = s.bind(many(sequence((
//!         one_of((literal("+"), literal("-"), literal("*"))),
//!         integer(),
//!     ))))?;
//!     s.bind(eof())?;
//!
//!     Ok(rest.into_iter().fold(first as i64, |acc, (op, n)| match op {
//!         "+" => acc + n as i64,
//!         "-" => acc - n as i64,
//!         _ => acc * n as i64,
//!     }))
//! });
//!
//! let result = run(&expression, "1-2+3*4").unwrap();
//! assert_eq!(result.value, 8);
//! assert_eq!(result.rest, "");
//! ```

pub mod and_then;
pub mod apply;
pub mod ascii;
pub mod eof;
pub mod error;
pub mod go;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod one_of;
pub mod outcome;
pub mod parser;
pub mod pattern;
pub mod pure;
pub mod recursive;
pub mod run;
pub mod sequence;

pub use and_then::{AndThenExt, and_then};
pub use apply::apply;
pub use ascii::integer;
pub use eof::eof;
pub use error::{Error, ParseError, PatternError};
pub use go::{Script, go};
pub use lazy::lazy;
pub use literal::literal;
pub use many::many;
pub use map::{MapExt, map};
pub use one_of::{OrExt, one_of, or};
pub use outcome::{Failure, ParseResult, Success, failure, success};
pub use parser::{BoxedExt, BoxedParser, Parser, from_fn};
pub use pattern::pattern;
pub use pure::pure;
pub use recursive::{Recursive, recursive};
pub use run::run;
pub use sequence::sequence;

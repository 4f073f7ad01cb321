pub mod integer;

pub use integer::integer;

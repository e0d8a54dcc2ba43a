//! A small symbolic algebra system for polynomials with integer
//! coefficients.
//!
//! Text is parsed into a [`Polynomial`], which can be combined with other
//! polynomials, [`Term`]s, [`Variable`]s and integers, then differentiated
//! with respect to one of its variables.
//!
//! ```rust
//! use polydiff::{Operand, Variable};
//!
//! let p = polydiff::parse("3x^2 + 2x - 5").unwrap();
//! let x = Variable::named("x");
//!
//! let dp_dx = p.derivative(&x).unwrap();
//! assert_eq!(dp_dx.to_string(), "6*x + 2");
//!
//! // all the terms of a constant disappear
//! let five = polydiff::parse("5").unwrap();
//! assert_eq!(five.derivative(&x).unwrap(), Operand::Integer(0));
//!
//! // coefficients are `i64`s, and overflowing them is an error
//! let big = polydiff::parse("9223372036854775807x^2").unwrap();
//! assert!(big.derivative(&x).is_err());
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod operand;
pub mod ops;
mod parse;
mod polynomial;
mod term;
mod variable;

pub use operand::{Operand, OperandKind};
pub use ops::AlgebraError;
pub use parse::{parse, parse_with, ParseError, ParseMode, ParseOptions};
pub use polynomial::Polynomial;
pub use term::Term;
pub use variable::Variable;

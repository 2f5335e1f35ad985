//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! A [`Rational`] is a numerator/denominator pair of [`BigInt`]s. Values built
//! with [`Rational::new`], [`parse_rational`] or [`div_by`] are normalized:
//! lowest terms, positive denominator, sign on the numerator.
//! [`Rational::from_parts`] keeps its inputs verbatim for callers that need an
//! intermediate value.
//!
//! ```
//! use exact_rational::{contains, parse_rational};
//!
//! let sum = parse_rational("3/4")?.checked_add(&parse_rational("1/4")?)?;
//! assert_eq!(sum.to_string(), "1");
//!
//! let interval = parse_rational("1")?.range_to(parse_rational("3")?);
//! assert!(contains(&interval, &parse_rational("2")?)?);
//! assert!(!contains(&interval, &parse_rational("3")?)?);
//! # Ok::<(), exact_rational::RationalError>(())
//! ```

mod convert;
mod error;
mod fmt;
mod interval;
mod parse;
mod rational;
mod serde_impl;

pub use error::RationalError;
pub use interval::contains;
pub use num_bigint::BigInt;
pub use parse::{div_by, parse_rational};
pub use rational::Rational;

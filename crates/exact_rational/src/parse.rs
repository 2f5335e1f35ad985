use std::str::FromStr;

use num_bigint::BigInt;

use crate::{Rational, RationalError};

/// Parses `"<int>"` or `"<int>/<int>"` into a normalized [`Rational`].
///
/// Integers are decimal with an optional leading `+` or `-`.
pub fn parse_rational(text: &str) -> Result<Rational, RationalError> {
    match text.split_once('/') {
        None => Ok(Rational::from_integer(parse_integer(text)?)),
        Some((_, denom)) if denom.contains('/') => {
            Err(RationalError::MalformedFraction(text.to_string()))
        }
        Some((numer, denom)) => Rational::new(parse_integer(numer)?, parse_integer(denom)?),
    }
}

/// Builds the normalized fraction `value / denominator` from native integers.
pub fn div_by<N, D>(value: N, denominator: D) -> Result<Rational, RationalError>
where
    N: Into<BigInt>,
    D: Into<BigInt>,
{
    Rational::new(value.into(), denominator.into())
}

fn parse_integer(text: &str) -> Result<BigInt, RationalError> {
    let invalid = || RationalError::InvalidInteger(text.to_string());
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    // `parse_bytes` also admits `_` separators.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
    Ok(if negative { -magnitude } else { magnitude })
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_rational(text)
    }
}

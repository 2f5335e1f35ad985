use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::RationalError;

mod cmp;
mod ops;

/// An exact fraction `numerator / denominator`.
///
/// Equality and hashing are structural: `1/2` and `2/4` are different values
/// here even though they denote the same number. Use [`Rational::value_eq`] or
/// [`Rational::compare_to`] to compare by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Stores both parts verbatim. Nothing is reduced or validated, so the
    /// result may carry a negative or zero denominator.
    pub fn from_parts(numer: BigInt, denom: BigInt) -> Self {
        Self { numer, denom }
    }

    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, RationalError> {
        Self::from_parts(numer, denom).normalize()
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self::from_parts(value, BigInt::one())
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numer
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denom
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Lowest terms with a positive denominator.
    pub fn is_normalized(&self) -> bool {
        self.denom.is_positive() && self.numer.gcd(&self.denom).is_one()
    }

    /// Reduces to lowest terms and moves the sign onto the numerator.
    ///
    /// A zero numerator is returned untouched, whatever its denominator.
    pub fn normalize(&self) -> Result<Self, RationalError> {
        self.ensure_denominator()?;
        if self.numer.is_zero() {
            return Ok(self.clone());
        }
        let divisor = self.numer.gcd(&self.denom);
        let reduced = Self::from_parts(&self.numer / &divisor, (&self.denom / &divisor).abs());
        if self.denom.is_negative() {
            Ok(-reduced)
        } else {
            Ok(reduced)
        }
    }

    /// Re-expresses both operands over their least common denominator.
    ///
    /// The shared denominator is always positive, so each rebased numerator
    /// carries its operand's sign even when a stored denominator is negative.
    pub fn to_common_base(first: &Self, second: &Self) -> Result<(Self, Self), RationalError> {
        first.ensure_denominator()?;
        second.ensure_denominator()?;
        let divisor = first.denom.gcd(&second.denom);
        let base = (&first.denom * (&second.denom / divisor)).abs();
        Ok((first.rebase(&base), second.rebase(&base)))
    }

    // `base` must be a multiple of `self.denom`.
    fn rebase(&self, base: &BigInt) -> Self {
        Self::from_parts(&self.numer * (base / &self.denom), base.clone())
    }

    fn ensure_denominator(&self) -> Result<(), RationalError> {
        if self.denom.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(())
    }
}

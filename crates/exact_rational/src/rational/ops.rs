use std::ops::Neg;

use num_traits::{Signed, Zero};

use super::Rational;
use crate::RationalError;

impl Rational {
    pub fn checked_add(&self, other: &Self) -> Result<Self, RationalError> {
        let (left, right) = Self::to_common_base(self, other)?;
        Self::from_parts(left.numer + right.numer, left.denom).normalize()
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, RationalError> {
        let (left, right) = Self::to_common_base(self, other)?;
        Self::from_parts(left.numer - right.numer, left.denom).normalize()
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, RationalError> {
        Self::from_parts(&self.numer * &other.numer, &self.denom * &other.denom).normalize()
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        other.ensure_denominator()?;
        if other.numer.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::from_parts(&self.numer * &other.denom, &self.denom * &other.numer).normalize()
    }

    pub fn checked_recip(&self) -> Result<Self, RationalError> {
        self.ensure_denominator()?;
        if self.numer.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::new(self.denom.clone(), self.numer.clone())
    }

    pub fn abs(&self) -> Self {
        Self::from_parts(self.numer.abs(), self.denom.abs())
    }

    /// Pairs `self` and `upper` as the half-open interval `[self, upper)`.
    ///
    /// The bounds are kept as given; an inverted pair is simply empty.
    pub fn range_to(self, upper: Self) -> (Self, Self) {
        (self, upper)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::from_parts(-self.numer, self.denom)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::from_parts(-&self.numer, self.denom.clone())
    }
}

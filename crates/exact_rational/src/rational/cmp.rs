use std::cmp::Ordering;

use super::Rational;
use crate::RationalError;

impl Rational {
    /// Orders two values by the number they denote, regardless of whether
    /// either is normalized.
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, RationalError> {
        let (left, right) = Self::to_common_base(self, other)?;
        Ok(left.numer.cmp(&right.numer))
    }

    pub fn value_eq(&self, other: &Self) -> Result<bool, RationalError> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }
}

use std::cmp::Ordering;

use crate::{Rational, RationalError};

/// Tests `lower <= value < upper`.
///
/// Both comparisons are evaluated, so a zero denominator in either bound is
/// reported even when the other comparison already decides the answer.
pub fn contains(interval: &(Rational, Rational), value: &Rational) -> Result<bool, RationalError> {
    let (lower, upper) = interval;
    let above_lower = value.compare_to(lower)? != Ordering::Less;
    let below_upper = value.compare_to(upper)? == Ordering::Less;
    Ok(above_lower && below_upper)
}

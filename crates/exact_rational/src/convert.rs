use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{Rational, RationalError};

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Rational {
                fn from(value: $ty) -> Self {
                    Rational::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// `BigRational` is always reduced with a positive denominator.
impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        let (numer, denom) = value.into_raw();
        Rational::from_parts(numer, denom)
    }
}

impl TryFrom<&Rational> for BigRational {
    type Error = RationalError;

    fn try_from(value: &Rational) -> Result<Self, Self::Error> {
        if value.denominator().is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(BigRational::new(
            value.numerator().clone(),
            value.denominator().clone(),
        ))
    }
}

impl TryFrom<Rational> for BigRational {
    type Error = RationalError;

    fn try_from(value: Rational) -> Result<Self, Self::Error> {
        let (numer, denom) = value.into_parts();
        if denom.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(BigRational::new(numer, denom))
    }
}

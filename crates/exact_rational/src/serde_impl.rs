//! String conversions backing the serde representation of [`Rational`],
//! which is its `Display` form.

use crate::{parse_rational, Rational, RationalError};

impl From<Rational> for String {
    fn from(value: Rational) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Rational {
    type Error = RationalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_rational(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),
    #[error("malformed fraction {0:?}: expected at most one '/'")]
    MalformedFraction(String),
    #[error("zero denominator")]
    ZeroDenominator,
    #[error("division by zero")]
    DivisionByZero,
}

impl RationalError {
    /// The input text was not a fraction of decimal integers.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            RationalError::InvalidInteger(_) | RationalError::MalformedFraction(_)
        )
    }

    /// A zero reached a place that divides by it.
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(
            self,
            RationalError::ZeroDenominator | RationalError::DivisionByZero
        )
    }
}

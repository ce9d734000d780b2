#[derive(Debug, PartialEq, Eq)]
pub enum GenError {
    ExponentOutOfRange(u32),
}

impl std::error::Error for GenError {}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            GenError::ExponentOutOfRange(exponent) => write!(
                f,
                "2^{} does not fit in a uint256 (exponent must be below {})",
                exponent,
                crate::table::TABLE_BITS
            ),
        }
    }
}

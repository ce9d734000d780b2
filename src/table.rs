use crate::errors::GenError;
use num_bigint::BigUint;
use num_traits::One;

/// Width in bits of the `uint256` keys the generated table is indexed by.
pub const TABLE_BITS: u32 = 256;

#[derive(Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub exponent: u32,
    pub value: BigUint,
}

/// Returns 2^exponent. Anything that would not fit in a `uint256` is rejected.
pub fn power_of_two(exponent: u32) -> Result<BigUint, GenError> {
    if exponent >= TABLE_BITS {
        return Err(GenError::ExponentOutOfRange(exponent));
    }
    Ok(BigUint::one() << exponent as usize)
}

/// Returns every entry of the table in ascending exponent order.
pub fn entries() -> impl Iterator<Item = Result<TableEntry, GenError>> {
    (0..TABLE_BITS).map(|exponent| {
        power_of_two(exponent).map(|value| TableEntry { exponent, value })
    })
}

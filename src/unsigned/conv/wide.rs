//! Conversions for the 128-bit primitives
//!
//! These span two blocks, so they do not go through
//! [`BigUnsigned::to_primitive`]. The same contract holds: construction
//! rejects negative input and conversion back fails unless it is exact.

use crate::error::{Error, Result};
use crate::unsigned::{BLOCK_BITS, BigUnsigned, Block};

impl From<u128> for BigUnsigned {
    /// Splits the value into its low and high blocks.
    fn from(value: u128) -> Self {
        BigUnsigned::from_blocks(&[value as Block, (value >> BLOCK_BITS) as Block])
    }
}

impl TryFrom<i128> for BigUnsigned {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self> {
        if value < 0 {
            return Err(Error::NegativeConstruction);
        }

        Ok(BigUnsigned::from(value as u128))
    }
}

impl TryFrom<&BigUnsigned> for u128 {
    type Error = Error;

    fn try_from(value: &BigUnsigned) -> Result<Self> {
        match *value.blocks() {
            [] => Ok(0),
            [low] => Ok(u128::from(low)),
            [low, high] => Ok(u128::from(high) << BLOCK_BITS | u128::from(low)),
            _ => Err(Error::RangeOverflow),
        }
    }
}

impl TryFrom<&BigUnsigned> for i128 {
    type Error = Error;

    fn try_from(value: &BigUnsigned) -> Result<Self> {
        let wide = u128::try_from(value)?;
        i128::try_from(wide).map_err(|_| Error::RangeOverflow)
    }
}

impl TryFrom<BigUnsigned> for u128 {
    type Error = Error;

    fn try_from(value: BigUnsigned) -> Result<Self> {
        u128::try_from(&value)
    }
}

impl TryFrom<BigUnsigned> for i128 {
    type Error = Error;

    fn try_from(value: BigUnsigned) -> Result<Self> {
        i128::try_from(&value)
    }
}

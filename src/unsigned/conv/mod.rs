//! Conversions between `BigUnsigned` and primitive integers
//!
//! Conversions follow these rules:
//! - construction from an unsigned primitive always succeeds
//! - construction from a signed primitive fails on negative input
//! - conversion back fails unless the value round-trips exactly
//!
//! The primitives that fit in one block share a single generic routine,
//! [`BigUnsigned::to_primitive`], parameterized by the sealed [`Primitive`]
//! trait. The 128-bit types span two blocks and are handled separately.

use crate::error::{Error, Result};
use crate::store::BlockStore;
use crate::unsigned::{BigUnsigned, Block};

mod signed;
mod unsigned;
mod wide;

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integer no wider than a [`Block`].
///
/// Implemented for `u8`..`u64`, `usize`, `i8`..`i64` and `isize`; cannot be
/// implemented outside this crate.
pub trait Primitive: Copy + sealed::Sealed {
    /// Zero in this type.
    const ZERO: Self;

    /// Truncating cast from a block.
    fn from_block(block: Block) -> Self;

    /// Widening cast to a block. Negative values sign-extend.
    fn to_block(self) -> Block;

    /// Whether the value is below zero. Always `false` for unsigned types.
    fn is_negative(self) -> bool;
}

impl BigUnsigned {
    /// A value of at most one block; zero yields empty storage.
    pub(crate) fn from_block(block: Block) -> Self {
        if block == 0 {
            return Self::new();
        }

        Self {
            store: BlockStore::from_slice(&[block]),
        }
    }

    /// Converts to a primitive integer.
    ///
    /// # Errors
    /// [`Error::RangeOverflow`] if the value needs more than one block, if
    /// the block does not survive a cast to `T` and back, or if the result
    /// would be negative in `T`.
    pub fn to_primitive<T: Primitive>(&self) -> Result<T> {
        match *self.blocks() {
            [] => Ok(T::ZERO),
            [block] => {
                let value = T::from_block(block);
                if value.to_block() == block && !value.is_negative() {
                    Ok(value)
                } else {
                    Err(Error::RangeOverflow)
                }
            }
            _ => Err(Error::RangeOverflow),
        }
    }
}

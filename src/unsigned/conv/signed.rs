//! Conversions for signed primitives up to 64 bits.
//!
//! Construction rejects negative input. Conversion back applies the
//! unsigned round-trip check and then also requires a non-negative result,
//! which catches blocks with the target's sign bit set.

use super::{Primitive, sealed::Sealed};
use crate::error::{Error, Result};
use crate::unsigned::{BigUnsigned, Block};

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Sealed for $ty {}

        impl Primitive for $ty {
            const ZERO: Self = 0;

            fn from_block(block: Block) -> Self {
                block as $ty
            }

            fn to_block(self) -> Block {
                self as Block
            }

            fn is_negative(self) -> bool {
                self < 0
            }
        }

        impl TryFrom<$ty> for BigUnsigned {
            type Error = Error;

            fn try_from(value: $ty) -> Result<Self> {
                if value < 0 {
                    return Err(Error::NegativeConstruction);
                }

                Ok(BigUnsigned::from_block(value as Block))
            }
        }

        impl TryFrom<&BigUnsigned> for $ty {
            type Error = Error;

            fn try_from(value: &BigUnsigned) -> Result<Self> {
                value.to_primitive()
            }
        }

        impl TryFrom<BigUnsigned> for $ty {
            type Error = Error;

            fn try_from(value: BigUnsigned) -> Result<Self> {
                value.to_primitive()
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);

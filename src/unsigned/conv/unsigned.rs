//! Conversions for unsigned primitives up to 64 bits.

use super::{Primitive, sealed::Sealed};
use crate::error::{Error, Result};
use crate::unsigned::{BigUnsigned, Block};

macro_rules! impl_unsigned {
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
                false
            }
        }

        impl From<$ty> for BigUnsigned {
            fn from(value: $ty) -> Self {
                BigUnsigned::from_block(value as Block)
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

impl_unsigned!(u8, u16, u32, u64, usize);

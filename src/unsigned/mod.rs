//! Arbitrary-precision unsigned integer
//!
//! This module defines `BigUnsigned`, a non-negative integer of size limited
//! only by available memory, stored as 64-bit blocks in a
//! [`BlockStore`](crate::BlockStore).
//!
//! The arithmetic core is a set of **copy-less** operations that write
//! their result into the receiver:
//! - [`BigUnsigned::add`], [`BigUnsigned::subtract`],
//!   [`BigUnsigned::multiply`]
//! - [`BigUnsigned::divide_with_remainder`], which leaves the remainder in
//!   the receiver and writes the quotient elsewhere
//! - [`BigUnsigned::increment`], [`BigUnsigned::decrement`]
//!
//! The standard operator traits and the `try_*` value-returning forms are
//! built on top of them.

mod alias;
mod conv;
mod core;
mod operators;
mod ops;

pub use self::alias::{Operand, Target};
pub use self::conv::Primitive;
pub use self::core::{BLOCK_BITS, BigUnsigned, Block};

//! Error type shared by the block store and the arithmetic engine.
//!
//! Every failure here is a contract violation by the caller, not a transient
//! condition: nothing inside the crate retries. Operations signal the error
//! at the point of violation and never leave a partially written value
//! behind, with one documented exception: a subtraction that would go
//! negative resets its receiver to zero before returning the error.

use thiserror::Error;

/// Errors raised by [`BigUnsigned`](crate::BigUnsigned) and
/// [`BlockStore`](crate::BlockStore) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A negative signed primitive was given to an unsigned constructor.
    #[error("cannot construct an unsigned value from a negative number")]
    NegativeConstruction,

    /// The stored value does not fit in the requested primitive type.
    #[error("value is too big to fit in the requested type")]
    RangeOverflow,

    /// A subtraction or decrement would produce a negative result.
    #[error("subtraction would produce a negative result")]
    ArithmeticUnderflow,

    /// The divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Quotient and remainder were asked to share one value.
    #[error("cannot write quotient and remainder into the same value")]
    AliasedResultConflict,

    /// The backing buffer could not be allocated.
    #[error("block buffer allocation failed")]
    AllocationFailure,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

//! Operator traits and value-returning forms for `BigUnsigned`
//!
//! Everything here is a thin layer over the copy-less operations in
//! `ops.rs`. The value-returning operators build a fresh result; the
//! compound assignment operators pass the receiver as an operand and let the
//! aliasing redirect do its work.
//!
//! Operators cannot report errors, so like the native integer types they
//! panic when subtraction would go negative or a divisor is zero. Use
//! [`BigUnsigned::try_sub`], [`BigUnsigned::try_div`] and
//! [`BigUnsigned::try_rem`] to get a [`Result`] instead.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::error::Result;
use crate::unsigned::{BigUnsigned, Operand};

impl BigUnsigned {
    /// Returns `self - rhs`.
    ///
    /// # Errors
    /// [`Error::ArithmeticUnderflow`](crate::Error::ArithmeticUnderflow) if
    /// `rhs > self`.
    pub fn try_sub(&self, rhs: &BigUnsigned) -> Result<BigUnsigned> {
        let mut out = BigUnsigned::new();
        out.subtract(self, rhs)?;
        Ok(out)
    }

    /// Returns the quotient and remainder of `self / rhs`.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `rhs` is
    /// zero.
    pub fn try_div_rem(&self, rhs: &BigUnsigned) -> Result<(BigUnsigned, BigUnsigned)> {
        let mut quotient = BigUnsigned::new();
        let mut remainder = self.clone();
        remainder.divide_with_remainder(rhs, &mut quotient)?;
        Ok((quotient, remainder))
    }

    /// Returns `self / rhs`.
    pub fn try_div(&self, rhs: &BigUnsigned) -> Result<BigUnsigned> {
        self.try_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Returns `self % rhs`.
    pub fn try_rem(&self, rhs: &BigUnsigned) -> Result<BigUnsigned> {
        self.try_div_rem(rhs).map(|(_, remainder)| remainder)
    }
}

impl Add<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: &BigUnsigned) -> BigUnsigned {
        let mut out = BigUnsigned::new();
        BigUnsigned::add(&mut out, self, rhs);
        out
    }
}

/// Panics if `rhs > self`.
impl Sub<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn sub(self, rhs: &BigUnsigned) -> BigUnsigned {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: &BigUnsigned) -> BigUnsigned {
        let mut out = BigUnsigned::new();
        out.multiply(self, rhs);
        out
    }
}

/// Panics if `rhs` is zero.
impl Div<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn div(self, rhs: &BigUnsigned) -> BigUnsigned {
        self.try_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Panics if `rhs` is zero.
impl Rem<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn rem(self, rhs: &BigUnsigned) -> BigUnsigned {
        self.try_rem(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl AddAssign<&BigUnsigned> for BigUnsigned {
    fn add_assign(&mut self, rhs: &BigUnsigned) {
        BigUnsigned::add(self, Operand::Receiver, rhs);
    }
}

/// Panics if `rhs > self`, after resetting `self` to zero.
impl SubAssign<&BigUnsigned> for BigUnsigned {
    fn sub_assign(&mut self, rhs: &BigUnsigned) {
        if let Err(e) = self.subtract(Operand::Receiver, rhs) {
            panic!("{e}");
        }
    }
}

impl MulAssign<&BigUnsigned> for BigUnsigned {
    fn mul_assign(&mut self, rhs: &BigUnsigned) {
        self.multiply(Operand::Receiver, rhs);
    }
}

/// Panics if `rhs` is zero.
impl DivAssign<&BigUnsigned> for BigUnsigned {
    fn div_assign(&mut self, rhs: &BigUnsigned) {
        let mut quotient = BigUnsigned::new();
        if let Err(e) = self.divide_with_remainder(rhs, &mut quotient) {
            panic!("{e}");
        }
        // `self` holds the remainder; replace it with the quotient.
        *self = quotient;
    }
}

/// Panics if `rhs` is zero.
impl RemAssign<&BigUnsigned> for BigUnsigned {
    fn rem_assign(&mut self, rhs: &BigUnsigned) {
        let mut quotient = BigUnsigned::new();
        if let Err(e) = self.divide_with_remainder(rhs, &mut quotient) {
            panic!("{e}");
        }
    }
}

/// Implements the owned-operand combinations of a binary operator in terms
/// of the borrowed one.
macro_rules! forward_binop {
    ($($imp:ident $method:ident, $assign:ident $assign_method:ident;)*) => {$(
        impl $imp<BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: &BigUnsigned) -> BigUnsigned {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigUnsigned> for &BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                $imp::$method(self, &rhs)
            }
        }

        impl $assign<BigUnsigned> for BigUnsigned {
            fn $assign_method(&mut self, rhs: BigUnsigned) {
                $assign::$assign_method(self, &rhs);
            }
        }
    )*};
}

forward_binop! {
    Add add, AddAssign add_assign;
    Sub sub, SubAssign sub_assign;
    Mul mul, MulAssign mul_assign;
    Div div, DivAssign div_assign;
    Rem rem, RemAssign rem_assign;
}

//! Copy-less arithmetic on `BigUnsigned`
//!
//! Each operation here writes its result into the receiver, growing the
//! receiver's buffer as needed, and re-establishes canonical form before
//! returning. Inputs are [`Operand`]s, so the receiver may also be an input;
//! see [`crate::Operand`] for how that case is handled.
//!
//! Carry and borrow are detected by comparing the wrapped block result with
//! its inputs, so no operation except multiplication under the `speed`
//! feature needs a type wider than a block.

use crate::error::{Error, Result};
use crate::unsigned::{BLOCK_BITS, BigUnsigned, Block, Operand, Target};

impl BigUnsigned {
    /// Sets `self` to `a + b`.
    pub fn add<'a>(&mut self, a: impl Into<Operand<'a>>, b: impl Into<Operand<'a>>) {
        self.redirect_if_aliased(a.into(), b.into(), add_into);
    }

    /// Sets `self` to `a - b`.
    ///
    /// # Errors
    /// [`Error::ArithmeticUnderflow`] if `a < b`. The receiver is left at
    /// zero in that case.
    pub fn subtract<'a>(&mut self, a: impl Into<Operand<'a>>, b: impl Into<Operand<'a>>) -> Result<()> {
        self.redirect_if_aliased(a.into(), b.into(), subtract_into)
    }

    /// Sets `self` to `a * b`.
    pub fn multiply<'a>(&mut self, a: impl Into<Operand<'a>>, b: impl Into<Operand<'a>>) {
        self.redirect_if_aliased(a.into(), b.into(), multiply_into);
    }

    /// Divides `self` by `divisor` in place: the quotient is written to
    /// `quotient` and the remainder is left in `self`.
    ///
    /// A divisor that is the receiver is copied first.
    ///
    /// # Errors
    /// - [`Error::AliasedResultConflict`] if `quotient` is the receiver
    /// - [`Error::DivisionByZero`] if `divisor` is zero
    ///
    /// Neither `self` nor `quotient` is modified on error.
    pub fn divide_with_remainder<'a>(
        &mut self,
        divisor: impl Into<Operand<'a>>,
        quotient: impl Into<Target<'a>>,
    ) -> Result<()> {
        let quotient = match quotient.into() {
            Target::Receiver => return Err(Error::AliasedResultConflict),
            Target::Value(quotient) => quotient,
        };

        match divisor.into() {
            Operand::Value(divisor) => self.divide_into(divisor, quotient),
            Operand::Receiver => {
                let divisor = self.clone();
                self.divide_into(&divisor, quotient)
            }
        }
    }

    /// Adds one.
    pub fn increment(&mut self) {
        let one = BigUnsigned::from(1 as Block);
        self.add(Operand::Receiver, &one);
    }

    /// Subtracts one.
    ///
    /// # Errors
    /// [`Error::ArithmeticUnderflow`] if `self` is zero.
    pub fn decrement(&mut self) -> Result<()> {
        let one = BigUnsigned::from(1 as Block);
        self.subtract(Operand::Receiver, &one)
    }

    /// Schoolbook long division in base 2⁶⁴, one quotient bit at a time.
    ///
    /// For each quotient block from the most significant down, and each bit
    /// of it from the top, the divisor shifted to that bit position is
    /// subtracted from the running remainder into a scratch buffer. The bit
    /// is kept, and the scratch committed, only if the subtraction did not
    /// borrow.
    fn divide_into(&mut self, divisor: &BigUnsigned, quotient: &mut BigUnsigned) -> Result<()> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.len() < divisor.len() {
            quotient.reset();
            return Ok(());
        }

        let divisor = divisor.blocks();
        let dividend_len = self.len();

        // One extra zero block on top so the shifted divisor always fits.
        self.store.ensure_capacity_preserving(dividend_len + 1);
        self.store.buffer_mut()[dividend_len] = 0;
        self.store.set_len(dividend_len + 1);

        let quotient_len = dividend_len - divisor.len() + 1;
        quotient.store.ensure_capacity_destructive(quotient_len);

        let digits = &mut quotient.store.buffer_mut()[..quotient_len];
        digits.fill(0);

        let remainder = self.store.buffer_mut();
        let mut scratch = vec![0 as Block; dividend_len + 1];

        for i in (0..quotient_len).rev() {
            for bit in (0..BLOCK_BITS).rev() {
                let mut borrow = false;
                let mut k = i;

                for j in 0..=divisor.len() {
                    let mut diff = remainder[k].wrapping_sub(shifted_block(divisor, j, bit));
                    let mut borrow_out = diff > remainder[k];
                    if borrow {
                        borrow_out |= diff == 0;
                        diff = diff.wrapping_sub(1);
                    }
                    scratch[k] = diff;
                    borrow = borrow_out;
                    k += 1;
                }

                while k < dividend_len && borrow {
                    borrow = remainder[k] == 0;
                    scratch[k] = remainder[k].wrapping_sub(1);
                    k += 1;
                }

                if !borrow {
                    digits[i] |= 1 << bit;
                    remainder[i..k].copy_from_slice(&scratch[i..k]);
                }
            }
        }

        quotient.store.set_len(quotient_len);
        quotient.trim();
        self.trim();

        Ok(())
    }
}

/// `out = a + b`, with `out` distinct from both inputs.
fn add_into(out: &mut BigUnsigned, a: &BigUnsigned, b: &BigUnsigned) {
    if a.is_zero() {
        out.assign(b);
        return;
    }
    if b.is_zero() {
        out.assign(a);
        return;
    }

    let (long, short) = if a.len() >= b.len() {
        (a.blocks(), b.blocks())
    } else {
        (b.blocks(), a.blocks())
    };

    // Room for a final carry.
    out.store.ensure_capacity_destructive(long.len() + 1);
    let dst = out.store.buffer_mut();

    let mut carry = false;
    for (i, (&l, &s)) in long.iter().zip(short).enumerate() {
        let mut sum = l.wrapping_add(s);
        let mut carry_out = sum < l;
        if carry {
            sum = sum.wrapping_add(1);
            carry_out |= sum == 0;
        }
        dst[i] = sum;
        carry = carry_out;
    }

    let mut i = short.len();
    while i < long.len() && carry {
        let sum = long[i].wrapping_add(1);
        carry = sum == 0;
        dst[i] = sum;
        i += 1;
    }

    let len = if carry {
        dst[i] = 1;
        long.len() + 1
    } else {
        dst[i..long.len()].copy_from_slice(&long[i..]);
        long.len()
    };

    out.store.set_len(len);
}

/// `out = a - b`, with `out` distinct from both inputs. `out` is reset to
/// zero on underflow.
fn subtract_into(out: &mut BigUnsigned, a: &BigUnsigned, b: &BigUnsigned) -> Result<()> {
    if b.is_zero() {
        out.assign(a);
        return Ok(());
    }
    if a.len() < b.len() {
        out.reset();
        return Err(Error::ArithmeticUnderflow);
    }

    let (a, b) = (a.blocks(), b.blocks());

    out.store.ensure_capacity_destructive(a.len());
    let dst = out.store.buffer_mut();

    let mut borrow = false;
    for (i, (&x, &y)) in a.iter().zip(b).enumerate() {
        let mut diff = x.wrapping_sub(y);
        let mut borrow_out = diff > x;
        if borrow {
            borrow_out |= diff == 0;
            diff = diff.wrapping_sub(1);
        }
        dst[i] = diff;
        borrow = borrow_out;
    }

    let mut i = b.len();
    while i < a.len() && borrow {
        borrow = a[i] == 0;
        dst[i] = a[i].wrapping_sub(1);
        i += 1;
    }

    if borrow {
        out.reset();
        return Err(Error::ArithmeticUnderflow);
    }

    dst[i..a.len()].copy_from_slice(&a[i..]);

    out.store.set_len(a.len());
    out.trim();

    Ok(())
}

/// `out = a * b`, with `out` distinct from both inputs.
fn multiply_into(out: &mut BigUnsigned, a: &BigUnsigned, b: &BigUnsigned) {
    if a.is_zero() || b.is_zero() {
        out.reset();
        return;
    }

    let len = a.len() + b.len();
    out.store.ensure_capacity_destructive(len);

    let dst = &mut out.store.buffer_mut()[..len];
    dst.fill(0);
    multiply_blocks(dst, a.blocks(), b.blocks());

    out.store.set_len(len);
    out.trim();
}

/// Accumulates `a * b` into the zeroed `dst` by adding `b`, shifted left by
/// the bit's position, for every set bit of `a`.
#[cfg(not(feature = "speed"))]
fn multiply_blocks(dst: &mut [Block], a: &[Block], b: &[Block]) {
    for (i, &digit) in a.iter().enumerate() {
        for bit in 0..BLOCK_BITS {
            if digit & (1 << bit) == 0 {
                continue;
            }

            let mut carry = false;
            let mut k = i;

            for j in 0..=b.len() {
                let mut sum = dst[k].wrapping_add(shifted_block(b, j, bit));
                let mut carry_out = sum < dst[k];
                if carry {
                    sum = sum.wrapping_add(1);
                    carry_out |= sum == 0;
                }
                dst[k] = sum;
                carry = carry_out;
                k += 1;
            }

            while carry {
                dst[k] = dst[k].wrapping_add(1);
                carry = dst[k] == 0;
                k += 1;
            }
        }
    }
}

/// Accumulates `a * b` into the zeroed `dst` row by row through a
/// double-width accumulator.
#[cfg(feature = "speed")]
fn multiply_blocks(dst: &mut [Block], a: &[Block], b: &[Block]) {
    for (i, &x) in a.iter().enumerate() {
        let mut carry: u128 = 0;

        for (j, &y) in b.iter().enumerate() {
            let acc = u128::from(dst[i + j]) + u128::from(x) * u128::from(y) + carry;
            dst[i + j] = acc as Block;
            carry = acc >> BLOCK_BITS;
        }

        dst[i + b.len()] = carry as Block;
    }
}

/// Block `x` of `num` shifted left by `y` bits, where `x` may equal
/// `num.len()` to pick up the bits shifted out of the top block.
///
/// `y` must be less than [`BLOCK_BITS`].
fn shifted_block(num: &[Block], x: usize, y: u32) -> Block {
    let low = if x == 0 || y == 0 {
        0
    } else {
        num[x - 1] >> (BLOCK_BITS - y)
    };
    let high = if x == num.len() { 0 } else { num[x] << y };

    low | high
}

//! Operand addressing for copy-less operations
//!
//! A copy-less operation writes its result into a receiver (`self`) and
//! reads its inputs through [`Operand`]s. An operand is either some other
//! value or the receiver itself, which is how a call such as "set `v` to
//! `v + v`" is spelled.
//!
//! Writing block by block into a receiver that is also an input would
//! clobber the input mid-computation. [`BigUnsigned::redirect_if_aliased`]
//! is the single place that handles this: when any operand names the
//! receiver, the result is computed into a fresh temporary and then copied
//! into the receiver. Every binary copy-less operation goes through it.

use crate::unsigned::BigUnsigned;

/// Input of a copy-less operation.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// The value receiving the result.
    Receiver,
    /// A value distinct from the receiver.
    Value(&'a BigUnsigned),
}

impl<'a> Operand<'a> {
    pub(crate) fn is_receiver(&self) -> bool {
        matches!(self, Operand::Receiver)
    }

    /// Resolves the operand against a snapshot of the receiver.
    pub(crate) fn resolve<'b>(self, receiver: &'b BigUnsigned) -> &'b BigUnsigned
    where
        'a: 'b,
    {
        match self {
            Operand::Receiver => receiver,
            Operand::Value(value) => value,
        }
    }
}

impl<'a> From<&'a BigUnsigned> for Operand<'a> {
    fn from(value: &'a BigUnsigned) -> Self {
        Operand::Value(value)
    }
}

/// Destination of the quotient in
/// [`BigUnsigned::divide_with_remainder`].
#[derive(Debug)]
pub enum Target<'a> {
    /// The dividend itself. Always rejected: the remainder already lives
    /// there.
    Receiver,
    /// A value distinct from the dividend.
    Value(&'a mut BigUnsigned),
}

impl<'a> From<&'a mut BigUnsigned> for Target<'a> {
    fn from(value: &'a mut BigUnsigned) -> Self {
        Target::Value(value)
    }
}

impl BigUnsigned {
    /// Runs `kernel(out, a, b)` with `self` as `out`, redirecting through a
    /// temporary when either operand is the receiver.
    ///
    /// `kernel` may assume `out` is distinct from both inputs. Whatever
    /// state it leaves its output in, including the zero reset on error, is
    /// what the receiver ends up holding.
    pub(crate) fn redirect_if_aliased<F, R>(&mut self, a: Operand<'_>, b: Operand<'_>, kernel: F) -> R
    where
        F: FnOnce(&mut BigUnsigned, &BigUnsigned, &BigUnsigned) -> R,
    {
        match (a, b) {
            (Operand::Value(a), Operand::Value(b)) => kernel(self, a, b),
            (a, b) => {
                tracing::trace!(
                    left = a.is_receiver(),
                    right = b.is_receiver(),
                    "aliased operands, computing into a temporary"
                );

                let mut scratch = BigUnsigned::new();
                let outcome = {
                    let receiver = &*self;
                    kernel(&mut scratch, a.resolve(receiver), b.resolve(receiver))
                };
                self.assign(&scratch);

                outcome
            }
        }
    }
}

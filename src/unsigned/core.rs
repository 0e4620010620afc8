//! Arbitrary-precision unsigned integer value
//!
//! `BigUnsigned` stores a non-negative integer as a little-endian sequence
//! of 64-bit blocks, i.e. as if it were written in base 2⁶⁴. The block at
//! index 0 is the least significant.
//!
//! Every value is kept in **canonical form**: either it has no blocks at
//! all, or its most significant block is non-zero. Two consequences follow
//! and the rest of the engine relies on both:
//! - zero is exactly the value with length 0
//! - a longer value is always a larger value

use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::store::BlockStore;

/// One storage unit of a [`BigUnsigned`]; a digit in base 2⁶⁴.
pub type Block = u64;

/// Width of a [`Block`] in bits.
pub const BLOCK_BITS: u32 = Block::BITS;

/// Arbitrary-precision unsigned integer.
///
/// Cloning always deep-copies the blocks; no two values ever share a
/// buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    pub(crate) store: BlockStore<Block>,
}

impl BigUnsigned {
    /// The value zero. Does not allocate.
    pub const fn new() -> Self {
        Self {
            store: BlockStore::new(),
        }
    }

    /// Builds a value from little-endian blocks. Leading (most significant)
    /// zero blocks are stripped.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut out = Self {
            store: BlockStore::from_slice(blocks),
        };
        out.trim();
        out
    }

    /// The canonical blocks, least significant first.
    pub fn blocks(&self) -> &[Block] {
        self.store.as_slice()
    }

    /// Number of significant blocks.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Number of allocated blocks.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// A value is zero if and only if it has no blocks.
    pub fn is_zero(&self) -> bool {
        self.store.is_empty()
    }

    /// Overwrites this value with a copy of `other`, reusing the buffer.
    pub fn assign(&mut self, other: &BigUnsigned) {
        self.store.assign(&other.store);
    }

    /// Resets to canonical zero.
    pub(crate) fn reset(&mut self) {
        self.store.clear();
    }

    /// Drops most significant zero blocks to restore canonical form.
    pub(crate) fn trim(&mut self) {
        let len = self
            .store
            .as_slice()
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |top| top + 1);

        self.store.set_len(len);
    }

    /// Three-way comparison.
    ///
    /// Canonical form makes length a valid first test: a value with more
    /// blocks is strictly greater. Equal-length values are compared block by
    /// block from the most significant end.
    pub fn compare_to(&self, other: &BigUnsigned) -> Ordering {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => self
                .blocks()
                .iter()
                .rev()
                .zip(other.blocks().iter().rev())
                .map(|(a, b)| a.cmp(b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal),
            ord => ord,
        }
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl Debug for BigUnsigned {
    /// Prints the canonical blocks, least significant first.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("BigUnsigned").field(&self.blocks()).finish()
    }
}

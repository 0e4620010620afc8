//! Growable block buffer with separate length and capacity
//!
//! `BlockStore` owns a heap buffer of fixed-width blocks. The buffer is
//! always exactly `capacity` blocks long; only the first `len` of them carry
//! meaning. Everything past `len` is scratch space that callers must treat
//! as uninitialized even though it holds well-defined values.
//!
//! Two growth primitives are provided:
//! - [`BlockStore::ensure_capacity_destructive`] for callers that are about
//!   to overwrite every block anyway
//! - [`BlockStore::ensure_capacity_preserving`] for callers that must keep
//!   the live prefix intact
//!
//! Neither primitive ever shrinks the buffer.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::unsigned::Block;

/// Owned sequence of blocks with explicit length/capacity bookkeeping.
///
/// Invariant: `len <= capacity`, where `capacity == blocks.len()`.
pub struct BlockStore<B = Block> {
    blocks: Vec<B>,
    len: usize,
}

impl<B: Copy + Default> BlockStore<B> {
    /// Creates an empty store without allocating.
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty store with room for `capacity` blocks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: vec![B::default(); capacity],
            len: 0,
        }
    }

    /// Like [`BlockStore::with_capacity`], but reports allocation failure
    /// instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure)?;
        blocks.resize(capacity, B::default());

        Ok(Self { blocks, len: 0 })
    }

    /// Creates a store holding a copy of `blocks`, with capacity equal to
    /// its length.
    pub fn from_slice(blocks: &[B]) -> Self {
        Self {
            blocks: blocks.to_vec(),
            len: blocks.len(),
        }
    }

    /// Number of allocated blocks.
    pub fn capacity(&self) -> usize {
        self.blocks.len()
    }

    /// Number of significant blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds no significant blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the block at `index`, or `None` past the significant length.
    pub fn get(&self, index: usize) -> Option<B> {
        self.as_slice().get(index).copied()
    }

    /// The significant blocks, `[0, len)`.
    pub fn as_slice(&self) -> &[B] {
        &self.blocks[..self.len]
    }

    /// Sets the length to zero. The buffer is kept for reuse.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Ensures room for at least `capacity` blocks, discarding the current
    /// contents if the buffer has to be replaced.
    ///
    /// After growth the blocks in `[0, len)` are no longer meaningful; the
    /// caller is expected to overwrite them.
    pub fn ensure_capacity_destructive(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            tracing::trace!(
                from = self.capacity(),
                to = capacity,
                "replacing block buffer"
            );

            self.blocks = vec![B::default(); capacity];
        }
    }

    /// Ensures room for at least `capacity` blocks, keeping the blocks in
    /// `[0, len)`.
    pub fn ensure_capacity_preserving(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            tracing::trace!(
                from = self.capacity(),
                to = capacity,
                live = self.len,
                "growing block buffer"
            );

            let mut grown = vec![B::default(); capacity];
            grown[..self.len].copy_from_slice(&self.blocks[..self.len]);
            self.blocks = grown;
        }
    }

    /// Deep-copies `other` into this store, reusing the buffer when it is
    /// already large enough.
    ///
    /// The borrow rules keep `other` from being `self`, so there is no
    /// self-assignment case to guard against.
    pub fn assign(&mut self, other: &Self) {
        self.ensure_capacity_destructive(other.len);
        self.blocks[..other.len].copy_from_slice(other.as_slice());
        self.len = other.len;
    }

    /// The whole allocated buffer, including the scratch tail.
    pub(crate) fn buffer_mut(&mut self) -> &mut [B] {
        &mut self.blocks
    }

    /// Sets the significant length. `len` must not exceed the capacity.
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }
}

impl<B: Copy + Default> Default for BlockStore<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies only the significant blocks; the clone's capacity equals the
/// source's length.
impl<B: Copy + Default> Clone for BlockStore<B> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

/// Two stores are equal when they have the same length and the same blocks
/// up to that length. Capacity is ignored.
impl<B: Copy + Default + PartialEq> PartialEq for BlockStore<B> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<B: Copy + Default + Eq> Eq for BlockStore<B> {}

impl<B: Copy + Default + Hash> Hash for BlockStore<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<B: Copy + Default + Debug> Debug for BlockStore<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BlockStore")
            .field("blocks", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}

//! Block storage
//!
//! This module defines `BlockStore`, the growable buffer of fixed-width
//! blocks that backs every arbitrary-precision value in the crate.
//!
//! The store knows nothing about numbers. It tracks how many blocks are
//! allocated (capacity) separately from how many are meaningful (length),
//! deep-copies on clone, and compares structurally over the meaningful
//! prefix. Canonical form and arithmetic live one layer up.

mod core;

pub use self::core::BlockStore;

//! Arbitrary-precision unsigned integer arithmetic
//!
//! This crate provides `BigUnsigned`, a non-negative integer stored as a
//! growable little-endian sequence of 64-bit blocks, together with the
//! arithmetic primitives that signed or rational big-number layers are
//! built on: comparison, addition, subtraction, multiplication, division
//! with remainder, increment/decrement and conversion to and from the
//! fixed-width integer types.
//!
//! # Module overview
//!
//! - `store`  
//!   The block buffer. `BlockStore` tracks allocated capacity separately
//!   from significant length and offers two growth primitives: one that
//!   discards the old contents and one that preserves them.
//!
//! - `unsigned`  
//!   The arithmetic engine. Values are kept in canonical form (no most
//!   significant zero block), which makes zero exactly the empty value and
//!   lets comparison start from block counts.
//!
//!   Operations write into a receiver and take their inputs as
//!   [`Operand`]s, so a receiver may also be an input (`v = v + v`). Such
//!   calls are computed into a temporary first and never observe a
//!   half-written operand.
//!
//! - `error`  
//!   A single [`Error`] enum for every contract violation: negative
//!   construction, range overflow on conversion, subtraction underflow,
//!   division by zero, an aliased quotient, and allocation failure.
//!
//! # Design goals
//!
//! - Every value exclusively owns its buffer; clones are deep
//! - Explicit, typed errors instead of silent wrapping
//! - No global state, no threads, no I/O
//!
//! Textual radix conversion, formatting and signed integers are left to
//! higher layers.

mod error;
mod store;
mod unsigned;

pub use error::{Error, Result};
pub use store::BlockStore;
pub use unsigned::{BLOCK_BITS, BigUnsigned, Block, Operand, Primitive, Target};

//! Skein-512 (512-bit output).
//!
//! Portable, `no_std`, pure Rust implementation of the Skein-512 hash in its
//! simple sequential, unkeyed, fixed-output configuration: the Threefish-512
//! tweakable block cipher chained through UBI (Unique Block Iteration), plus
//! a typed ingestion layer for hashing structured values.
//!
//! # Types
//!
//! - [`Skein512`] - streaming hasher implementing [`Digest`].
//! - [`Skein512Encoder`] - "hash anything" sink with typed ingestion, a
//!   memoized digest, and a hex accessor.
//!
//! This crate has zero library dependencies outside the workspace. Dev-only
//! dependencies are used for oracle testing and benchmarking.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod encode;
mod hash;
mod threefish;

pub use encode::Skein512Encoder;
pub use hash::Skein512;
pub use traits::Digest;

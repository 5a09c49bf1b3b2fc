//! Skein-512 hashing: UBI chaining over Threefish-512.
//!
//! The chaining value doubles as the cipher key for the next block; the
//! tweak carries the running byte position and the phase flags. The message
//! phase absorbs 64-byte blocks, and a second, OUTPUT-typed pass over a
//! counter block derives the digest.

#![allow(clippy::indexing_slicing)] // Fixed-size block and word indexing

use traits::Digest;

use crate::threefish;

const BLOCK_LEN: usize = 64;

// Tweak word 1 layout: block type in bits 56..62, FIRST at bit 62, FINAL at
// bit 63. Only the MESSAGE and OUTPUT block types occur in this
// configuration.
const T1_FIRST: u64 = 1 << 62;
const T1_FINAL: u64 = 1 << 63;
const T1_TYPE_MSG: u64 = 48 << 56;
const T1_TYPE_OUT: u64 = 63 << 56;

/// Initial chaining value for the 512-bit-block, 512-bit-output
/// configuration (the precomputed configuration-block UBI result from the
/// Skein specification).
const IV: [u64; 8] = [
  0x4903_ADFF_749C_51CE,
  0x0D95_DE39_9746_DF03,
  0x8FD1_9341_27C7_9BCE,
  0x9A25_5629_FF35_2CB1,
  0x5DB6_2599_DF6C_A7B0,
  0xEABE_394C_A9D5_C3F4,
  0x9911_12C7_1A75_B523,
  0xAE18_A40B_660F_CC33,
];

/// One UBI block step.
///
/// Advances the position counter by `byte_count` (the counter covers the
/// bytes of the block being absorbed), encrypts the block with the chaining
/// value as key, feeds the plaintext forward into the ciphertext, and clears
/// FIRST.
#[inline(always)]
fn ubi_block(h: &mut [u64; 8], t: &mut [u64; 2], block: &[u8; BLOCK_LEN], byte_count: u64) {
  let (chunks, _) = block.as_chunks::<8>();
  let mut m = [0u64; 8];
  for (i, c) in chunks.iter().enumerate() {
    m[i] = u64::from_le_bytes(*c);
  }

  t[0] = t[0].wrapping_add(byte_count);
  let c = threefish::encrypt_block(h, t, &m);
  for i in 0..8 {
    h[i] = c[i] ^ m[i];
  }
  t[1] &= !T1_FIRST;
}

/// Skein-512 streaming hasher (512-bit output).
///
/// Simple sequential, unkeyed mode. The digest is a pure function of the
/// ingested byte sequence; chunk boundaries across [`update`] calls are
/// never observable.
///
/// Not synchronized: concurrent use from multiple threads races on the
/// internal buffer and chaining value. Use one instance per thread.
///
/// [`update`]: Digest::update
#[derive(Clone)]
pub struct Skein512 {
  h: [u64; 8],
  t: [u64; 2],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
}

impl Default for Skein512 {
  #[inline]
  fn default() -> Self {
    Self {
      h: IV,
      t: [0, T1_FIRST | T1_TYPE_MSG],
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
    }
  }
}

impl Digest for Skein512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      // A buffered block is only absorbed once more input shows up: the
      // last block of the message must wait for finalize, which is the only
      // place allowed to set FINAL.
      if self.buf_len == BLOCK_LEN && !data.is_empty() {
        ubi_block(&mut self.h, &mut self.t, &self.buf, BLOCK_LEN as u64);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      // If `rest` is empty, hold the last full block back for finalization.
      let (to_absorb, last_full) = if rest.is_empty() {
        (&blocks[..blocks.len() - 1], Some(blocks[blocks.len() - 1]))
      } else {
        (blocks, None)
      };

      for block in to_absorb {
        ubi_block(&mut self.h, &mut self.t, block, BLOCK_LEN as u64);
      }

      if let Some(last) = last_full {
        self.buf.copy_from_slice(&last);
        self.buf_len = BLOCK_LEN;
      }
    }
    data = rest;

    if !data.is_empty() {
      self.buf[..data.len()].copy_from_slice(data);
      self.buf_len = data.len();
    }
  }

  fn finalize(&self) -> Self::Output {
    let mut h = self.h;
    let mut t = self.t;
    let mut buf = self.buf;

    // Close the message chain: zero-pad, absorb with the true byte count
    // (not the padded length), FINAL set.
    buf[self.buf_len..].fill(0);
    t[1] |= T1_FINAL;
    ubi_block(&mut h, &mut t, &buf, self.buf_len as u64);

    // Output transform: one OUTPUT-typed pass over the counter block i = 0.
    // Larger counters would yield further 64-byte output blocks; this
    // configuration fixes the output at 512 bits.
    let mut t = [0u64, T1_FIRST | T1_FINAL | T1_TYPE_OUT];
    let mut counter = [0u8; BLOCK_LEN];
    counter[..8].copy_from_slice(&0u64.to_le_bytes());
    ubi_block(&mut h, &mut t, &counter, 8);

    let mut out = [0u8; 64];
    for (i, word) in h.iter().copied().enumerate() {
      out[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
    }
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  #[test]
  fn a_full_block_is_retained_until_finalize() {
    let mut h = Skein512::new();
    h.update(&[0u8; BLOCK_LEN]);

    // Exactly one block in: nothing absorbed yet, FIRST still set.
    assert_eq!(h.buf_len, BLOCK_LEN);
    assert_eq!(h.t[0], 0);
    assert_ne!(h.t[1] & T1_FIRST, 0);

    // One more byte forces the buffered block through.
    h.update(&[0u8]);
    assert_eq!(h.buf_len, 1);
    assert_eq!(h.t[0], BLOCK_LEN as u64);
    assert_eq!(h.t[1] & T1_FIRST, 0);
  }

  #[test]
  fn empty_updates_are_invisible() {
    let mut a = Skein512::new();
    a.update(b"");
    a.update(b"abc");
    a.update(b"");

    assert_eq!(a.finalize(), Skein512::digest(b"abc"));
  }

  #[test]
  fn finalize_does_not_disturb_streaming() {
    let msg: Vec<u8> = (0..200u8).collect();

    let mut h = Skein512::new();
    h.update(&msg[..100]);
    let _ = h.finalize();
    h.update(&msg[100..]);

    assert_eq!(h.finalize(), Skein512::digest(&msg));
  }

  #[test]
  fn reset_restores_the_initial_state() {
    let mut h = Skein512::new();
    h.update(b"some bytes");
    h.reset();
    h.update(b"abc");

    assert_eq!(h.finalize(), Skein512::digest(b"abc"));
  }

  #[test]
  fn position_counter_separates_identical_blocks() {
    // All-zero messages of different lengths reach the cipher with
    // identical block contents; only the tweak's byte counter and padding
    // rules distinguish them.
    let empty = Skein512::digest(b"");
    let one_block = Skein512::digest(&[0u8; 64]);
    let two_blocks = Skein512::digest(&[0u8; 128]);

    assert_ne!(empty, one_block);
    assert_ne!(one_block, two_blocks);
  }
}

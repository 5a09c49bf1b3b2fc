//! Threefish-512 block cipher, encryption direction only.
//!
//! Skein-512 uses Threefish-512 as its compression primitive: 72
//! add-rotate-XOR rounds over eight 64-bit words, with a subkey injected
//! every four rounds out of a 9-word cyclic key schedule and a 3-word cyclic
//! tweak schedule.

#![allow(clippy::indexing_slicing)] // Fixed-size word arrays with fixed indices

/// Key-schedule parity constant (`C240` in the Skein specification).
///
/// The ninth extended-key word is the XOR of all eight key words and this
/// constant, giving the schedule its period of 9.
const KS_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Rotation amounts: 8 rounds worth of 4 per-mix values, reused cyclically
/// across all 72 rounds (round `r` uses row `r % 8`).
const ROT: [[u32; 4]; 8] = [
  [46, 36, 19, 37],
  [33, 27, 14, 42],
  [17, 49, 36, 39],
  [44, 9, 54, 56],
  [39, 30, 34, 24],
  [13, 50, 10, 17],
  [25, 29, 39, 43],
  [8, 35, 56, 22],
];

/// Word pairs mixed in each round.
///
/// This is the 8-word permutation of the Threefish specification unrolled
/// into explicit pairings; the pattern repeats every four rounds.
const MIX_PAIRS: [[(usize, usize); 4]; 4] = [
  [(0, 1), (2, 3), (4, 5), (6, 7)],
  [(2, 1), (4, 7), (6, 5), (0, 3)],
  [(4, 1), (6, 3), (0, 5), (2, 7)],
  [(6, 1), (0, 7), (2, 5), (4, 3)],
];

#[inline(always)]
fn mix(x: &mut [u64; 8], a: usize, b: usize, r: u32) {
  x[a] = x[a].wrapping_add(x[b]);
  x[b] = x[b].rotate_left(r) ^ x[a];
}

/// Add subkey `s` into the state.
///
/// Subkeys are never materialized: they are read out of the cyclic key and
/// tweak schedules on the fly, and the last word absorbs the subkey index.
#[inline(always)]
fn inject(x: &mut [u64; 8], ks: &[u64; 9], ts: &[u64; 3], s: usize) {
  for i in 0..8 {
    x[i] = x[i].wrapping_add(ks[(s + i) % 9]);
  }
  x[5] = x[5].wrapping_add(ts[s % 3]);
  x[6] = x[6].wrapping_add(ts[(s + 1) % 3]);
  x[7] = x[7].wrapping_add(s as u64);
}

/// Encrypt one 512-bit block.
///
/// 72 rounds in 9 groups of 8, with subkey injections before the first round
/// and after every fourth round: 19 injections total. No allocation, no
/// retained state.
#[inline]
pub(crate) fn encrypt_block(key: &[u64; 8], tweak: &[u64; 2], block: &[u64; 8]) -> [u64; 8] {
  let mut ks = [0u64; 9];
  ks[8] = KS_PARITY;
  for i in 0..8 {
    ks[i] = key[i];
    ks[8] ^= key[i];
  }
  let ts = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

  let mut x = *block;
  inject(&mut x, &ks, &ts, 0);

  for d in 0..9 {
    for r in 0..4 {
      for (j, &(a, b)) in MIX_PAIRS[r].iter().enumerate() {
        mix(&mut x, a, b, ROT[r][j]);
      }
    }
    inject(&mut x, &ks, &ts, 2 * d + 1);

    for r in 0..4 {
      for (j, &(a, b)) in MIX_PAIRS[r].iter().enumerate() {
        mix(&mut x, a, b, ROT[r + 4][j]);
      }
    }
    inject(&mut x, &ks, &ts, 2 * d + 2);
  }

  x
}

#[cfg(test)]
mod tests {
  use super::*;

  const KEY: [u64; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
  const TWEAK: [u64; 2] = [0x55, 0xAA];
  const BLOCK: [u64; 8] = [10, 20, 30, 40, 50, 60, 70, 80];

  #[test]
  fn deterministic() {
    assert_eq!(
      encrypt_block(&KEY, &TWEAK, &BLOCK),
      encrypt_block(&KEY, &TWEAK, &BLOCK)
    );
  }

  #[test]
  fn key_tweak_and_block_all_matter() {
    let base = encrypt_block(&KEY, &TWEAK, &BLOCK);

    let mut key = KEY;
    key[3] ^= 1;
    assert_ne!(base, encrypt_block(&key, &TWEAK, &BLOCK));

    let mut tweak = TWEAK;
    tweak[1] ^= 1 << 63;
    assert_ne!(base, encrypt_block(&KEY, &tweak, &BLOCK));

    let mut block = BLOCK;
    block[0] ^= 1;
    assert_ne!(base, encrypt_block(&KEY, &TWEAK, &block));
  }

  #[test]
  fn tweak_words_are_not_interchangeable() {
    // T2 = T0 ^ T1 is symmetric, but the schedule positions of T0 and T1
    // are not; swapping them must change the ciphertext.
    let swapped = [TWEAK[1], TWEAK[0]];
    assert_ne!(
      encrypt_block(&KEY, &TWEAK, &BLOCK),
      encrypt_block(&KEY, &swapped, &BLOCK)
    );
  }
}

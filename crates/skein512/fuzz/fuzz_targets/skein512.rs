#![no_main]

use libfuzzer_sys::fuzz_target;
use skein512::Skein512;
use traits::Digest as _;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  // Data-dependent split to exercise streaming boundaries while still
  // hashing the entire buffer.
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  let ours = Skein512::digest(input);

  let mut h = Skein512::new();
  h.update(a);
  h.update(b);
  assert_eq!(ours, h.finalize());

  use skein::digest::consts::U64;
  use skein::digest::Digest as _;
  let ref_out = skein::Skein512::<U64>::digest(input);
  let mut expected = [0u8; 64];
  expected.copy_from_slice(&ref_out);
  assert_eq!(ours, expected);
});

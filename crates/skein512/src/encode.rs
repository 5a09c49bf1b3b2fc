//! Typed ingestion and digest accessors.
//!
//! [`Skein512Encoder`] serializes common value kinds to bytes and feeds them
//! to the streaming hasher, then memoizes the digest on first request.
//! Values are always encoded little-endian via `to_le_bytes`, independent of
//! host byte order, so digests agree across platforms.
//!
//! Byte strings and text are ingested raw, with no length prefix; callers
//! that need unambiguous framing must add their own delimiters or lengths
//! before ingestion.

#![allow(clippy::indexing_slicing)] // Hex digit lookups are nibble-indexed (< 16)

use traits::Digest;

use crate::hash::Skein512;

macro_rules! put_le {
  ($($name:ident: $ty:ty),* $(,)?) => {
    $(
      #[doc = concat!("Ingest a `", stringify!($ty), "` as its little-endian bytes.")]
      #[inline]
      pub fn $name(&mut self, v: $ty) -> &mut Self {
        self.sink(&v.to_le_bytes());
        self
      }
    )*
  };
}

/// Streaming "hash anything" sink over [`Skein512`] with a memoized digest.
///
/// Ingestion methods chain; the first call to [`digest`](Self::digest) (or
/// [`hex`](Self::hex)) finalizes the hash exactly once, and the encoder is
/// read-only from then on.
///
/// # Examples
///
/// ```
/// use skein512::Skein512Encoder;
///
/// let mut enc = Skein512Encoder::new();
/// enc.put_str("order/").put_u64(42).put_bool(true);
///
/// let digest = enc.digest();
/// assert_eq!(digest.len(), 64);
/// assert_eq!(enc.digest(), digest); // memoized
/// ```
///
/// # Panics
///
/// Ingestion methods panic if called after the digest has been taken.
#[derive(Clone, Default)]
pub struct Skein512Encoder {
  hasher: Skein512,
  digest: Option<[u8; 64]>,
}

impl Skein512Encoder {
  /// Create a new encoder with an empty message.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn sink(&mut self, bytes: &[u8]) {
    assert!(
      self.digest.is_none(),
      "Skein512Encoder ingested data after the digest was taken"
    );
    self.hasher.update(bytes);
  }

  /// Ingest raw bytes, unframed.
  #[inline]
  pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
    self.sink(bytes);
    self
  }

  /// Ingest text as its raw UTF-8 bytes, unframed.
  #[inline]
  pub fn put_str(&mut self, s: &str) -> &mut Self {
    self.sink(s.as_bytes());
    self
  }

  /// Ingest a boolean as a single byte, `0x01` for true and `0x00` for
  /// false.
  #[inline]
  pub fn put_bool(&mut self, v: bool) -> &mut Self {
    self.sink(&[v as u8]);
    self
  }

  put_le! {
    put_u8: u8,
    put_u16: u16,
    put_u32: u32,
    put_u64: u64,
    put_i8: i8,
    put_i16: i16,
    put_i32: i32,
    put_i64: i64,
  }

  /// Ingest an `f32` as the little-endian bytes of its IEEE-754 bit
  /// pattern.
  #[inline]
  pub fn put_f32(&mut self, v: f32) -> &mut Self {
    self.sink(&v.to_le_bytes());
    self
  }

  /// Ingest an `f64` as the little-endian bytes of its IEEE-754 bit
  /// pattern.
  #[inline]
  pub fn put_f64(&mut self, v: f64) -> &mut Self {
    self.sink(&v.to_le_bytes());
    self
  }

  /// Whether the digest has been taken.
  #[inline]
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.digest.is_some()
  }

  /// Finalize (on first call) and return the 64-byte digest.
  ///
  /// Subsequent calls are memoized lookups.
  pub fn digest(&mut self) -> [u8; 64] {
    match self.digest {
      Some(d) => d,
      None => {
        let d = self.hasher.finalize();
        self.digest = Some(d);
        d
      }
    }
  }

  /// Lowercase hex form of [`digest`](Self::digest): 128 characters, most
  /// significant nibble of each byte first.
  #[cfg(feature = "alloc")]
  pub fn hex(&mut self) -> alloc::string::String {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    let digest = self.digest();
    let mut s = alloc::string::String::with_capacity(2 * digest.len());
    for &byte in digest.iter() {
      s.push(HEX_DIGITS[(byte >> 4) as usize] as char);
      s.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    s
  }
}

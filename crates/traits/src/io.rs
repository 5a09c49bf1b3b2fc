//! I/O adapters for streaming digests.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`Read`](std::io::Read) and
//! [`Write`](std::io::Write) implementations to compute a digest transparently
//! during I/O.
//!
//! # Correctness
//!
//! - Read side: only bytes actually transferred are hashed (short reads are
//!   handled).
//! - Write side: bytes are hashed **before** they are handed to the inner
//!   writer, so on a failed write the caller knows exactly what was hashed
//!   versus what was durably written.
//! - Vectored I/O passes through to the inner reader/writer.

use crate::Digest;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and computes a digest transparently.
///
/// All reads pass through to the inner reader while the digest is updated
/// with the bytes actually read.
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with the hasher in its initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the digest of everything read so far.
  ///
  /// This does not consume the reader; further reads keep extending the
  /// hashed message.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap this `DigestReader`, returning the inner reader and discarding
  /// the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, D: Digest> std::io::Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and computes a digest transparently.
///
/// The digest is updated **before** writing to the inner writer.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with the hasher in its initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the digest of everything written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and discarding
  /// the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, D: Digest> std::io::Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.hasher.update(buf);
    self.inner.write(buf)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    for buf in bufs {
      self.hasher.update(buf);
    }
    self.inner.write_vectored(bufs)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;
  use std::io::{Cursor, Read as _, Write as _};

  use super::*;

  // A minimal digest for exercising the adapters.
  #[derive(Clone, Default)]
  struct ByteSum(u8);

  impl Digest for ByteSum {
    const OUTPUT_SIZE: usize = 1;
    type Output = [u8; 1];

    fn new() -> Self {
      Self(0)
    }

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
    }

    fn finalize(&self) -> Self::Output {
      [self.0]
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  fn sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
  }

  #[test]
  fn reader_hashes_bytes_actually_read() {
    let data = b"the quick brown fox".to_vec();
    let mut reader = ByteSum::reader(Cursor::new(data.clone()));

    // Short reads: pull 3 bytes at a time.
    let mut total = Vec::new();
    let mut buf = [0u8; 3];
    loop {
      let n = reader.read(&mut buf).unwrap();
      if n == 0 {
        break;
      }
      total.extend_from_slice(&buf[..n]);
    }

    assert_eq!(total, data);
    assert_eq!(reader.digest(), [sum(&data)]);
  }

  #[test]
  fn writer_hashes_everything_written() {
    let mut writer = ByteSum::writer(Vec::new());
    writer.write_all(b"hello ").unwrap();
    writer.write_all(b"world").unwrap();

    let (out, digest) = writer.into_parts();
    assert_eq!(out, b"hello world".to_vec());
    assert_eq!(digest, [sum(b"hello world")]);
  }

  #[test]
  fn digest_is_live_not_consuming() {
    let mut writer = ByteSum::writer(Vec::new());
    writer.write_all(b"ab").unwrap();
    assert_eq!(writer.digest(), [sum(b"ab")]);

    // Further writes keep extending the message.
    writer.write_all(b"c").unwrap();
    assert_eq!(writer.digest(), [sum(b"abc")]);
  }

  #[test]
  fn into_inner_discards_digest() {
    let mut reader = ByteSum::reader(Cursor::new(b"xyz".to_vec()));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    let cursor = reader.into_inner();
    assert_eq!(cursor.into_inner(), b"xyz".to_vec());
  }
}

use bytemuck::{pod_read_unaligned, Pod};
use core::mem::size_of;

use crate::{GifError, GifResult};

/// A read position within a borrowed slice of GIF bytes.
///
/// Reads never go past the end of the slice. A read that doesn't have enough
/// bytes gives `Err(GifError::Format)` and leaves the position unchanged.
/// Skipping is the exception: it just stops at the end of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<'b> {
  bytes: &'b [u8],
  position: usize,
}
impl<'b> Cursor<'b> {
  /// Makes a cursor at the start of the bytes.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, position: 0 }
  }

  /// The byte offset of the next read, from the start of the data.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.position
  }

  /// How many bytes are left to read.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> usize {
    self.bytes.len() - self.position
  }

  /// Moves back to the start of the data.
  #[inline]
  pub fn rewind(&mut self) {
    self.position = 0;
  }

  /// Reads one byte.
  #[inline]
  pub fn read_byte(&mut self) -> GifResult<u8> {
    let [b] = self.read_array::<1>()?;
    Ok(b)
  }

  /// Reads a little-endian `u16`.
  #[inline]
  pub fn read_u16_le(&mut self) -> GifResult<u16> {
    self.read_array::<2>().map(u16::from_le_bytes)
  }

  /// Reads the next `N` bytes as an array.
  #[inline]
  pub fn read_array<const N: usize>(&mut self) -> GifResult<[u8; N]> {
    let head = self.read_slice(N)?;
    let mut a = [0_u8; N];
    a.copy_from_slice(head);
    Ok(a)
  }

  /// Reads the next `len` bytes as a sub-slice of the data.
  #[inline]
  pub fn read_slice(&mut self, len: usize) -> GifResult<&'b [u8]> {
    if self.remaining() >= len {
      let head = &self.bytes[self.position..self.position + len];
      self.position += len;
      Ok(head)
    } else {
      Err(GifError::Format)
    }
  }

  /// Reads a fixed layout record.
  #[inline]
  pub fn read_pod<T: Pod>(&mut self) -> GifResult<T> {
    self.read_slice(size_of::<T>()).map(pod_read_unaligned)
  }

  /// Advances by `count` bytes, stopping at the end of the data.
  #[inline]
  pub fn skip(&mut self, count: usize) {
    self.position = self.position.saturating_add(count).min(self.bytes.len());
  }
}

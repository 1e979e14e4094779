use super::*;
use crate::GifResult;

/// A sub-block's length is a single byte, so no payload is bigger than this.
pub const MAX_BLOCK_SIZE: usize = 256;

/// Scratch space for reading one data sub-block at a time.
///
/// The same buffer is reused for every sub-block of a parse, so reading a long
/// sub-block chain doesn't allocate.
#[derive(Clone)]
pub struct SubBlockBuffer {
  block: [u8; MAX_BLOCK_SIZE],
  len: usize,
}
impl SubBlockBuffer {
  /// An empty buffer.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { block: [0; MAX_BLOCK_SIZE], len: 0 }
  }

  /// Reads the next sub-block (length byte and payload) into the buffer.
  ///
  /// Returns the payload, which is empty for the terminator of a chain. If the
  /// data ends partway through the payload this is an error and the buffer
  /// is left empty.
  pub fn read_block<'s>(&'s mut self, cursor: &mut Cursor<'_>) -> GifResult<&'s [u8]> {
    self.len = 0;
    let block_size = usize::from(cursor.read_byte()?);
    let payload = cursor.read_slice(block_size).map_err(|e| {
      log::debug!(
        "sub-block of {block_size} bytes at {pos} runs past the end of the data",
        pos = cursor.position()
      );
      e
    })?;
    self.block[..block_size].copy_from_slice(payload);
    self.len = block_size;
    Ok(self.data())
  }

  /// The payload of the most recently read sub-block.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.block[..self.len]
  }

  /// Zeroes the buffer.
  #[inline]
  pub fn clear(&mut self) {
    self.block = [0; MAX_BLOCK_SIZE];
    self.len = 0;
  }
}
impl Default for SubBlockBuffer {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl core::fmt::Debug for SubBlockBuffer {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // only the first few bytes, like the PNG chunk debug output
    f.debug_struct("SubBlockBuffer")
      .field("data", &(&self.data()[..self.len.min(12)], self.len))
      .finish()
  }
}

/// Skips over a sub-block chain, up to and including the 0 length terminator.
///
/// Payloads are skipped without being looked at. A length byte that claims
/// more data than remains just moves the cursor to the end, and then the next
/// length byte can't be read, which is the error.
pub fn skip_sub_blocks(cursor: &mut Cursor<'_>) -> GifResult<()> {
  loop {
    let block_size = cursor.read_byte()?;
    if block_size == 0 {
      return Ok(());
    }
    cursor.skip(usize::from(block_size));
  }
}

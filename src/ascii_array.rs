//! A byte array newtype with ascii `Debug` output.

use core::fmt::Write;

/// An array of bytes expected to contain ascii data.
///
/// There's no actual enforced encoding! The `Debug` and `Display` impls will
/// just `as` cast each byte into a character. This works just as expected for
/// ascii data (`32..=126`), and is still safe for non-ascii data, but you just
/// might get non-printing characters or multi-byte unicode characters.
///
/// GIF uses ascii byte sequences in a few places: the `GIF` signature, the
/// `87a` / `89a` version suffix, and the 11 byte identifier of an application
/// extension (eg: `NETSCAPE2.0`). This newtype gives those a readable `Debug`
/// output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

impl<const N: usize> AsciiArray<N> {
  /// The bytes as a slice.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Copies as many bytes as fit from the front of `bytes`.
  ///
  /// Any positions past the end of `bytes` are left as 0.
  #[inline]
  #[must_use]
  pub fn from_prefix(bytes: &[u8]) -> Self {
    let mut out = [0_u8; N];
    let n = bytes.len().min(N);
    out[..n].copy_from_slice(&bytes[..n]);
    Self(out)
  }
}

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self([0; N])
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('\"')?;
    Ok(())
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

impl<const N: usize> PartialEq<[u8; N]> for AsciiArray<N> {
  #[inline]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.0 == *other
  }
}

#[test]
fn test_ascii_array_from_prefix() {
  assert_eq!(AsciiArray::<3>::from_prefix(b"89a trailing"), *b"89a");
  assert_eq!(AsciiArray::<4>::from_prefix(b"ab"), *b"ab\0\0");
}

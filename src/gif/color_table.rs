use super::*;
use crate::GifResult;
use alloc::vec::Vec;
use pixel_formats::r8g8b8a8_Srgb;

/// Number of entries for a color table size exponent (the low 3 bits of a
/// packed field).
///
/// The format stores the exponent `e` and the table has `2**(e+1)` entries, so
/// this is always a power of two in `2..=256`.
#[inline]
#[must_use]
pub const fn color_table_len(exponent: u8) -> usize {
  2 << (exponent & 0b111)
}

/// Packs an `[r, g, b]` entry as `0xAARRGGBB` with full alpha.
#[inline]
#[must_use]
pub const fn pack_argb([r, g, b]: [u8; 3]) -> u32 {
  0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpacks a `0xAARRGGBB` color into an sRGB pixel.
#[inline]
#[must_use]
pub const fn argb_to_srgb(argb: u32) -> r8g8b8a8_Srgb {
  let [a, r, g, b] = argb.to_be_bytes();
  r8g8b8a8_Srgb { r, g, b, a }
}

/// Reads `count` color entries (3 bytes each) and packs each one as ARGB.
///
/// Either all `3 * count` bytes are available and the full table comes back,
/// or it's an error and nothing is returned.
pub fn read_color_table(cursor: &mut Cursor<'_>, count: usize) -> GifResult<Vec<u32>> {
  let bytes = cursor.read_slice(count * 3).map_err(|e| {
    log::debug!("format error reading a color table of {count} entries");
    e
  })?;
  let entries: &[[u8; 3]] = bytemuck::cast_slice(bytes);
  Ok(entries.iter().copied().map(pack_argb).collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::GifError;

  #[test]
  fn test_color_table_len_all_exponents() {
    for (e, ex) in (0..8).zip([2, 4, 8, 16, 32, 64, 128, 256]) {
      assert_eq!(color_table_len(e), ex, "failed e:{e}");
    }
    // only the low bits count
    assert_eq!(color_table_len(0b1111_1000), 2);
  }

  #[test]
  fn test_read_color_table() {
    let bytes = [0xFF, 0x00, 0x00, 0x01, 0x02, 0x03, 0xAA];
    let mut c = Cursor::new(&bytes);
    assert_eq!(read_color_table(&mut c, 2), Ok(alloc::vec![0xFFFF0000, 0xFF010203]));
    assert_eq!(c.remaining(), 1);
  }

  #[test]
  fn test_read_color_table_truncated() {
    let bytes = [0xFF, 0x00, 0x00, 0x01, 0x02];
    let mut c = Cursor::new(&bytes);
    assert_eq!(read_color_table(&mut c, 2), Err(GifError::Format));
  }

  #[test]
  fn test_argb_to_srgb() {
    let p = argb_to_srgb(pack_argb([1, 2, 3]));
    assert_eq!((p.r, p.g, p.b, p.a), (1, 2, 3, 0xFF));
  }
}

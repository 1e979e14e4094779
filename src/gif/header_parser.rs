use super::*;
use crate::{GifError, GifResult};
use bitfrob::{u8_get_bit, u8_get_value};

/// Reads the signature, the logical screen descriptor, and the global color
/// table (if any).
///
/// Fields are written into `header` as they're read, so when this returns an
/// error the header still has everything that came before the problem.
pub(crate) fn read_header(cursor: &mut Cursor<'_>, header: &mut GifHeader) -> GifResult<()> {
  let id: [u8; 6] = cursor.read_array()?;
  if id[..3] != GIF_SIGNATURE {
    log::debug!("not a GIF, the signature was {:?}", AsciiArray::<3>::from_prefix(&id));
    return Err(GifError::Format);
  }
  header.version = AsciiArray::from_prefix(&id[3..]);

  read_logical_screen_descriptor(cursor, header)?;

  if header.has_global_color_table {
    let table = read_color_table(cursor, header.global_color_table_size)?;
    header.background_color =
      table.get(usize::from(header.background_color_index)).copied().unwrap_or(0);
    header.global_color_table = Some(table);
  }
  Ok(())
}

fn read_logical_screen_descriptor(
  cursor: &mut Cursor<'_>, header: &mut GifHeader,
) -> GifResult<()> {
  header.width = cursor.read_u16_le()?;
  header.height = cursor.read_u16_le()?;
  // * bit 7: global color table flag
  // * bits 4-6: color resolution
  // * bit 3: sort flag
  // * bits 0-2: global color table size exponent
  let packed = cursor.read_byte()?;
  header.has_global_color_table = u8_get_bit(7, packed);
  header.global_color_table_size = color_table_len(u8_get_value(0, 2, packed));
  header.background_color_index = cursor.read_byte()?;
  header.pixel_aspect_ratio = cursor.read_byte()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::vec;

  #[test]
  fn test_read_header_no_table() {
    let bytes = *b"GIF87a\x0A\x00\x14\x00\x02\x05\x31;";
    let mut c = Cursor::new(&bytes);
    let mut h = GifHeader::default();
    assert_eq!(read_header(&mut c, &mut h), Ok(()));
    assert_eq!(h.version, *b"87a");
    assert_eq!((h.width, h.height), (10, 20));
    assert!(!h.has_global_color_table);
    // the declared size is kept even without a table
    assert_eq!(h.global_color_table_size, 8);
    assert_eq!(h.background_color_index, 5);
    assert_eq!(h.pixel_aspect_ratio, 0x31);
    assert_eq!(h.global_color_table, None);
    assert_eq!(c.position(), 13);
  }

  #[test]
  fn test_read_header_with_table() {
    let mut bytes = vec![];
    bytes.extend_from_slice(b"GIF89a\x01\x00\x01\x00\x80\x01\x00");
    bytes.extend_from_slice(&[0, 0, 0, 0x10, 0x20, 0x30]);
    let mut c = Cursor::new(&bytes);
    let mut h = GifHeader::default();
    assert_eq!(read_header(&mut c, &mut h), Ok(()));
    assert_eq!(h.global_color_table, Some(vec![0xFF000000, 0xFF102030]));
    assert_eq!(h.background_color, 0xFF102030);
  }

  #[test]
  fn test_read_header_background_index_past_table() {
    let mut bytes = vec![];
    bytes.extend_from_slice(b"GIF89a\x01\x00\x01\x00\x80\x09\x00");
    bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
    let mut c = Cursor::new(&bytes);
    let mut h = GifHeader::default();
    assert_eq!(read_header(&mut c, &mut h), Ok(()));
    assert_eq!(h.background_color, 0);
  }

  #[test]
  fn test_read_header_bad_signature() {
    let bytes = *b"PNG89a\x01\x00\x01\x00\x00\x00\x00";
    let mut c = Cursor::new(&bytes);
    let mut h = GifHeader::default();
    assert_eq!(read_header(&mut c, &mut h), Err(GifError::Format));
    // nothing past the signature was read
    assert_eq!(c.position(), 6);
    assert_eq!(h.width, 0);
  }

  #[test]
  fn test_read_header_truncated_keeps_partial_fields() {
    let bytes = *b"GIF89a\x0A\x00\x14";
    let mut c = Cursor::new(&bytes);
    let mut h = GifHeader::default();
    assert_eq!(read_header(&mut c, &mut h), Err(GifError::Format));
    assert_eq!(h.width, 10);
    assert_eq!(h.height, 0);
  }

  #[test]
  fn test_read_header_truncated_table() {
    let bytes = *b"GIF89a\x01\x00\x01\x00\x80\x00\x00\x01\x02\x03\x04";
    let mut c = Cursor::new(&bytes);
    let mut h = GifHeader::default();
    assert_eq!(read_header(&mut c, &mut h), Err(GifError::Format));
    assert_eq!(h.global_color_table, None);
  }
}

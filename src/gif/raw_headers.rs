//! Fixed layout records that are read in one piece.
//!
//! The logical screen descriptor isn't here because it's read field by field,
//! so that a header cut short still reports the fields it did have.

use bitfrob::{u8_get_bit, u8_get_value};
use pack1::*;

/// The 9 bytes of an image descriptor that follow the image separator.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct ImageDescriptor {
  pub left: U16LE,
  pub top: U16LE,
  pub width: U16LE,
  pub height: U16LE,
  /// * bit 7: local color table flag
  /// * bit 6: interlace flag
  /// * bit 5: sort flag
  /// * bits 0-2: local color table size exponent
  pub packed: u8,
}
impl ImageDescriptor {
  #[inline]
  pub fn has_local_color_table(&self) -> bool {
    u8_get_bit(7, self.packed)
  }
  #[inline]
  pub fn is_interlaced(&self) -> bool {
    u8_get_bit(6, self.packed)
  }
  #[inline]
  pub fn local_color_table_exponent(&self) -> u8 {
    u8_get_value(0, 2, self.packed)
  }
}

/// The body of a graphic control extension, after the `0x21 0xF9` tag bytes.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct GraphicControlBlock {
  /// always 4
  pub block_size: u8,
  /// * bits 2-4: disposal method
  /// * bit 1: user input flag
  /// * bit 0: transparent color flag
  pub packed: u8,
  /// hundredths of a second
  pub delay: U16LE,
  pub transparent_color_index: u8,
  pub terminator: u8,
}
impl GraphicControlBlock {
  #[inline]
  pub fn disposal_method(&self) -> u8 {
    u8_get_value(2, 4, self.packed)
  }
  #[inline]
  pub fn has_transparency(&self) -> bool {
    u8_get_bit(0, self.packed)
  }
}

#[test]
fn test_packed_fields() {
  use bytemuck::pod_read_unaligned;

  let id: ImageDescriptor = pod_read_unaligned(&[1, 0, 2, 0, 10, 0, 20, 1, 0b1100_0101]);
  assert_eq!(id.left.get(), 1);
  assert_eq!(id.top.get(), 2);
  assert_eq!(id.width.get(), 10);
  assert_eq!(id.height.get(), 0x0114);
  assert!(id.has_local_color_table());
  assert!(id.is_interlaced());
  assert_eq!(id.local_color_table_exponent(), 5);

  let gc: GraphicControlBlock = pod_read_unaligned(&[4, 0b0000_1101, 0x2C, 0x01, 7, 0]);
  assert_eq!(gc.disposal_method(), 3);
  assert!(gc.has_transparency());
  assert_eq!(gc.delay.get(), 300);
  assert_eq!(gc.transparent_color_index, 7);
}

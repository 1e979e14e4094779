use super::*;
use alloc::vec::Vec;
use core::num::NonZeroU16;

/// If the parse of a GIF went fine or not.
///
/// Once a parse has hit a format error the status stays that way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GifStatus {
  /// No problems found.
  #[default]
  Ok,
  /// The data was malformed or cut short. Whatever was read before the
  /// problem is still in the header.
  FormatError,
}
impl GifStatus {
  /// If this is an error status.
  #[inline]
  #[must_use]
  pub const fn is_error(self) -> bool {
    matches!(self, Self::FormatError)
  }

  /// Moves to the error status. There's no way back.
  #[inline]
  pub fn set_error(&mut self) {
    *self = Self::FormatError;
  }
}

/// How the canvas area of a frame is treated before the next frame is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisposalMethod {
  /// No disposal specified. Frames without a graphic control extension have
  /// this. A graphic control extension with this value is read as
  /// [`DisposalMethod::DoNotDispose`].
  #[default]
  Unspecified,
  /// Leave the frame in place.
  DoNotDispose,
  /// Restore the frame's area to the background color.
  RestoreBackground,
  /// Restore the frame's area to what it was before the frame was drawn.
  RestorePrevious,
  /// Values 4 through 7 aren't defined by the format. They're kept as is.
  Reserved(u8),
}
impl From<u8> for DisposalMethod {
  #[inline]
  #[must_use]
  fn from(value: u8) -> Self {
    use DisposalMethod::*;
    match value & 0b111 {
      0 => Unspecified,
      1 => DoNotDispose,
      2 => RestoreBackground,
      3 => RestorePrevious,
      other => Reserved(other),
    }
  }
}
impl From<DisposalMethod> for u8 {
  #[inline]
  #[must_use]
  fn from(value: DisposalMethod) -> Self {
    use DisposalMethod::*;
    match value {
      Unspecified => 0,
      DoNotDispose => 1,
      RestoreBackground => 2,
      RestorePrevious => 3,
      Reserved(n) => n & 0b111,
    }
  }
}

/// The looping directive of an animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoopCount {
  /// There was no looping application extension.
  #[default]
  DoesNotExist,
  /// Loop forever (a stored count of 0).
  Forever,
  /// Repeat this many times after the first play.
  Times(NonZeroU16),
}
impl LoopCount {
  /// Converts the stored `u16` of a looping extension.
  #[inline]
  #[must_use]
  pub const fn from_raw(raw: u16) -> Self {
    match NonZeroU16::new(raw) {
      Some(n) => Self::Times(n),
      None => Self::Forever,
    }
  }

  /// The numeric form: `-1` when missing, `0` for forever, otherwise the count.
  #[inline]
  #[must_use]
  pub const fn to_raw(self) -> i32 {
    match self {
      Self::DoesNotExist => -1,
      Self::Forever => 0,
      Self::Times(n) => n.get() as i32,
    }
  }
}

/// Info about one image within the GIF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GifFrame {
  /// Left edge of the frame within the logical screen.
  pub ix: u16,
  /// Top edge of the frame within the logical screen.
  pub iy: u16,
  /// Frame width.
  pub iw: u16,
  /// Frame height.
  pub ih: u16,
  /// If the rows of the frame are stored interlaced.
  pub interlace: bool,
  /// If `transparent_color_index` is used.
  pub transparency: bool,
  /// Palette index that should be drawn as transparent.
  pub transparent_color_index: u8,
  /// What to do with this frame's area after it's been shown.
  pub disposal_method: DisposalMethod,
  /// Milliseconds to show this frame for.
  ///
  /// 0 if the frame had no graphic control extension.
  pub delay_ms: u32,
  /// Byte offset (within the parsed data) of the frame's LZW minimum code
  /// size byte, which is followed by the compressed pixel sub-blocks.
  pub pixel_data_offset: usize,
  /// The LZW minimum code size byte.
  pub lzw_min_code_size: u8,
  /// Packed ARGB entries of the local color table, if any.
  pub local_color_table: Option<Vec<u32>>,
}

/// Everything read out of a GIF, without decoding any pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GifHeader {
  /// The version after the `GIF` signature. Not checked.
  pub version: AsciiArray<3>,
  /// Logical screen width.
  pub width: u16,
  /// Logical screen height.
  pub height: u16,
  /// If the global color table flag was set.
  pub has_global_color_table: bool,
  /// Declared global color table length, given even if there's no table.
  pub global_color_table_size: usize,
  /// Index of the background color.
  pub background_color_index: u8,
  /// Pixel aspect ratio byte, as stored.
  pub pixel_aspect_ratio: u8,
  /// Packed ARGB entries of the global color table, if any.
  pub global_color_table: Option<Vec<u32>>,
  /// The background color, when there's a global color table. An index past
  /// the end of the table gives 0.
  pub background_color: u32,
  /// The looping directive.
  pub loop_count: LoopCount,
  /// If the parse hit any format error.
  pub status: GifStatus,
  /// Frames in the order they appear in the data.
  pub frames: Vec<GifFrame>,
  /// The number of frames read.
  pub frame_count: usize,
}
impl GifHeader {
  /// The number of times the animation should play through, the way web
  /// browsers count it.
  ///
  /// * No looping extension: play once, `1`.
  /// * Loop forever: `0`.
  /// * A count of `n`: the first play plus `n` repeats, `n + 1`.
  #[inline]
  #[must_use]
  pub const fn total_iteration_count(&self) -> u32 {
    match self.loop_count {
      LoopCount::DoesNotExist => 1,
      LoopCount::Forever => 0,
      LoopCount::Times(n) => n.get() as u32 + 1,
    }
  }

  /// Delay of frame `n` in milliseconds, if there's such a frame.
  #[inline]
  #[must_use]
  pub fn frame_delay(&self, n: usize) -> Option<u32> {
    self.frames.get(n).map(|frame| frame.delay_ms)
  }

  /// Total time for one play through of all frames, in milliseconds.
  #[inline]
  #[must_use]
  pub fn total_duration_ms(&self) -> u64 {
    self.frames.iter().map(|frame| u64::from(frame.delay_ms)).sum()
  }

  /// If there's more than one frame.
  #[inline]
  #[must_use]
  pub fn is_animated(&self) -> bool {
    self.frame_count > 1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_disposal_method_from_u8() {
    use DisposalMethod::*;
    for (raw, ex) in (0..8).zip([
      Unspecified,
      DoNotDispose,
      RestoreBackground,
      RestorePrevious,
      Reserved(4),
      Reserved(5),
      Reserved(6),
      Reserved(7),
    ]) {
      assert_eq!(DisposalMethod::from(raw), ex, "failed raw:{raw}");
      assert_eq!(u8::from(ex), raw);
    }
  }

  #[test]
  fn test_loop_count() {
    assert_eq!(LoopCount::from_raw(0), LoopCount::Forever);
    assert_eq!(LoopCount::from_raw(3).to_raw(), 3);
    assert_eq!(LoopCount::DoesNotExist.to_raw(), -1);

    let mut h = GifHeader::default();
    assert_eq!(h.total_iteration_count(), 1);
    h.loop_count = LoopCount::Forever;
    assert_eq!(h.total_iteration_count(), 0);
    h.loop_count = LoopCount::from_raw(u16::MAX);
    assert_eq!(h.total_iteration_count(), 65536);
  }

  #[test]
  fn test_status_is_sticky() {
    let mut s = GifStatus::default();
    assert!(!s.is_error());
    s.set_error();
    s.set_error();
    assert_eq!(s, GifStatus::FormatError);
  }

  #[test]
  fn test_frame_delays() {
    let mut h = GifHeader::default();
    h.frames.push(GifFrame { delay_ms: 100, ..Default::default() });
    h.frames.push(GifFrame { delay_ms: 50, ..Default::default() });
    h.frame_count = 2;
    assert_eq!(h.frame_delay(1), Some(50));
    assert_eq!(h.frame_delay(2), None);
    assert_eq!(h.total_duration_ms(), 150);
    assert!(h.is_animated());
  }
}

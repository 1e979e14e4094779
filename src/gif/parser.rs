use super::{content_parser::read_contents, header_parser::read_header, *};
use crate::{GifError, GifResult};

/// Settings that change how frame delays are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserConfig {
  /// Delays (hundredths of a second) below this are replaced.
  pub min_frame_delay: u16,
  /// The delay (hundredths of a second) used in place of a delay below the
  /// minimum.
  pub default_frame_delay: u16,
}
impl Default for ParserConfig {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { min_frame_delay: MIN_FRAME_DELAY, default_frame_delay: DEFAULT_FRAME_DELAY }
  }
}
impl ParserConfig {
  /// Converts a stored delay (hundredths of a second) into milliseconds,
  /// replacing delays below the minimum with the default first.
  #[inline]
  #[must_use]
  pub const fn frame_delay_ms(&self, hundredths: u16) -> u32 {
    let hundredths =
      if hundredths < self.min_frame_delay { self.default_frame_delay } else { hundredths };
    hundredths as u32 * 10
  }
}

/// Reads the structure of GIF data.
///
/// * Call [`load`](Self::load) with the bytes.
/// * Call [`parse_header`](Self::parse_header) to get a [`GifHeader`].
/// * Or call [`is_animated`](Self::is_animated) to just check if there's more
///   than one frame.
///
/// Each parse starts over from the beginning of the bytes and builds a new
/// header, so a header that was already returned is never touched again. The
/// one parser can be used for any number of GIFs, just `load` the next one.
#[derive(Debug, Clone, Default)]
pub struct GifHeaderParser<'b> {
  data: Option<&'b [u8]>,
  block: SubBlockBuffer,
  config: ParserConfig,
}
impl<'b> GifHeaderParser<'b> {
  /// A parser with the default config and no data.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(ParserConfig::default())
  }

  /// A parser with the config given and no data.
  #[inline]
  #[must_use]
  pub fn with_config(config: ParserConfig) -> Self {
    Self { data: None, block: SubBlockBuffer::new(), config }
  }

  /// Sets the bytes to parse, replacing any previous bytes.
  #[inline]
  pub fn load(&mut self, bytes: &'b [u8]) -> &mut Self {
    self.block.clear();
    self.data = Some(bytes);
    self
  }

  /// Drops the bytes, going back to having nothing loaded.
  #[inline]
  pub fn release(&mut self) {
    self.block.clear();
    self.data = None;
  }

  /// If bytes are currently loaded.
  #[inline]
  #[must_use]
  pub const fn is_loaded(&self) -> bool {
    self.data.is_some()
  }

  /// Parses the whole GIF.
  ///
  /// ## Failure
  /// * Only if nothing is loaded, giving [`GifError::NoData`]. Malformed data
  ///   still gives `Ok`, with the header's status set to
  ///   [`GifStatus::FormatError`].
  pub fn parse_header(&mut self) -> GifResult<GifHeader> {
    self.parse(usize::MAX)
  }

  /// Checks if the GIF has more than one frame.
  ///
  /// This re-parses from the start, but stops once enough frames have been
  /// seen to know the answer.
  ///
  /// ## Failure
  /// * Only if nothing is loaded, giving [`GifError::NoData`].
  pub fn is_animated(&mut self) -> GifResult<bool> {
    self.parse(2).map(|header| header.frame_count > 1)
  }

  pub(super) fn parse(&mut self, max_frames: usize) -> GifResult<GifHeader> {
    let bytes = self.data.ok_or(GifError::NoData)?;
    let mut cursor = Cursor::new(bytes);
    let mut header = GifHeader::default();
    match read_header(&mut cursor, &mut header) {
      Ok(()) => read_contents(&mut cursor, &mut self.block, &mut header, &self.config, max_frames),
      Err(_) => header.status.set_error(),
    }
    if header.status.is_error() {
      log::debug!(
        "format error in GIF data, stopped at byte {pos} of {len} with {n} frames read",
        pos = cursor.position(),
        len = bytes.len(),
        n = header.frame_count
      );
    }
    Ok(header)
  }
}

/// Parses GIF bytes with the default config.
///
/// Check the `status` of the header before trusting its contents.
#[inline]
#[must_use]
pub fn gif_parse_header(bytes: &[u8]) -> GifHeader {
  let mut parser = GifHeaderParser::new();
  match parser.load(bytes).parse_header() {
    Ok(header) => header,
    Err(_) => GifHeader { status: GifStatus::FormatError, ..GifHeader::default() },
  }
}

/// Checks if GIF bytes have more than one frame.
#[inline]
#[must_use]
pub fn gif_is_animated(bytes: &[u8]) -> bool {
  GifHeaderParser::new().load(bytes).is_animated().unwrap_or(false)
}

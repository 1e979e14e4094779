/// An error from the `gif_header` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GifError {
  /// The data isn't well formed GIF data.
  ///
  /// This covers a bad signature, running out of bytes partway through a
  /// block, and an unknown block tag.
  Format,

  /// A parse was requested but no data has been loaded into the parser.
  NoData,
}
impl core::fmt::Display for GifError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Format => f.write_str("the data is not a well formed GIF stream"),
      Self::NoData => f.write_str("no data was loaded before parsing"),
    }
  }
}

/// Shorthand for results with a [`GifError`].
pub type GifResult<T> = Result<T, GifError>;

#![forbid(unsafe_code)]

//! Module for Graphics Interchange Format files (GIF).
//!
//! ## Parsing The Format
//!
//! Note: All multi-byte values in GIF are always little-endian encoded.
//!
//! * A GIF always starts with a 6 byte header. The first 3 bytes are `GIF`,
//!   the other 3 are the version (`87a` or `89a`). This crate checks the
//!   signature but doesn't care about the version.
//! * Next is the "logical screen descriptor". This is always 7 bytes.
//!   * The width and height of the canvas (`u16` each).
//!   * A packed byte. Bit 7 says if there's a global color table, and bits 0
//!     through 2 are an exponent `e` giving the table length as `2**(e+1)`.
//!     The length is given even if there's no table.
//!   * The background color index, and the pixel aspect ratio.
//! * Next there **might** be the global color table. Each entry is `[r, g, b]`.
//! * Next there's any number of "content blocks". Each starts with one tag
//!   byte:
//!   * `0x2C` is an image descriptor: 4 `u16` values for the frame position and
//!     size, then a packed byte for the local color table flag (bit 7), the
//!     interlace flag (bit 6) and the local table exponent (bits 0 through 2).
//!     After the optional local color table there's one byte for the LZW
//!     minimum code size, and then the compressed pixels as a sub-block chain.
//!   * `0x21` is an extension. A second byte gives the kind of extension, and
//!     the rest of the extension is a sub-block chain.
//!   * `0x3B` is the trailer, meaning the end of the GIF.
//! * A "sub-block chain" is a series of sub-blocks, each being a length byte
//!   followed by that many bytes of data. A 0 length sub-block ends the chain.
//!
//! The extension kinds that matter here are:
//! * The graphic control extension (`0xF9`), which comes just before an image
//!   descriptor and gives that frame's disposal method, transparency, and
//!   delay time.
//! * The application extension (`0xFF`). When its identifier is
//!   `NETSCAPE2.0` the sub-blocks hold the number of times the animation
//!   should loop.
//! * Comment (`0xFE`) and plain text (`0x01`) extensions are skipped.
//!
//! ## Using This Module
//!
//! Load the bytes into a [`GifHeaderParser`] and call
//! [`parse_header`](GifHeaderParser::parse_header). Malformed data doesn't
//! produce an `Err`, instead the [`GifHeader`] returned has a
//! [`GifStatus::FormatError`] status and holds whatever was read before the
//! problem was found. Always check the status before trusting the frames.
//!
//! The pixel data of each frame isn't decoded. Each [`GifFrame`] has a
//! `pixel_data_offset` which is where the LZW data for that frame begins
//! within the original bytes.

use crate::AsciiArray;

mod color_table;
pub use color_table::*;

mod content_parser;

mod cursor;
pub use cursor::*;

mod header_parser;

mod parser;
pub use parser::*;

mod raw_headers;

mod records;
pub use records::*;

mod sub_blocks;
pub use sub_blocks::*;


/// The first three bytes of a GIF datastream should match these bytes.
pub const GIF_SIGNATURE: [u8; 3] = *b"GIF";

/// Starts an image descriptor.
pub const IMAGE_SEPARATOR: u8 = 0x2C;

/// Starts an extension block.
pub const EXTENSION_INTRODUCER: u8 = 0x21;

/// Marks the end of the GIF datastream.
pub const TRAILER: u8 = 0x3B;

/// Extension label of a graphic control extension.
pub const LABEL_GRAPHIC_CONTROL_EXTENSION: u8 = 0xF9;

/// Extension label of an application extension.
pub const LABEL_APPLICATION_EXTENSION: u8 = 0xFF;

/// Extension label of a comment extension.
pub const LABEL_COMMENT_EXTENSION: u8 = 0xFE;

/// Extension label of a plain text extension.
pub const LABEL_PLAIN_TEXT_EXTENSION: u8 = 0x01;

/// Application identifiers that carry the animation loop count.
///
/// `ANIMEXTS1.0` is an older alias that some encoders still write.
pub const LOOPING_APPLICATION_IDS: &[AsciiArray<11>] =
  &[AsciiArray(*b"NETSCAPE2.0"), AsciiArray(*b"ANIMEXTS1.0")];

/// The minimum frame delay in hundredths of a second.
pub const MIN_FRAME_DELAY: u16 = 2;

/// The frame delay (hundredths of a second) used in place of any delay below
/// the minimum.
pub const DEFAULT_FRAME_DELAY: u16 = 10;

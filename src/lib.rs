#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for reading the structure of GIF data.
//!
//! The parser walks a complete in-memory GIF stream once and reports the
//! logical screen, the global palette, the looping directive, and one record
//! per frame. The LZW compressed pixel data is never decompressed, each frame
//! just remembers the byte offset where its pixel stream starts so that a
//! separate pixel decoder can pick up from there.
//!
//! ```
//! # #[cfg(feature = "gif")] {
//! use gif_header::gif::*;
//! let bytes: &[u8] = &[
//!   b'G', b'I', b'F', b'8', b'9', b'a', 1, 0, 1, 0, 0, 0, 0, 0x3B,
//! ];
//! let header = GifHeaderParser::new().load(bytes).parse_header().unwrap();
//! assert_eq!(header.status, GifStatus::Ok);
//! assert_eq!((header.width, header.height), (1, 1));
//! assert_eq!(header.frame_count, 0);
//! # }
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

#[cfg(feature = "gif")]
pub mod gif;

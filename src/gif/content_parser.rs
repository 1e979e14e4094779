use super::{raw_headers::*, *};
use crate::{GifError, GifResult};

/// What one pass of the dispatch loop read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatched {
  Block,
  Trailer,
}

/// Reads content blocks until the trailer, the first format error, or until
/// more than `max_frames` frames have been read.
///
/// Problems don't come back as an `Err`, they're put in the header's status.
/// Frames that were finished before the problem stay in the header.
pub(crate) fn read_contents(
  cursor: &mut Cursor<'_>, block: &mut SubBlockBuffer, header: &mut GifHeader,
  config: &ParserConfig, max_frames: usize,
) {
  // A graphic control extension comes before the image it applies to, so the
  // frame it starts waits here until the image descriptor shows up.
  let mut pending: Option<GifFrame> = None;
  let mut done = false;
  while !(done || header.status.is_error() || header.frame_count > max_frames) {
    match read_content_block(cursor, block, header, config, &mut pending) {
      Ok(Dispatched::Trailer) => done = true,
      Ok(Dispatched::Block) => (),
      Err(_) => header.status.set_error(),
    }
  }
  if header.frame_count != header.frames.len() {
    header.status.set_error();
  }
}

fn read_content_block(
  cursor: &mut Cursor<'_>, block: &mut SubBlockBuffer, header: &mut GifHeader,
  config: &ParserConfig, pending: &mut Option<GifFrame>,
) -> GifResult<Dispatched> {
  let tag_position = cursor.position();
  match cursor.read_byte()? {
    IMAGE_SEPARATOR => {
      log::trace!("image descriptor at {tag_position}");
      // without a graphic control extension the frame keeps default values
      let mut frame = pending.take().unwrap_or_default();
      read_image(cursor, &mut frame)?;
      header.frames.push(frame);
      header.frame_count += 1;
    }
    EXTENSION_INTRODUCER => {
      let label = cursor.read_byte()?;
      log::trace!("extension {label:#04X} at {tag_position}");
      match label {
        LABEL_GRAPHIC_CONTROL_EXTENSION => {
          // any stale pending frame is replaced
          *pending = Some(read_graphic_control(cursor, config)?);
        }
        LABEL_APPLICATION_EXTENSION => read_application(cursor, block, header)?,
        LABEL_COMMENT_EXTENSION | LABEL_PLAIN_TEXT_EXTENSION => skip_sub_blocks(cursor)?,
        _ => skip_sub_blocks(cursor)?,
      }
    }
    TRAILER => return Ok(Dispatched::Trailer),
    other => {
      log::debug!("unknown block tag {other:#04X} at {tag_position}");
      return Err(GifError::Format);
    }
  }
  Ok(Dispatched::Block)
}

/// Reads an image descriptor and its local color table, then steps over the
/// compressed pixel data.
fn read_image(cursor: &mut Cursor<'_>, frame: &mut GifFrame) -> GifResult<()> {
  let descriptor: ImageDescriptor = cursor.read_pod()?;
  frame.ix = descriptor.left.get();
  frame.iy = descriptor.top.get();
  frame.iw = descriptor.width.get();
  frame.ih = descriptor.height.get();
  frame.interlace = descriptor.is_interlaced();
  frame.local_color_table = if descriptor.has_local_color_table() {
    let len = color_table_len(descriptor.local_color_table_exponent());
    Some(read_color_table(cursor, len)?)
  } else {
    None
  };
  frame.pixel_data_offset = cursor.position();
  frame.lzw_min_code_size = cursor.read_byte()?;
  skip_sub_blocks(cursor)
}

/// Reads a graphic control extension into a new frame.
fn read_graphic_control(cursor: &mut Cursor<'_>, config: &ParserConfig) -> GifResult<GifFrame> {
  let gce: GraphicControlBlock = cursor.read_pod()?;
  let disposal_method = match DisposalMethod::from(gce.disposal_method()) {
    // elect to keep the old image when it's left to the decoder
    DisposalMethod::Unspecified => DisposalMethod::DoNotDispose,
    other => other,
  };
  Ok(GifFrame {
    disposal_method,
    transparency: gce.has_transparency(),
    transparent_color_index: gce.transparent_color_index,
    delay_ms: config.frame_delay_ms(gce.delay.get()),
    ..GifFrame::default()
  })
}

/// Reads an application extension, looking for the loop count.
fn read_application(
  cursor: &mut Cursor<'_>, block: &mut SubBlockBuffer, header: &mut GifHeader,
) -> GifResult<()> {
  let id = block.read_block(cursor)?;
  if id.is_empty() {
    // the first sub-block was already the terminator
    return Ok(());
  }
  if LOOPING_APPLICATION_IDS.iter().any(|app| app.as_bytes() == id) {
    read_loop_count(cursor, block, header)
  } else {
    skip_sub_blocks(cursor)
  }
}

/// Reads the sub-blocks of a looping extension. The last loop count sub-block
/// wins.
fn read_loop_count(
  cursor: &mut Cursor<'_>, block: &mut SubBlockBuffer, header: &mut GifHeader,
) -> GifResult<()> {
  loop {
    match *block.read_block(cursor)? {
      [] => return Ok(()),
      [1, lo, hi, ..] => {
        header.loop_count = LoopCount::from_raw(u16::from_le_bytes([lo, hi]));
      }
      _ => (),
    }
  }
}

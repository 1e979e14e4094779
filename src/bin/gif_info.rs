use gif_header::gif::*;

use std::{
  collections::VecDeque,
  path::{Path, PathBuf},
};

fn main() {
  let root = std::env::args().nth(1).unwrap_or_else(|| String::from("."));
  let root = PathBuf::from(root);
  if root.is_file() {
    print_gif_info(&root);
    return;
  }
  recursive_read_dir(&root, |p| {
    match p.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("gif") => print_gif_info(&p),
      _ => (),
    }
  });
}

fn print_gif_info(path: &Path) {
  let bytes = match std::fs::read(path) {
    Ok(bytes) => bytes,
    Err(e) => {
      eprintln!("Can't read {path}: {e}", path = path.display());
      return;
    }
  };
  let header = gif_parse_header(&bytes);
  println!(
    "{path}: {status:?}, GIF{version} {w}x{h}, {n} frame(s), {total_ms}ms, loop {loops:?}",
    path = path.display(),
    status = header.status,
    version = header.version,
    w = header.width,
    h = header.height,
    n = header.frame_count,
    total_ms = header.total_duration_ms(),
    loops = header.loop_count,
  );
  if let Some(gct) = &header.global_color_table {
    println!(
      "  global color table: {} entries, background {:#010X}",
      gct.len(),
      header.background_color
    );
  }
  for (i, frame) in header.frames.iter().enumerate() {
    println!(
      "  [{i}] {w}x{h} at ({x},{y}) {delay}ms {disposal:?} data@{offset}{lct}",
      w = frame.iw,
      h = frame.ih,
      x = frame.ix,
      y = frame.iy,
      delay = frame.delay_ms,
      disposal = frame.disposal_method,
      offset = frame.pixel_data_offset,
      lct = if frame.local_color_table.is_some() { " (local colors)" } else { "" },
    );
  }
}

/// Recursively walks over the `path` given, which must be a directory.
///
/// Your `op` is passed a [`PathBuf`] for each file found.
pub fn recursive_read_dir(path: impl AsRef<Path>, mut op: impl FnMut(PathBuf)) {
  let path = path.as_ref();
  if !path.is_dir() {
    eprintln!("{path} is not a directory", path = path.display());
    return;
  }
  // A queue instead of real recursion, so deep trees can't blow the stack.
  // A symlink loop on the file system will still loop forever.
  let mut path_q = VecDeque::new();
  path_q.push_back(PathBuf::from(path));
  while let Some(path_buf) = path_q.pop_front() {
    let read_dir = match std::fs::read_dir(&path_buf) {
      Ok(read_dir) => read_dir,
      Err(e) => {
        eprintln!("Can't read_dir {path}: {e}", path = path_buf.display());
        continue;
      }
    };
    for result_dir_entry in read_dir {
      let dir_entry = match result_dir_entry {
        Ok(dir_entry) => dir_entry,
        Err(e) => {
          eprintln!("Error with dir entry: {e}");
          continue;
        }
      };
      match std::fs::metadata(dir_entry.path()) {
        Ok(metadata) if metadata.is_dir() => path_q.push_back(dir_entry.path()),
        Ok(metadata) if metadata.is_file() => op(dir_entry.path()),
        Ok(_) => eprintln!(
          "Found {path} but it's not a file or a directory.",
          path = dir_entry.path().display()
        ),
        Err(e) => eprintln!("Can't get metadata for {path}: {e}", path = dir_entry.path().display()),
      }
    }
  }
}

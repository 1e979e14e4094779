use gif_header::gif::*;
use walkdir::WalkDir;

#[test]
fn test_GifHeaderParser_no_panics() {
  // iter ALL files in the test folder, even non-gif files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let mut parser = GifHeaderParser::new();
    let header = parser.load(&v).parse_header().unwrap();
    assert_eq!(header.frame_count, header.frames.len());
    let _ = parser.is_animated().unwrap();
  }
  // even totally random data should never panic the parser!
  for _ in 0..10 {
    let mut v = super::rand_bytes(1024);
    let _ = gif_parse_header(&v);
    // and again with a good signature, so the content loop gets a workout
    v[..6].copy_from_slice(b"GIF89a");
    let header = gif_parse_header(&v);
    for frame in &header.frames {
      assert!(frame.pixel_data_offset < v.len());
    }
  }
}

#[test]
fn test_two_frames_looping() {
  let bytes = std::fs::read("tests/gif/two_frames_looping.gif").unwrap();
  let header = gif_parse_header(&bytes);
  assert_eq!(header.status, GifStatus::Ok);
  assert_eq!(header.version.to_string(), "89a");
  assert_eq!((header.width, header.height), (2, 2));
  assert_eq!(header.global_color_table_size, 4);
  assert_eq!(header.background_color_index, 1);
  assert_eq!(header.background_color, 0xFFFFFFFF);
  assert_eq!(header.loop_count, LoopCount::Forever);
  assert_eq!(header.total_iteration_count(), 0);
  assert_eq!(header.frame_count, 2);

  let first = &header.frames[0];
  assert_eq!(first.disposal_method, DisposalMethod::RestoreBackground);
  assert!(first.transparency);
  assert_eq!(first.transparent_color_index, 3);
  assert_eq!(first.delay_ms, 250);
  assert_eq!(first.pixel_data_offset, 80);
  assert_eq!(bytes[first.pixel_data_offset], first.lzw_min_code_size);

  let second = &header.frames[1];
  assert_eq!((second.ix, second.iy, second.iw, second.ih), (1, 1, 1, 1));
  assert_eq!(second.disposal_method, DisposalMethod::DoNotDispose);
  assert!(!second.transparency);
  assert_eq!(second.delay_ms, 500);
  assert_eq!(header.total_duration_ms(), 750);

  assert!(gif_is_animated(&bytes));
}

#[test]
fn test_still_image() {
  let bytes = std::fs::read("tests/gif/still.gif").unwrap();
  let mut parser = GifHeaderParser::new();
  let header = parser.load(&bytes).parse_header().unwrap();
  assert_eq!(header.status, GifStatus::Ok);
  assert_eq!(header.frame_count, 1);
  assert_eq!(header.loop_count, LoopCount::DoesNotExist);
  assert_eq!(header.total_iteration_count(), 1);
  assert_eq!(header.frame_delay(0), Some(0));
  assert_eq!(parser.is_animated(), Ok(false));
}

#[test]
fn test_truncated_file_keeps_finished_frames() {
  let bytes = std::fs::read("tests/gif/truncated.gif").unwrap();
  let header = gif_parse_header(&bytes);
  assert_eq!(header.status, GifStatus::FormatError);
  assert_eq!(header.frame_count, 1);
  assert_eq!(header.frames[0].delay_ms, 250);
  assert!(!gif_is_animated(&bytes));
}

#[test]
fn test_palette_entries_to_srgb() {
  let bytes = std::fs::read("tests/gif/still.gif").unwrap();
  let header = gif_parse_header(&bytes);
  let gct = header.global_color_table.unwrap();
  let red = argb_to_srgb(gct[2]);
  assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 255));
}

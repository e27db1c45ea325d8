use super::*;
use crate::foundation::core::Fps;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gladia_studio_png_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn half_red() -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 0, 0, 128],
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 1,
        height: 1,
        fps: Fps { num: 30, den: 1 },
    }
}

#[test]
fn write_png_stores_straight_alpha() {
    let dir = scratch_dir("single");
    let path = dir.join("nested/frame.png");
    write_png(&path, &half_red()).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sequence_names_files_by_frame_index() {
    let dir = scratch_dir("seq");
    let mut sink = PngSequenceSink::new(&dir).with_prefix("hero_");
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(7), &half_red()).unwrap();
    sink.push_frame(FrameIndex(8), &half_red()).unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("hero_00007.png"), dir.join("hero_00008.png")]
    );
    assert!(dir.join("hero_00008.png").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sequence_rejects_out_of_order_frames() {
    let dir = scratch_dir("order");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &half_red()).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &half_red()).is_err());
    assert!(sink.push_frame(FrameIndex(2), &half_red()).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn end_without_begin_fails() {
    let mut sink = PngSequenceSink::new(scratch_dir("unused"));
    assert!(sink.end().is_err());
}

use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps { num: 30, den: 1 },
    }
}

fn frame(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: vec![0; (w * h * 4) as usize],
        premultiplied: true,
    }
}

#[test]
fn frame_len_is_rgba8() {
    assert_eq!(cfg().frame_len(), 16);
}

#[test]
fn check_frame_rejects_size_mismatch() {
    assert!(cfg().check_frame(&frame(2, 2)).is_ok());
    assert!(cfg().check_frame(&frame(4, 2)).is_err());

    let mut short = frame(2, 2);
    short.data.pop();
    assert!(cfg().check_frame(&short).is_err());
}

#[test]
fn in_memory_sink_requires_begin() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(2, 2)).is_err());
}

#[test]
fn in_memory_sink_restarts_on_begin() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2)).unwrap();
    sink.end().unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.frames().len(), 1);

    sink.begin(cfg()).unwrap();
    assert!(!sink.is_finished());
    assert!(sink.frames().is_empty());
    assert_eq!(sink.config(), Some(cfg()));
}

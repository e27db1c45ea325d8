use super::*;

fn cfg(width: u32, height: u32, fps: Fps) -> SinkConfig {
    SinkConfig { width, height, fps }
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut dst, &src, true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_premul_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut dst, &src, true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_half_alpha_mixes_with_bg() {
    // 50% white, premultiplied and straight, over black.
    let mut premul = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut premul, &[128, 128, 128, 128], true, [0, 0, 0, 255])
        .unwrap();
    let mut straight = vec![0u8; 4];
    flatten_over_bg_to_opaque_rgba8(&mut straight, &[255, 255, 255, 128], false, [0, 0, 0, 255])
        .unwrap();
    assert_eq!(premul, vec![128, 128, 128, 255]);
    assert_eq!(straight, premul);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_over_bg_to_opaque_rgba8(&mut dst, &[0; 4], true, [0; 4]).is_err());
}

#[test]
fn odd_or_empty_dimensions_are_rejected() {
    let fps = Fps { num: 30, den: 1 };
    assert!(validate_config(&cfg(560, 680, fps)).is_ok());
    assert!(validate_config(&cfg(561, 680, fps)).is_err());
    assert!(validate_config(&cfg(0, 680, fps)).is_err());
    assert!(validate_config(&cfg(560, 680, Fps { num: 0, den: 1 })).is_err());
}

#[test]
fn args_stream_raw_rgba_into_h264() {
    let args = ffmpeg_args(
        &cfg(1920, 1080, Fps { num: 30, den: 1 }),
        Path::new("out/hero.mp4"),
        true,
    );
    assert_eq!(args.first().map(String::as_str), Some("-y"));
    let joined = args.join(" ");
    assert!(joined.contains("-f rawvideo -pix_fmt rgba -s 1920x1080 -r 30 -i pipe:0"));
    assert!(joined.contains("-c:v libx264 -pix_fmt yuv420p"));
    assert_eq!(args.last().map(String::as_str), Some("out/hero.mp4"));
}

#[test]
fn rational_fps_and_no_overwrite() {
    let args = ffmpeg_args(
        &cfg(2, 2, Fps { num: 30000, den: 1001 }),
        Path::new("a.mp4"),
        false,
    );
    assert_eq!(args[0], "-n");
    assert!(args.join(" ").contains("-r 30000/1001"));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("never.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
    assert_eq!(sink.frames_written(), 0);
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    assert!(ensure_parent_dir(Path::new("video.mp4")).is_ok());
}

use super::*;
use crate::compositions::VideoConfig;
use crate::encode::sink::InMemorySink;
use crate::foundation::color::Color;
use crate::foundation::core::Fps;
use crate::scene::model::Scene;

/// Background steps every four frames over a ten-frame loop.
struct Steps;

impl Composition for Steps {
    fn id(&self) -> &str {
        "Steps"
    }

    fn video_config(&self) -> VideoConfig {
        VideoConfig::new(8, 8, Fps::new(30, 1).unwrap(), 10).unwrap()
    }

    fn scene(&self, loop_frame: u64) -> Scene {
        let level = (loop_frame / 4) as u8 * 60;
        Scene::new(self.video_config().canvas, Color::rgb(level, 0, 0))
    }
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

fn cpu() -> CpuBackend {
    CpuBackend::try_new(RenderSettings::default()).unwrap()
}

#[test]
fn chunk_size_zero_is_treated_as_one() {
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(64), 64);
}

#[test]
fn chunks_cover_the_range_in_order() {
    let parts = chunks(range(3, 10), 3).unwrap();
    let bounds: Vec<_> = parts.iter().map(|c| (c.start.0, c.end.0)).collect();
    assert_eq!(bounds, vec![(3, 6), (6, 9), (9, 10)]);
}

#[test]
fn zero_threads_is_rejected() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert!(build_thread_pool(Some(2)).is_ok());
}

#[test]
fn empty_range_is_rejected() {
    let mut backend = cpu();
    let err = render_frames_with_stats(&Steps, range(4, 4), &mut backend, &Default::default());
    assert!(err.is_err());
}

#[test]
fn render_frame_wraps_past_the_duration() {
    let mut backend = cpu();
    let a = render_frame(&Steps, FrameIndex(5), &mut backend).unwrap();
    let b = render_frame(&Steps, FrameIndex(15), &mut backend).unwrap();
    assert_eq!(a, b);
    assert_eq!(&a.data[..4], &[60, 0, 0, 255]);
}

#[test]
fn parallel_render_matches_sequential() {
    let mut backend = cpu();
    let seq = render_frames(&Steps, range(0, 10), &mut backend).unwrap();
    let (par, stats) = render_frames_with_stats(
        &Steps,
        range(0, 10),
        &mut backend,
        &RenderThreading {
            parallel: true,
            chunk_size: 4,
            threads: Some(2),
            static_frame_elision: false,
        },
    )
    .unwrap();
    assert_eq!(seq, par);
    assert_eq!(stats.frames_total, 10);
    assert_eq!(stats.frames_rendered, 10);
    assert_eq!(stats.frames_elided, 0);
}

#[test]
fn elision_reuses_identical_frames_within_a_chunk() {
    let mut backend = cpu();
    let seq = render_frames(&Steps, range(0, 10), &mut backend).unwrap();

    let threading = RenderThreading {
        static_frame_elision: true,
        chunk_size: 3,
        ..RenderThreading::default()
    };
    let (frames, stats) =
        render_frames_with_stats(&Steps, range(0, 10), &mut backend, &threading).unwrap();
    assert_eq!(frames, seq);
    // [0,3) -> 1, [3,6) -> 2, [6,9) -> 2, [9,10) -> 1 distinct frames.
    assert_eq!(stats.frames_rendered, 6);
    assert_eq!(stats.frames_elided, 4);

    let whole = RenderThreading {
        chunk_size: 64,
        parallel: true,
        ..threading
    };
    let (_, stats) = render_frames_with_stats(&Steps, range(0, 10), &mut backend, &whole).unwrap();
    assert_eq!(stats.frames_rendered, 3);
    assert_eq!(stats.frames_elided, 7);
}

#[test]
fn render_range_streams_absolute_indices_in_order() {
    let mut backend = cpu();
    let mut sink = InMemorySink::new();
    let stats = render_range(
        &Steps,
        range(8, 13),
        &mut backend,
        &RenderThreading {
            chunk_size: 2,
            static_frame_elision: true,
            ..RenderThreading::default()
        },
        &mut sink,
    )
    .unwrap();

    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (8, 8, Fps { num: 30, den: 1 }));
    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, vec![8, 9, 10, 11, 12]);
    assert_eq!(stats.frames_total, 5);
    // Frames 10..13 wrap to 0..3, which are identical.
    assert_eq!(sink.frames()[2].1, sink.frames()[4].1);
}

#[test]
fn render_range_uses_the_backend_output_size() {
    let mut backend = CpuBackend::try_new(RenderSettings {
        scale: 0.5,
        ..RenderSettings::default()
    })
    .unwrap();
    let mut sink = InMemorySink::new();
    render_range(
        &Steps,
        range(0, 1),
        &mut backend,
        &RenderThreading::default(),
        &mut sink,
    )
    .unwrap();
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (4, 4));
    assert_eq!(sink.frames()[0].1.width, 4);
}

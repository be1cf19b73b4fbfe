// Unit tests for domain models

use super::*;
use crate::domain::errors::DomainError;

#[test]
fn test_frame_rate_creation() {
    let rate = FrameRate::new(25, 1).unwrap();
    assert_eq!(rate.num, 25);
    assert_eq!(rate.den, 1);
    assert_eq!(rate.as_f64(), 25.0);
}

#[test]
fn test_frame_rate_invalid() {
    assert!(FrameRate::new(25, 0).is_err());
    assert!(FrameRate::new(0, 1).is_err());
}

#[test]
fn test_frame_rate_ntsc_conversion() {
    let rate = FrameRate::ntsc();
    let seconds = rate.frames_to_seconds(30000);
    assert!((seconds - 1001.0).abs() < 1e-9);
}

#[test]
fn test_frame_rate_display() {
    assert_eq!(FrameRate::fps_25().to_string(), "25 fps");
    assert_eq!(FrameRate::ntsc().to_string(), "30000/1001 (29.970 fps)");
}

#[test]
fn test_media_handle_derived_names() {
    let handle = MediaHandle::new("videos/clip.mp4", FrameRate::fps_25(), 100).unwrap();
    assert_eq!(handle.file_name(), "clip.mp4");
    assert_eq!(handle.base_name(), "clip");
    assert_eq!(handle.extension(), ".mp4");
    assert_eq!(handle.total_frames(), 100);
    assert_eq!(handle.last_frame(), 99);
}

#[test]
fn test_media_handle_without_extension() {
    let handle = MediaHandle::new("recording", FrameRate::fps_30(), 10).unwrap();
    assert_eq!(handle.base_name(), "recording");
    assert_eq!(handle.extension(), "");
}

#[test]
fn test_media_handle_empty_source() {
    let handle = MediaHandle::new("empty.mkv", FrameRate::fps_30(), 0).unwrap();
    assert_eq!(handle.last_frame(), 0);
}

#[test]
fn test_completed_range_creation() {
    let range = CompletedRange::new(25, 75).unwrap();
    assert_eq!(range.start(), 25);
    assert_eq!(range.stop(), 75);
    assert_eq!(range.frame_span(), 50);
    assert_eq!(range.to_string(), "25..75");
}

#[test]
fn test_completed_range_invalid() {
    match CompletedRange::new(50, 10) {
        Err(DomainError::InvalidRangeSelection { start, stop }) => {
            assert_eq!(start, 50);
            assert_eq!(stop, 10);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(CompletedRange::new(40, 40).is_err());
}

#[test]
fn test_completed_range_times() {
    let rate = FrameRate::fps_25();
    let range = CompletedRange::new(25, 75).unwrap();
    assert_eq!(range.start_time(rate), 1.0);
    assert_eq!(range.stop_time(rate), 3.0);
    assert_eq!(range.duration(rate), 2.0);
}

#[test]
fn test_completed_range_times_are_positive() {
    let rate = FrameRate::ntsc();
    for (start, stop) in [(0, 1), (1, 2), (299, 300), (0, 100_000)] {
        let range = CompletedRange::new(start, stop).unwrap();
        assert!(range.start_time(rate) >= 0.0);
        assert!(range.duration(rate) > 0.0);
    }
}

#[test]
fn test_cut_counter() {
    let mut counter = CutCounter::default();
    assert_eq!(counter.value(), 0);
    assert_eq!(counter.to_string(), "000");

    counter.advance();
    counter.advance();
    assert_eq!(counter.value(), 2);
    assert_eq!(counter.to_string(), "002");
}

#[test]
fn test_output_kind_parse() {
    assert_eq!(OutputKind::parse("vids").unwrap(), OutputKind::SingleClip);
    assert_eq!(OutputKind::parse("IMGS").unwrap(), OutputKind::ImageSequence);
    assert!(OutputKind::parse("gifs").is_err());
}

#[test]
fn test_output_mode() {
    let mode = OutputMode::new(OutputKind::SingleClip, ExecutionMode::AppendToScript);
    assert!(mode.is_script());
    let mode = OutputMode::new(OutputKind::ImageSequence, ExecutionMode::ExecuteNow);
    assert!(!mode.is_script());
}

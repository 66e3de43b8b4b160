//! Integration tests for the stream formatter.
//!
//! Tests cover:
//! - Title segments (bit rate, resolution, duration, frame rate)
//! - Track-position subtitles
//! - Formatting real ffprobe documents

use stream_info::core::formatter::{build_items, build_subtitle, build_title};
use stream_info::models::display::DisplayItem;
use stream_info::models::stream::{Resolution, StreamKind, StreamRecord};
use stream_info::services::ffprobe::parse_output;

fn full_video_stream() -> StreamRecord {
    StreamRecord {
        kind: StreamKind::Video {
            resolution: Some(Resolution {
                width: 1920,
                height: 1080,
            }),
        },
        codec_name: "h264".to_string(),
        duration: Some("12.34567".to_string()),
        r_frame_rate: Some("30000/1001".to_string()),
        bit_rate: Some("5242880".to_string()),
    }
}

// ========== TITLE TESTS ==========

#[test]
fn test_title_without_optional_fields() {
    let stream = StreamRecord::new("audio", "aac");
    assert_eq!(build_title(&stream), "[AUDIO]: aac");
}

#[test]
fn test_title_with_every_segment() {
    assert_eq!(
        build_title(&full_video_stream()),
        "[VIDEO]: h264 | 5.00Mbps | 1920x1080 | 12.3457s | 29.97fps"
    );
}

#[test]
fn test_title_zero_frame_rate_is_omitted() {
    let mut stream = full_video_stream();
    stream.r_frame_rate = Some("0/0".to_string());
    assert_eq!(
        build_title(&stream),
        "[VIDEO]: h264 | 5.00Mbps | 1920x1080 | 12.3457s"
    );
}

#[test]
fn test_title_other_codec_type() {
    let stream = StreamRecord::new("subtitle", "subrip");
    assert_eq!(build_title(&stream), "[SUBTITLE]: subrip");
}

#[test]
fn test_title_malformed_numbers_render_nan() {
    let mut stream = StreamRecord::new("audio", "opus");
    stream.duration = Some("soon".to_string());
    stream.bit_rate = Some("lots".to_string());
    stream.r_frame_rate = Some("x/y".to_string());
    assert_eq!(build_title(&stream), "[AUDIO]: opus | NaNMbps | NaNs");
}

#[test]
fn test_title_rounds_exact_ties_up() {
    let mut stream = StreamRecord::new("audio", "aac");
    stream.bit_rate = Some("131072".to_string());
    assert_eq!(build_title(&stream), "[AUDIO]: aac | 0.13Mbps");

    let mut stream = StreamRecord::new("audio", "aac");
    stream.duration = Some("0.03125".to_string());
    assert_eq!(build_title(&stream), "[AUDIO]: aac | 0.0313s");

    let mut stream = StreamRecord::new("video", "gif");
    stream.r_frame_rate = Some("1/8".to_string());
    assert_eq!(build_title(&stream), "[VIDEO]: gif | 0.13fps");
}

#[test]
fn test_title_zero_denominator_frame_rate_is_infinite() {
    let mut stream = StreamRecord::new("video", "h264");
    stream.r_frame_rate = Some("30/0".to_string());
    assert_eq!(build_title(&stream), "[VIDEO]: h264 | Infinityfps");
}

#[test]
fn test_title_is_pure() {
    let stream = full_video_stream();
    assert_eq!(build_title(&stream), build_title(&stream));
}

// ========== SUBTITLE TESTS ==========

#[test]
fn test_subtitles_count_per_type() {
    let streams = vec![
        StreamRecord::new("video", "h264"),
        StreamRecord::new("video", "mjpeg"),
        StreamRecord::new("audio", "aac"),
    ];

    assert_eq!(build_subtitle(&streams, 0), "1 of 2 video track(s)");
    assert_eq!(build_subtitle(&streams, 1), "2 of 2 video track(s)");
    assert_eq!(build_subtitle(&streams, 2), "1 of 1 audio track(s)");
}

#[test]
fn test_subtitles_interleaved() {
    let streams = vec![
        StreamRecord::new("audio", "aac"),
        StreamRecord::new("video", "h264"),
        StreamRecord::new("subtitle", "mov_text"),
        StreamRecord::new("audio", "ac3"),
    ];

    let subtitles: Vec<_> = build_items(&streams)
        .into_iter()
        .map(|item| item.subtitle)
        .collect();
    assert_eq!(
        subtitles,
        vec![
            "1 of 2 audio track(s)",
            "1 of 1 video track(s)",
            "",
            "2 of 2 audio track(s)",
        ]
    );

    for (index, subtitle) in subtitles.iter().enumerate() {
        assert_eq!(&build_subtitle(&streams, index), subtitle);
    }
}

// ========== ITEM TESTS ==========

#[test]
fn test_build_items_empty() {
    assert!(build_items(&[]).is_empty());
}

#[test]
fn test_build_items_twice_is_identical() {
    let streams = vec![full_video_stream(), StreamRecord::new("audio", "aac")];
    assert_eq!(build_items(&streams), build_items(&streams));
}

#[test]
fn test_build_items_from_ffprobe_output() {
    let output = r#"{
        "programs": [],
        "streams": [
            {
                "codec_name": "hevc",
                "codec_type": "video",
                "width": 3840,
                "height": 2160,
                "r_frame_rate": "24000/1001",
                "duration": "5.005000",
                "bit_rate": "15728640"
            },
            {
                "codec_name": "eac3",
                "codec_type": "audio",
                "r_frame_rate": "0/0",
                "duration": "5.024000",
                "bit_rate": "655000"
            },
            {
                "codec_name": "hdmv_pgs_subtitle",
                "codec_type": "subtitle",
                "width": 1920,
                "height": 1080,
                "r_frame_rate": "0/0"
            }
        ]
    }"#;

    let streams = parse_output(output).unwrap();
    assert_eq!(
        build_items(&streams),
        vec![
            DisplayItem::new(
                "[VIDEO]: hevc | 15.00Mbps | 3840x2160 | 5.0050s | 23.98fps",
                "1 of 1 video track(s)"
            ),
            DisplayItem::new(
                "[AUDIO]: eac3 | 0.62Mbps | 5.0240s",
                "1 of 1 audio track(s)"
            ),
            DisplayItem::new("[SUBTITLE]: hdmv_pgs_subtitle | 1920x1080", ""),
        ]
    );
}

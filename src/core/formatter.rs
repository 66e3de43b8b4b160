//! Stream description formatting.
//!
//! Turns decoded streams into launcher rows. Everything here is pure: the
//! same stream list always produces the same rows.

use crate::models::display::DisplayItem;
use crate::models::stream::{StreamKind, StreamRecord};

/// Bits per megabit, as the workflow has always reported it (1024 * 1024).
pub const BITS_PER_MEGABIT: f64 = 1024.0 * 1024.0;

/// Total number of video and audio tracks in a stream list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackTotals {
    pub video: usize,
    pub audio: usize,
}

impl TrackTotals {
    pub fn count(streams: &[StreamRecord]) -> Self {
        streams.iter().fold(Self::default(), |mut totals, stream| {
            match stream.kind {
                StreamKind::Video { .. } => totals.video += 1,
                StreamKind::Audio => totals.audio += 1,
                StreamKind::Other { .. } => {}
            }
            totals
        })
    }
}

/// Build the description line for one stream.
///
/// `[VIDEO]: h264 | 5.00Mbps | 1920x1080 | 12.3457s | 29.97fps`
pub fn build_title(stream: &StreamRecord) -> String {
    format!(
        "[{}]: {}{}{}{}{}",
        stream.kind.codec_type().to_uppercase(),
        stream.codec_name,
        bit_rate_segment(stream),
        resolution_segment(stream),
        duration_segment(stream),
        frame_rate_segment(stream),
    )
}

fn resolution_segment(stream: &StreamRecord) -> String {
    stream
        .kind
        .resolution()
        .map(|resolution| format!(" | {}", resolution))
        .unwrap_or_default()
}

fn duration_segment(stream: &StreamRecord) -> String {
    stream
        .duration_seconds()
        .map(|seconds| format!(" | {}s", to_fixed(seconds, 4)))
        .unwrap_or_default()
}

fn frame_rate_segment(stream: &StreamRecord) -> String {
    stream
        .frame_rate()
        .map(|fps| format!(" | {}fps", to_fixed(fps, 2)))
        .unwrap_or_default()
}

fn bit_rate_segment(stream: &StreamRecord) -> String {
    stream
        .bit_rate_bps()
        .map(|bps| format!(" | {}Mbps", to_fixed(bps / BITS_PER_MEGABIT, 2)))
        .unwrap_or_default()
}

/// Fixed-point text for `value` with `digits` fractional digits.
///
/// Rounds on the exact binary value and breaks ties away from zero, so
/// `0.125` becomes `0.13`. NaN and infinities render as `NaN`, `Infinity`
/// and `-Infinity`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Every finite f64 has at most 1074 fractional decimal digits.
    let exact = format!("{:.1100}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let kept = String::from_utf8_lossy(&kept).into_owned();
    let sign = if value < 0.0 { "-" } else { "" };
    if digits == 0 {
        format!("{}{}", sign, kept)
    } else {
        format!("{}{}.{}", sign, &kept[..int_len], &kept[int_len..])
    }
}

/// Track-position line for a stream, given its 1-based position among
/// streams of the same type.
fn subtitle_for(kind: &StreamKind, position: usize, totals: TrackTotals) -> String {
    match kind {
        StreamKind::Video { .. } => format!("{} of {} video track(s)", position, totals.video),
        StreamKind::Audio => format!("{} of {} audio track(s)", position, totals.audio),
        StreamKind::Other { .. } => String::new(),
    }
}

/// Build the track-position line for the stream at `index`.
///
/// Returns an empty string for an out-of-range index.
pub fn build_subtitle(streams: &[StreamRecord], index: usize) -> String {
    let Some(stream) = streams.get(index) else {
        return String::new();
    };

    let position = streams[..=index]
        .iter()
        .filter(|s| s.kind.codec_type() == stream.kind.codec_type())
        .count();

    subtitle_for(&stream.kind, position, TrackTotals::count(streams))
}

/// Build launcher rows for every stream, in probe order.
pub fn build_items(streams: &[StreamRecord]) -> Vec<DisplayItem> {
    let totals = TrackTotals::count(streams);
    let mut video_count = 0;
    let mut audio_count = 0;

    streams
        .iter()
        .map(|stream| {
            let position = match stream.kind {
                StreamKind::Video { .. } => {
                    video_count += 1;
                    video_count
                }
                StreamKind::Audio => {
                    audio_count += 1;
                    audio_count
                }
                StreamKind::Other { .. } => 0,
            };

            DisplayItem::new(
                build_title(stream),
                subtitle_for(&stream.kind, position, totals),
            )
        })
        .collect()
}

//! Stream models decoded from ffprobe output.

use serde::{Deserialize, Deserializer};

/// Top-level ffprobe document for the `-show_entries stream=...` query.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeResult {
    /// Streams in the order ffprobe reported them.
    pub streams: Vec<StreamRecord>,
}

/// Pixel dimensions of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Build a resolution from raw probe fields.
    ///
    /// A missing, zero or non-numeric width means the stream carries no
    /// resolution.
    fn from_fields(width: Option<&str>, height: Option<&str>) -> Option<Self> {
        let width: u32 = width?.trim().parse().ok()?;
        if width == 0 {
            return None;
        }
        let height: u32 = height?.trim().parse().ok()?;
        Some(Self { width, height })
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Stream variant, tagged by `codec_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamKind {
    Video { resolution: Option<Resolution> },
    Audio,
    /// Any other codec type (subtitle, data, attachment...).
    /// Bitmap subtitles report dimensions, so they keep a resolution.
    Other {
        codec_type: String,
        resolution: Option<Resolution>,
    },
}

impl StreamKind {
    fn from_codec_type(codec_type: &str, resolution: Option<Resolution>) -> Self {
        match codec_type {
            "video" => StreamKind::Video { resolution },
            "audio" => StreamKind::Audio,
            other => StreamKind::Other {
                codec_type: other.to_string(),
                resolution,
            },
        }
    }

    /// The raw `codec_type` string.
    pub fn codec_type(&self) -> &str {
        match self {
            StreamKind::Video { .. } => "video",
            StreamKind::Audio => "audio",
            StreamKind::Other { codec_type, .. } => codec_type,
        }
    }

    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            StreamKind::Video { resolution } | StreamKind::Other { resolution, .. } => *resolution,
            StreamKind::Audio => None,
        }
    }
}

/// One elementary stream of the probed file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawStream")]
pub struct StreamRecord {
    pub kind: StreamKind,
    pub codec_name: String,
    /// Decimal seconds, as reported.
    pub duration: Option<String>,
    /// Rational frame rate such as `30000/1001`.
    pub r_frame_rate: Option<String>,
    /// Bits per second, as reported.
    pub bit_rate: Option<String>,
}

impl StreamRecord {
    /// Create a record without any optional fields.
    pub fn new(codec_type: &str, codec_name: &str) -> Self {
        Self {
            kind: StreamKind::from_codec_type(codec_type, None),
            codec_name: codec_name.to_string(),
            duration: None,
            r_frame_rate: None,
            bit_rate: None,
        }
    }

    /// Duration in seconds. Malformed values yield NaN.
    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration.as_deref().map(parse_float)
    }

    /// Frame rate in frames per second.
    ///
    /// `None` when the field is absent, unparseable, or evaluates to zero or
    /// NaN. A zero denominator with a non-zero numerator stays infinite.
    pub fn frame_rate(&self) -> Option<f64> {
        self.r_frame_rate
            .as_deref()
            .and_then(parse_rational)
            .filter(|fps| !fps.is_nan() && *fps != 0.0)
    }

    /// Bit rate in bits per second. Malformed values yield NaN.
    pub fn bit_rate_bps(&self) -> Option<f64> {
        self.bit_rate.as_deref().map(parse_float)
    }
}

/// Stream record exactly as ffprobe emits it.
#[derive(Debug, Deserialize)]
struct RawStream {
    codec_type: String,
    codec_name: String,
    #[serde(default, deserialize_with = "loose_string")]
    duration: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    r_frame_rate: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    bit_rate: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    width: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    height: Option<String>,
}

impl From<RawStream> for StreamRecord {
    fn from(raw: RawStream) -> Self {
        let resolution = Resolution::from_fields(raw.width.as_deref(), raw.height.as_deref());
        Self {
            kind: StreamKind::from_codec_type(&raw.codec_type, resolution),
            codec_name: raw.codec_name,
            duration: raw.duration,
            r_frame_rate: raw.r_frame_rate,
            bit_rate: raw.bit_rate,
        }
    }
}

/// Accept a string or a number; empty strings count as absent.
fn loose_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
    }

    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(match value {
        Some(Loose::Text(s)) if s.is_empty() => None,
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

fn parse_float(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

/// Parse a `numerator/denominator` ratio or a bare number.
///
/// Division by zero follows IEEE rules (`0/0` is NaN).
pub fn parse_rational(value: &str) -> Option<f64> {
    match value.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse::<i64>().ok()? as f64;
            let den: f64 = den.trim().parse::<i64>().ok()? as f64;
            Some(num / den)
        }
        None => value.trim().parse().ok(),
    }
}

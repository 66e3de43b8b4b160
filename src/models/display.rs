//! Launcher result list models.

use serde::{Deserialize, Serialize};

/// One row of the launcher result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Stream description, e.g. `[AUDIO]: aac | 0.12Mbps`.
    pub title: String,
    /// Track position, e.g. `1 of 2 video track(s)`. Empty for other stream types.
    pub subtitle: String,
    /// Whether the launcher may action this row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

impl DisplayItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            valid: None,
        }
    }

    /// A row that only reports something and cannot be actioned.
    pub fn informational(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            valid: Some(false),
            ..Self::new(title, subtitle)
        }
    }
}

/// Script Filter document consumed by the launcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultList {
    pub items: Vec<DisplayItem>,
}

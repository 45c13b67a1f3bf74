//! Snapshot of published segment state for testing and debugging
//!
//! Only published values appear here: a snapshot shows what a view would
//! currently be displaying, not what is pending.

use serde::{Deserialize, Serialize};

use crate::core::line::Line;
use crate::core::screen::Screen;
use crate::core::segment::Segment;
use crate::error::Result;

/// Published state of a whole screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cols: usize,
    pub rows: usize,
    pub lines: Vec<SnapshotLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    /// Text content of the line
    pub text: String,
    /// Whether line was soft-wrapped
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub wrapped: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SnapshotSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSegment {
    pub index: usize,
    pub text: String,
    pub fg: String,
    pub bg: String,
    pub fg_index: u8,
    pub bg_index: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

impl SnapshotSegment {
    pub fn from_segment(segment: &Segment) -> Self {
        let style = segment.style();
        Self {
            index: segment.index(),
            text: segment.text().to_string(),
            fg: segment.foreground().to_hex(),
            bg: segment.background().to_hex(),
            fg_index: style.foreground,
            bg_index: style.background,
            attributes: style
                .attributes
                .iter_names()
                .map(|(name, _)| name.to_lowercase())
                .collect(),
            visible: segment.visible(),
        }
    }
}

impl SnapshotLine {
    pub fn from_line(line: &Line) -> Self {
        Self {
            text: line.text(),
            wrapped: line.wrapped,
            segments: line
                .segments()
                .iter()
                .map(SnapshotSegment::from_segment)
                .collect(),
        }
    }
}

impl Snapshot {
    pub fn from_screen(screen: &Screen) -> Self {
        Self {
            cols: screen.cols(),
            rows: screen.rows(),
            lines: screen.lines().iter().map(SnapshotLine::from_line).collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot back from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

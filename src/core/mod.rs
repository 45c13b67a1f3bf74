//! Segment Core Module
//!
//! Platform-independent change tracking for styled line segments. This
//! module contains:
//! - Segments with pending/published state and batched dispatch
//! - Text styles and palette-backed color resolution
//! - Lines that own a character buffer and its segments
//! - The screen that owns the palette and fans out recolors
//! - Deterministic snapshot generation
//!
//! Nothing here holds a back pointer: collaborators are borrowed for the
//! duration of each call, and notifications go to the observer passed in.

mod color;
mod event;
mod line;
mod palette;
mod screen;
mod segment;
mod snapshot;
mod style;

pub use color::{default_256_palette, ColorIndex, NamedColor, Rgb};
pub use event::{NullObserver, SegmentChange, SegmentId, SegmentObserver};
pub use line::{Line, TextSource, MAX_COLUMNS};
pub use palette::ColorPalette;
pub use screen::{DefaultColors, Screen};
pub use segment::Segment;
pub use snapshot::{Snapshot, SnapshotLine, SnapshotSegment};
pub use style::{Attributes, TextStyle};

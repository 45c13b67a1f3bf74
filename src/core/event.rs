//! Change notifications emitted by segments
//!
//! Segments never hold a reference to whoever listens. Every operation that
//! can announce something takes a `&mut impl SegmentObserver` instead, so the
//! caller decides where notifications go for that one call.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-unique segment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(u64);

static NEXT_SEGMENT_ID: AtomicU64 = AtomicU64::new(1);

impl SegmentId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        SegmentId(NEXT_SEGMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment#{}", self.0)
    }
}

/// What changed on a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentChange {
    /// Start index moved
    IndexChanged,
    /// Text was re-sliced from the line (not necessarily different)
    TextChanged,
    /// Attribute set changed
    StyleChanged,
    /// Resolved foreground color changed
    ForegroundChanged,
    /// Resolved background color changed
    BackgroundChanged,
    /// Visibility toggled
    VisibleChanged,
    /// Segment is being torn down; last notification it will ever send
    AboutToBeDestroyed,
}

/// Receiver of segment notifications
pub trait SegmentObserver {
    fn notify(&mut self, id: SegmentId, change: SegmentChange);
}

impl SegmentObserver for Vec<(SegmentId, SegmentChange)> {
    fn notify(&mut self, id: SegmentId, change: SegmentChange) {
        self.push((id, change));
    }
}

impl<T: SegmentObserver + ?Sized> SegmentObserver for &mut T {
    fn notify(&mut self, id: SegmentId, change: SegmentChange) {
        (**self).notify(id, change);
    }
}

/// Observer that drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SegmentObserver for NullObserver {
    fn notify(&mut self, _id: SegmentId, _change: SegmentChange) {}
}

/// Wraps an observer and counts what passes through
pub(crate) struct Counting<'a, O: SegmentObserver + ?Sized> {
    inner: &'a mut O,
    pub(crate) count: usize,
}

impl<'a, O: SegmentObserver + ?Sized> Counting<'a, O> {
    pub(crate) fn new(inner: &'a mut O) -> Self {
        Self { inner, count: 0 }
    }
}

impl<O: SegmentObserver + ?Sized> SegmentObserver for Counting<'_, O> {
    fn notify(&mut self, id: SegmentId, change: SegmentChange) {
        self.count += 1;
        self.inner.notify(id, change);
    }
}

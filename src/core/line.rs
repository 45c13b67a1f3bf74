//! Terminal line representation
//!
//! A line owns one row's character buffer and the styled segments laid over
//! it. Segments never point back at the line; the line lends its buffer to
//! them for the duration of a dispatch.

use tracing::{debug, trace};

use crate::core::event::{SegmentId, SegmentObserver};
use crate::core::palette::ColorPalette;
use crate::core::screen::DefaultColors;
use crate::core::segment::Segment;
use crate::core::style::TextStyle;

/// Widest line a buffer write may produce
pub const MAX_COLUMNS: usize = 4096;

/// Anything a segment can slice its text from
pub trait TextSource {
    /// Characters `[start, end_inclusive]`, clamped to what is available
    fn text_slice(&self, start: usize, end_inclusive: usize) -> String;
}

impl TextSource for [char] {
    fn text_slice(&self, start: usize, end_inclusive: usize) -> String {
        let len = self.len();
        if end_inclusive >= len {
            trace!(start, end_inclusive, len, "clamped text slice");
        }
        let end = end_inclusive.saturating_add(1).min(len);
        if start >= end {
            return String::new();
        }
        self[start..end].iter().collect()
    }
}

impl TextSource for str {
    fn text_slice(&self, start: usize, end_inclusive: usize) -> String {
        if end_inclusive < start {
            return String::new();
        }
        let count = (end_inclusive - start).saturating_add(1);
        self.chars().skip(start).take(count).collect()
    }
}

/// A single line in the terminal grid
///
/// Not `Clone`: a copy would carry the same segment ids.
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<termseg::core::Line>();
/// ```
#[derive(Debug, Default)]
pub struct Line {
    /// Character buffer
    chars: Vec<char>,
    /// Styled runs over the buffer
    segments: Vec<Segment>,
    /// Whether this line was soft-wrapped (continuation of previous line)
    pub wrapped: bool,
}

impl Line {
    /// Create an empty line
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line of `cols` blanks
    pub fn with_width(cols: usize) -> Self {
        Self {
            chars: vec![' '; cols],
            ..Self::default()
        }
    }

    /// Create a line holding `text`
    pub fn from_text(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            ..Self::default()
        }
    }

    /// Number of characters in the buffer
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whole buffer as a string (trailing blanks trimmed)
    pub fn text(&self) -> String {
        let text: String = self.chars.iter().collect();
        text.trim_end().to_string()
    }

    /// Character at `col`
    pub fn char_at(&self, col: usize) -> Option<char> {
        self.chars.get(col).copied()
    }

    /// Overwrite characters starting at `col`, padding with blanks if needed
    ///
    /// Returns the inclusive range that was written, or `None` for empty
    /// input or a write that would reach [`MAX_COLUMNS`]; the buffer is left
    /// untouched in that case. Segments are not touched; callers follow up
    /// with [`invalidate`](Self::invalidate) or per-segment mutators.
    pub fn write_str(&mut self, col: usize, text: &str) -> Option<(usize, usize)> {
        let count = text.chars().count();
        let end = col.checked_add(count.checked_sub(1)?)?;
        if end >= MAX_COLUMNS {
            debug!(col, end, "refusing write past the maximum line width");
            return None;
        }
        if end >= self.chars.len() {
            self.chars.resize(end + 1, ' ');
        }
        for (slot, c) in self.chars[col..=end].iter_mut().zip(text.chars()) {
            *slot = c;
        }
        Some((col, end))
    }

    /// Shorten the buffer to `len` characters
    ///
    /// Segments keep their ranges; dispatch clamps them.
    pub fn truncate(&mut self, len: usize) {
        self.chars.truncate(len);
    }

    /// Resize the buffer, filling new columns with blanks
    pub fn resize(&mut self, cols: usize) {
        self.chars.resize(cols, ' ');
    }

    /// Blank the whole buffer and mark every segment's text dirty
    pub fn clear(&mut self) {
        self.chars.iter_mut().for_each(|c| *c = ' ');
        self.wrapped = false;
        for segment in &mut self.segments {
            let (start, end) = (segment.start_index(), segment.end_index());
            segment.set_string_segment(start, end, true);
        }
    }

    /// Mark text dirty on every segment overlapping `[start, end]`
    pub fn invalidate(&mut self, start: usize, end: usize) -> usize {
        let mut touched = 0;
        for segment in &mut self.segments {
            if segment.start_index() <= end && start <= segment.end_index() {
                let (s, e) = (segment.start_index(), segment.end_index());
                segment.set_string_segment(s, e, true);
                touched += 1;
            }
        }
        touched
    }

    /// Add a segment over `[start, end]` with an initial style request
    pub fn add_segment(
        &mut self,
        start: usize,
        end: usize,
        style: TextStyle,
        defaults: DefaultColors,
    ) -> SegmentId {
        let mut segment = Segment::new(start, end, defaults);
        segment.set_text_style(style);
        let id = segment.id();
        self.segments.push(segment);
        id
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id() == id)
    }

    pub fn segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.id() == id)
    }

    /// Segments whose requested range covers `col`
    pub fn segments_at(&self, col: usize) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(move |s| s.start_index() <= col && col <= s.end_index())
    }

    /// Remove one segment, announcing its teardown first
    pub fn remove_segment<O>(&mut self, id: SegmentId, observer: &mut O) -> bool
    where
        O: SegmentObserver + ?Sized,
    {
        match self.segments.iter().position(|s| s.id() == id) {
            Some(pos) => {
                self.segments.remove(pos).destroy(observer);
                true
            }
            None => false,
        }
    }

    /// Remove every segment, announcing each teardown
    pub fn clear_segments<O>(&mut self, observer: &mut O)
    where
        O: SegmentObserver + ?Sized,
    {
        if !self.segments.is_empty() {
            debug!(count = self.segments.len(), "clearing line segments");
        }
        for segment in self.segments.drain(..) {
            segment.destroy(observer);
        }
    }

    /// Drop the line, announcing every segment teardown first
    pub fn discard<O>(mut self, observer: &mut O)
    where
        O: SegmentObserver + ?Sized,
    {
        self.clear_segments(observer);
    }

    /// Dispatch every segment against this line's buffer
    pub fn dispatch_events<O>(&mut self, palette: &ColorPalette, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        let chars = self.chars.as_slice();
        self.segments
            .iter_mut()
            .map(|segment| segment.dispatch_events(chars, palette, observer))
            .sum()
    }

    /// Re-derive colors on every segment after a palette change
    pub fn recolor<O>(&mut self, palette: &ColorPalette, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        self.segments
            .iter_mut()
            .map(|segment| segment.recolor(palette, observer))
            .sum()
    }
}

impl TextSource for Line {
    fn text_slice(&self, start: usize, end_inclusive: usize) -> String {
        self.chars.as_slice().text_slice(start, end_inclusive)
    }
}

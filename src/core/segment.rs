//! Styled line segment with batched change dispatch
//!
//! A [`Segment`] is one styled run `[start, end]` (inclusive) of a line's
//! character buffer. It keeps two copies of everything a view can observe:
//! the *pending* value written by the buffer-update code and the *published*
//! value the view last saw.
//!
//! Mutators only touch pending state and flags. [`Segment::dispatch_events`]
//! reconciles the two copies once per update pass and tells the observer
//! exactly what moved. Palette changes go through [`Segment::recolor`], which
//! works from the published style only.

use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::core::color::Rgb;
use crate::core::event::{Counting, SegmentChange, SegmentId, SegmentObserver};
use crate::core::line::TextSource;
use crate::core::palette::ColorPalette;
use crate::core::screen::DefaultColors;
use crate::core::style::TextStyle;

/// One styled run of characters within a line
///
/// Not `Clone`: a copy would carry the same id.
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<termseg::core::Segment>();
/// ```
#[derive(Debug)]
pub struct Segment {
    id: SegmentId,
    start_index: usize,
    end_index: usize,
    /// Start index last announced; `None` until the first dispatch
    published_index: Option<usize>,
    text_dirty: bool,
    text: String,
    pending_style: TextStyle,
    published_style: TextStyle,
    style_dirty: bool,
    visible: bool,
    published_visible: bool,
    foreground: Rgb,
    background: Rgb,
}

impl Segment {
    /// Create a segment over `[start_index, end_index]`
    ///
    /// Resolved colors start out as the screen defaults. Nothing is
    /// announced until the first [`dispatch_events`](Self::dispatch_events).
    pub fn new(start_index: usize, end_index: usize, defaults: DefaultColors) -> Self {
        Self {
            id: SegmentId::next(),
            start_index,
            end_index,
            published_index: None,
            text_dirty: true,
            text: String::new(),
            pending_style: TextStyle::default(),
            published_style: TextStyle::default(),
            style_dirty: true,
            visible: true,
            published_visible: true,
            foreground: defaults.foreground,
            background: defaults.background,
        }
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Published start index
    ///
    /// Before the first dispatch this is the requested start.
    pub fn index(&self) -> usize {
        self.published_index.unwrap_or(self.start_index)
    }

    /// Requested start index
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Requested inclusive end index
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Text as of the last dispatch
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Terminal column width of the published text
    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Published visibility
    pub fn visible(&self) -> bool {
        self.published_visible
    }

    /// Resolved foreground color
    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// Resolved background color
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Published style
    pub fn style(&self) -> TextStyle {
        self.published_style
    }

    /// Style requested since the last dispatch
    pub fn pending_style(&self) -> TextStyle {
        self.pending_style
    }

    /// Whether a dispatch could have anything to reconcile
    pub fn is_dirty(&self) -> bool {
        self.style_dirty
            || self.text_dirty
            || self.published_index != Some(self.start_index)
            || self.visible != self.published_visible
    }

    /// Record a new range
    ///
    /// `text_changed` marks the content dirty. A moved start is picked up at
    /// dispatch time regardless. The dirty flag only ever gets set here, so
    /// several writes in one pass cannot lose a change.
    pub fn set_string_segment(
        &mut self,
        start_index: usize,
        end_index: usize,
        text_changed: bool,
    ) {
        self.start_index = start_index;
        self.end_index = end_index;
        self.text_dirty |= text_changed;
    }

    /// Request a new style
    ///
    /// Always marks the style dirty; equal styles are collapsed at dispatch.
    pub fn set_text_style(&mut self, style: TextStyle) {
        self.pending_style = style;
        self.style_dirty = true;
    }

    /// Request a visibility change
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Reconcile pending state with published state
    ///
    /// Runs style, then text/index, then visibility. Returns the number of
    /// notifications sent. A second call with no mutation in between sends
    /// nothing.
    pub fn dispatch_events<S, O>(
        &mut self,
        source: &S,
        palette: &ColorPalette,
        observer: &mut O,
    ) -> usize
    where
        S: TextSource + ?Sized,
        O: SegmentObserver + ?Sized,
    {
        let mut observer = Counting::new(observer);

        if self.style_dirty {
            self.style_dirty = false;

            let old = self.published_style;
            let new = self.pending_style;
            // An inverse flip swaps which index feeds which color
            let inverse_flipped = old.is_inverse() != new.is_inverse();
            let update_foreground = new.foreground != old.foreground || inverse_flipped;
            let update_background = new.background != old.background || inverse_flipped;
            let attributes_changed = new.attributes != old.attributes;

            self.published_style = new;
            if update_foreground {
                self.update_foreground(palette, &mut observer);
            }
            if update_background {
                self.update_background(palette, &mut observer);
            }
            if attributes_changed {
                observer.notify(self.id, SegmentChange::StyleChanged);
            }
        }

        let index_moved = self.published_index != Some(self.start_index);
        if index_moved || self.text_dirty {
            self.text_dirty = false;
            self.text = source.text_slice(self.start_index, self.end_index);
            if index_moved {
                self.published_index = Some(self.start_index);
                observer.notify(self.id, SegmentChange::IndexChanged);
            }
            observer.notify(self.id, SegmentChange::TextChanged);
        }

        if self.visible != self.published_visible {
            self.published_visible = self.visible;
            observer.notify(self.id, SegmentChange::VisibleChanged);
        }

        if observer.count > 0 {
            trace!(segment = %self.id, notifications = observer.count, "dispatched");
        }
        observer.count
    }

    /// Re-derive both colors after a palette change
    ///
    /// Uses the published style; a pending style edit stays pending. A color
    /// still holding the screen default is settled onto its palette entry
    /// here, whichever entry changed.
    pub fn recolor<O>(&mut self, palette: &ColorPalette, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        let mut observer = Counting::new(observer);
        self.update_background(palette, &mut observer);
        self.update_foreground(palette, &mut observer);
        observer.count
    }

    /// Tear the segment down
    ///
    /// The observer hears `AboutToBeDestroyed` while the segment is still
    /// intact; it is dropped afterwards.
    pub fn destroy<O>(self, observer: &mut O)
    where
        O: SegmentObserver + ?Sized,
    {
        debug!(segment = %self.id, "destroying segment");
        observer.notify(self.id, SegmentChange::AboutToBeDestroyed);
    }

    fn update_foreground<O>(&mut self, palette: &ColorPalette, observer: &mut O)
    where
        O: SegmentObserver + ?Sized,
    {
        let color = palette.lookup(self.published_style.effective_foreground(), false);
        if color != self.foreground {
            self.foreground = color;
            observer.notify(self.id, SegmentChange::ForegroundChanged);
        }
    }

    fn update_background<O>(&mut self, palette: &ColorPalette, observer: &mut O)
    where
        O: SegmentObserver + ?Sized,
    {
        let color = palette.lookup(self.published_style.effective_background(), false);
        if color != self.background {
            self.background = color;
            observer.notify(self.id, SegmentChange::BackgroundChanged);
        }
    }
}

//! Terminal screen - owner of the palette, default colors and rows
//!
//! The screen is the only place the palette can change. Every palette edit
//! that actually alters a mapping is followed by a recolor of every segment
//! on every row, so views see new colors without waiting for a text edit.

use tracing::debug;

use crate::core::color::{ColorIndex, Rgb};
use crate::core::event::{SegmentId, SegmentObserver};
use crate::core::line::Line;
use crate::core::palette::ColorPalette;
use crate::core::style::TextStyle;

/// Colors a new segment starts with before its first dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultColors {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for DefaultColors {
    fn default() -> Self {
        Self {
            foreground: Rgb::new(212, 212, 212),
            background: Rgb::new(30, 30, 30),
        }
    }
}

/// Rows of segmented lines plus the palette they resolve against
///
/// Not `Clone`: a copy would carry the same segment ids.
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<termseg::core::Screen>();
/// ```
#[derive(Debug)]
pub struct Screen {
    lines: Vec<Line>,
    cols: usize,
    palette: ColorPalette,
    defaults: DefaultColors,
}

impl Screen {
    /// Create a screen of blank rows with the xterm palette
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_palette(cols, rows, ColorPalette::new(), DefaultColors::default())
    }

    pub fn with_palette(
        cols: usize,
        rows: usize,
        palette: ColorPalette,
        defaults: DefaultColors,
    ) -> Self {
        Self {
            lines: (0..rows).map(|_| Line::with_width(cols)).collect(),
            cols,
            palette,
            defaults,
        }
    }

    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn default_foreground(&self) -> Rgb {
        self.defaults.foreground
    }

    pub fn default_background(&self) -> Rgb {
        self.defaults.background
    }

    pub fn default_colors(&self) -> DefaultColors {
        self.defaults
    }

    /// Change the colors future segments start with
    ///
    /// Existing segments keep their resolved colors.
    pub fn set_default_colors(&mut self, defaults: DefaultColors) {
        self.defaults = defaults;
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.lines.get_mut(row)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Add a segment to `row` using this screen's default colors
    pub fn add_segment(
        &mut self,
        row: usize,
        start: usize,
        end: usize,
        style: TextStyle,
    ) -> Option<SegmentId> {
        let defaults = self.defaults;
        self.lines
            .get_mut(row)
            .map(|line| line.add_segment(start, end, style, defaults))
    }

    /// Change the row count
    ///
    /// Rows removed from the bottom announce their segments' teardown.
    pub fn resize_rows<O>(&mut self, rows: usize, observer: &mut O)
    where
        O: SegmentObserver + ?Sized,
    {
        if rows < self.lines.len() {
            for line in self.lines.drain(rows..) {
                line.discard(observer);
            }
        } else {
            let cols = self.cols;
            self.lines.resize_with(rows, || Line::with_width(cols));
        }
    }

    /// Dispatch every segment on every row
    pub fn dispatch_events<O>(&mut self, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        let palette = &self.palette;
        self.lines
            .iter_mut()
            .map(|line| line.dispatch_events(palette, observer))
            .sum()
    }

    /// Change one palette entry, recoloring segments if it changed
    pub fn set_palette_color<O>(
        &mut self,
        index: ColorIndex,
        color: Rgb,
        observer: &mut O,
    ) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        if !self.palette.set_color(index, color) {
            return 0;
        }
        self.recolor(observer)
    }

    /// Replace the 16 ANSI colors, recoloring segments if any changed
    pub fn set_ansi_colors<O>(&mut self, ansi: &[Rgb; 16], observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        if !self.palette.set_ansi_colors(ansi) {
            return 0;
        }
        self.recolor(observer)
    }

    /// Restore the xterm palette, recoloring segments if anything changed
    pub fn reset_palette<O>(&mut self, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        if !self.palette.reset() {
            return 0;
        }
        self.recolor(observer)
    }

    /// Swap the whole palette, recoloring segments if it differs
    pub fn replace_palette<O>(&mut self, palette: ColorPalette, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        if self.palette == palette {
            return 0;
        }
        self.palette = palette;
        self.recolor(observer)
    }

    /// Re-derive colors on every segment from the current palette
    pub fn recolor<O>(&mut self, observer: &mut O) -> usize
    where
        O: SegmentObserver + ?Sized,
    {
        let palette = &self.palette;
        let changed: usize = self
            .lines
            .iter_mut()
            .map(|line| line.recolor(palette, observer))
            .sum();
        debug!(changed, "palette changed, segments recolored");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{NullObserver, SegmentChange};
    use crate::core::style::Attributes;

    #[test]
    fn test_screen_new() {
        let screen = Screen::new(80, 24);
        assert_eq!(screen.rows(), 24);
        assert_eq!(screen.cols(), 80);
        assert_eq!(screen.line(0).map(Line::len), Some(80));
        assert!(screen.line(24).is_none());
    }

    #[test]
    fn test_add_segment_out_of_range_row() {
        let mut screen = Screen::new(10, 2);
        assert!(screen.add_segment(5, 0, 3, TextStyle::default()).is_none());
    }

    #[test]
    fn test_palette_edit_recolors_without_mutation() {
        let mut screen = Screen::new(10, 2);
        let style = TextStyle::new(2, 5, Attributes::empty());
        let id = screen.add_segment(1, 0, 3, style).unwrap();
        screen.dispatch_events(&mut NullObserver);

        let mut log = Vec::new();
        let changed = screen.set_palette_color(5, Rgb::new(1, 2, 3), &mut log);
        assert_eq!(changed, 1);
        assert_eq!(log, vec![(id, SegmentChange::BackgroundChanged)]);

        let segment = screen.line(1).and_then(|l| l.segment(id)).unwrap();
        assert_eq!(segment.background(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_no_op_palette_edit_skips_fan_out() {
        let mut screen = Screen::new(10, 1);
        screen.add_segment(0, 0, 3, TextStyle::default());
        screen.dispatch_events(&mut NullObserver);

        let same = screen.palette().lookup(2, false);
        let mut log = Vec::new();
        assert_eq!(screen.set_palette_color(2, same, &mut log), 0);
        assert_eq!(screen.reset_palette(&mut log), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_replace_palette() {
        let mut screen = Screen::new(10, 1);
        let id = screen
            .add_segment(0, 0, 3, TextStyle::new(1, 0, Attributes::empty()))
            .unwrap();
        screen.dispatch_events(&mut NullObserver);

        let mut palette = ColorPalette::new();
        palette.set_color(1, Rgb::new(7, 7, 7));
        // Background still holds the screen default until the first recolor
        let mut log = Vec::new();
        assert_eq!(screen.replace_palette(palette, &mut log), 2);
        assert_eq!(
            log,
            vec![
                (id, SegmentChange::BackgroundChanged),
                (id, SegmentChange::ForegroundChanged)
            ]
        );
        let segment = screen.line(0).and_then(|l| l.segment(id)).unwrap();
        assert_eq!(segment.foreground(), Rgb::new(7, 7, 7));
        assert_eq!(segment.background(), screen.palette().lookup(0, false));
    }

    #[test]
    fn test_resize_rows_announces_dropped_segments() {
        let mut screen = Screen::new(10, 3);
        screen.add_segment(0, 0, 3, TextStyle::default());
        let dropped = screen.add_segment(2, 0, 3, TextStyle::default()).unwrap();

        let mut log = Vec::new();
        screen.resize_rows(2, &mut log);
        assert_eq!(screen.rows(), 2);
        assert_eq!(log, vec![(dropped, SegmentChange::AboutToBeDestroyed)]);

        screen.resize_rows(4, &mut log);
        assert_eq!(screen.rows(), 4);
        assert_eq!(screen.line(3).map(Line::len), Some(10));
    }

    #[test]
    fn test_segment_ids_unique_across_rows() {
        let mut screen = Screen::new(10, 3);
        let mut ids = Vec::new();
        for row in 0..3 {
            for start in [0, 5] {
                ids.extend(screen.add_segment(row, start, start + 4, TextStyle::default()));
            }
        }
        let seen: std::collections::HashSet<SegmentId> = screen
            .lines()
            .iter()
            .flat_map(|line| line.segments().iter().map(|s| s.id()))
            .collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_new_segment_uses_default_colors() {
        let mut screen = Screen::new(10, 1);
        let defaults = DefaultColors {
            foreground: Rgb::new(1, 1, 1),
            background: Rgb::new(2, 2, 2),
        };
        screen.set_default_colors(defaults);
        let id = screen.add_segment(0, 0, 3, TextStyle::default()).unwrap();

        let segment = screen.line(0).and_then(|l| l.segment(id)).unwrap();
        assert_eq!(segment.foreground(), defaults.foreground);
        assert_eq!(segment.background(), defaults.background);
    }
}

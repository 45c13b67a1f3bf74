//! Property tests for segment dispatch
//!
//! Random sequences of mutations followed by dispatch must never panic,
//! must leave the segment clean, and must make a second dispatch silent.

use proptest::prelude::*;
use termseg::core::{
    Attributes, ColorPalette, DefaultColors, Line, NullObserver, Rgb, SegmentChange, TextStyle,
};

#[derive(Debug, Clone)]
enum Op {
    Range { start: usize, end: usize, changed: bool },
    Style(TextStyle),
    Visible(bool),
    Truncate(usize),
    Write { col: usize, text: String },
    Palette { index: u8, color: Rgb },
}

fn style_strategy() -> impl Strategy<Value = TextStyle> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(fg, bg, bits)| {
        TextStyle::new(fg, bg, Attributes::from_bits_truncate(bits))
    })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..64, 0usize..64, any::<bool>())
            .prop_map(|(start, end, changed)| Op::Range { start, end, changed }),
        style_strategy().prop_map(Op::Style),
        any::<bool>().prop_map(Op::Visible),
        (0usize..48).prop_map(Op::Truncate),
        (0usize..48, "[a-z ]{0,12}").prop_map(|(col, text)| Op::Write { col, text }),
        (0u8..16, any::<(u8, u8, u8)>())
            .prop_map(|(index, (r, g, b))| Op::Palette { index, color: Rgb::new(r, g, b) }),
    ]
}

proptest! {
    #[test]
    fn dispatch_settles(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut palette = ColorPalette::new();
        let mut line = Line::from_text("the quick brown fox jumps over");
        let id = line.add_segment(0, 4, TextStyle::default(), DefaultColors::default());

        for op in ops {
            match op {
                Op::Range { start, end, changed } => {
                    line.segment_mut(id).unwrap().set_string_segment(start, end, changed);
                }
                Op::Style(style) => line.segment_mut(id).unwrap().set_text_style(style),
                Op::Visible(visible) => line.segment_mut(id).unwrap().set_visible(visible),
                Op::Truncate(len) => line.truncate(len),
                Op::Write { col, text } => {
                    line.write_str(col, &text);
                }
                Op::Palette { index, color } => {
                    if palette.set_color(index, color) {
                        line.recolor(&palette, &mut NullObserver);
                    }
                }
            }
        }

        line.dispatch_events(&palette, &mut NullObserver);
        let segment = line.segment(id).unwrap();
        prop_assert!(!segment.is_dirty());

        let mut log = Vec::new();
        prop_assert_eq!(line.dispatch_events(&palette, &mut log), 0);
        prop_assert!(log.is_empty());
    }

    #[test]
    fn resolved_colors_follow_published_style(style in style_strategy()) {
        let palette = ColorPalette::new();
        let mut line = Line::from_text("abc");
        let id = line.add_segment(0, 2, style, DefaultColors::default());
        line.dispatch_events(&palette, &mut NullObserver);

        let segment = line.segment(id).unwrap();
        let inverse = style.is_inverse();
        let (fg, bg) = if inverse {
            (style.background, style.foreground)
        } else {
            (style.foreground, style.background)
        };
        // Colors whose index did not move keep the construction defaults
        let initial = TextStyle::default();
        let defaults = DefaultColors::default();
        if style.foreground != initial.foreground || inverse {
            prop_assert_eq!(segment.foreground(), palette.lookup(fg, false));
        } else {
            prop_assert_eq!(segment.foreground(), defaults.foreground);
        }
        if style.background != initial.background || inverse {
            prop_assert_eq!(segment.background(), palette.lookup(bg, false));
        } else {
            prop_assert_eq!(segment.background(), defaults.background);
        }
    }

    #[test]
    fn slice_is_clamped(start in 0usize..100, end in 0usize..100) {
        let palette = ColorPalette::new();
        let text = "hello world";
        let mut line = Line::from_text(text);
        let id = line.add_segment(start, end, TextStyle::default(), DefaultColors::default());

        let mut log = Vec::new();
        line.dispatch_events(&palette, &mut log);

        let expected: String = text
            .chars()
            .enumerate()
            .filter(|(i, _)| *i >= start && *i <= end)
            .map(|(_, c)| c)
            .collect();
        prop_assert_eq!(line.segment(id).unwrap().text(), expected.as_str());
        prop_assert!(log.contains(&(id, SegmentChange::TextChanged)));
    }
}

//! Text style carried by a segment
//!
//! A style is a plain value: two palette indices plus an attribute set.
//! Segments compare styles field by field to decide what to announce.

use crate::core::color::{ColorIndex, NamedColor};

bitflags::bitflags! {
    /// SGR text attributes.
    ///
    /// Combine with bitwise OR: `Attributes::BOLD | Attributes::INVERSE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold text (SGR 1)
        const BOLD = 1 << 0;
        /// Faint/dim text (SGR 2)
        const FAINT = 1 << 1;
        /// Italic text (SGR 3)
        const ITALIC = 1 << 2;
        /// Underlined text (SGR 4)
        const UNDERLINE = 1 << 3;
        /// Blinking text (SGR 5)
        const BLINK = 1 << 4;
        /// Inverse/reverse video (SGR 7)
        const INVERSE = 1 << 5;
        /// Hidden/invisible text (SGR 8)
        const HIDDEN = 1 << 6;
        /// Strikethrough text (SGR 9)
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Style of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Foreground palette index
    pub foreground: ColorIndex,
    /// Background palette index
    pub background: ColorIndex,
    /// Attribute flags
    pub attributes: Attributes,
}

impl TextStyle {
    pub fn new(foreground: ColorIndex, background: ColorIndex, attributes: Attributes) -> Self {
        Self {
            foreground,
            background,
            attributes,
        }
    }

    /// Builder-style attribute setter
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn is_inverse(&self) -> bool {
        self.attributes.contains(Attributes::INVERSE)
    }

    /// Palette index that paints the glyphs (accounting for inverse)
    pub fn effective_foreground(&self) -> ColorIndex {
        if self.is_inverse() {
            self.background
        } else {
            self.foreground
        }
    }

    /// Palette index that paints the cell (accounting for inverse)
    pub fn effective_background(&self) -> ColorIndex {
        if self.is_inverse() {
            self.foreground
        } else {
            self.background
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            foreground: NamedColor::White.to_index(),
            background: NamedColor::Black.to_index(),
            attributes: Attributes::empty(),
        }
    }
}

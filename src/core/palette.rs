//! Color palette
//!
//! Maps a palette index plus a bold hint to a concrete color. Every mutator
//! reports whether a mapping actually changed; the owner of the palette uses
//! that to decide whether dependent segments need a recolor.

use crate::core::color::{default_256_palette, ColorIndex, NamedColor, Rgb};

/// 256-entry color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: [Rgb; 256],
    /// Map bold text in colors 0-7 to their bright variants
    bold_is_bright: bool,
}

impl ColorPalette {
    /// Create the standard xterm palette
    pub fn new() -> Self {
        Self {
            colors: default_256_palette(),
            bold_is_bright: false,
        }
    }

    /// Create a palette with the given bold-as-bright policy
    pub fn with_bold_is_bright(bold_is_bright: bool) -> Self {
        Self {
            bold_is_bright,
            ..Self::new()
        }
    }

    /// Look up the concrete color for an index
    pub fn lookup(&self, index: ColorIndex, bold: bool) -> Rgb {
        let index = if bold && self.bold_is_bright {
            NamedColor::brighten(index)
        } else {
            index
        };
        self.colors[index as usize]
    }

    /// Replace one mapping, returning `true` if it changed
    pub fn set_color(&mut self, index: ColorIndex, color: Rgb) -> bool {
        let slot = &mut self.colors[index as usize];
        if *slot == color {
            return false;
        }
        *slot = color;
        true
    }

    /// Replace the 16 ANSI colors, returning `true` if any changed
    pub fn set_ansi_colors(&mut self, ansi: &[Rgb; 16]) -> bool {
        let mut changed = false;
        for (index, color) in ansi.iter().enumerate() {
            changed |= self.set_color(index as ColorIndex, *color);
        }
        changed
    }

    /// Restore the xterm defaults, returning `true` if anything changed
    pub fn reset(&mut self) -> bool {
        let defaults = default_256_palette();
        if self.colors == defaults {
            return false;
        }
        self.colors = defaults;
        true
    }

    pub fn bold_is_bright(&self) -> bool {
        self.bold_is_bright
    }

    /// Change the bold policy, returning `true` if it changed
    pub fn set_bold_is_bright(&mut self, enabled: bool) -> bool {
        let changed = self.bold_is_bright != enabled;
        self.bold_is_bright = enabled;
        changed
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

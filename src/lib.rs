//! Terminal line segments with dirty tracking
//!
//! A terminal line is split into styled runs ("segments"). Buffer updates
//! mutate segments cheaply and as often as they like; once per render pass
//! the renderer dispatches each segment, which publishes what changed and
//! notifies only for values that actually moved.
//!
//! - `core`: segments, styles, palette, lines and screen
//! - `config`: TOML screen configuration and color schemes
//!
//! ```
//! use termseg::core::{Attributes, Line, ColorPalette, DefaultColors, TextStyle};
//!
//! let palette = ColorPalette::new();
//! let mut line = Line::from_text("hello world");
//! let id = line.add_segment(0, 4, TextStyle::default(), DefaultColors::default());
//!
//! let mut changes = Vec::new();
//! line.dispatch_events(&palette, &mut changes);
//! assert_eq!(line.segment(id).map(|s| s.text()), Some("hello"));
//!
//! // Nothing changed, nothing announced
//! changes.clear();
//! assert_eq!(line.dispatch_events(&palette, &mut changes), 0);
//!
//! let inverse = TextStyle::new(1, 0, Attributes::INVERSE);
//! if let Some(segment) = line.segment_mut(id) {
//!     segment.set_text_style(inverse);
//! }
//! line.dispatch_events(&palette, &mut changes);
//! assert_eq!(changes.len(), 3);
//! ```

pub mod config;
pub mod core;
mod error;

pub use error::{Error, Result};

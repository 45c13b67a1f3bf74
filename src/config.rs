//! Screen configuration
//!
//! Loaded from TOML with defaults for every field, then adjusted by
//! environment variables. Precedence: env > file > defaults.
//!
//! Without a `theme` key a `[colors]` table is used as written; `theme`
//! picks a built-in scheme instead ("custom" keeps `[colors]`).
//!
//! ```toml
//! columns = 80
//! rows = 24
//! bold_is_bright = true
//!
//! [colors]
//! foreground = "#d4d4d4"
//! background = "#1e1e1e"
//! ansi = ["#000000", "#cd3131", ...]
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ColorPalette, DefaultColors, Rgb, Screen, SegmentObserver, MAX_COLUMNS};
use crate::error::{Error, Result};

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
    /// Custom theme (uses colors field)
    Custom,
}

impl ThemeName {
    /// Parse theme name from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(ThemeName::Dark),
            "light" => Some(ThemeName::Light),
            "custom" => Some(ThemeName::Custom),
            _ => None,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Default foreground color (hex)
    pub foreground: String,
    /// Default background color (hex)
    pub background: String,
    /// ANSI colors 0-15 (hex)
    pub ansi: [String; 16],
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            foreground: "#d4d4d4".to_string(),
            background: "#1e1e1e".to_string(),
            ansi: [
                "#000000".to_string(), // Black
                "#cd3131".to_string(), // Red
                "#0dbc79".to_string(), // Green
                "#e5e510".to_string(), // Yellow
                "#2472c8".to_string(), // Blue
                "#bc3fbc".to_string(), // Magenta
                "#11a8cd".to_string(), // Cyan
                "#e5e5e5".to_string(), // White
                "#666666".to_string(), // Bright Black
                "#f14c4c".to_string(), // Bright Red
                "#23d18b".to_string(), // Bright Green
                "#f5f543".to_string(), // Bright Yellow
                "#3b8eea".to_string(), // Bright Blue
                "#d670d6".to_string(), // Bright Magenta
                "#29b8db".to_string(), // Bright Cyan
                "#ffffff".to_string(), // Bright White
            ],
        }
    }
}

impl ColorScheme {
    /// Dark theme (VS Code inspired)
    pub fn dark() -> Self {
        Self::default()
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            foreground: "#333333".to_string(),
            background: "#ffffff".to_string(),
            ansi: [
                "#000000".to_string(), // Black
                "#cd3131".to_string(), // Red
                "#00bc00".to_string(), // Green
                "#949800".to_string(), // Yellow
                "#0451a5".to_string(), // Blue
                "#bc05bc".to_string(), // Magenta
                "#0598bc".to_string(), // Cyan
                "#555555".to_string(), // White
                "#666666".to_string(), // Bright Black
                "#cd3131".to_string(), // Bright Red
                "#14ce14".to_string(), // Bright Green
                "#b5ba00".to_string(), // Bright Yellow
                "#0451a5".to_string(), // Bright Blue
                "#bc05bc".to_string(), // Bright Magenta
                "#0598bc".to_string(), // Bright Cyan
                "#a5a5a5".to_string(), // Bright White
            ],
        }
    }

    /// Parsed default foreground/background
    pub fn default_colors(&self) -> Result<DefaultColors> {
        Ok(DefaultColors {
            foreground: parse_color(&self.foreground, "colors.foreground")?,
            background: parse_color(&self.background, "colors.background")?,
        })
    }

    /// Parsed ANSI colors
    pub fn ansi_colors(&self) -> Result<[Rgb; 16]> {
        let mut colors = [Rgb::default(); 16];
        for (i, hex) in self.ansi.iter().enumerate() {
            colors[i] = parse_color(hex, &format!("colors.ansi[{}]", i))?;
        }
        Ok(colors)
    }

    /// Check every color parses
    pub fn validate(&self) -> Result<()> {
        self.default_colors()?;
        self.ansi_colors()?;
        Ok(())
    }
}

fn parse_color(hex: &str, field: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).ok_or_else(|| Error::InvalidColor {
        field: field.to_string(),
        value: hex.to_string(),
    })
}

/// Screen configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Columns per line
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Number of lines
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Render bold text in colors 0-7 with the bright variant
    #[serde(default)]
    pub bold_is_bright: bool,

    /// Theme name; unset means "use `colors` if given, else dark"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeName>,

    /// Custom color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorScheme>,
}

fn default_columns() -> usize {
    80
}
fn default_rows() -> usize {
    24
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            bold_is_bright: false,
            theme: None,
            colors: None,
        }
    }
}

impl ScreenConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScreenConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading screen config");
        let content = fs::read_to_string(path)?;
        let mut config: ScreenConfig = toml::from_str(&content)?;
        config.apply_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Apply `TERMSEG_*` environment variables
    pub fn apply_env_vars(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TERMSEG_THEME") {
            match ThemeName::parse(&val) {
                Some(theme) => self.theme = Some(theme),
                None => warn!(value = %val, "ignoring unknown theme"),
            }
        }
        if let Some(val) = lookup("TERMSEG_BOLD_IS_BRIGHT") {
            self.bold_is_bright = val == "1" || val.to_lowercase() == "true";
        }
        if let Some(val) = lookup("TERMSEG_COLUMNS") {
            if let Ok(cols) = val.parse() {
                self.columns = cols;
            }
        }
        if let Some(val) = lookup("TERMSEG_ROWS") {
            if let Ok(rows) = val.parse() {
                self.rows = rows;
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.columns > MAX_COLUMNS {
            return Err(Error::InvalidValue {
                field: "columns".to_string(),
                value: self.columns.to_string(),
                reason: "must be between 1 and 4096",
            });
        }
        if self.rows == 0 || self.rows > 4096 {
            return Err(Error::InvalidValue {
                field: "rows".to_string(),
                value: self.rows.to_string(),
                reason: "must be between 1 and 4096",
            });
        }
        match &self.colors {
            Some(colors) => colors.validate(),
            None => Ok(()),
        }
    }

    /// Theme in effect once the file's `[colors]` table is taken into account
    pub fn effective_theme(&self) -> ThemeName {
        match (self.theme, &self.colors) {
            (Some(theme), _) => theme,
            (None, Some(_)) => ThemeName::Custom,
            (None, None) => ThemeName::default(),
        }
    }

    /// Get the effective color scheme based on the theme setting
    pub fn effective_colors(&self) -> ColorScheme {
        match self.effective_theme() {
            ThemeName::Custom => self.colors.clone().unwrap_or_default(),
            ThemeName::Dark => ColorScheme::dark(),
            ThemeName::Light => ColorScheme::light(),
        }
    }

    /// Palette described by this configuration
    pub fn palette(&self) -> Result<ColorPalette> {
        let mut palette = ColorPalette::with_bold_is_bright(self.bold_is_bright);
        palette.set_ansi_colors(&self.effective_colors().ansi_colors()?);
        Ok(palette)
    }

    /// Build an empty screen from this configuration
    pub fn build_screen(&self) -> Result<Screen> {
        let defaults = self.effective_colors().default_colors()?;
        Ok(Screen::with_palette(
            self.columns,
            self.rows,
            self.palette()?,
            defaults,
        ))
    }
}

impl Screen {
    /// Switch to a new color scheme
    ///
    /// Default colors apply to segments created afterwards; existing
    /// segments are recolored through the new palette.
    pub fn apply_color_scheme<O>(
        &mut self,
        scheme: &ColorScheme,
        observer: &mut O,
    ) -> Result<usize>
    where
        O: SegmentObserver + ?Sized,
    {
        let defaults = scheme.default_colors()?;
        let ansi = scheme.ansi_colors()?;
        self.set_default_colors(defaults);
        Ok(self.set_ansi_colors(&ansi, observer))
    }
}

//! Auto-fit sizing: pick the largest font that keeps the whole grid inside
//! the host surface (contain-fit, not cover-fit).
//!
//! Runs once per layout change, not per tick. The computation follows the
//! font's character aspect ratio (glyph width / glyph height) and
//! line-height multiplier; both default to the built-in font constants when
//! a font entry does not override them.

use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Name of the built-in default font.
pub const DEFAULT_FONT: &str = "CourierPrime";
/// Character aspect ratio used when a font does not specify one.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 0.6;
/// Line-height multiplier used when a font does not specify one.
pub const DEFAULT_LINE_HEIGHT_MULTIPLIER: f32 = 1.0;
/// Fixed padding, in surface units, on all four sides of the grid.
pub const DEFAULT_PADDING: f32 = 10.0;

/// A font table entry.
///
/// `sources` is opaque to the core: the host's text engine loads and shapes
/// the font; the core only consumes the metrics.
#[derive(Debug, Clone, Default)]
pub struct Font {
    /// Asset paths handed through to the host text engine.
    pub sources: Vec<PathBuf>,
    /// Glyph width / glyph height; defaults when absent.
    pub char_aspect_ratio: Option<f32>,
    /// Line height as a multiple of font size; defaults when absent.
    pub line_height_multiplier: Option<f32>,
}

/// Mapping from font name to font entry.
pub type FontMap = HashMap<String, Font>;

/// The built-in font table.
pub fn default_fonts() -> FontMap {
    let mut fonts = FontMap::new();
    fonts.insert(
        DEFAULT_FONT.to_string(),
        Font {
            sources: vec![PathBuf::from("fonts/CourierPrime-Regular.ttf")],
            char_aspect_ratio: Some(0.6),
            line_height_multiplier: Some(1.0),
        },
    );
    fonts.insert(
        "DejaVuSansMono".to_string(),
        Font {
            sources: vec![PathBuf::from("fonts/DejaVuSansMono.ttf")],
            char_aspect_ratio: Some(0.55),
            line_height_multiplier: Some(1.1),
        },
    );
    fonts
}

/// Computed layout for one grid on one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    /// Font size, in surface units.
    pub font_size: f32,
    /// Width of one grid cell.
    pub cell_width: f32,
    /// Height of one grid cell.
    pub cell_height: f32,
    /// Canvas width including padding.
    pub canvas_width: f32,
    /// Canvas height including padding.
    pub canvas_height: f32,
    /// X of the grid's top-left corner on the canvas.
    pub origin_x: f32,
    /// Y of the grid's top-left corner on the canvas.
    pub origin_y: f32,
}

/// Static configuration for a scene grid.
///
/// Extents, frame rate, and font selection are validated once at
/// construction; per-tick code never re-checks them.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Grid width in columns.
    pub columns: usize,
    /// Grid height in rows.
    pub rows: usize,
    /// Target ticks per second.
    pub frame_rate: u32,
    /// Font table: built-in defaults merged with host overrides.
    fonts: FontMap,
    /// Name of the selected font (present in `fonts`).
    selected_font: String,
    /// Padding on all sides, in surface units.
    padding: f32,
}

impl GridConfig {
    /// Create a configuration with the built-in font table and default font.
    ///
    /// # Errors
    ///
    /// Fails on zero extents or a zero frame rate.
    pub fn new(columns: usize, rows: usize, frame_rate: u32) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid { columns, rows });
        }
        if frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(Self {
            columns,
            rows,
            frame_rate,
            fonts: default_fonts(),
            selected_font: DEFAULT_FONT.to_string(),
            padding: DEFAULT_PADDING,
        })
    }

    /// Merge host fonts over the built-in table (host entries win on name
    /// collisions).
    #[must_use]
    pub fn with_fonts(mut self, fonts: FontMap) -> Self {
        self.fonts.extend(fonts);
        self
    }

    /// Select a font by name.
    ///
    /// # Errors
    ///
    /// Fails fast if the name is not in the merged font table; call after
    /// `with_fonts` when using host fonts.
    pub fn with_font(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if !self.fonts.contains_key(&name) {
            return Err(ConfigError::UnknownFont(name));
        }
        self.selected_font = name;
        Ok(self)
    }

    /// Override the fixed padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Name of the selected font.
    #[inline]
    pub fn selected_font(&self) -> &str {
        &self.selected_font
    }

    /// The merged font table.
    #[inline]
    pub const fn fonts(&self) -> &FontMap {
        &self.fonts
    }

    /// The tick interval: `1000 / frame_rate` milliseconds.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate
    }

    /// Metrics of the selected font, falling back to the built-in constants.
    pub fn metrics(&self) -> (f32, f32) {
        let font = &self.fonts[&self.selected_font];
        (
            font.char_aspect_ratio.unwrap_or(DEFAULT_CHAR_ASPECT_RATIO),
            font.line_height_multiplier
                .unwrap_or(DEFAULT_LINE_HEIGHT_MULTIPLIER),
        )
    }

    /// Compute the largest layout that fits inside a container.
    ///
    /// Padding is subtracted from both container dimensions first; the font
    /// size is the smaller of the width-fit and height-fit candidates, so
    /// the whole grid is guaranteed to fit without clipping or scroll.
    #[allow(clippy::cast_precision_loss)]
    pub fn fit(&self, container_width: f32, container_height: f32) -> GridDimensions {
        let (aspect, line_height) = self.metrics();
        let available_width = (container_width - self.padding * 2.0).max(0.0);
        let available_height = (container_height - self.padding * 2.0).max(0.0);

        let columns = self.columns as f32;
        let rows = self.rows as f32;

        let font_for_width = available_width / (columns * aspect);
        let font_for_height = available_height / (rows * line_height);
        let font_size = font_for_width.min(font_for_height);

        let cell_width = font_size * aspect;
        let cell_height = font_size * line_height;

        GridDimensions {
            font_size,
            cell_width,
            cell_height,
            canvas_width: cell_width.mul_add(columns, self.padding * 2.0),
            canvas_height: cell_height.mul_add(rows, self.padding * 2.0),
            origin_x: self.padding,
            origin_y: self.padding,
        }
    }
}

//! Render module: per-tick compositing and run encoding, plus layout-time
//! auto-fit sizing.
//!
//! This module contains:
//! - [`Grid`]: the transient full-scene raster and its compositor
//! - [`Run`] / [`encode`]: run-length color merge into styled text runs
//! - [`GridConfig`] / [`GridDimensions`]: contain-fit sizing and fonts

mod fit;
mod grid;
mod runs;

pub use fit::{
    default_fonts, Font, FontMap, GridConfig, GridDimensions, DEFAULT_CHAR_ASPECT_RATIO,
    DEFAULT_FONT, DEFAULT_LINE_HEIGHT_MULTIPLIER, DEFAULT_PADDING,
};
pub use grid::Grid;
pub use runs::{encode, Run};

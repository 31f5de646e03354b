//! Frame module: the glyph raster data model.
//!
//! This module contains:
//! - [`Cell`]: one grid position's glyph + colors
//! - [`Color`]: RGB or transparent
//! - [`Frame`]: immutable rectangular raster, the atomic animation asset

mod cell;
#[allow(clippy::module_inception)]
mod frame;

pub use cell::{Cell, Color, Rgb};
pub use frame::Frame;

//! Draw surface boundary: where styled runs leave the core.
//!
//! The core never touches pixels or fonts; it hands each frame's run list
//! plus the computed grid dimensions to a [`DrawSurface`]. Hosts implement
//! this trait over their drawing stack. [`TerminalSurface`] is the bundled
//! reference implementation for ANSI terminals.

mod terminal;

pub use terminal::TerminalSurface;

use crate::render::{GridDimensions, Run};
use std::io;

/// A host drawing surface consuming one frame of styled runs per tick.
///
/// Implementations own text layout, font loading, and pixel output; the
/// core treats them as opaque.
pub trait DrawSurface: Send {
    /// Available drawing area, in the surface's own units.
    ///
    /// Fed to the auto-fit computation; called once per tick, so it should
    /// be cheap.
    fn size(&self) -> (f32, f32);

    /// Draw one composited frame.
    ///
    /// `runs` is the ordered styled-run list (row spans plus newline
    /// separators); `dims` carries the canvas size and the grid origin.
    ///
    /// # Errors
    ///
    /// Surface I/O failures; the scene loop logs them and keeps ticking.
    fn draw(&mut self, runs: &[Run], dims: &GridDimensions) -> io::Result<()>;
}

//! Error types: fail-fast configuration errors and isolated tick faults.
//!
//! Configuration problems (ragged frames, empty animations, unknown fonts)
//! surface at construction time. Runtime faults from component updates are
//! carried as [`TickFault`]s so a single misbehaving entity never takes down
//! the scene loop.

use thiserror::Error;

/// Errors detected when building frames, animations, or grid configuration.
///
/// These are always programmer/configuration mistakes and are raised before
/// any ticking starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Frame rows must all have the same length.
    #[error("frame is not rectangular: row {row} has {len} cells, expected {expected}")]
    RaggedFrame {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of row 0.
        expected: usize,
    },

    /// Frames must contain at least one row and one column.
    #[error("frame must have at least one row and one column")]
    EmptyFrame,

    /// A glyph was not a single-column printable character.
    #[error("glyph {0:?} is not a single-column printable character")]
    BadGlyph(char),

    /// An animation was built with no frames.
    #[error("animation requires at least one frame")]
    NoFrames,

    /// Animation speed must be at least one tick per frame advance.
    #[error("animation speed must be >= 1 tick per frame, got {0}")]
    ZeroSpeed(u32),

    /// The selected font is not present in the font table.
    #[error("unknown font {0:?}")]
    UnknownFont(String),

    /// Grid extents must be non-zero to drive a scene.
    #[error("grid must have non-zero columns and rows, got {columns}x{rows}")]
    EmptyGrid {
        /// Configured column count.
        columns: usize,
        /// Configured row count.
        rows: usize,
    },

    /// Frame rate must be positive.
    #[error("frame rate must be positive")]
    ZeroFrameRate,
}

/// An error raised by a [`Component`](crate::scene::Component) during update.
///
/// Custom components can wrap any error type; built-in components construct
/// these from plain messages.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TickError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl TickError {
    /// Wrap an arbitrary error.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Build a tick error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

/// A component fault recorded during one update pass.
///
/// The offending entity's remaining components are skipped for the tick; the
/// pass continues with the next entity.
#[derive(Debug)]
pub struct TickFault {
    /// Id of the entity whose component failed.
    pub entity: String,
    /// Key of the failing component.
    pub component: String,
    /// The underlying error.
    pub error: TickError,
}

impl std::fmt::Display for TickFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "entity {:?} component {:?} failed: {}",
            self.entity, self.component, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_error_from_message() {
        let err = TickError::msg("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_tick_fault_display() {
        let fault = TickFault {
            entity: "snow".to_string(),
            component: "animation".to_string(),
            error: TickError::msg("bad frame"),
        };
        let text = fault.to_string();
        assert!(text.contains("snow"));
        assert!(text.contains("animation"));
        assert!(text.contains("bad frame"));
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::RaggedFrame {
            row: 2,
            len: 3,
            expected: 5,
        };
        assert!(err.to_string().contains("row 2"));
        assert!(ConfigError::ZeroSpeed(0).to_string().contains(">= 1"));
    }
}

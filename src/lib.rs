//! # Glyphgrid
//!
//! An animated ASCII scene compositor.
//!
//! Glyphgrid renders scenes of independently animated entities into a
//! fixed-size grid of colored glyphs, then collapses each composited grid
//! into the smallest number of styled text runs a host drawing surface
//! needs — one run per maximal same-colored span instead of one draw call
//! per cell.
//!
//! ## Core concepts
//!
//! - **Frame**: immutable rectangular raster of glyph cells, the atomic
//!   animation asset, shared via `Arc`
//! - **Entity + components**: positioned drawables with per-tick behaviors;
//!   the built-in [`AnimationComponent`] steps frame sequences
//! - **Grid compositing**: last-writer-wins in entity insertion order, with
//!   silent clipping and space-as-transparent
//! - **Run encoding**: per-row run-length color merge with explicit newline
//!   separator runs
//! - **Scene loop**: a fixed-interval tick thread driving
//!   update → composite → encode → draw
//!
//! ## Example
//!
//! ```rust
//! use glyphgrid::{Color, EntityManager, Entity, Frame, Grid, encode};
//!
//! let frame = Frame::from_lines(["<o>"], Color::RED, Color::Transparent)
//!     .unwrap()
//!     .into_shared();
//!
//! let mut scene = EntityManager::new();
//! scene.add_entity(Entity::new("ship", 1, 0, frame));
//!
//! let grid = Grid::composite(&scene, 6, 1);
//! let runs = encode(&grid);
//! assert_eq!(runs[1].text, "<o>");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;
pub mod frame;
pub mod render;
pub mod scene;
pub mod surface;

// Re-exports for convenience
pub use actor::{SceneLoop, Tick, TickerActor};
pub use error::{ConfigError, TickError, TickFault};
pub use frame::{Cell, Color, Frame, Rgb};
pub use render::{encode, Font, FontMap, Grid, GridConfig, GridDimensions, Run};
pub use scene::{AnimationComponent, Component, Entity, EntityManager, UpdateContext};
pub use surface::{DrawSurface, TerminalSurface};

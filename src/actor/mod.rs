//! Actor module: the threads that drive a scene.
//!
//! Two actors cooperate per scene:
//! - **Ticker**: emits fixed-interval ticks on a dedicated thread
//! - **Scene loop**: consumes ticks and runs update → composite → encode →
//!   draw, holding the manager lock only for update + composite
//!
//! ```text
//! ┌──────────────┐       Tick        ┌──────────────┐    runs    ┌─────────┐
//! │ Ticker Thread│ ────────────────▶ │  Scene Loop  │ ─────────▶ │ Surface │
//! └──────────────┘                   └──────┬───────┘            └─────────┘
//!                                           │ lock
//!                                           ▼
//!                                   ┌───────────────┐
//!                                   │ EntityManager │ ◀── host add/remove
//!                                   └───────────────┘
//! ```

mod scene_loop;
mod ticker;

pub use scene_loop::{FaultHook, SceneLoop};
pub use ticker::{Tick, TickerActor};

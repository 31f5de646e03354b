//! Scene module: entities, components, and the per-tick update model.
//!
//! This module contains:
//! - [`Entity`]: a positioned drawable owning its components
//! - [`Component`]: the per-tick behavior contract
//! - [`AnimationComponent`]: the built-in frame-sequence animator
//! - [`EntityManager`]: entity lifecycle and the update pass

mod animation;
mod component;
mod entity;
mod manager;

pub use animation::AnimationComponent;
pub use component::{Component, UpdateContext};
pub use entity::Entity;
pub use manager::EntityManager;

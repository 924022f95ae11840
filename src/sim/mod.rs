//! Deterministic simulation module
//!
//! The entity contract, the explicitly passed simulation context, and the
//! world tick loop with its all-pairs collision scan. Fixed timestep, seeded
//! RNG, stable iteration order, no rendering or platform dependencies.

pub mod context;
pub mod entity;
pub mod world;

pub use context::SimContext;
pub use entity::{EntityId, EntityKind, GameObject, PlanetKind};
pub use world::{TickInput, World};

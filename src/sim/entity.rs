//! Entity contract
//!
//! Every simulated object implements `GameObject`: it owns at most one
//! collider, advances itself each tick, and reacts to confirmed collisions.
//! Reaction handlers discriminate the other party by its `EntityKind` tag
//! instead of downcasting.

use crate::collision::Collider;
use crate::sim::context::SimContext;
use crate::sim::world::TickInput;

/// Stable identifier allocated by the simulation context.
pub type EntityId = u32;

/// Role of a planet in the cargo loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetKind {
    Pickup,
    Dropoff,
}

/// Closed set of entity types, used by reaction handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Ship,
    Alien,
    Asteroid,
    Bullet,
    Laser,
    Supply,
    Planet(PlanetKind),
}

/// A simulated object. All hooks receive the context explicitly; nothing in
/// the simulation reaches for global state.
pub trait GameObject {
    fn id(&self) -> EntityId;

    fn kind(&self) -> EntityKind;

    /// The entity's collider, if it participates in collision checks.
    /// Mutated in place by the entity's own movement logic every tick.
    fn collider(&self) -> Option<&Collider>;

    /// Route the tick's input to the entity. Most entities ignore it.
    fn handle_input(&mut self, _input: &TickInput, _ctx: &mut SimContext) {}

    /// Advance the entity by one fixed timestep.
    fn update(&mut self, _ctx: &mut SimContext, _dt: f32) {}

    /// Reaction to a confirmed collision with `other`. Fired once per
    /// direction, every tick the pair remains in contact. Structural changes
    /// must go through the context's deferred queues.
    fn on_collision(&mut self, _other: &dyn GameObject, _ctx: &mut SimContext) {}

    /// The single pairwise predicate the broad-phase scan calls. Entities
    /// without a collider never collide.
    fn check_collision(&self, other: &dyn GameObject) -> bool {
        match (self.collider(), other.collider()) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }
}

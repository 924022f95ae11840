//! Simulation context
//!
//! The services every entity needs, passed explicitly instead of living in a
//! process-wide singleton: the seeded RNG, play-field bounds, score, the
//! player-position snapshot, the id allocator, and the deferred spawn and
//! despawn queues that keep the entity list stable during a scan.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::collision::Rect;
use crate::sim::entity::{EntityId, GameObject};

pub struct SimContext {
    rng: Pcg32,
    /// Play-field bounds; random spawn locations are drawn from here.
    pub bounds: Rect,
    pub score: u64,
    /// Set when a fatal collision ends the run.
    pub game_over: bool,
    /// Player position snapshot, refreshed at the start of every tick.
    pub player_pos: Vec2,
    next_id: EntityId,
    pending_spawn: Vec<Box<dyn GameObject>>,
    pending_despawn: Vec<EntityId>,
}

impl SimContext {
    pub fn new(seed: u64, bounds: Rect) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            score: 0,
            game_over: false,
            player_pos: bounds.center(),
            next_id: 1,
            pending_spawn: Vec::new(),
            pending_despawn: Vec::new(),
        }
    }

    /// Allocate a new entity ID.
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue an entity for insertion at the next tick boundary.
    pub fn spawn(&mut self, entity: Box<dyn GameObject>) {
        self.pending_spawn.push(entity);
    }

    /// Queue an entity for removal at the next tick boundary.
    pub fn despawn(&mut self, id: EntityId) {
        self.pending_despawn.push(id);
    }

    pub fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// A uniform random location on the play field.
    pub fn random_location(&mut self) -> Vec2 {
        let x = self.rng.random_range(self.bounds.left()..self.bounds.right());
        let y = self.rng.random_range(self.bounds.top()..self.bounds.bottom());
        Vec2::new(x as f32, y as f32)
    }

    /// A random location at least `clearance` away from `anchor`. Gives up
    /// after 100 attempts and returns the last candidate.
    pub fn random_location_clear_of(&mut self, anchor: Vec2, clearance: f32) -> Vec2 {
        let mut location = self.random_location();
        let mut attempts = 0;
        while location.distance(anchor) < clearance && attempts < 100 {
            location = self.random_location();
            attempts += 1;
        }
        if attempts >= 100 {
            log::warn!("no clear spot found after {attempts} attempts");
        }
        location
    }

    /// Drain the deferred structural changes. Called by the world at the
    /// tick boundary.
    pub(crate) fn take_pending(&mut self) -> (Vec<Box<dyn GameObject>>, Vec<EntityId>) {
        (
            std::mem::take(&mut self.pending_spawn),
            std::mem::take(&mut self.pending_despawn),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique_and_increasing() {
        let mut ctx = SimContext::new(1, Rect::new(0, 0, 100, 100));
        let a = ctx.next_entity_id();
        let b = ctx.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_random_location_within_bounds() {
        let bounds = Rect::new(10, 20, 100, 50);
        let mut ctx = SimContext::new(42, bounds);
        for _ in 0..100 {
            let p = ctx.random_location();
            assert!(p.x >= 10.0 && p.x < 110.0);
            assert!(p.y >= 20.0 && p.y < 70.0);
        }
    }

    #[test]
    fn test_random_location_honors_clearance() {
        let bounds = Rect::new(0, 0, 1000, 1000);
        let mut ctx = SimContext::new(7, bounds);
        let anchor = Vec2::new(500.0, 500.0);
        for _ in 0..50 {
            let p = ctx.random_location_clear_of(anchor, 100.0);
            assert!(p.distance(anchor) >= 100.0);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let bounds = Rect::new(0, 0, 640, 480);
        let mut a = SimContext::new(99, bounds);
        let mut b = SimContext::new(99, bounds);
        for _ in 0..10 {
            assert_eq!(a.random_location(), b.random_location());
        }
    }
}

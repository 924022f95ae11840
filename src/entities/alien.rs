//! Alien chaser
//!
//! Homes in on the player every tick. Each bullet hit makes it faster and
//! teleports it to a random spot clear of the player. Getting close enough
//! to the ship ends the run.

use glam::Vec2;

use crate::collision::{Circle, Collider};
use crate::consts::*;
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject};

pub struct Alien {
    id: EntityId,
    collider: Collider,
    speed: f32,
}

impl Alien {
    pub fn new(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            collider: Collider::Circle(Circle::new(position, ALIEN_RADIUS)),
            speed: ALIEN_START_SPEED,
        }
    }

    /// Spawn at a random location with player clearance.
    pub fn spawn(ctx: &mut SimContext) -> Self {
        let id = ctx.next_entity_id();
        let anchor = ctx.player_pos;
        let position = ctx.random_location_clear_of(anchor, PLAYER_CLEARANCE);
        Self::new(id, position)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    fn relocate(&mut self, ctx: &mut SimContext) {
        let anchor = ctx.player_pos;
        let position = ctx.random_location_clear_of(anchor, PLAYER_CLEARANCE);
        if let Collider::Circle(circle) = &mut self.collider {
            circle.center = position;
        }
    }
}

impl GameObject for Alien {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Alien
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn update(&mut self, ctx: &mut SimContext, dt: f32) {
        let Collider::Circle(circle) = &mut self.collider else {
            return;
        };

        let direction = (ctx.player_pos - circle.center).normalize_or_zero();
        circle.center += direction * self.speed * dt;

        if circle.center.distance(ctx.player_pos) < ALIEN_KILL_DISTANCE {
            log::info!("alien reached the ship");
            ctx.game_over = true;
        }
    }

    fn on_collision(&mut self, other: &dyn GameObject, ctx: &mut SimContext) {
        if other.kind() == EntityKind::Bullet {
            self.speed += ALIEN_SPEED_INCREMENT;
            self.relocate(ctx);
        }
    }
}

//! Bullet projectile

use glam::Vec2;

use crate::collision::{Circle, Collider};
use crate::consts::*;
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject};

/// A circle-backed projectile with a fixed lifespan.
pub struct Bullet {
    id: EntityId,
    collider: Collider,
    velocity: Vec2,
    lifespan: f32,
}

impl Bullet {
    pub fn new(id: EntityId, position: Vec2, direction: Vec2, speed: f32) -> Self {
        Self {
            id,
            collider: Collider::Circle(Circle::new(position, BULLET_RADIUS)),
            velocity: direction * speed,
            lifespan: BULLET_LIFESPAN,
        }
    }
}

impl GameObject for Bullet {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn update(&mut self, ctx: &mut SimContext, dt: f32) {
        if let Collider::Circle(circle) = &mut self.collider {
            circle.center += self.velocity * dt;
        }

        self.lifespan -= dt;
        if self.lifespan <= 0.0 {
            ctx.despawn(self.id);
        }
    }

    fn on_collision(&mut self, other: &dyn GameObject, ctx: &mut SimContext) {
        match other.kind() {
            EntityKind::Alien | EntityKind::Supply => ctx.despawn(self.id),
            _ => {}
        }
    }
}

//! Laser beam
//!
//! A hit-scan segment that lives for a fraction of a second. Exercises the
//! segment collider; reactions are up to whatever the beam touches.

use glam::Vec2;

use crate::collision::{Collider, Segment};
use crate::consts::*;
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject};

pub struct Laser {
    id: EntityId,
    collider: Collider,
    lifespan: f32,
}

impl Laser {
    pub fn new(id: EntityId, position: Vec2, direction: Vec2, length: f32) -> Self {
        Self {
            id,
            collider: Collider::Segment(Segment::from_direction(position, direction, length)),
            lifespan: LASER_LIFESPAN,
        }
    }
}

impl GameObject for Laser {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Laser
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn update(&mut self, ctx: &mut SimContext, dt: f32) {
        self.lifespan -= dt;
        if self.lifespan <= 0.0 {
            ctx.despawn(self.id);
        }
    }
}

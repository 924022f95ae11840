//! Cargo planets
//!
//! Static circle-backed bodies. The ship picks cargo up at a `Pickup` planet
//! and scores by delivering it to a `Dropoff` planet; both reactions live on
//! the ship side.

use glam::Vec2;

use crate::collision::{Circle, Collider};
use crate::consts::*;
use crate::sim::entity::{EntityId, EntityKind, GameObject, PlanetKind};

pub struct Planet {
    id: EntityId,
    kind: PlanetKind,
    collider: Collider,
}

impl Planet {
    pub fn new(id: EntityId, position: Vec2, kind: PlanetKind) -> Self {
        Self {
            id,
            kind,
            collider: Collider::Circle(Circle::new(position, PLANET_RADIUS)),
        }
    }

    pub fn planet_kind(&self) -> PlanetKind {
        self.kind
    }
}

impl GameObject for Planet {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Planet(self.kind)
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }
}

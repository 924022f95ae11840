//! Supply crate
//!
//! Rect-backed pickup. The ship collects it (the ship side of the collision
//! grants the weapon); a stray bullet destroys it. Either way it removes
//! itself through the deferred queue.

use glam::Vec2;

use crate::collision::{Collider, Rect};
use crate::consts::*;
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject};

pub struct Supply {
    id: EntityId,
    collider: Collider,
}

impl Supply {
    pub fn new(id: EntityId, center: Vec2) -> Self {
        Self {
            id,
            collider: Collider::Rect(Rect::from_center(center, SUPPLY_WIDTH, SUPPLY_HEIGHT)),
        }
    }

    /// Spawn at a random location with player clearance.
    pub fn spawn(ctx: &mut SimContext) -> Self {
        let id = ctx.next_entity_id();
        let anchor = ctx.player_pos;
        let center = ctx.random_location_clear_of(anchor, PLAYER_CLEARANCE);
        Self::new(id, center)
    }
}

impl GameObject for Supply {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Supply
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn on_collision(&mut self, other: &dyn GameObject, ctx: &mut SimContext) {
        match other.kind() {
            EntityKind::Ship | EntityKind::Bullet => ctx.despawn(self.id),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::bullet::Bullet;

    #[test]
    fn test_bullet_destroys_supply() {
        let mut ctx = SimContext::new(0, Rect::new(0, 0, 1000, 1000));
        let mut supply = Supply::new(4, Vec2::new(100.0, 100.0));
        let bullet = Bullet::new(9, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 400.0);

        supply.on_collision(&bullet, &mut ctx);
        let (_, despawned) = ctx.take_pending();
        assert_eq!(despawned, vec![4]);
    }

    #[test]
    fn test_spawn_respects_player_clearance() {
        let mut ctx = SimContext::new(3, Rect::new(0, 0, 1280, 720));
        ctx.player_pos = Vec2::new(640.0, 360.0);
        for _ in 0..20 {
            let supply = Supply::spawn(&mut ctx);
            let center = supply.collider().unwrap().bounding_box().center();
            // from_center rounds to integers, allow a pixel of slack
            assert!(center.distance(ctx.player_pos) >= PLAYER_CLEARANCE - 1.0);
        }
    }
}

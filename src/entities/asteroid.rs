//! Static asteroid hazard

use glam::Vec2;

use crate::collision::{Circle, Collider};
use crate::consts::*;
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject};

/// Doesn't move. The ship must not touch it; aliens that do are destroyed.
pub struct Asteroid {
    id: EntityId,
    collider: Collider,
}

impl Asteroid {
    pub fn new(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            collider: Collider::Circle(Circle::new(position, ASTEROID_RADIUS)),
        }
    }
}

impl GameObject for Asteroid {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Asteroid
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn on_collision(&mut self, other: &dyn GameObject, ctx: &mut SimContext) {
        match other.kind() {
            EntityKind::Ship => {
                log::info!("ship crashed into asteroid");
                ctx.game_over = true;
            }
            EntityKind::Alien => ctx.despawn(other.id()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Rect;
    use crate::sim::world::{TickInput, World};

    #[test]
    fn test_alien_flying_into_asteroid_is_destroyed() {
        let mut world = World::new(11, Rect::new(0, 0, 1280, 720));
        let asteroid_id = world.ctx.next_entity_id();
        world.spawn(Box::new(Asteroid::new(asteroid_id, Vec2::new(100.0, 100.0))));

        // Park the alien overlapping the asteroid
        let alien_id = world.ctx.next_entity_id();
        world.spawn(Box::new(crate::entities::Alien::new(
            alien_id,
            Vec2::new(120.0, 100.0),
        )));

        // Tick 1 dispatches the pair and queues the despawn; tick 2 applies it.
        world.tick(&TickInput::default(), 1.0 / 120.0);
        world.tick(&TickInput::default(), 1.0 / 120.0);
        assert!(world.entity(alien_id).is_none());
        assert!(world.entity(asteroid_id).is_some());
    }
}

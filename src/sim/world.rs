//! World tick loop and broad-phase collision scan
//!
//! One `tick` applies deferred structural changes, routes input, updates
//! every entity, then runs the all-pairs intersection scan and notifies both
//! sides of every colliding pair.

use glam::Vec2;

use crate::collision::Rect;
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Thrust direction for the ship; zero means coast.
    pub steer: Vec2,
    /// World position to fire the current weapon at.
    pub fire_target: Option<Vec2>,
}

/// The live entity collection plus the simulation context.
pub struct World {
    entities: Vec<Box<dyn GameObject>>,
    pub ctx: SimContext,
}

impl World {
    pub fn new(seed: u64, bounds: Rect) -> Self {
        Self {
            entities: Vec::new(),
            ctx: SimContext::new(seed, bounds),
        }
    }

    /// Queue an entity for insertion at the next tick boundary.
    pub fn spawn(&mut self, entity: Box<dyn GameObject>) {
        self.ctx.spawn(entity);
    }

    pub fn entities(&self) -> &[Box<dyn GameObject>] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&dyn GameObject> {
        self.entities
            .iter()
            .find(|entity| entity.id() == id)
            .map(|entity| entity.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// Phases, in order: apply deferred spawns/despawns (the tick boundary),
    /// refresh the player snapshot, route input, update movement, then scan
    /// and dispatch collisions. Handlers only ever queue structural changes,
    /// so the entity list is stable for the whole scan.
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        self.apply_pending();
        self.refresh_player_pos();

        for entity in &mut self.entities {
            entity.handle_input(input, &mut self.ctx);
        }

        for entity in &mut self.entities {
            entity.update(&mut self.ctx, dt);
        }

        self.check_collisions();
    }

    /// All-pairs scan over the live entities. Intentionally O(n²): the game
    /// keeps tens of entities, not thousands. A spatial hash would be the
    /// next step if that ever changes.
    fn check_collisions(&mut self) {
        let mut hits: Vec<(usize, usize)> = Vec::new();
        for i in 0..self.entities.len() {
            for j in (i + 1)..self.entities.len() {
                if self.entities[i].check_collision(self.entities[j].as_ref()) {
                    hits.push((i, j));
                }
            }
        }

        // Detection for this tick is complete; now notify both sides of
        // every pair, in scan order.
        for (i, j) in hits {
            let (left, right) = self.entities.split_at_mut(j);
            let a = left[i].as_mut();
            let b = right[0].as_mut();
            a.on_collision(&*b, &mut self.ctx);
            b.on_collision(&*a, &mut self.ctx);
        }
    }

    fn apply_pending(&mut self) {
        let (spawned, despawned) = self.ctx.take_pending();
        for entity in spawned {
            log::debug!("spawn {:?} #{}", entity.kind(), entity.id());
            self.entities.push(entity);
        }
        if !despawned.is_empty() {
            self.entities.retain(|entity| !despawned.contains(&entity.id()));
        }
    }

    fn refresh_player_pos(&mut self) {
        let ship = self
            .entities
            .iter()
            .find(|entity| entity.kind() == EntityKind::Ship);
        if let Some(collider) = ship.and_then(|ship| ship.collider()) {
            self.ctx.player_pos = collider.bounding_box().center();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{Circle, Collider};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared log of (self, other) reaction calls.
    type CollisionLog = Rc<RefCell<Vec<(EntityId, EntityId)>>>;

    /// Minimal circle-backed entity that records every reaction call.
    struct Probe {
        id: EntityId,
        collider: Collider,
        log: CollisionLog,
        despawn_on_hit: bool,
    }

    impl Probe {
        fn new(id: EntityId, center: Vec2, radius: f32, log: CollisionLog) -> Self {
            Self {
                id,
                collider: Collider::Circle(Circle::new(center, radius)),
                log,
                despawn_on_hit: false,
            }
        }
    }

    impl GameObject for Probe {
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
            self.log.borrow_mut().push((self.id, other.id()));
            if self.despawn_on_hit {
                ctx.despawn(self.id);
            }
        }
    }

    fn test_world() -> World {
        World::new(0, Rect::new(0, 0, 1000, 1000))
    }

    #[test]
    fn test_only_overlapping_pair_dispatches_both_directions() {
        let log: CollisionLog = Rc::new(RefCell::new(Vec::new()));
        let mut world = test_world();
        // Entities 1 and 2 overlap; entity 3 is far away.
        world.spawn(Box::new(Probe::new(1, Vec2::new(0.0, 0.0), 5.0, log.clone())));
        world.spawn(Box::new(Probe::new(2, Vec2::new(3.0, 0.0), 5.0, log.clone())));
        world.spawn(Box::new(Probe::new(3, Vec2::new(500.0, 500.0), 5.0, log.clone())));

        world.tick(&TickInput::default(), 1.0 / 120.0);

        assert_eq!(log.borrow().as_slice(), &[(1, 2), (2, 1)]);
    }

    #[test]
    fn test_sustained_overlap_refires_every_tick() {
        let log: CollisionLog = Rc::new(RefCell::new(Vec::new()));
        let mut world = test_world();
        world.spawn(Box::new(Probe::new(1, Vec2::new(0.0, 0.0), 5.0, log.clone())));
        world.spawn(Box::new(Probe::new(2, Vec2::new(3.0, 0.0), 5.0, log.clone())));

        world.tick(&TickInput::default(), 1.0 / 120.0);
        world.tick(&TickInput::default(), 1.0 / 120.0);

        // Two calls per tick, no enter/exit edge detection.
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_despawn_is_deferred_to_tick_boundary() {
        let log: CollisionLog = Rc::new(RefCell::new(Vec::new()));
        let mut world = test_world();
        let mut doomed = Probe::new(1, Vec2::new(0.0, 0.0), 5.0, log.clone());
        doomed.despawn_on_hit = true;
        world.spawn(Box::new(doomed));
        world.spawn(Box::new(Probe::new(2, Vec2::new(3.0, 0.0), 5.0, log.clone())));

        world.tick(&TickInput::default(), 1.0 / 120.0);
        // The doomed entity still took part in this tick's dispatch.
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(world.len(), 2);

        world.tick(&TickInput::default(), 1.0 / 120.0);
        // Gone at the boundary, so no further reactions.
        assert_eq!(world.len(), 1);
        assert_eq!(log.borrow().len(), 2);
        assert!(world.entity(1).is_none());
        assert!(world.entity(2).is_some());
    }

    #[test]
    fn test_ship_collects_supply_through_full_tick() {
        use crate::consts::SIM_DT;
        use crate::entities::{Ship, Supply};

        let mut world = test_world();
        let ship_id = world.ctx.next_entity_id();
        world.spawn(Box::new(Ship::new(ship_id, Vec2::new(100.0, 100.0))));
        let supply_id = world.ctx.next_entity_id();
        world.spawn(Box::new(Supply::new(supply_id, Vec2::new(100.0, 100.0))));

        // Tick 1 dispatches the overlap; tick 2 applies the crate's despawn.
        world.tick(&TickInput::default(), SIM_DT);
        world.tick(&TickInput::default(), SIM_DT);
        assert!(world.entity(supply_id).is_none());
        assert!(world.entity(ship_id).is_some());
    }

    #[test]
    fn test_spawned_entities_join_at_next_boundary() {
        let log: CollisionLog = Rc::new(RefCell::new(Vec::new()));
        let mut world = test_world();
        world.spawn(Box::new(Probe::new(1, Vec2::new(0.0, 0.0), 5.0, log.clone())));
        assert_eq!(world.len(), 0);

        world.tick(&TickInput::default(), 1.0 / 120.0);
        assert_eq!(world.len(), 1);
    }
}

//! Player ship
//!
//! Rect-backed, velocity-plus-drag movement, turret aimed at a world-space
//! target. Carries the cargo state and the timed weapon buff: a supply crate
//! grants a random upgraded weapon that reverts to the single-shot gun when
//! the buff expires.

use glam::Vec2;

use crate::collision::{Collider, Rect, Segment};
use crate::consts::*;
use crate::entities::weapons::{Weapon, WeaponKind};
use crate::sim::context::SimContext;
use crate::sim::entity::{EntityId, EntityKind, GameObject, PlanetKind};
use crate::sim::world::TickInput;
use rand::Rng;

pub struct Ship {
    id: EntityId,
    collider: Collider,
    position: Vec2,
    velocity: Vec2,
    /// Body rotation, measured from the up vector.
    rotation: f32,
    weapon: Weapon,
    /// Seconds until the picked-up weapon reverts.
    weapon_buff_timer: f32,
    carrying_cargo: bool,
}

impl Ship {
    pub fn new(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            collider: Collider::Rect(Rect::from_center(position, SHIP_WIDTH, SHIP_HEIGHT)),
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            weapon: Weapon::new(WeaponKind::SingleBullet),
            weapon_buff_timer: 0.0,
            carrying_cargo: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn weapon_kind(&self) -> WeaponKind {
        self.weapon.kind()
    }

    pub fn is_carrying_cargo(&self) -> bool {
        self.carrying_cargo
    }

    /// Accelerate in the given direction and face that way.
    pub fn steer(&mut self, direction: Vec2) {
        let direction = direction.normalize_or_zero();
        if direction == Vec2::ZERO {
            return;
        }
        self.velocity += direction * SHIP_ACCELERATION;
        self.rotation = Segment::angle_of(direction);
    }

    /// Fire the current weapon toward a world position, from the turret
    /// muzzle rather than the ship center.
    pub fn fire(&mut self, target: Vec2, ctx: &mut SimContext) {
        let aim = Segment::direction_between(self.position, target);
        if aim == Vec2::ZERO {
            return;
        }
        let muzzle = self.position + aim * TURRET_OFFSET;
        self.weapon.fire(muzzle, aim, ctx);
    }
}

impl GameObject for Ship {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Ship
    }

    fn collider(&self) -> Option<&Collider> {
        Some(&self.collider)
    }

    fn handle_input(&mut self, input: &TickInput, ctx: &mut SimContext) {
        self.steer(input.steer);
        if let Some(target) = input.fire_target {
            self.fire(target, ctx);
        }
    }

    fn update(&mut self, _ctx: &mut SimContext, dt: f32) {
        self.weapon.update_cooldown(dt);

        if self.weapon_buff_timer > 0.0 {
            self.weapon_buff_timer -= dt;
            if self.weapon_buff_timer <= 0.0 {
                log::info!("weapon buff expired, back to single shot");
                self.weapon = Weapon::new(WeaponKind::SingleBullet);
            }
        }

        self.position += self.velocity * dt;
        self.velocity *= SHIP_DRAG;

        if let Collider::Rect(rect) = &mut self.collider {
            rect.set_center(self.position);
        }
    }

    fn on_collision(&mut self, other: &dyn GameObject, ctx: &mut SimContext) {
        match other.kind() {
            EntityKind::Planet(PlanetKind::Pickup) if !self.carrying_cargo => {
                self.carrying_cargo = true;
                log::info!("cargo picked up");
            }
            EntityKind::Planet(PlanetKind::Dropoff) if self.carrying_cargo => {
                self.carrying_cargo = false;
                ctx.add_score(CARGO_POINTS);
                log::info!("cargo delivered, +{CARGO_POINTS} points");
            }
            EntityKind::Supply => {
                // The crate removes itself; we get a random upgraded weapon.
                let kind = if ctx.rng().random_range(0..2) == 0 {
                    WeaponKind::Laser
                } else {
                    WeaponKind::DoubleBarrel
                };
                log::info!("supply collected, switching to {kind:?}");
                self.weapon = Weapon::new(kind);
                self.weapon_buff_timer = WEAPON_BUFF_DURATION;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::planet::Planet;
    use crate::entities::supply::Supply;

    fn test_ctx() -> SimContext {
        SimContext::new(0, Rect::new(0, 0, 1280, 720))
    }

    #[test]
    fn test_movement_with_drag() {
        let mut ctx = test_ctx();
        let mut ship = Ship::new(1, Vec2::new(640.0, 360.0));
        ship.steer(Vec2::new(1.0, 0.0));
        ship.update(&mut ctx, 1.0);
        assert!(ship.position().x > 640.0);
        // Collider follows the position
        let center = ship.collider().unwrap().bounding_box().center();
        assert!((center - ship.position()).length() <= 1.0);
    }

    #[test]
    fn test_steering_sets_rotation_from_up() {
        let mut ship = Ship::new(1, Vec2::ZERO);
        ship.steer(Vec2::new(1.0, 0.0));
        assert!((ship.rotation() - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn test_cargo_loop_scores() {
        let mut ctx = test_ctx();
        let mut ship = Ship::new(1, Vec2::ZERO);
        let pickup = Planet::new(2, Vec2::ZERO, PlanetKind::Pickup);
        let dropoff = Planet::new(3, Vec2::ZERO, PlanetKind::Dropoff);

        // Dropping off without cargo does nothing
        ship.on_collision(&dropoff, &mut ctx);
        assert_eq!(ctx.score, 0);

        ship.on_collision(&pickup, &mut ctx);
        assert!(ship.is_carrying_cargo());
        // Re-touching the pickup planet changes nothing
        ship.on_collision(&pickup, &mut ctx);
        assert!(ship.is_carrying_cargo());

        ship.on_collision(&dropoff, &mut ctx);
        assert!(!ship.is_carrying_cargo());
        assert_eq!(ctx.score, CARGO_POINTS);
    }

    #[test]
    fn test_supply_grants_buff_then_reverts() {
        let mut ctx = test_ctx();
        let mut ship = Ship::new(1, Vec2::ZERO);
        let supply = Supply::new(2, Vec2::ZERO);

        ship.on_collision(&supply, &mut ctx);
        assert_ne!(ship.weapon_kind(), WeaponKind::SingleBullet);

        // Let the buff run out
        ship.update(&mut ctx, WEAPON_BUFF_DURATION + 0.01);
        assert_eq!(ship.weapon_kind(), WeaponKind::SingleBullet);
    }

    #[test]
    fn test_firing_spawns_from_turret_muzzle() {
        let mut ctx = test_ctx();
        let mut ship = Ship::new(1, Vec2::new(100.0, 100.0));
        ship.fire(Vec2::new(200.0, 100.0), &mut ctx);

        let (spawned, _) = ctx.take_pending();
        assert_eq!(spawned.len(), 1);
        let center = spawned[0].collider().unwrap().bounding_box().center();
        assert!((center.x - (100.0 + TURRET_OFFSET)).abs() <= 1.0);
    }
}

//! Ship weapons
//!
//! One cooldown mechanic shared by three firing behaviors. Firing spawns
//! projectile entities through the context's deferred queue.

use glam::Vec2;

use crate::consts::*;
use crate::entities::bullet::Bullet;
use crate::entities::laser::Laser;
use crate::sim::context::SimContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    /// One bullet per shot.
    SingleBullet,
    /// Two bullets offset perpendicular to the aim, faster fire rate.
    DoubleBarrel,
    /// Hit-scan beam.
    Laser,
}

#[derive(Debug, Clone, Copy)]
pub struct Weapon {
    kind: WeaponKind,
    cooldown: f32,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            cooldown: 0.0,
        }
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    /// Seconds between shots.
    pub fn fire_rate(&self) -> f32 {
        match self.kind {
            WeaponKind::SingleBullet => 0.2,
            WeaponKind::DoubleBarrel => 0.1,
            WeaponKind::Laser => 0.15,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn update_cooldown(&mut self, dt: f32) {
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
    }

    /// Fire from `position` along the normalized `direction`, spawning the
    /// projectiles through the context. A no-op while cooling down.
    pub fn fire(&mut self, position: Vec2, direction: Vec2, ctx: &mut SimContext) {
        if !self.can_fire() {
            return;
        }

        match self.kind {
            WeaponKind::SingleBullet => {
                let id = ctx.next_entity_id();
                ctx.spawn(Box::new(Bullet::new(id, position, direction, BULLET_SPEED)));
            }
            WeaponKind::DoubleBarrel => {
                let offset = Vec2::new(-direction.y, direction.x) * BARREL_SPREAD / 2.0;
                for muzzle in [position + offset, position - offset] {
                    let id = ctx.next_entity_id();
                    ctx.spawn(Box::new(Bullet::new(id, muzzle, direction, BULLET_SPEED)));
                }
            }
            WeaponKind::Laser => {
                let id = ctx.next_entity_id();
                ctx.spawn(Box::new(Laser::new(id, position, direction, LASER_LENGTH)));
            }
        }

        self.cooldown = self.fire_rate();
    }
}

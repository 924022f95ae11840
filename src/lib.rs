//! Space Defence - a headless top-down shooter simulation
//!
//! Core modules:
//! - `collision`: shape primitives and the polymorphic collider
//! - `sim`: entity contract, simulation context, and the world tick loop
//! - `entities`: the concrete game objects (ship, alien, bullets, ...)
//!
//! The simulation is deterministic: fixed timestep, seeded RNG, stable
//! iteration order, no rendering or platform dependencies.

pub mod collision;
pub mod entities;
pub mod sim;

pub use collision::{Circle, Collider, Rect, Segment};
pub use sim::{SimContext, TickInput, World};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: i32 = 1280;
    pub const FIELD_HEIGHT: i32 = 720;

    /// Ship defaults
    pub const SHIP_WIDTH: i32 = 48;
    pub const SHIP_HEIGHT: i32 = 48;
    pub const SHIP_ACCELERATION: f32 = 10.0;
    /// Velocity retained per tick
    pub const SHIP_DRAG: f32 = 0.99;
    /// Distance from ship center to the turret muzzle
    pub const TURRET_OFFSET: f32 = 24.0;
    /// How long a picked-up weapon lasts before reverting
    pub const WEAPON_BUFF_DURATION: f32 = 10.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 400.0;
    pub const BULLET_LIFESPAN: f32 = 3.0;
    /// Perpendicular spread between the two double-barrel muzzles
    pub const BARREL_SPREAD: f32 = 10.0;

    /// Laser defaults
    pub const LASER_LENGTH: f32 = 800.0;
    pub const LASER_LIFESPAN: f32 = 0.1;

    /// Alien defaults
    pub const ALIEN_RADIUS: f32 = 24.0;
    pub const ALIEN_START_SPEED: f32 = 60.0;
    pub const ALIEN_SPEED_INCREMENT: f32 = 5.0;
    /// Alien closer than this to the ship ends the run
    pub const ALIEN_KILL_DISTANCE: f32 = 40.0;

    /// Other entity sizes
    pub const ASTEROID_RADIUS: f32 = 32.0;
    pub const SUPPLY_WIDTH: i32 = 32;
    pub const SUPPLY_HEIGHT: i32 = 32;
    pub const PLANET_RADIUS: f32 = 54.0;

    /// Minimum distance from the player for random spawns
    pub const PLAYER_CLEARANCE: f32 = 100.0;
    /// Points awarded for a cargo drop-off
    pub const CARGO_POINTS: u64 = 10;
}

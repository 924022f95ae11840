//! Concrete game objects
//!
//! Each entity owns its collider, moves itself in `update`, and applies
//! game-specific policy in `on_collision`. The collision core neither knows
//! nor cares what any of these do.

pub mod alien;
pub mod asteroid;
pub mod bullet;
pub mod laser;
pub mod planet;
pub mod ship;
pub mod supply;
pub mod weapons;

pub use alien::Alien;
pub use asteroid::Asteroid;
pub use bullet::Bullet;
pub use laser::Laser;
pub use planet::Planet;
pub use ship::Ship;
pub use supply::Supply;
pub use weapons::{Weapon, WeaponKind};

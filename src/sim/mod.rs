//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `advance` call per logical turn, paced by the caller
//! - Seeded RNG only, owned by the state
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod pursuit;
pub mod state;
pub mod tick;
pub mod weapon;

pub use pursuit::ACTIVATION_RADIUS;
pub use state::{Direction, GameState, GridSize, Hostile, Mode, Player, Position};
pub use tick::advance;
pub use weapon::Weapon;

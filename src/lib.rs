//! Grid Horde - a turn-based arena survival core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, pursuit, combat, game state)
//! - `config`: Arena and weapon configuration with validation
//! - `snapshot`: Opaque save/restore of a running simulation
//!
//! This crate is the simulation only. Rendering, input decoding, and tick
//! cadence belong to the caller: resolve one direction per turn, hand it to
//! the state, and call [`sim::advance`] once per logical tick. Everything
//! the simulation does is deterministic for a given configuration, seed,
//! and direction sequence.

pub mod config;
pub mod sim;
pub mod snapshot;

pub use config::{ConfigError, SimConfig, WeaponConfig};
pub use sim::{Direction, GameState, Hostile, Mode, Position, Weapon, advance};
pub use snapshot::{SnapshotError, export_state, import_state};

/// Game configuration constants
pub mod consts {
    /// Default arena width in cells, wall border included
    pub const DEFAULT_GRID_WIDTH: i32 = 24;
    /// Default arena height in cells, wall border included
    pub const DEFAULT_GRID_HEIGHT: i32 = 32;
    /// Default number of hostiles placed on reset
    pub const DEFAULT_HOSTILE_COUNT: u32 = 24;
    /// Default cadence hint handed to the caller's scheduler (ms)
    pub const DEFAULT_MOVE_DELAY_MS: u64 = 300;
    /// Starting player health
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;

    /// Sidearm defaults
    pub const DEFAULT_WEAPON_POWER: u32 = 80;
    pub const DEFAULT_WEAPON_RANGE: i32 = 8;
    pub const DEFAULT_WEAPON_AMMO: u32 = 8;
    pub const DEFAULT_WEAPON_AMMO_IN_CLIP: u32 = 2;
    pub const DEFAULT_WEAPON_CLIP_SIZE: u32 = 5;
    pub const DEFAULT_WEAPON_FIRE_RATE: u32 = 10;
    pub const DEFAULT_WEAPON_ACCURACY: u32 = 80;

    /// Score awarded per eliminated hostile
    pub const SCORE_PER_KILL: u64 = 10;

    /// Interior rows above the bottom wall kept clear of hostile spawns
    pub const SPAWN_CLEAR_ROWS: i32 = 5;
    /// Rejection-sampling attempts before falling back to a free-cell scan
    pub const SPAWN_ATTEMPTS: u32 = 64;
}

//! Arena and weapon configuration
//!
//! A [`SimConfig`] describes one complete arena setup: grid dimensions,
//! hostile population, pacing, and the player's starting weapon. Validation
//! runs up front, so a rejected `reset` never touches live state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration cannot produce a playable arena
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid cannot hold the wall border plus one interior cell
    #[error("grid {width}x{height} has no interior inside the wall border")]
    GridTooSmall { width: i32, height: i32 },
    /// More hostiles requested than free spawn cells exist
    #[error("{requested} hostiles requested but only {available} spawn cells free")]
    TooManyHostiles { requested: u32, available: u32 },
}

/// Starting stats for the player's selected weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponConfig {
    pub power: u32,
    /// Kill radius, checked strictly per axis
    pub range: i32,
    /// Total ammunition reserve
    pub ammo: u32,
    /// Rounds loaded at start; the default sidearm comes partly loaded
    pub ammo_in_clip: u32,
    pub clip_size: u32,
    /// Cooldown in turns imposed after each successful shot
    pub fire_rate: u32,
    /// Hit chance in percent, 0-100
    pub accuracy: u32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            power: DEFAULT_WEAPON_POWER,
            range: DEFAULT_WEAPON_RANGE,
            ammo: DEFAULT_WEAPON_AMMO,
            ammo_in_clip: DEFAULT_WEAPON_AMMO_IN_CLIP,
            clip_size: DEFAULT_WEAPON_CLIP_SIZE,
            fire_rate: DEFAULT_WEAPON_FIRE_RATE,
            accuracy: DEFAULT_WEAPON_ACCURACY,
        }
    }
}

/// Full arena configuration consumed by `GameState::new` and `reset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Total grid width in cells, wall border included
    pub grid_width: i32,
    /// Total grid height in cells, wall border included
    pub grid_height: i32,
    /// Hostiles placed on reset
    pub hostile_count: u32,
    /// Cadence hint for the caller's scheduler; the core never sleeps
    pub move_delay_ms: u64,
    pub weapon: WeaponConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            hostile_count: DEFAULT_HOSTILE_COUNT,
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
            weapon: WeaponConfig::default(),
        }
    }
}

impl SimConfig {
    /// Number of cells hostiles may spawn into.
    ///
    /// The band covers the interior columns crossed with the interior rows
    /// minus [`SPAWN_CLEAR_ROWS`] at the bottom, which keeps the player's
    /// starting area clear.
    pub fn spawn_capacity(&self) -> u32 {
        let cols = (self.grid_width - 2).max(0);
        let rows = (self.grid_height - 1 - SPAWN_CLEAR_ROWS).max(0);
        (cols * rows) as u32
    }

    /// Reject configurations that cannot be realized.
    ///
    /// Callers rely on this running before any state is mutated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 3 || self.grid_height < 3 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let available = self.spawn_capacity();
        if self.hostile_count > available {
            return Err(ConfigError::TooManyHostiles {
                requested: self.hostile_count,
                available,
            });
        }
        Ok(())
    }
}

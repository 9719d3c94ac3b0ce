//! The player's ranged weapon
//!
//! A weapon is a plain value: ammunition and pacing counters plus an
//! accuracy roll. It moves between three implicit states: cooling down
//! (`cooldown > 0`), ready to fire, and empty. Only a successful shot
//! starts the cooldown, and only `reload` refills the clip.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WeaponConfig;

/// Ranged weapon state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Kill radius, checked strictly per axis
    pub range: i32,
    pub power: u32,
    pub power_curve: u32,
    /// Turns needed to set the weapon up before first use
    pub setup_turns: u32,
    /// Turns until the weapon may fire again
    pub cooldown: u32,
    /// Cooldown imposed after each successful shot
    pub fire_rate: u32,
    /// Hit chance in percent, 0-100
    pub accuracy: u32,
    pub critical_chance: u32,
    pub clip_size: u32,
    pub ammo_in_clip: u32,
    /// Total reserve; the firing gate checked by the orchestrator
    pub ammo: u32,
    /// Turns a reload takes; reloads currently resolve instantly
    pub reload_time: u32,
    pub ammo_types: u32,
    pub current_ammo_type: u32,
}

impl Weapon {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            range: config.range,
            power: config.power,
            power_curve: 0,
            setup_turns: 0,
            cooldown: 0,
            fire_rate: config.fire_rate,
            accuracy: config.accuracy,
            critical_chance: 0,
            clip_size: config.clip_size,
            ammo_in_clip: config.ammo_in_clip,
            ammo: config.ammo,
            reload_time: 0,
            ammo_types: 0,
            current_ammo_type: 0,
        }
    }

    /// Roll accuracy and spend a round on success.
    ///
    /// One uniform roll in `[0, 100)` per call; a roll below `accuracy`
    /// hits. The caller guards `ammo > 0` - firing is not gated here.
    pub fn fire(&mut self, rng: &mut impl Rng) -> bool {
        let roll = rng.random_range(0..100u32);
        if roll < self.accuracy {
            self.ammo = self.ammo.saturating_sub(1);
            self.ammo_in_clip = self.ammo_in_clip.saturating_sub(1);
            self.cooldown = self.fire_rate;
            true
        } else {
            false
        }
    }

    /// Refill the clip from the reserve, instantly.
    ///
    /// An empty reserve refills nothing; the weapon stays empty.
    pub fn reload(&mut self) {
        self.ammo_in_clip = self.ammo.min(self.clip_size);
    }

    /// Count one turn off the cooldown
    pub fn tick_cooldown(&mut self) {
        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
    }
}

//! Game state and core simulation types
//!
//! All state that must be persisted for save/restore and determinism lives
//! here, the RNG included.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::weapon::Weapon;
use crate::config::{ConfigError, SimConfig};
use crate::consts::{DEFAULT_PLAYER_HEALTH, SPAWN_ATTEMPTS, SPAWN_CLEAR_ROWS};

/// A cell on the arena grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell one step away in the given direction
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The four movement directions; there is no stand-still turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit offset on the grid; north decreases `y`
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Current mode of the simulation
///
/// `Lost` and `Won` are terminal until the next `reset`; `advance` only
/// does work while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Ready,
    Running,
    Paused,
    Lost,
    Won,
}

/// A pursuing enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hostile {
    /// Stable identity; ids are never reused within a simulation
    pub id: u32,
    pub pos: Position,
}

/// The player-controlled entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Occupied cells, head first; never empty, length constant per tick
    pub trail: Vec<Position>,
    /// Direction of the move resolved this tick
    pub direction: Direction,
    /// Applied at the start of the next running tick
    pub pending_direction: Direction,
    pub weapon: Weapon,
    pub health: i32,
}

impl Player {
    fn new(spawn: Position, weapon: Weapon) -> Self {
        Self {
            trail: vec![spawn],
            direction: Direction::North,
            pending_direction: Direction::North,
            weapon,
            health: DEFAULT_PLAYER_HEALTH,
        }
    }

    /// Leading cell of the trail
    pub fn head(&self) -> Position {
        self.trail[0]
    }
}

/// Grid dimensions captured from config at reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the simulation was created with
    pub seed: u64,
    /// Owned RNG; advances with the simulation and is saved with it
    pub rng: Pcg32,
    pub grid: GridSize,
    pub mode: Mode,
    pub player: Player,
    /// Live hostiles in collection order; killed ones are removed outright
    pub hostiles: Vec<Hostile>,
    pub score: u64,
    /// Cadence hint for the caller's scheduler
    pub move_delay_ms: u64,
    /// Completed running ticks
    pub ticks: u64,
    next_hostile_id: u32,
}

impl GameState {
    /// Build a simulation in `Ready` mode.
    ///
    /// The arena is fully populated so observers have something to render
    /// before the first `reset` switches the simulation to `Running`.
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid: GridSize {
                width: config.grid_width,
                height: config.grid_height,
            },
            mode: Mode::Ready,
            player: Player::new(Self::spawn_point(config), Weapon::new(config.weapon)),
            hostiles: Vec::new(),
            score: 0,
            move_delay_ms: config.move_delay_ms,
            ticks: 0,
            next_hostile_id: 1,
        };
        state.populate(config);
        Ok(state)
    }

    /// Reinitialize the arena wholesale and start running.
    ///
    /// Legal in every mode. On a validation error the previous state is
    /// left completely untouched.
    pub fn reset(&mut self, config: &SimConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.populate(config);
        self.mode = Mode::Running;
        log::info!(
            "arena reset: {}x{} grid, {} hostiles",
            self.grid.width,
            self.grid.height,
            self.hostiles.len()
        );
        Ok(())
    }

    /// Record the direction to apply on the next running tick.
    ///
    /// Accepted in any mode; it simply waits until the simulation runs.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.player.pending_direction = direction;
    }

    /// Suspend a running simulation; no-op in any other mode
    pub fn pause(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Paused;
            log::info!("paused at tick {}", self.ticks);
        }
    }

    /// Resume a paused simulation; no-op in any other mode
    pub fn resume(&mut self) {
        if self.mode == Mode::Paused {
            self.mode = Mode::Running;
            log::info!("resumed at tick {}", self.ticks);
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Accumulated score
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Completed running ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Cadence hint for the caller's scheduler; the core never sleeps
    pub fn move_delay_ms(&self) -> u64 {
        self.move_delay_ms
    }

    /// The player's cells, head first
    pub fn player_trail(&self) -> &[Position] {
        &self.player.trail
    }

    /// Positions of all live hostiles, in collection order
    pub fn hostile_positions(&self) -> Vec<Position> {
        self.hostiles.iter().map(|h| h.pos).collect()
    }

    /// The selected weapon
    pub fn weapon(&self) -> &Weapon {
        &self.player.weapon
    }

    /// The player starts centered on the bottom row, below the spawn band
    fn spawn_point(config: &SimConfig) -> Position {
        Position::new(config.grid_width / 2, config.grid_height - 1)
    }

    /// Rebuild player, hostiles, and counters from `config`.
    ///
    /// `config` must already be validated; placement cannot fail afterward.
    fn populate(&mut self, config: &SimConfig) {
        self.grid = GridSize {
            width: config.grid_width,
            height: config.grid_height,
        };
        self.player = Player::new(Self::spawn_point(config), Weapon::new(config.weapon));
        self.hostiles.clear();
        self.score = 0;
        self.move_delay_ms = config.move_delay_ms;
        self.ticks = 0;
        for _ in 0..config.hostile_count {
            self.spawn_hostile();
        }
    }

    /// Place one hostile on a free cell of the spawn band.
    ///
    /// Bounded rejection sampling first; a crowded arena falls back to an
    /// explicit scan of the remaining free cells, so placement always
    /// terminates.
    fn spawn_hostile(&mut self) {
        for _ in 0..SPAWN_ATTEMPTS {
            let pos = Position::new(
                self.rng.random_range(1..=self.grid.width - 2),
                self.rng.random_range(1..=self.grid.height - 1 - SPAWN_CLEAR_ROWS),
            );
            if self.cell_free(pos) {
                self.push_hostile(pos);
                return;
            }
        }
        let free = self.free_spawn_cells();
        if free.is_empty() {
            // validate() rejects configs with more hostiles than free cells
            return;
        }
        let pos = free[self.rng.random_range(0..free.len())];
        self.push_hostile(pos);
    }

    /// Spawn-band cells not occupied by the trail or another hostile
    fn free_spawn_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for y in 1..=self.grid.height - 1 - SPAWN_CLEAR_ROWS {
            for x in 1..=self.grid.width - 2 {
                let pos = Position::new(x, y);
                if self.cell_free(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    fn cell_free(&self, pos: Position) -> bool {
        !self.player.trail.contains(&pos) && self.hostiles.iter().all(|h| h.pos != pos)
    }

    fn push_hostile(&mut self, pos: Position) {
        let id = self.next_hostile_id;
        self.next_hostile_id += 1;
        self.hostiles.push(Hostile { id, pos });
    }
}

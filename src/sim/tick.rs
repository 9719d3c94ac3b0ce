//! Turn orchestration
//!
//! One call to [`advance`] is one logical tick. The caller owns cadence;
//! nothing here sleeps or measures wall-clock time.

use super::pursuit;
use super::state::{Direction, GameState, Mode, Position};
use crate::consts::SCORE_PER_KILL;

/// Advance the simulation by one turn.
///
/// A no-op in every mode but [`Mode::Running`]. A turn resolves in order:
/// direction latch, player movement (with the escape check), hostile
/// pursuit, contact check, then the weapon phase. A turn that ends the
/// game stops resolving immediately, so a win stands regardless of
/// hostile positions and a loss preempts the weapon.
pub fn advance(state: &mut GameState) {
    if state.mode != Mode::Running {
        return;
    }
    state.ticks += 1;

    state.player.direction = state.player.pending_direction;
    let head = state.player.head();
    let attempted = head.step(state.player.direction);

    // Reaching the top row wins outright, blocked move or not.
    if attempted.y < 1 {
        state.mode = Mode::Won;
        log::info!("player escaped at tick {}, score {}", state.ticks, state.score);
        return;
    }

    if !blocked(state, head) {
        state.player.trail.insert(0, attempted);
        state.player.trail.pop();
    }

    // Hostiles chase the head as it now stands, in collection order.
    let target = state.player.head();
    for hostile in &mut state.hostiles {
        hostile.pos = pursuit::step(hostile.pos, target);
    }

    // Contact on the cell the player claimed this turn is lethal, whether
    // or not the move itself went through.
    if state.hostiles.iter().any(|h| h.pos == attempted) {
        state.mode = Mode::Lost;
        log::info!("player overrun at tick {}, score {}", state.ticks, state.score);
        return;
    }

    resolve_weapon(state, head);
}

/// True when the head sits against the wall in the direction of travel
fn blocked(state: &GameState, head: Position) -> bool {
    let grid = state.grid;
    match state.player.direction {
        Direction::West => head.x < 2,
        Direction::North => head.y < 2,
        Direction::East => head.x > grid.width - 3,
        Direction::South => head.y > grid.height - 3,
    }
}

/// Weapon phase: fire, reload, or count the cooldown down.
///
/// Range is measured from the head as it stood at the start of the turn.
/// A successful shot drops the first hostile in collection order that is
/// strictly within range on both axes; one kill per shot at most.
fn resolve_weapon(state: &mut GameState, origin: Position) {
    let weapon = &mut state.player.weapon;
    if weapon.cooldown > 0 {
        weapon.tick_cooldown();
        return;
    }
    if weapon.ammo == 0 {
        weapon.reload();
        return;
    }
    let range = weapon.range;
    if !weapon.fire(&mut state.rng) {
        return;
    }
    let hit = state.hostiles.iter().position(|hostile| {
        (hostile.pos.x - origin.x).abs() < range && (hostile.pos.y - origin.y).abs() < range
    });
    if let Some(index) = hit {
        let downed = state.hostiles.remove(index);
        state.score += SCORE_PER_KILL;
        log::debug!(
            "hostile {} down at ({}, {}), score {}",
            downed.id,
            downed.pos.x,
            downed.pos.y,
            state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimConfig, WeaponConfig};
    use crate::sim::state::Hostile;

    const SEED: u64 = 4242;

    /// Fresh simulation reset into `Running`
    fn running_state(config: &SimConfig) -> GameState {
        let mut state = GameState::new(config, SEED).unwrap();
        state.reset(config).unwrap();
        state
    }

    /// Default-size arena with no hostiles and a sure-shot weapon
    fn empty_arena() -> SimConfig {
        SimConfig {
            hostile_count: 0,
            weapon: WeaponConfig {
                accuracy: 100,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn place_player(state: &mut GameState, pos: Position, direction: Direction) {
        state.player.trail = vec![pos];
        state.player.direction = direction;
        state.player.pending_direction = direction;
    }

    fn place_hostile(state: &mut GameState, id: u32, pos: Position) {
        state.hostiles.push(Hostile { id, pos });
    }

    #[test]
    fn test_blocked_at_west_wall() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(1, 10), Direction::West);

        advance(&mut state);

        assert_eq!(state.player.head(), Position::new(1, 10));
        assert_eq!(state.mode(), Mode::Running);
    }

    #[test]
    fn test_blocked_at_south_wall() {
        let config = empty_arena();
        let mut state = running_state(&config);
        // The spawn row is already past the south threshold
        state.set_pending_direction(Direction::South);

        let head = state.player.head();
        advance(&mut state);

        assert_eq!(state.player.head(), head);
    }

    #[test]
    fn test_open_move_shifts_trail() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(10, 10), Direction::East);

        advance(&mut state);

        assert_eq!(state.player.head(), Position::new(11, 10));
        assert_eq!(state.player_trail().len(), 1);
    }

    #[test]
    fn test_win_on_top_row() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(10, 1), Direction::North);
        // A hostile in contact range must not matter once the player escapes
        place_hostile(&mut state, 99, Position::new(10, 2));

        advance(&mut state);

        assert_eq!(state.mode(), Mode::Won);
        // The escaping move itself is blocked; the trail never reaches row 0
        assert_eq!(state.player.head(), Position::new(10, 1));
    }

    #[test]
    fn test_won_is_terminal_until_reset() {
        let config = empty_arena();
        let mut state = running_state(&config);
        place_player(&mut state, Position::new(10, 1), Direction::North);
        advance(&mut state);
        assert_eq!(state.mode(), Mode::Won);

        let snapshot = state.clone();
        advance(&mut state);
        assert_eq!(state, snapshot);

        state.reset(&config).unwrap();
        assert_eq!(state.mode(), Mode::Running);
    }

    #[test]
    fn test_loss_on_contact() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(10, 10), Direction::North);
        // Sits exactly where the head lands this turn
        place_hostile(&mut state, 7, Position::new(10, 9));

        advance(&mut state);

        assert_eq!(state.mode(), Mode::Lost);
        // The weapon never fired on the losing turn
        assert_eq!(state.weapon().ammo, 8);
    }

    #[test]
    fn test_loss_when_hostile_closes_in() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(10, 10), Direction::North);
        // Two cells ahead: both sides step toward each other and meet
        place_hostile(&mut state, 7, Position::new(10, 8));

        advance(&mut state);

        assert_eq!(state.mode(), Mode::Lost);
    }

    #[test]
    fn test_kill_awards_score_and_removes_hostile() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(12, 31), Direction::North);
        place_hostile(&mut state, 5, Position::new(15, 30));

        advance(&mut state);

        assert!(state.hostiles.is_empty());
        assert_eq!(state.score(), SCORE_PER_KILL);
        assert_eq!(state.weapon().ammo, 7);
        assert_eq!(state.weapon().cooldown, state.weapon().fire_rate);
        assert_eq!(state.mode(), Mode::Running);
    }

    #[test]
    fn test_one_kill_per_shot() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(12, 31), Direction::North);
        place_hostile(&mut state, 5, Position::new(15, 30));
        place_hostile(&mut state, 6, Position::new(16, 29));

        advance(&mut state);

        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].id, 6);
        assert_eq!(state.score(), SCORE_PER_KILL);
    }

    #[test]
    fn test_out_of_range_hostile_survives() {
        let config = SimConfig {
            hostile_count: 0,
            weapon: WeaponConfig {
                accuracy: 100,
                range: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut state = running_state(&config);
        place_player(&mut state, Position::new(12, 31), Direction::North);
        // Out of the weapon's reach and outside the aggro window
        place_hostile(&mut state, 5, Position::new(20, 10));

        advance(&mut state);

        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.score(), 0);
        // The shot was still spent
        assert_eq!(state.weapon().ammo, 7);
    }

    #[test]
    fn test_cooldown_counts_down_one_per_tick() {
        let config = SimConfig {
            hostile_count: 0,
            weapon: WeaponConfig {
                accuracy: 100,
                fire_rate: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut state = running_state(&config);
        place_player(&mut state, Position::new(10, 10), Direction::East);

        advance(&mut state);
        assert_eq!(state.weapon().ammo, 7);
        assert_eq!(state.weapon().cooldown, 3);

        for expected in [2, 1, 0] {
            advance(&mut state);
            assert_eq!(state.weapon().cooldown, expected);
            // No round is spent while cooling down
            assert_eq!(state.weapon().ammo, 7);
        }

        // Off cooldown again: the next turn fires
        advance(&mut state);
        assert_eq!(state.weapon().ammo, 6);
        assert_eq!(state.weapon().cooldown, 3);
    }

    #[test]
    fn test_empty_reserve_reloads_instead_of_firing() {
        let config = SimConfig {
            hostile_count: 0,
            weapon: WeaponConfig {
                accuracy: 100,
                ammo: 0,
                ammo_in_clip: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut state = running_state(&config);
        place_player(&mut state, Position::new(10, 10), Direction::East);
        place_hostile(&mut state, 5, Position::new(14, 10));

        advance(&mut state);

        // Nothing to fire with: the hostile closes in unharmed while the
        // reload empties the stale clip against the dry reserve
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].pos, Position::new(13, 10));
        assert_eq!(state.weapon().ammo, 0);
        assert_eq!(state.weapon().ammo_in_clip, 0);
    }

    #[test]
    fn test_advance_is_noop_outside_running() {
        let config = SimConfig::default();
        for mode in [Mode::Ready, Mode::Paused, Mode::Lost, Mode::Won] {
            let mut state = GameState::new(&config, SEED).unwrap();
            state.mode = mode;
            let before = state.clone();

            advance(&mut state);

            assert_eq!(state, before, "mode {mode:?} must not advance");
        }
    }

    #[test]
    fn test_pending_direction_latches_on_advance() {
        let mut state = running_state(&empty_arena());
        place_player(&mut state, Position::new(10, 10), Direction::North);

        state.set_pending_direction(Direction::East);
        assert_eq!(state.player.direction, Direction::North);

        advance(&mut state);

        assert_eq!(state.player.direction, Direction::East);
        assert_eq!(state.player.head(), Position::new(11, 10));
    }

    #[test]
    fn test_determinism_across_identical_runs() {
        let config = SimConfig::default();
        let mut a = GameState::new(&config, 99999).unwrap();
        let mut b = GameState::new(&config, 99999).unwrap();
        a.reset(&config).unwrap();
        b.reset(&config).unwrap();

        let inputs = [
            Direction::North,
            Direction::East,
            Direction::North,
            Direction::North,
            Direction::West,
            Direction::North,
        ];
        for direction in inputs {
            a.set_pending_direction(direction);
            b.set_pending_direction(direction);
            advance(&mut a);
            advance(&mut b);
            assert_eq!(a, b);
        }
    }
}

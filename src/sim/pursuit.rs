//! Hostile pursuit
//!
//! Hostiles only give chase once the player is close: outside the
//! activation window they hold position for the whole tick. Inside it, a
//! hostile closes one cell per turn along whichever axis is further from
//! the target, producing a stair-step chase rather than true
//! shortest-path movement.

use super::state::Position;

/// Half-width of the square activation window, strict on both axes
pub const ACTIVATION_RADIUS: i32 = 4;

/// Advance a hostile one turn toward the target.
///
/// Returns the hostile's next position; the result is deliberately not
/// clamped to the arena. A hostile that wanders outside the grid is
/// simply never drawn by the caller.
pub fn step(hostile: Position, target: Position) -> Position {
    let dx = hostile.x - target.x;
    let dy = hostile.y - target.y;

    if dx.abs() >= ACTIVATION_RADIUS || dy.abs() >= ACTIVATION_RADIUS {
        return hostile;
    }
    // Already in contact; nothing left to close.
    if dx == 0 && dy == 0 {
        return hostile;
    }

    if dx.abs() > dy.abs() {
        if dx < 0 {
            Position::new(hostile.x + 1, hostile.y)
        } else {
            Position::new(hostile.x - 1, hostile.y)
        }
    } else {
        // Ties resolve on the vertical axis
        if dy < 0 {
            Position::new(hostile.x, hostile.y + 1)
        } else {
            Position::new(hostile.x, hostile.y - 1)
        }
    }
}

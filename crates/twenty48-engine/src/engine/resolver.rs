use std::collections::BTreeMap;

use super::board::{Board, Move, Position, SIZE, Tile, TileId};

/// Upper bound on relaxation sweeps for one shift: a tile travels at most
/// three cells, plus the final sweep that observes no change.
pub const MAX_SWEEPS: usize = SIZE;

/// A tile absorbed by a merge, with the cell it slides into before vanishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedTile {
    pub tile: Tile,
    pub slide_to: Position,
}

/// Everything one shift produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftOutcome {
    pub board: Board,
    /// Tiles that lost a merge, in the order they were absorbed.
    pub removed: Vec<RemovedTile>,
    /// Surviving merged tile -> its new value.
    pub merged: BTreeMap<TileId, u32>,
    pub any_moved: bool,
    pub points_gained: u64,
    pub sweeps: usize,
}

/// Slide and merge every tile on `board` in `direction`. No randomness, and
/// `board` itself is left untouched.
///
/// Tiles are relaxed one cell at a time: each sweep visits the cells behind
/// the leading edge, nearest first, and moves every tile one step into an
/// empty neighbour or merges it into an equal one. Sweeps repeat until one
/// changes nothing.
///
/// ```
/// use twenty48_engine::engine::{Board, Move};
/// let board = Board::from_grid([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let out = board.shift(Move::Left);
/// assert_eq!(out.board.to_grid()[0], [4, 0, 0, 0]);
/// assert_eq!(out.points_gained, 4);
/// ```
pub fn shift(board: &Board, direction: Move) -> ShiftOutcome {
    let (dy, dx) = direction.vector();
    let order = sweep_order(direction);

    let mut work = *board;
    // Keys double as the set of tiles that already won a merge this shift.
    let mut merged: BTreeMap<TileId, u32> = BTreeMap::new();
    let mut removed = Vec::new();
    let mut points_gained = 0u64;
    let mut any_moved = false;
    let mut sweeps = 0;

    loop {
        sweeps += 1;
        let mut changed = false;
        for &from in &order {
            let Some(tile) = work.get(from) else {
                continue;
            };
            let Some(to) = from.offset(dy, dx) else {
                continue;
            };
            match work.get(to) {
                None => {
                    work.set(to, Some(tile));
                    work.set(from, None);
                    changed = true;
                }
                Some(target)
                    if target.value == tile.value
                        && !merged.contains_key(&target.id)
                        && !merged.contains_key(&tile.id) =>
                {
                    let value = target.value + tile.value;
                    work.set(
                        to,
                        Some(Tile {
                            id: target.id,
                            value,
                        }),
                    );
                    work.set(from, None);
                    merged.insert(target.id, value);
                    removed.push(RemovedTile { tile, slide_to: to });
                    points_gained += u64::from(value);
                    changed = true;
                }
                Some(_) => {}
            }
        }
        any_moved |= changed;
        if !changed {
            break;
        }
    }
    debug_assert!(sweeps <= MAX_SWEEPS, "shift took {sweeps} sweeps");

    ShiftOutcome {
        board: work,
        removed,
        merged,
        any_moved,
        points_gained,
        sweeps,
    }
}

/// True if shifting `board` in `direction` would change anything.
pub fn can_move(board: &Board, direction: Move) -> bool {
    shift(board, direction).any_moved
}

/// Cells visited in one sweep: every cell except the leading edge, ranks
/// nearest the leading edge first. Lanes along the shift never interact, so
/// they are walked in natural order.
fn sweep_order(direction: Move) -> [Position; SIZE * (SIZE - 1)] {
    let ranks = match direction {
        Move::Up | Move::Left => [1, 2, 3],
        Move::Down | Move::Right => [2, 1, 0],
    };
    std::array::from_fn(|i| {
        let (rank, lane) = (ranks[i / SIZE], i % SIZE);
        if direction.is_vertical() {
            Position { row: rank, col: lane }
        } else {
            Position { row: lane, col: rank }
        }
    })
}

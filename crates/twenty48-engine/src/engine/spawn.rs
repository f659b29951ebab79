use rand::Rng;

use super::board::{Board, Position, Tile};

/// A tile inserted after a successful shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub position: Position,
    pub tile: Tile,
}

/// Insert a 2 (90%) or 4 (10%) on a uniformly chosen empty cell, using the
/// provided RNG. Returns `None` and leaves `board` alone when it is full.
///
/// Deterministic example using a seeded RNG:
/// ```
/// use twenty48_engine::engine::{Board, spawn_tile};
/// use rand::{SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(123);
/// let mut board = Board::EMPTY;
/// let spawned = spawn_tile(&mut board, &mut rng).unwrap();
/// assert_eq!(board.get(spawned.position), Some(spawned.tile));
/// assert_eq!(board.count_empty(), 15);
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<SpawnedTile> {
    let empty: Vec<Position> = board.empty_positions().collect();
    if empty.is_empty() {
        return None;
    }
    let position = empty[rng.gen_range(0..empty.len())];
    let tile = board.place(position, random_tile_value(rng));
    Some(SpawnedTile { position, tile })
}

pub(crate) fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}

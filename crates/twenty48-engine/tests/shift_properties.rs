//! Property tests for the shift resolver against a straightforward
//! line-collapse reference, over arbitrary boards and all four directions.

use proptest::prelude::*;
use twenty48_engine::engine::{
    Board, Grid, MAX_SWEEPS, Move, SIZE, is_game_over, legal_moves, shift,
};

/// Collapse one line toward index 0, merging each equal pair once.
fn collapse(line: [u32; SIZE]) -> ([u32; SIZE], u64) {
    let vals: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut out = [0u32; SIZE];
    let mut points = 0u64;
    let (mut i, mut k) = (0, 0);
    while i < vals.len() {
        if i + 1 < vals.len() && vals[i] == vals[i + 1] {
            out[k] = vals[i] * 2;
            points += u64::from(out[k]);
            i += 2;
        } else {
            out[k] = vals[i];
            i += 1;
        }
        k += 1;
    }
    (out, points)
}

fn reference(grid: Grid, dir: Move) -> (Grid, u64) {
    let mut out = [[0u32; SIZE]; SIZE];
    let mut points = 0;
    for lane in 0..SIZE {
        // Cells of this lane listed from the leading edge backwards.
        let cells: [(usize, usize); SIZE] = std::array::from_fn(|i| match dir {
            Move::Left => (lane, i),
            Move::Right => (lane, SIZE - 1 - i),
            Move::Up => (i, lane),
            Move::Down => (SIZE - 1 - i, lane),
        });
        let line = cells.map(|(r, c)| grid[r][c]);
        let (collapsed, p) = collapse(line);
        points += p;
        for (i, (r, c)) in cells.into_iter().enumerate() {
            out[r][c] = collapsed[i];
        }
    }
    (out, points)
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    let cell = prop_oneof![3 => Just(0u32), 5 => (1u32..=11).prop_map(|e| 1u32 << e)];
    prop::array::uniform4(prop::array::uniform4(cell))
}

fn dir_strategy() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

proptest! {
    #[test]
    fn shift_matches_reference(grid in grid_strategy(), dir in dir_strategy()) {
        let board = Board::from_grid(grid).unwrap();
        let out = shift(&board, dir);
        let (expected, points) = reference(grid, dir);
        prop_assert_eq!(out.board.to_grid(), expected);
        prop_assert_eq!(out.points_gained, points);
        prop_assert_eq!(out.any_moved, expected != grid);
    }

    #[test]
    fn shift_keeps_bookkeeping_consistent(grid in grid_strategy(), dir in dir_strategy()) {
        let board = Board::from_grid(grid).unwrap();
        let snapshot = board;
        let out = shift(&board, dir);

        prop_assert_eq!(board, snapshot);
        prop_assert!(out.sweeps >= 1 && out.sweeps <= MAX_SWEEPS);

        let sum = |b: &Board| b.tiles().map(|(_, t)| u64::from(t.value)).sum::<u64>();
        prop_assert_eq!(sum(&board), sum(&out.board));
        prop_assert_eq!(
            out.board.tiles().count() + out.removed.len(),
            board.tiles().count()
        );
        prop_assert_eq!(out.merged.len(), out.removed.len());
        prop_assert_eq!(
            out.points_gained,
            out.merged.values().map(|&v| u64::from(v)).sum::<u64>()
        );

        for (_, tile) in out.board.tiles() {
            let before = board.position_of(tile.id).and_then(|p| board.get(p));
            prop_assert!(before.is_some(), "shift must not create tiles");
            let before = before.unwrap();
            match out.merged.get(&tile.id) {
                Some(&v) => {
                    prop_assert_eq!(v, tile.value);
                    prop_assert_eq!(tile.value, before.value * 2);
                }
                None => prop_assert_eq!(tile.value, before.value),
            }
        }
        for removed in &out.removed {
            prop_assert!(out.board.position_of(removed.tile.id).is_none());
            let winner = out.board.get(removed.slide_to);
            prop_assert!(winner.is_some());
            let winner = winner.unwrap();
            prop_assert!(out.merged.contains_key(&winner.id));
            prop_assert_eq!(winner.value, removed.tile.value * 2);
        }
    }

    #[test]
    fn game_over_agrees_with_every_direction(grid in grid_strategy()) {
        let board = Board::from_grid(grid).unwrap();
        let stuck = Move::ALL.iter().all(|&d| !shift(&board, d).any_moved);
        prop_assert_eq!(is_game_over(&board), stuck);
        prop_assert_eq!(legal_moves(&board).is_empty(), stuck);
    }

    #[test]
    fn grid_round_trip(grid in grid_strategy()) {
        let board = Board::from_grid(grid).unwrap();
        let again = Board::from_grid(board.to_grid()).unwrap();
        prop_assert_eq!(again.to_grid(), grid);
        for (pos, tile) in board.tiles() {
            prop_assert_eq!(again.get(pos).map(|t| t.value), Some(tile.value));
        }
    }
}

#[test]
fn compacted_board_is_stable_in_every_direction() {
    let grid = [[2, 4, 8, 16], [32, 64, 128, 256], [2, 4, 8, 16], [32, 64, 128, 256]];
    let board = Board::from_grid(grid).unwrap();
    for dir in Move::ALL {
        let mut current = board;
        for _ in 0..3 {
            let out = shift(&current, dir);
            assert!(!out.any_moved, "{dir:?}");
            assert_eq!(out.board, board);
            current = out.board;
        }
    }
    assert!(is_game_over(&board));
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::resolver::{self, ShiftOutcome};
use crate::error::{EngineError, Result};

/// Side length of the board.
pub const SIZE: usize = 4;

/// Tile values as a plain row-major grid, 0 for empty cells.
pub type Grid = [[u32; SIZE]; SIZE];

/// A direction to shift tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Unit `(dy, dx)` vector of travel. Rows grow downwards.
    #[inline]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Map a raw shift vector back onto one of the four directions.
    ///
    /// ```
    /// use twenty48_engine::engine::Move;
    /// assert_eq!(Move::from_vector(0, -1).unwrap(), Move::Left);
    /// assert!(Move::from_vector(1, 1).is_err());
    /// ```
    pub fn from_vector(dy: i32, dx: i32) -> Result<Move> {
        match (dy, dx) {
            (-1, 0) => Ok(Move::Up),
            (1, 0) => Ok(Move::Down),
            (0, -1) => Ok(Move::Left),
            (0, 1) => Ok(Move::Right),
            _ => Err(EngineError::InvalidDirection { dy, dx }),
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Move::Up | Move::Down)
    }
}

/// Stable identity of a tile for the duration of its life on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// One numbered piece. `value` is always a power of two, at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
}

/// A cell coordinate, `row` and `col` in `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Panics if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIZE && col < SIZE,
            "position ({row}, {col}) is outside the {SIZE}x{SIZE} board"
        );
        Position { row, col }
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position { row, col }))
    }

    /// The neighbouring position one step along `(dy, dx)`, if still on the board.
    pub fn offset(self, dy: i32, dx: i32) -> Option<Position> {
        let row = self.row.checked_add_signed(dy as isize)?;
        let col = self.col.checked_add_signed(dx as isize)?;
        (row < SIZE && col < SIZE).then_some(Position { row, col })
    }
}

/// The 4x4 grid of optional tiles.
///
/// `Board` is a plain value: copying it copies the grid and keeps every
/// tile's id, so a working copy can be mutated freely while the source board
/// stays untouched. It also carries the counter used to allocate fresh ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Tile>; SIZE]; SIZE],
    next_id: u32,
}

impl Board {
    /// A constant empty board.
    pub const EMPTY: Board = Board {
        cells: [[None; SIZE]; SIZE],
        next_id: 0,
    };

    /// Rebuild a board from a plain value grid (0 = empty).
    ///
    /// Ids are assigned fresh in row-major order; only values and positions
    /// survive a grid round-trip.
    ///
    /// ```
    /// use twenty48_engine::engine::Board;
    /// let grid = [[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2048]];
    /// let board = Board::from_grid(grid).unwrap();
    /// assert_eq!(board.to_grid(), grid);
    /// assert!(Board::from_grid([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_grid(grid: Grid) -> Result<Board> {
        let mut board = Board::EMPTY;
        for pos in Position::all() {
            let value = grid[pos.row][pos.col];
            if value == 0 {
                continue;
            }
            if !is_tile_value(value) {
                return Err(EngineError::InvalidTileValue {
                    row: pos.row,
                    col: pos.col,
                    value,
                });
            }
            board.place(pos, value);
        }
        Ok(board)
    }

    /// Flatten to a plain value grid (0 = empty).
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0; SIZE]; SIZE];
        for (pos, tile) in self.tiles() {
            grid[pos.row][pos.col] = tile.value;
        }
        grid
    }

    /// The tile at `pos`, if any. Panics if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        Self::check(pos);
        self.cells[pos.row][pos.col]
    }

    /// Shorthand for `get(Position::new(row, col))`.
    #[inline]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(Position::new(row, col))
    }

    /// Put a new tile with `value` on the empty cell `pos` and return it.
    ///
    /// Panics if the cell is occupied.
    pub fn place(&mut self, pos: Position, value: u32) -> Tile {
        debug_assert!(is_tile_value(value), "tile value {value} is not a power of two >= 2");
        assert!(
            self.get(pos).is_none(),
            "cannot place a tile on occupied cell ({}, {})",
            pos.row,
            pos.col
        );
        let tile = Tile {
            id: TileId(self.next_id),
            value,
        };
        self.next_id += 1;
        self.set(pos, Some(tile));
        tile
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, tile: Option<Tile>) {
        Self::check(pos);
        self.cells[pos.row][pos.col] = tile;
    }

    /// Every cell in row-major order, empty ones included.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Tile>)> + '_ {
        Position::all().map(move |pos| (pos, self.cells[pos.row][pos.col]))
    }

    /// Occupied cells only, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells().filter_map(|(pos, tile)| tile.map(|t| (pos, t)))
    }

    /// Empty cells only, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter_map(|(pos, tile)| tile.is_none().then_some(pos))
    }

    /// Count the number of empty cells on the board.
    pub fn count_empty(&self) -> usize {
        self.empty_positions().count()
    }

    /// Highest tile value on the board, 0 if empty.
    pub fn highest_tile(&self) -> u32 {
        self.tiles().map(|(_, t)| t.value).max().unwrap_or(0)
    }

    /// Where the tile with `id` currently sits.
    pub fn position_of(&self, id: TileId) -> Option<Position> {
        self.tiles().find(|(_, t)| t.id == id).map(|(pos, _)| pos)
    }

    /// Resolve a shift in `dir` without touching `self`. See `engine::shift`.
    #[inline]
    pub fn shift(&self, dir: Move) -> ShiftOutcome {
        resolver::shift(self, dir)
    }

    #[inline]
    fn check(pos: Position) {
        assert!(
            pos.row < SIZE && pos.col < SIZE,
            "position ({}, {}) is outside the {SIZE}x{SIZE} board",
            pos.row,
            pos.col
        );
    }
}

#[inline]
pub(crate) fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

fn format_val(tile: Option<Tile>) -> String {
    match tile {
        None => String::from("       "),
        Some(t) => format!("{:^7}", t.value),
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.to_grid())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "-------------------------------")?;
            }
            let cells: Vec<String> = line.iter().map(|&t| format_val(t)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

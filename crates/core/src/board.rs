//! Board module - manages the game grid
//!
//! The board is a fixed 5x5 grid of [`Cell`]s stored row-major in a nested
//! array, so its shape is enforced by the type. Each cell also carries its own
//! position; [`Board::validate`] checks that every position matches the slot
//! the cell sits in and that `empty` agrees with `value == 0`.
//!
//! Coordinates: (row, column), both 0..=4, row 0 at the top.
//!
//! The Board Factory lives here as well: [`create_empty_board`] and
//! [`create_initial_board`].

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::error::EngineError;
use crate::spawn::pick_spawn_positions;
use crate::types::{
    Cell, Position, CELL_COUNT, GRID_SIZE, INITIAL_TILE_DRAW_RANGE, INITIAL_TILE_VALUES,
    SPAWN_VALUES,
};

/// Raw row-major cell storage.
pub(crate) type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

/// Value distribution for the tiles seeded into a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialTiles {
    /// 2, 4 or 8 with weights 4/9, 4/9, 1/9
    #[default]
    Weighted,
    /// 2 or 4, uniformly (same as regular spawns)
    TwoOrFour,
}

impl InitialTiles {
    /// Parse from config string ("weighted" | "two-or-four")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weighted" => Some(InitialTiles::Weighted),
            "two-or-four" | "uniform" => Some(InitialTiles::TwoOrFour),
            _ => None,
        }
    }

    /// Draw one tile value.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match self {
            InitialTiles::Weighted => {
                let idx = rng.gen_range(0.0..INITIAL_TILE_DRAW_RANGE) as usize;
                INITIAL_TILE_VALUES[idx.min(INITIAL_TILE_VALUES.len() - 1)]
            }
            InitialTiles::TwoOrFour => SPAWN_VALUES[rng.gen_range(0..SPAWN_VALUES.len())],
        }
    }
}

/// Build a 5x5 board of canonical empty cells.
pub fn create_empty_board() -> Board {
    Board::new()
}

/// Build a fresh board seeded with two tiles (weighted 2/4/8 values).
pub fn create_initial_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    create_initial_board_with(rng, InitialTiles::default())
}

/// Build a fresh board seeded with two tiles drawn from `tiles`.
pub fn create_initial_board_with<R: Rng + ?Sized>(rng: &mut R, tiles: InitialTiles) -> Board {
    let mut board = Board::new();
    let empty = board.empty_positions();
    for pos in pick_spawn_positions(&empty, rng) {
        let value = tiles.draw(rng);
        board.put(Cell::spawned(pos, value));
    }
    board
}

/// The game board - 5 rows x 5 columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        let mut cells = [[Cell::empty_at(Position::default()); GRID_SIZE]; GRID_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (column, cell) in line.iter_mut().enumerate() {
                *cell = Cell::empty_at(Position::new(row as u8, column as u8));
            }
        }
        Self { cells }
    }

    /// Build a board from plain tile values (0 = empty).
    ///
    /// Positions and `empty` flags are derived, so the result is always valid.
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (column, &value) in line.iter().enumerate() {
                board.set_value(row, column, value);
            }
        }
        board
    }

    /// Build a board from host-supplied cells.
    ///
    /// Fails with [`EngineError::InvariantViolation`] when the rows are not
    /// exactly 5x5 or any cell breaks a cell invariant.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        if rows.len() != GRID_SIZE {
            return Err(EngineError::invariant(format!(
                "expected {} rows, got {}",
                GRID_SIZE,
                rows.len()
            )));
        }
        let mut board = Self::new();
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != GRID_SIZE {
                return Err(EngineError::invariant(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.len(),
                    GRID_SIZE
                )));
            }
            for (column, cell) in line.into_iter().enumerate() {
                board.cells[row][column] = cell;
            }
        }
        board.validate()?;
        Ok(board)
    }

    pub(crate) fn from_grid(cells: Grid) -> Self {
        Self { cells }
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Store `cell` at its own position.
    pub(crate) fn put(&mut self, cell: Cell) {
        self.cells[cell.position.row as usize][cell.position.column as usize] = cell;
    }

    #[inline(always)]
    fn in_bounds(row: usize, column: usize) -> bool {
        row < GRID_SIZE && column < GRID_SIZE
    }

    /// Check every structural invariant.
    ///
    /// Each cell's position must match its slot (which also rules out
    /// duplicate positions) and `empty` must agree with `value == 0`.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (row, line) in self.cells.iter().enumerate() {
            for (column, cell) in line.iter().enumerate() {
                let expected = Position::new(row as u8, column as u8);
                if cell.position != expected {
                    return Err(EngineError::invariant(format!(
                        "cell at ({}, {}) claims position ({}, {})",
                        row, column, cell.position.row, cell.position.column
                    )));
                }
                if !cell.is_consistent() {
                    return Err(EngineError::invariant(format!(
                        "cell at ({}, {}) has value {} but empty = {}",
                        row, column, cell.value, cell.empty
                    )));
                }
            }
        }
        Ok(())
    }

    /// Get cell at (row, column)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if !Self::in_bounds(row, column) {
            return None;
        }
        Some(&self.cells[row][column])
    }

    /// Tile value at (row, column), 0 when empty or out of bounds.
    pub fn value(&self, row: usize, column: usize) -> u32 {
        self.get(row, column).map_or(0, |cell| cell.value)
    }

    /// Place a plain tile (or clear the cell with 0) at (row, column)
    /// Returns false if out of bounds
    pub fn set_value(&mut self, row: usize, column: usize, value: u32) -> bool {
        if !Self::in_bounds(row, column) {
            return false;
        }
        let pos = Position::new(row as u8, column as u8);
        self.cells[row][column] = if value == 0 {
            Cell::empty_at(pos)
        } else {
            Cell::tile(pos, value)
        };
        true
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flat_map(|line| line.iter())
    }

    /// Plain value grid (0 = empty)
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        for (dst, src) in out.iter_mut().zip(self.cells.iter()) {
            for (v, cell) in dst.iter_mut().zip(src.iter()) {
                *v = cell.value;
            }
        }
        out
    }

    /// Positions of empty cells in row-major order (no allocation)
    pub fn empty_positions(&self) -> ArrayVec<Position, CELL_COUNT> {
        self.cells()
            .filter(|cell| cell.empty)
            .map(|cell| cell.position)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells().filter(|cell| cell.empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.empty)
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn highest_tile(&self) -> u32 {
        self.cells().map(|cell| cell.value).max().unwrap_or(0)
    }

    /// Board equality over value, position and emptiness.
    ///
    /// `bounce` and `just_inserted` are ignored; this is the comparison that
    /// decides whether a move changed the board.
    pub fn same_tiles(&self, other: &Board) -> bool {
        self.cells()
            .zip(other.cells())
            .all(|(a, b)| a.same_tile(b))
    }

    /// Copy of this board with every transient flag cleared.
    pub fn without_transient_flags(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut().flat_map(|line| line.iter_mut()) {
            cell.bounce = false;
            cell.just_inserted = false;
        }
        Board { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn format_value(value: u32) -> String {
    if value == 0 {
        format!("{:>6}", ".")
    } else {
        format!("{:>6}", value)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in line {
                write!(f, "{}", format_value(cell.value))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_board_positions_match_slots() {
        let board = Board::new();
        for (row, line) in board.rows().iter().enumerate() {
            for (column, cell) in line.iter().enumerate() {
                assert_eq!(cell.position, Position::new(row as u8, column as u8));
                assert!(cell.empty);
                assert_eq!(cell.value, 0);
                assert!(!cell.bounce);
                assert!(!cell.just_inserted);
            }
        }
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_set_value_and_get() {
        let mut board = Board::new();

        assert!(board.set_value(2, 3, 8));
        assert_eq!(board.value(2, 3), 8);
        assert!(!board.get(2, 3).unwrap().empty);

        assert!(board.set_value(2, 3, 0));
        assert!(board.get(2, 3).unwrap().empty);

        assert!(!board.set_value(5, 0, 2));
        assert!(!board.set_value(0, 5, 2));
        assert!(board.get(5, 5).is_none());
    }

    #[test]
    fn test_validate_rejects_wrong_position() {
        let mut cells = *Board::new().grid();
        cells[1][1].position = Position::new(0, 0);
        let err = Board::from_grid(cells).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvariantViolation(_)));
    }

    #[test]
    fn test_validate_rejects_inconsistent_empty_flag() {
        let mut cells = *Board::new().grid();
        cells[3][0].value = 4;
        assert!(Board::from_grid(cells).validate().is_err());
    }

    #[test]
    fn test_from_values_roundtrip() {
        let values = [
            [2, 0, 0, 0, 4],
            [0, 8, 0, 0, 0],
            [0, 0, 16, 0, 0],
            [0, 0, 0, 32, 0],
            [64, 0, 0, 0, 128],
        ];
        let board = Board::from_values(values);
        assert_eq!(board.values(), values);
        assert_eq!(board.count_empty(), 18);
        assert_eq!(board.highest_tile(), 128);
    }

    #[test]
    fn test_same_tiles_ignores_transient_flags() {
        let a = Board::from_values([[2, 4, 0, 0, 0]; 5]);
        let mut cells = *a.grid();
        cells[0][0].bounce = true;
        cells[4][1].just_inserted = true;
        let b = Board::from_grid(cells);

        assert_ne!(a, b);
        assert!(a.same_tiles(&b));
        assert_eq!(a, b.without_transient_flags());
    }

    #[test]
    fn test_initial_board_has_two_flagged_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = create_initial_board(&mut rng);
            let tiles: Vec<&Cell> = board.cells().filter(|c| !c.empty).collect();
            assert_eq!(tiles.len(), 2);
            for tile in tiles {
                assert!(tile.just_inserted);
                assert!(INITIAL_TILE_VALUES.contains(&tile.value));
            }
            assert!(board.validate().is_ok());
        }
    }

    #[test]
    fn test_two_or_four_policy_never_draws_eight() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let v = InitialTiles::TwoOrFour.draw(&mut rng);
            assert!(v == 2 || v == 4);
        }
    }

    #[test]
    fn test_display_renders_five_lines() {
        let board = Board::from_values([[2, 0, 0, 0, 2048]; 5]);
        let text = board.to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().contains("2048"));
    }
}

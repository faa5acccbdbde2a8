use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::config::Format;
use crate::data::{Dir, Pos, MAX_CELLS, MAX_SIZE, MIN_SIZE};
use crate::state_formatter::StateFormatter;

/// Why a grid is not a valid puzzle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateErr {
    Size(usize),
    NotSquare { row: usize, len: usize },
    CellCount(usize),
    OutOfRange(u8),
    Repeated(u8),
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::Size(size) => write!(
                f,
                "Unsupported size {} - only {}x{} to {}x{} puzzles are supported",
                size, MIN_SIZE, MIN_SIZE, MAX_SIZE, MAX_SIZE
            ),
            StateErr::NotSquare { row, len } => {
                write!(f, "Row {} has {} cells - the grid must be square", row, len)
            }
            StateErr::CellCount(cnt) => write!(f, "Wrong number of cells: {}", cnt),
            StateErr::OutOfRange(value) => write!(f, "Value {} is out of range", value),
            StateErr::Repeated(value) => write!(f, "Value {} appears more than once", value),
        }
    }
}

impl Error for StateErr {}

/// A square grid holding every value in `0..size*size` exactly once, 0 is the blank.
///
/// Only valid states can be constructed so the rest of the crate doesn't need to check.
/// Unused cells (for sizes below the maximum) are always 0 so derived equality
/// and hashing compare just the grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    size: u8,
    cells: [u8; MAX_CELLS],
    blank: Pos,
}

impl State {
    /// `cells` in row-major order.
    pub fn new(size: usize, cells: &[u8]) -> Result<State, StateErr> {
        if size < MIN_SIZE || size > MAX_SIZE {
            return Err(StateErr::Size(size));
        }
        if cells.len() != size * size {
            return Err(StateErr::CellCount(cells.len()));
        }

        let mut seen = [false; MAX_CELLS];
        for &value in cells {
            let index = usize::from(value);
            if index >= cells.len() {
                return Err(StateErr::OutOfRange(value));
            }
            if seen[index] {
                return Err(StateErr::Repeated(value));
            }
            seen[index] = true;
        }

        let mut grid = [0; MAX_CELLS];
        grid[..cells.len()].copy_from_slice(cells);
        // every value below cells.len() was seen exactly once, 0 included
        let blank = locate_blank(&grid[..cells.len()], size).expect("Blank must be present");

        Ok(State {
            size: size as u8,
            cells: grid,
            blank,
        })
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<State, StateErr> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(StateErr::NotSquare {
                    row: r,
                    len: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        State::new(size, &cells)
    }

    /// Tiles in ascending row-major order with the blank in the last cell.
    pub fn solved(size: usize) -> Result<State, StateErr> {
        let cnt = size * size;
        let cells: Vec<u8> = (1..cnt).chain(0..1).map(|v| v as u8).collect();
        State::new(size, &cells)
    }

    pub fn size(&self) -> usize {
        usize::from(self.size)
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    /// Scans the grid for the blank instead of using the cached position.
    pub fn locate_blank(&self) -> Option<Pos> {
        locate_blank(self.cells(), self.size())
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.size() * self.size()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells().chunks(self.size())
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size();
        (0..size * size).map(move |i| Pos::from_index(i, size))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        usize::from(pos.r) < self.size() && usize::from(pos.c) < self.size()
    }

    /// Exchanges the blank with the tile at `pos`, `self` stays untouched.
    pub fn swap_blank(&self, pos: Pos) -> State {
        assert!(self.contains(pos), "{} is outside the board", pos);

        let size = self.size();
        let mut new_state = *self;
        new_state.cells[self.blank.index(size)] = self.cells[pos.index(size)];
        new_state.cells[pos.index(size)] = 0;
        new_state.blank = pos;
        new_state
    }

    /// The state after moving the blank in `dir`, `None` if it would leave the board.
    pub fn moved(&self, dir: Dir) -> Option<State> {
        self.blank
            .neighbor(dir, self.size())
            .map(|pos| self.swap_blank(pos))
    }

    pub fn format(&self, format: Format) -> StateFormatter<'_> {
        StateFormatter::new(self, format)
    }
}

fn locate_blank(cells: &[u8], size: usize) -> Option<Pos> {
    cells
        .iter()
        .position(|&value| value == 0)
        .map(|i| Pos::from_index(i, size))
}

impl Index<Pos> for State {
    type Output = u8;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells()[pos.index(self.size())]
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Grid))
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Compact))
    }
}

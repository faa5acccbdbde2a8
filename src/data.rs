use std::fmt::{self, Display, Formatter};

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 4;
pub(crate) const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// Blank moves in the order children are generated.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize, size: usize) -> Pos {
        Pos::new((index / size) as u8, (index % size) as u8)
    }

    pub(crate) fn index(self, size: usize) -> usize {
        usize::from(self.r) * size + usize::from(self.c)
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let dc = (i16::from(self.c) - i16::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// The neighbor in `dir` if it is still on a `size`x`size` board.
    pub fn neighbor(self, dir: Dir, size: usize) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i16::from(self.r) + i16::from(dr);
        let c = i16::from(self.c) + i16::from(dc);
        if r < 0 || c < 0 || r as usize >= size || c as usize >= size {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }

    /// Direction of a single blank move from `self` to `other`.
    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|&dir| {
            let (dr, dc) = dir.offset();
            i16::from(self.r) + i16::from(dr) == i16::from(other.r)
                && i16::from(self.c) + i16::from(dc) == i16::from(other.c)
        })
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn offset(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "U"),
            Dir::Down => write!(f, "D"),
            Dir::Left => write!(f, "L"),
            Dir::Right => write!(f, "R"),
        }
    }
}

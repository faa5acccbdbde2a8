use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::puzzle::Puzzle;
use crate::state::{State, StateErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    /// Line and position of the value within its row (both 1-based)
    /// of a token that's not a tile or a blank.
    Token(usize, usize),
    /// Line of a row that doesn't have as many values as the grid has rows.
    RowLength(usize),
    Empty,
    TooManyGrids,
    Malformed(StateErr),
    SizeMismatch(usize, usize),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Token(line, value) => {
                write!(f, "Invalid value at line {}, value {}", line, value)
            }
            ParserErr::RowLength(line) => {
                write!(f, "Row at line {} doesn't match the number of rows", line)
            }
            ParserErr::Empty => write!(f, "No grid found"),
            ParserErr::TooManyGrids => {
                write!(f, "More than two grids - expected initial and optionally goal")
            }
            ParserErr::Malformed(ref err) => write!(f, "Malformed grid: {}", err),
            ParserErr::SizeMismatch(initial, goal) => write!(
                f,
                "Initial grid is {}x{} but goal grid is {}x{}",
                initial, initial, goal, goal
            ),
        }
    }
}

impl Error for ParserErr {}

impl From<StateErr> for ParserErr {
    fn from(err: StateErr) -> Self {
        ParserErr::Malformed(err)
    }
}

/// Rows of one grid with the line number of each row.
type RawGrid = Vec<(usize, Vec<u8>)>;

pub(crate) fn parse(text: &str) -> Result<Puzzle, ParserErr> {
    let grids = split_grids(text)?;
    if grids.len() > 2 {
        return Err(ParserErr::TooManyGrids);
    }

    let initial = match grids.first() {
        Some(grid) => to_state(grid)?,
        None => return Err(ParserErr::Empty),
    };
    let goal = match grids.get(1) {
        Some(grid) => to_state(grid)?,
        None => State::solved(initial.size())?,
    };

    if initial.size() != goal.size() {
        return Err(ParserErr::SizeMismatch(initial.size(), goal.size()));
    }
    Ok(Puzzle { initial, goal })
}

fn split_grids(text: &str) -> Result<Vec<RawGrid>, ParserErr> {
    let mut grids = Vec::new();
    let mut cur: RawGrid = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if !cur.is_empty() {
                grids.push(cur);
                cur = Vec::new();
            }
            continue;
        }

        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| parse_value(token).ok_or(ParserErr::Token(line_num, c + 1)))
            .collect::<Result<Vec<_>, _>>()?;
        cur.push((line_num, row));
    }
    if !cur.is_empty() {
        grids.push(cur);
    }

    Ok(grids)
}

fn parse_value(token: &str) -> Option<u8> {
    match token {
        "_" | "." => Some(0),
        _ => token.parse().ok(),
    }
}

fn to_state(grid: &[(usize, Vec<u8>)]) -> Result<State, ParserErr> {
    for &(line_num, ref row) in grid {
        if row.len() != grid.len() {
            return Err(ParserErr::RowLength(line_num));
        }
    }
    let rows: Vec<&[u8]> = grid.iter().map(|(_, row)| &row[..]).collect();
    Ok(State::from_rows(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_and_goal() {
        let text = r"
# the challenging instance
2 8 3
1 6 4
7 0 5

1 2 3
8 _ 4
7 6 5
";
        let puzzle = parse(text).unwrap();
        assert_eq!(
            puzzle.initial,
            State::from_rows(&[[2u8, 8, 3], [1, 6, 4], [7, 0, 5]]).unwrap()
        );
        assert_eq!(
            puzzle.goal,
            State::from_rows(&[[1u8, 2, 3], [8, 0, 4], [7, 6, 5]]).unwrap()
        );
    }

    #[test]
    fn default_goal() {
        let puzzle = parse("1 2\n. 3\n").unwrap();
        assert_eq!(puzzle.initial, State::new(2, &[1, 2, 0, 3]).unwrap());
        assert_eq!(puzzle.goal, State::solved(2).unwrap());

        let puzzle = parse(
            "
    1   2  3  4
    5   6  7  8
    9  10 11 12
    13 14  _ 15
    ",
        ).unwrap();
        assert_eq!(puzzle.initial.size(), 4);
        assert_eq!(puzzle.goal, State::solved(4).unwrap());
    }

    #[test]
    fn comments_and_blank_lines() {
        let text = "\n\n# initial\n1 2\n# still initial\n3 0\n\n\n\n# goal\n3 1\n0 2\n\n";
        let puzzle = parse(text).unwrap();
        assert_eq!(puzzle.initial, State::new(2, &[1, 2, 3, 0]).unwrap());
        assert_eq!(puzzle.goal, State::new(2, &[3, 1, 0, 2]).unwrap());
    }

    #[test]
    fn errors() {
        assert_eq!(parse("").unwrap_err(), ParserErr::Empty);
        assert_eq!(parse("# nothing\n\n").unwrap_err(), ParserErr::Empty);
        assert_eq!(parse("1 2\n3 x\n").unwrap_err(), ParserErr::Token(2, 2));
        assert_eq!(parse("1 2\n3 -1\n").unwrap_err(), ParserErr::Token(2, 2));
        assert_eq!(parse("1 2\n3 256\n").unwrap_err(), ParserErr::Token(2, 2));
        // counted in values, not characters
        assert_eq!(parse("1   2\n  3     x\n").unwrap_err(), ParserErr::Token(2, 2));
        assert_eq!(parse("1 2 3\n0 4 5\n").unwrap_err(), ParserErr::RowLength(1));
        assert_eq!(parse("1 2\n3\n").unwrap_err(), ParserErr::RowLength(2));
        assert_eq!(
            parse("1 2\n3 0\n\n1 2\n3 0\n\n1 2\n3 0\n").unwrap_err(),
            ParserErr::TooManyGrids
        );
        assert_eq!(
            parse("1 2\n2 0\n").unwrap_err(),
            ParserErr::Malformed(StateErr::Repeated(2))
        );
        assert_eq!(
            parse("1 2\n3 4\n").unwrap_err(),
            ParserErr::Malformed(StateErr::OutOfRange(4))
        );
        assert_eq!(
            parse("1\n").unwrap_err(),
            ParserErr::Malformed(StateErr::Size(1))
        );
        assert_eq!(
            parse("1 2\n3 0\n\n1 2 3\n4 5 6\n7 8 0\n").unwrap_err(),
            ParserErr::SizeMismatch(2, 3)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::Token(3, 1).to_string(),
            "Invalid value at line 3, value 1"
        );
        assert_eq!(
            ParserErr::SizeMismatch(2, 3).to_string(),
            "Initial grid is 2x2 but goal grid is 3x3"
        );
    }
}

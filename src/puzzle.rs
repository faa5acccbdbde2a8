use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::config::{Heuristic, Limits};
use crate::parser::{self, ParserErr};
use crate::solver::{self, SolverErr, SolverOk};
use crate::state::State;
use crate::Solve;

/// An initial state and the goal it should be moved to, always the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: State,
    pub goal: State,
}

impl Puzzle {
    pub fn new(initial: State, goal: State) -> Result<Self, SolverErr> {
        if initial.size() != goal.size() {
            return Err(SolverErr::SizeMismatch {
                initial: initial.size(),
                goal: goal.size(),
            });
        }
        Ok(Puzzle { initial, goal })
    }

    pub fn from_rows<R: AsRef<[u8]>>(initial: &[R], goal: &[R]) -> Result<Self, SolverErr> {
        Puzzle::new(State::from_rows(initial)?, State::from_rows(goal)?)
    }

    /// Already in the goal state.
    pub fn solved() -> Self {
        let goal = Self::spiral_goal();
        Puzzle {
            initial: goal,
            goal,
        }
    }

    /// Takes 5 moves.
    pub fn challenging() -> Self {
        let initial = State::from_rows(&[[2u8, 8, 3], [1, 6, 4], [7, 0, 5]])
            .expect("Preset must be a valid state");
        Puzzle {
            initial,
            goal: Self::spiral_goal(),
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "solved" => Some(Self::solved()),
            "challenging" => Some(Self::challenging()),
            _ => None,
        }
    }

    fn spiral_goal() -> State {
        State::from_rows(&[[1u8, 2, 3], [8, 0, 4], [7, 6, 5]]).expect("Preset must be a valid state")
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial state:")?;
        write!(f, "{}", self.initial)?;
        writeln!(f, "Goal state:")?;
        write!(f, "{}", self.goal)
    }
}

impl Solve for Puzzle {
    fn solve(
        &self,
        heuristic: Heuristic,
        limits: Limits,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr> {
        solver::solve(&self.initial, &self.goal, heuristic, limits, print_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::solver::Outcome;
    use crate::state::StateErr;

    #[test]
    fn presets() {
        let solved = Puzzle::preset("solved").unwrap();
        assert_eq!(solved, Puzzle::solved());
        assert_eq!(solved.initial, solved.goal);
        assert_eq!(solved.initial.blank(), crate::data::Pos::new(1, 1));

        let challenging = Puzzle::preset("challenging").unwrap();
        assert_eq!(challenging.goal, solved.goal);
        assert_ne!(challenging.initial, challenging.goal);

        assert_eq!(Puzzle::preset("impossible"), None);
    }

    #[test]
    fn solving_presets() {
        let solution = Puzzle::solved()
            .solve(Heuristic::ManhattanDistance, Limits::default(), false)
            .unwrap();
        assert_eq!(solution.outcome, Outcome::Found);
        assert_eq!(solution.path_states.as_ref().unwrap().len(), 1);

        let solution = Puzzle::challenging()
            .solve(Heuristic::TilesOutOfPlace, Limits::default(), false)
            .unwrap();
        assert_eq!(solution.moves.unwrap().to_string(), "UULDR");
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Puzzle::from_rows(&[[1u8, 1], [2, 0]], &[[1u8, 2], [3, 0]]).unwrap_err(),
            SolverErr::MalformedState(StateErr::Repeated(1))
        );
        assert_eq!(
            Puzzle::new(State::solved(2).unwrap(), State::solved(3).unwrap()).unwrap_err(),
            SolverErr::SizeMismatch {
                initial: 2,
                goal: 3
            }
        );
        assert!(Puzzle::from_rows(&[[0u8, 1], [2, 3]], &[[1u8, 2], [3, 0]]).is_ok());
    }

    #[test]
    fn parsing_and_display() {
        let puzzle: Puzzle = "2 8 3\n1 6 4\n7 0 5\n\n1 2 3\n8 0 4\n7 6 5\n".parse().unwrap();
        assert_eq!(puzzle, Puzzle::challenging());

        let expected = "\
Initial state:
+---+---+---+
| 2 | 8 | 3 |
+---+---+---+
| 1 | 6 | 4 |
+---+---+---+
| 7 |   | 5 |
+---+---+---+
Goal state:
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 8 |   | 4 |
+---+---+---+
| 7 | 6 | 5 |
+---+---+---+
";
        assert_eq!(puzzle.to_string(), expected);

        let err = "1 2\n3 x\n".parse::<Puzzle>().unwrap_err();
        assert_eq!(err, ParserErr::Token(2, 2));
    }
}

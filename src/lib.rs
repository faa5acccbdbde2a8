// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod heuristic;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;
pub mod state_formatter;
pub mod tree_formatter;

mod fs;

use std::error::Error;

use crate::config::{Heuristic, Limits};
use crate::puzzle::Puzzle;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(
        &self,
        heuristic: Heuristic,
        limits: Limits,
        print_status: bool,
    ) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use crate::config::Heuristic::{self, ManhattanDistance, TilesOutOfPlace};
    use crate::solver::Outcome;

    use super::*;

    #[test]
    fn test_puzzles() {
        const SLOW_IN_DEBUG: i32 = 1;
        const OK: i32 = 0;

        #[cfg(debug_assertions)]
        const MAX_DIFFICULTY: i32 = 0;

        #[cfg(not(debug_assertions))]
        const MAX_DIFFICULTY: i32 = 1;

        // heuristic, file, expected moves (None if there's no solution), difficulty
        let puzzles = [
            (ManhattanDistance, "solved.txt", Some(""), OK),
            (TilesOutOfPlace, "solved.txt", Some(""), OK),
            (ManhattanDistance, "challenging.txt", Some("UULDR"), OK),
            (TilesOutOfPlace, "challenging.txt", Some("UULDR"), OK),
            (ManhattanDistance, "unsolvable-2x2.txt", None, OK),
            (TilesOutOfPlace, "unsolvable-2x2.txt", None, OK),
            (ManhattanDistance, "15-one-move.txt", Some("R"), OK),
            (TilesOutOfPlace, "15-one-move.txt", Some("R"), OK),
            (ManhattanDistance, "15-three-moves.txt", Some("DRD"), OK),
            (TilesOutOfPlace, "15-three-moves.txt", Some("DRD"), OK),
            (ManhattanDistance, "hard-31.txt", None, SLOW_IN_DEBUG),
        ];

        let succeeded = puzzles
            .iter()
            .filter(|&&(_, _, _, difficulty)| difficulty <= MAX_DIFFICULTY)
            .filter(|&&(heuristic, name, expected, _)| test_puzzle(heuristic, name, expected))
            .count();
        let expected = puzzles
            .iter()
            .filter(|&&(_, _, _, difficulty)| difficulty <= MAX_DIFFICULTY)
            .count();
        assert_eq!(succeeded, expected);
    }

    /// `expected` of `None` means either no solution or too long to write down - only optimality is checked.
    fn test_puzzle(heuristic: Heuristic, name: &str, expected: Option<&str>) -> bool {
        let path = format!("puzzles/{}", name);
        println!("Solving {} using {}", path, heuristic);
        let started = Instant::now();

        let puzzle = path.load_puzzle().unwrap();
        let solution = puzzle.solve(heuristic, Limits::default(), false).unwrap();

        // innacurate, only useful to quickly see which puzzles are difficult
        println!(
            "Solved {} using {} in approximately {} ms",
            path,
            heuristic,
            (started.elapsed().as_millis() as u64).separated_string(),
        );
        println!("{:?}", solution);

        match (expected, solution.moves.as_ref()) {
            (Some(expected), Some(moves)) => moves.to_string() == expected,
            (None, None) => solution.outcome == Outcome::NotFound,
            (None, Some(moves)) => {
                // the 31 move instance
                moves.move_cnt() == 31 && moves.apply(&puzzle.initial) == Some(puzzle.goal)
            }
            (Some(_), None) => false,
        }
    }
}

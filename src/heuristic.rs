//! Admissible estimates of the number of moves left. Less is better.

use crate::config::Heuristic;
use crate::data::{Pos, MAX_CELLS};
use crate::state::State;

/// Both states must have the same size.
pub fn evaluate(state: &State, goal: &State, heuristic: Heuristic) -> u32 {
    debug_assert_eq!(state.size(), goal.size());

    match heuristic {
        Heuristic::TilesOutOfPlace => tiles_out_of_place(state, goal),
        Heuristic::ManhattanDistance => manhattan_distance(state, goal),
    }
}

/// Number of tiles (not counting the blank) that are not where the goal has them.
pub fn tiles_out_of_place(state: &State, goal: &State) -> u32 {
    state
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|&(&value, &goal_value)| value != 0 && value != goal_value)
        .count() as u32
}

/// Sum of the distances of all tiles (not counting the blank) to their goal positions.
pub fn manhattan_distance(state: &State, goal: &State) -> u32 {
    let mut goal_positions = [Pos::default(); MAX_CELLS];
    for pos in goal.positions() {
        goal_positions[usize::from(goal[pos])] = pos;
    }

    let mut dist_sum = 0;
    for pos in state.positions() {
        let value = state[pos];
        if value == 0 {
            continue;
        }
        dist_sum += pos.dist(goal_positions[usize::from(value)]);
    }
    dist_sum
}

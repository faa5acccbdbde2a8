use crate::config::Heuristic;
use crate::data::{Dir, DIRECTIONS};
use crate::heuristic;
use crate::state::State;

use super::tree::{NodeId, SearchTree};

/// All states one blank move away, in `DIRECTIONS` order.
pub fn successors(state: &State) -> impl Iterator<Item = (Dir, State)> + '_ {
    DIRECTIONS
        .iter()
        .filter_map(move |&dir| state.moved(dir).map(|next| (dir, next)))
}

/// Creates a child node for every legal blank move from `parent`.
///
/// Children are evaluated and flagged as goal immediately, the parent is marked expanded.
pub(crate) fn expand(
    tree: &mut SearchTree,
    parent: NodeId,
    goal: &State,
    heuristic: Heuristic,
) -> Vec<NodeId> {
    let parent_state = *tree[parent].state();

    let mut children = Vec::with_capacity(DIRECTIONS.len());
    for (_, child_state) in successors(&parent_state) {
        let h = heuristic::evaluate(&child_state, goal, heuristic);
        let child = tree.add_child(parent, child_state, h);
        if child_state == *goal {
            tree.mark_goal(child);
        }
        children.push(child);
    }

    tree.mark_expanded(parent);
    children
}

pub mod a_star;
pub mod expand;
#[cfg(feature = "graph")]
pub mod graph;
pub mod tree;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::config::{Format, Heuristic, Limits};
use crate::data::DIRECTIONS;
use crate::heuristic;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::{State, StateErr};
use crate::tree_formatter::TreeFormatter;

use self::a_star::{OpenSet, Stats};
use self::expand::expand;
use self::tree::{NodeId, SearchTree};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    MalformedState(StateErr),
    SizeMismatch { initial: usize, goal: usize },
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::MalformedState(ref err) => write!(f, "Malformed state: {}", err),
            SolverErr::SizeMismatch { initial, goal } => write!(
                f,
                "Initial state is {}x{} but goal state is {}x{}",
                initial, initial, goal, goal
            ),
        }
    }
}

impl Error for SolverErr {}

impl From<StateErr> for SolverErr {
    fn from(err: StateErr) -> Self {
        SolverErr::MalformedState(err)
    }
}

/// Which limit stopped the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Iterations,
    Nodes,
    OpenCapacity,
}

impl Display for Bound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Bound::Iterations => write!(f, "iteration"),
            Bound::Nodes => write!(f, "node"),
            Bound::OpenCapacity => write!(f, "open set capacity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    /// Every reachable state was expanded.
    NotFound,
    /// Gave up before either finding the goal or exhausting the state space.
    Truncated(Bound),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Found => write!(f, "Solution found"),
            Outcome::NotFound => write!(f, "No solution - search space exhausted"),
            Outcome::Truncated(bound) => write!(f, "Search truncated - {} limit reached", bound),
        }
    }
}

pub struct SolverOk {
    pub outcome: Outcome,
    /// Initial to goal (inclusive).
    pub path_states: Option<Vec<State>>,
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub tree: SearchTree,
    pub(crate) heuristic: Heuristic,
    goal_node: Option<NodeId>,
}

impl SolverOk {
    fn new(
        outcome: Outcome,
        tree: SearchTree,
        goal_node: Option<NodeId>,
        stats: Stats,
        heuristic: Heuristic,
    ) -> Self {
        let path_states = goal_node.map(|id| tree.states_to(id));
        let moves = path_states.as_ref().map(|states| Moves::from_states(states));
        Self {
            outcome,
            path_states,
            moves,
            stats,
            tree,
            heuristic,
            goal_node,
        }
    }

    pub fn goal_node(&self) -> Option<NodeId> {
        self.goal_node
    }

    /// Number of moves in the solution.
    pub fn solution_depth(&self) -> Option<u32> {
        self.goal_node.map(|id| self.tree[id].depth())
    }

    pub fn total_nodes(&self) -> usize {
        self.tree.count_nodes()
    }

    /// `(total nodes - 1) / depth`, only meaningful with a solution at least one move long.
    pub fn branching_factor(&self) -> Option<f64> {
        match self.solution_depth() {
            Some(depth) if depth > 0 => {
                Some((self.total_nodes() - 1) as f64 / f64::from(depth))
            }
            _ => None,
        }
    }

    pub fn format_solution(&self, format: Format) -> Option<SolutionFormatter<'_>> {
        self.goal_node
            .map(|id| SolutionFormatter::new(&self.tree, id, format))
    }

    pub fn format_tree(&self) -> TreeFormatter<'_> {
        TreeFormatter::new(&self.tree)
    }
}

impl Display for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heuristic: {}", self.heuristic)?;
        writeln!(f, "{}", self.outcome)?;
        if let (Some(depth), Some(moves)) = (self.solution_depth(), self.moves.as_ref()) {
            writeln!(f, "Solution depth: {}", depth)?;
            writeln!(f, "Moves: {}", moves)?;
        }
        writeln!(f, "Total nodes in search tree: {}", self.total_nodes())?;
        writeln!(f, "Nodes expanded: {}", self.stats.total_expanded())?;
        if let Some(branching) = self.branching_factor() {
            writeln!(f, "Average branching factor: {:.2}", branching)?;
        }
        Ok(())
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution_depth() {
            None => writeln!(f, "No solution ({:?})", self.outcome)?,
            Some(depth) => writeln!(f, "{}: {}", self.heuristic, depth)?,
        }
        write!(f, "{}", self.stats)
    }
}

/// Searches for the shortest sequence of blank moves from `initial` to `goal`.
///
/// Both states must have the same size. Not finding a solution is not an error,
/// check `SolverOk::outcome`.
pub fn solve(
    initial: &State,
    goal: &State,
    heuristic: Heuristic,
    limits: Limits,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    if initial.size() != goal.size() {
        return Err(SolverErr::SizeMismatch {
            initial: initial.size(),
            goal: goal.size(),
        });
    }
    Ok(search(initial, goal, heuristic, limits, print_status))
}

fn search(
    initial: &State,
    goal: &State,
    heuristic: Heuristic,
    limits: Limits,
    print_status: bool,
) -> SolverOk {
    debug!("Search called");

    let mut stats = Stats::new();
    let mut tree = SearchTree::new(*initial, heuristic::evaluate(initial, goal, heuristic));
    let root = tree.root();
    stats.add_created(&tree[root]);

    if initial == goal {
        debug!("Initial state is the goal");
        tree.mark_goal(root);
        tree.mark_path(root);
        return SolverOk::new(Outcome::Found, tree, Some(root), stats, heuristic);
    }

    let mut to_visit = OpenSet::new(limits.open_capacity);
    let mut closed = FnvHashSet::default();

    if !to_visit.push(root, tree[root].f()) {
        stats.add_dropped(&tree[root]);
    }

    let (outcome, goal_node) = loop {
        if let Some(max) = limits.max_iterations {
            if stats.total_expanded() >= max {
                break (Outcome::Truncated(Bound::Iterations), None);
            }
        }
        if let Some(max) = limits.max_nodes {
            if tree.len() + DIRECTIONS.len() > max {
                break (Outcome::Truncated(Bound::Nodes), None);
            }
        }

        let cur = match to_visit.pop() {
            Some(id) => id,
            None if stats.total_dropped() > 0 => {
                break (Outcome::Truncated(Bound::OpenCapacity), None)
            }
            None => break (Outcome::NotFound, None),
        };

        // the same state can be queued more than once, only the cheapest gets expanded
        let cur_state = *tree[cur].state();
        if closed.contains(&cur_state) {
            trace!("{} already expanded, skipping", cur);
            stats.add_reached_duplicate(&tree[cur]);
            continue;
        }
        closed.insert(cur_state);

        if stats.add_expanded(&tree[cur]) && print_status {
            println!("Expanded new depth: {}", tree[cur].depth());
            println!("{:?}", stats);
        }
        debug!(
            "Expanding {} with g={}, h={}, f={} (open: {}, closed: {})",
            cur,
            tree[cur].g(),
            tree[cur].h(),
            tree[cur].f(),
            to_visit.len(),
            closed.len()
        );

        let children = expand(&mut tree, cur, goal, heuristic);
        for &child in &children {
            stats.add_created(&tree[child]);
        }

        let mut found = None;
        for child in children {
            let node = &tree[child];

            if closed.contains(node.state()) {
                trace!("Child {}: already expanded, discarded", child);
                stats.add_reached_duplicate(node);
                continue;
            }
            if node.is_goal() {
                trace!("Child {}: goal", child);
                found = Some(child);
                break;
            }
            if to_visit.push(child, node.f()) {
                trace!("Child {}: queued with f={}", child, node.f());
            } else {
                trace!("Child {}: open set full, dropped", child);
                stats.add_dropped(node);
            }
        }

        if found.is_some() {
            break (Outcome::Found, found);
        }
    };

    debug!(
        "Search finished: {:?} after {} iterations, {} nodes",
        outcome,
        stats.total_expanded(),
        tree.len()
    );

    if let Some(id) = goal_node {
        tree.mark_path(id);
    }
    SolverOk::new(outcome, tree, goal_node, stats, heuristic)
}

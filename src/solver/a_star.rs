use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::{Debug, Display, Formatter, Result};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use super::tree::{Node, NodeId};

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u32>,
    expanded_states: Vec<u32>,
    duplicate_states: Vec<u32>,
    dropped_states: Vec<u32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            expanded_states: vec![],
            duplicate_states: vec![],
            dropped_states: vec![],
        }
    }

    pub fn total_created(&self) -> u32 {
        self.created_states.iter().sum::<u32>()
    }

    /// Also the number of iterations of the search loop.
    pub fn total_expanded(&self) -> u32 {
        self.expanded_states.iter().sum::<u32>()
    }

    pub fn total_reached_duplicates(&self) -> u32 {
        self.duplicate_states.iter().sum::<u32>()
    }

    pub fn total_dropped(&self) -> u32 {
        self.dropped_states.iter().sum::<u32>()
    }

    /// Created nodes that were neither expanded nor discarded - left in the open set or the goal.
    pub fn total_not_reached(&self) -> u32 {
        self.total_created()
            - self.total_expanded()
            - self.total_reached_duplicates()
            - self.total_dropped()
    }

    pub(crate) fn add_created(&mut self, node: &Node) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_expanded(&mut self, node: &Node) -> bool {
        Self::add(&mut self.expanded_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &Node) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    pub(crate) fn add_dropped(&mut self, node: &Node) -> bool {
        Self::add(&mut self.dropped_states, node)
    }

    fn add(counts: &mut Vec<u32>, node: &Node) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        let depth = node.depth() as usize;
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Expanded", "Duplicates", "Dropped", "Not reached"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));

        let at = |counts: &Vec<u32>, depth: usize| counts.get(depth).cloned().unwrap_or(0);
        // created_states should be the longest vec
        for depth in 0..self.created_states.len() {
            let created = at(&self.created_states, depth);
            let expanded = at(&self.expanded_states, depth);
            let duplicates = at(&self.duplicate_states, depth);
            let dropped = at(&self.dropped_states, depth);
            let left = created - expanded - duplicates - dropped;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&expanded.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&dropped.separated_string()),
                Cell::new(&left.separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "dropped by depth: {:?}", self.dropped_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total dropped: {}", self.total_dropped().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "States expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Dropped (open set full) total: {}",
            self.total_dropped().separated_string()
        )?;
        writeln!(
            f,
            "Created but not reached total: {}",
            self.total_not_reached().separated_string()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}

/// Entry of the open set.
///
/// Ordered by f and then by insertion order so ties go to the node queued first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueuedNode {
    pub(crate) id: NodeId,
    pub(crate) cost: u32,
    pub(crate) order: u64,
}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.order).cmp(&(other.cost, other.order))
    }
}

/// Candidates for expansion, cheapest first.
#[derive(Debug)]
pub(crate) struct OpenSet {
    to_visit: BinaryHeap<Reverse<QueuedNode>>,
    inserted: u64,
    capacity: Option<usize>,
}

impl OpenSet {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            to_visit: BinaryHeap::new(),
            inserted: 0,
            capacity,
        }
    }

    /// Returns false (and doesn't queue the node) when the set is full.
    pub(crate) fn push(&mut self, id: NodeId, cost: u32) -> bool {
        if let Some(capacity) = self.capacity {
            if self.to_visit.len() >= capacity {
                return false;
            }
        }
        self.to_visit.push(Reverse(QueuedNode {
            id,
            cost,
            order: self.inserted,
        }));
        self.inserted += 1;
        true
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.to_visit.pop().map(|Reverse(queued)| queued.id)
    }

    pub(crate) fn len(&self) -> usize {
        self.to_visit.len()
    }
}

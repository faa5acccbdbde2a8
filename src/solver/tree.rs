use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use crate::state::State;

/// Handle of a node in a `SearchTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A state together with how the search reached it.
///
/// Costs are fixed at creation, only the flags change afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    state: State,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    g: u32,
    h: u32,
    depth: u32,
    expanded: bool,
    goal: bool,
    on_path: bool,
}

impl Node {
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_goal(&self) -> bool {
        self.goal
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }
}

/// Owns every node created during one search.
///
/// Nodes live in an arena and refer to each other by `NodeId`
/// so parent links don't need shared ownership.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub(crate) fn new(initial_state: State, h: u32) -> Self {
        let root = Node {
            state: initial_state,
            parent: None,
            children: Vec::new(),
            g: 0,
            h,
            depth: 0,
            expanded: false,
            goal: false,
            on_path: false,
        };
        SearchTree { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, state: State, h: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let (g, depth) = {
            let parent_node = &self[parent];
            (parent_node.g + 1, parent_node.depth + 1)
        };
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            children: Vec::new(),
            g,
            h,
            depth,
            expanded: false,
            goal: false,
            on_path: false,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub(crate) fn mark_expanded(&mut self, id: NodeId) {
        self.nodes[id.index()].expanded = true;
    }

    pub(crate) fn mark_goal(&mut self, id: NodeId) {
        self.nodes[id.index()].goal = true;
    }

    /// Flags `id` and all its ancestors as being on the solution path.
    pub(crate) fn mark_path(&mut self, id: NodeId) {
        let mut cur = Some(id);
        while let Some(id) = cur {
            let node = &mut self.nodes[id.index()];
            node.on_path = true;
            cur = node.parent;
        }
    }

    /// Nodes from the root to `id` (inclusive).
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(id) = cur {
            path.push(id);
            cur = self[id].parent;
        }
        path.reverse();
        path
    }

    pub fn states_to(&self, id: NodeId) -> Vec<State> {
        self.path_to(id)
            .into_iter()
            .map(|id| self[id].state)
            .collect()
    }

    /// Nodes in pre-order (a node, then each child subtree in generation order).
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![(self.root(), 0)],
        }
    }

    /// Counts nodes reachable from the root by following child links.
    pub fn count_nodes(&self) -> usize {
        self.pre_order().count()
    }

    /// First node flagged as goal in pre-order.
    pub fn find_goal(&self) -> Option<NodeId> {
        self.pre_order()
            .map(|(id, _)| id)
            .find(|&id| self[id].goal)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

/// Iterative pre-order walk yielding each node with its level below the root.
#[derive(Debug)]
pub struct PreOrder<'a> {
    tree: &'a SearchTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, level) = self.stack.pop()?;
        // reversed so the first child is visited first
        for &child in self.tree[id].children.iter().rev() {
            self.stack.push((child, level + 1));
        }
        Some((id, level))
    }
}

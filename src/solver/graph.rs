use std::borrow::Cow;
use std::io::{self, Write};

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::config::Format;
use crate::solver::tree::{NodeId, SearchTree};
use crate::solver::SolverOk;

type Nd = NodeId;
type Ed = (NodeId, NodeId);

/// The search tree as a Graphviz digraph.
#[derive(Debug)]
pub(crate) struct Graph<'a> {
    tree: &'a SearchTree,
    edges: Vec<Ed>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(tree: &'a SearchTree) -> Self {
        let edges = tree
            .iter()
            .filter_map(|(id, node)| node.parent().map(|parent| (parent, id)))
            .collect();
        Self { tree, edges }
    }

    pub(crate) fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        self.tree.iter().map(|(id, _)| id).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("SearchTree").expect("Graph id must be a valid identifier")
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(n.to_string()).expect("Node id must be a valid identifier")
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = &self.tree[*n];
        LabelText::LabelStr(
            format!(
                "g: {}, h: {}, f: {}\n{}",
                node.g(),
                node.h(),
                node.f(),
                node.state().format(Format::Compact)
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.tree[*n].is_expanded() {
            Style::Filled
        } else {
            Style::Solid
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        let node = &self.tree[*n];
        let color = if node.is_goal() {
            "green"
        } else if node.is_on_path() {
            "red"
        } else {
            return None;
        };
        Some(LabelText::LabelStr(color.into()))
    }
}

impl SolverOk {
    /// Writes the whole search tree in the DOT format.
    pub fn write_graph<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        Graph::new(&self.tree).render(writer)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Heuristic, Limits};
    use crate::puzzle::Puzzle;
    use crate::Solve;

    #[test]
    fn dot_output() {
        let solution = Puzzle::challenging()
            .solve(Heuristic::ManhattanDistance, Limits::default(), false)
            .unwrap();

        let mut out = Vec::new();
        solution.write_graph(&mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert!(dot.starts_with("digraph SearchTree {"));
        for i in 0..solution.tree.len() {
            assert!(dot.contains(&format!("N{}[", i)));
        }
        assert_eq!(dot.matches(" -> ").count(), solution.tree.len() - 1);
        assert!(dot.contains("N0 -> N1"));
        assert!(dot.contains("green"));
        // the goal is green, the rest of the path red
        assert_eq!(dot.matches("\"red\"").count(), 5);
    }
}

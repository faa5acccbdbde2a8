use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::solver::tree::SearchTree;

/// The whole search tree, one node per line, children indented below their parent.
pub struct TreeFormatter<'a> {
    tree: &'a SearchTree,
}

impl<'a> TreeFormatter<'a> {
    pub(crate) fn new(tree: &'a SearchTree) -> Self {
        Self { tree }
    }
}

impl Display for TreeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (id, level) in self.tree.pre_order() {
            let node = &self.tree[id];
            write!(
                f,
                "{:indent$}Node[g={},h={},f={}",
                "",
                node.g(),
                node.h(),
                node.f(),
                indent = level * 2
            )?;
            if node.is_on_path() {
                write!(f, ",PATH")?;
            }
            if node.is_goal() {
                write!(f, ",GOAL")?;
            }
            if node.is_expanded() {
                write!(f, ",EXPANDED")?;
            }
            writeln!(f, "] {}", node.state().format(Format::Compact))?;
        }
        Ok(())
    }
}

impl Debug for TreeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

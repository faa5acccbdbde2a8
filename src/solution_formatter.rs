use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::solver::tree::{NodeId, SearchTree};

/// Every state on the path from the root to a goal node, with its costs.
pub struct SolutionFormatter<'a> {
    tree: &'a SearchTree,
    goal: NodeId,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(tree: &'a SearchTree, goal: NodeId, format: Format) -> Self {
        Self { tree, goal, format }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let path = self.tree.path_to(self.goal);
        let last = path.len() - 1;

        for (step, &id) in path.iter().enumerate() {
            let node = &self.tree[id];
            if step > 0 {
                writeln!(f, "   ↓")?;
            }

            if step == 0 {
                write!(f, "Initial State (Step 0)")?;
            } else if step == last {
                write!(f, "Goal State (Step {})", step)?;
            } else {
                write!(f, "Step {}", step)?;
            }
            writeln!(f, ": g={}, h={}, f={}", node.g(), node.h(), node.f())?;

            write!(f, "{}", node.state().format(self.format))?;
            // grid already ends with a border line
            if self.format == Format::Compact {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

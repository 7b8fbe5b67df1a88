use markup5ever::{namespace_url, ns};
use markup5ever_rcdom::{Handle, NodeData};

use crate::pluck::{PluckPath, PluckStep};

impl PluckStep {
    /// Checks if the given node matches this step.
    pub(crate) fn matches(&self, node: &Handle) -> bool {
        match self {
            PluckStep::All => true,
            PluckStep::Tag(tag) => match &node.data {
                NodeData::Element { name, .. } => name.ns == ns!(html) && name.local == *tag,
                _ => false,
            },
        }
    }
}

impl PluckPath {
    /// Applies this path to the roots of a parsed forest and returns the
    /// selected nodes in document order.
    ///
    /// The first step selects among the roots themselves; every following
    /// step selects among the children of the previous selection.
    pub fn apply(&self, forest: &[Handle]) -> Vec<Handle> {
        let mut selection: Option<Vec<Handle>> = None;
        for step in self.steps() {
            let candidates: Vec<Handle> = match &selection {
                None => forest.to_vec(),
                Some(nodes) => nodes
                    .iter()
                    .flat_map(|node| node.children.borrow().clone())
                    .collect(),
            };
            selection = Some(
                candidates
                    .into_iter()
                    .filter(|node| step.matches(node))
                    .collect(),
            );
        }
        selection.unwrap_or_else(|| forest.to_vec())
    }
}

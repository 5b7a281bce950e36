// Render-scoped annotations over caller-owned nodes

use super::Node;
use std::sync::Arc;

/// A node tagged with its position in the sibling group currently shown.
/// `list_index` is only meaningful for that group.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub node: Node,
    pub list_index: usize,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&super::Value> {
        self.node.get(column)
    }

    pub fn children(&self) -> Option<&Arc<[Node]>> {
        self.node.children()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }
}

/// Snapshot of a row the user descended into, tagged with its depth.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub row: Row,
    pub hist_index: usize,
}

impl HistoryEntry {
    pub fn get(&self, column: &str) -> Option<&super::Value> {
        self.row.get(column)
    }

    pub fn children(&self) -> Option<&Arc<[Node]>> {
        self.row.children()
    }
}

/// Fresh `0..n` annotation of a sibling group.
pub fn annotate(nodes: &[Node]) -> Vec<Row> {
    nodes
        .iter()
        .enumerate()
        .map(|(list_index, node)| Row {
            node: node.clone(),
            list_index,
        })
        .collect()
}

// Navigation state - breadcrumb history and the sibling group being browsed
use crate::model::{annotate, HistoryEntry, Node, Row};
use std::sync::Arc;

pub struct NavigationState {
    root: Arc<[Node]>,
    history: Vec<HistoryEntry>,
    current_level: Vec<Row>,
}

impl NavigationState {
    pub fn new(root: Arc<[Node]>) -> Self {
        let current_level = annotate(&root);
        Self {
            root,
            history: Vec::new(),
            current_level,
        }
    }

    pub fn root(&self) -> &Arc<[Node]> {
        &self.root
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_level(&self) -> &[Row] {
        &self.current_level
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Push the row at `list_index` onto the history and show its children.
    /// Leaves and out-of-range indices are ignored; returns whether we moved.
    pub fn descend(&mut self, list_index: usize) -> bool {
        let Some(target) = self.current_level.get(list_index) else {
            return false;
        };
        let Some(children) = target.children().cloned() else {
            return false;
        };

        let entry = HistoryEntry {
            row: target.clone(),
            hist_index: self.history.len(),
        };
        self.history.push(entry);
        self.current_level = annotate(&children);
        true
    }

    /// Truncate the history to `depth` entries and show the level below the
    /// new last entry (or the root). Depths past the end are ignored.
    pub fn ascend(&mut self, depth: usize) -> bool {
        if depth > self.history.len() {
            return false;
        }
        self.history.truncate(depth);
        self.current_level = match self.history.last().and_then(|e| e.children()) {
            Some(children) => annotate(children),
            None => annotate(&self.root),
        };
        true
    }

    pub fn reset(&mut self, root: Arc<[Node]>) {
        self.current_level = annotate(&root);
        self.root = root;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn sample() -> Arc<[Node]> {
        vec![
            Node::new()
                .with("name", "A")
                .with_children(vec![Node::new().with("name", "A1"), Node::new().with("name", "A2")]),
            Node::new().with("name", "B"),
        ]
        .into()
    }

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|r| r.get("name").map(Value::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_descend_into_internal_node() {
        let mut nav = NavigationState::new(sample());
        assert!(nav.descend(0));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.history()[0].hist_index, 0);
        assert_eq!(nav.history()[0].get("name"), Some(&Value::from("A")));
        assert_eq!(names(nav.current_level()), vec!["A1", "A2"]);
        assert_eq!(nav.current_level()[1].list_index, 1);
    }

    #[test]
    fn test_descend_into_leaf_is_noop() {
        let mut nav = NavigationState::new(sample());
        assert!(!nav.descend(1));
        assert!(!nav.descend(7));
        assert_eq!(nav.depth(), 0);
        assert_eq!(names(nav.current_level()), vec!["A", "B"]);
    }

    #[test]
    fn test_ascend_to_root() {
        let mut nav = NavigationState::new(sample());
        nav.descend(0);
        assert!(nav.ascend(0));
        assert!(nav.history().is_empty());
        assert_eq!(names(nav.current_level()), vec!["A", "B"]);
        assert_eq!(nav.current_level()[1].list_index, 1);
    }

    #[test]
    fn test_ascend_past_depth_is_noop() {
        let mut nav = NavigationState::new(sample());
        nav.descend(0);
        assert!(!nav.ascend(5));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_ascend_to_current_depth_reannotates() {
        let deep: Arc<[Node]> = vec![Node::new().with("name", "r").with_children(vec![
            Node::new().with("name", "m").with_children(vec![Node::new().with("name", "leaf")]),
        ])]
        .into();
        let mut nav = NavigationState::new(deep);
        nav.descend(0);
        nav.descend(0);
        assert_eq!(nav.depth(), 2);
        assert!(nav.ascend(1));
        assert_eq!(nav.depth(), 1);
        assert_eq!(names(nav.current_level()), vec!["m"]);
        assert!(nav.ascend(1));
        assert_eq!(names(nav.current_level()), vec!["m"]);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut nav = NavigationState::new(sample());
        nav.descend(0);
        nav.reset(vec![Node::new().with("name", "Z")].into());
        assert_eq!(nav.depth(), 0);
        assert_eq!(names(nav.current_level()), vec!["Z"]);
    }
}

//! Property-based invariant tests for the tree list state.
//!
//! Verifies, after any sequence of descend / ascend / sort / filter:
//! 1. History entries are numbered by depth and each one is a child of the previous.
//! 2. The current level is the annotated children of the last breadcrumb (or the root).
//! 3. The entry stream is history, then the filter bar, then the displayed rows.
//! 4. Displayed rows come from the current level and are never emptied by filters.
//! 5. Displayed rows are ordered by the sort keys, last toggled key first.
//! Plus: descend then ascend restores the view, and toggling a sort twice reverses it.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use treelist::model::annotate;
use treelist::state::SortOrder;
use treelist::{FlatEntry, LevelChangePolicy, Node, TreeListState};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_leaf() -> impl Strategy<Value = Node> {
    ("[a-c]{1,3}", 0i64..50).prop_map(|(name, key)| Node::new().with("name", name).with("key", key))
}

fn arb_node() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(4, 64, 6, |inner| {
        (arb_leaf(), prop::collection::vec(inner, 0..6))
            .prop_map(|(node, children)| node.with_children(children))
    })
}

fn arb_root() -> impl Strategy<Value = Arc<[Node]>> {
    prop::collection::vec(arb_node(), 0..8).prop_map(Arc::from)
}

#[derive(Clone, Debug)]
enum Op {
    Descend(usize),
    Ascend(usize),
    ToggleSort(&'static str),
    SetFilter(&'static str, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..8).prop_map(Op::Descend),
        2 => (0usize..6).prop_map(Op::Ascend),
        2 => prop_oneof![Just("name"), Just("key")].prop_map(Op::ToggleSort),
        2 => (prop_oneof![Just("name"), Just("key")], "[a-c0-9]{0,2}")
            .prop_map(|(column, pattern)| Op::SetFilter(column, pattern)),
    ]
}

fn apply(state: &mut TreeListState, op: &Op) {
    match op {
        Op::Descend(i) => {
            state.descend(*i).expect("descend");
        }
        Op::Ascend(d) => state.ascend(*d).expect("ascend"),
        Op::ToggleSort(column) => state.toggle_sort(column).expect("sort"),
        Op::SetFilter(column, pattern) => state.set_filter(column, pattern).expect("filter"),
    }
}

fn compare_by_sorts(state: &TreeListState, a: &Node, b: &Node) -> Ordering {
    for key in state.sorts().keys().iter().rev() {
        let (Some(x), Some(y)) = (a.get(&key.column), b.get(&key.column)) else {
            continue;
        };
        let ord = match key.order {
            SortOrder::Ascending => x.loose_cmp(y),
            SortOrder::Descending => y.loose_cmp(x),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn check_invariants(state: &TreeListState) {
    // 1. history chain
    let mut level: &[Node] = state.root();
    for (i, entry) in state.history().iter().enumerate() {
        assert_eq!(entry.hist_index, i);
        assert_eq!(&level[entry.row.list_index], &entry.row.node);
        level = &entry.children().expect("breadcrumb has children")[..];
    }

    // 2. current level
    assert_eq!(state.current_level(), annotate(level).as_slice());

    // 3. entry stream layout
    let entries = state.entries();
    assert_eq!(entries.len(), state.depth() + 1 + state.displayed_rows().len());
    for (i, entry) in entries.iter().enumerate() {
        match *entry {
            FlatEntry::History { hist_index } => assert_eq!(hist_index, i),
            FlatEntry::FilterBar { .. } => assert_eq!(i, state.depth()),
            FlatEntry::Data { position, list_index } => {
                assert_eq!(position, i - state.depth() - 1);
                assert_eq!(state.displayed_rows()[position].list_index, list_index);
            }
        }
    }

    // 4. displayed rows are a non-empty subset when the level has rows
    let current = state.current_level();
    let mut seen = vec![false; current.len()];
    for row in state.displayed_rows() {
        assert_eq!(current[row.list_index].node, row.node);
        assert!(!seen[row.list_index], "row shown twice");
        seen[row.list_index] = true;
    }
    if !current.is_empty() {
        assert!(!state.displayed_rows().is_empty());
    }

    // 5. ordering
    for pair in state.displayed_rows().windows(2) {
        assert_ne!(compare_by_sorts(state, &pair[0].node, &pair[1].node), Ordering::Greater);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn invariants_hold_after_any_operations(
        root in arb_root(),
        ops in prop::collection::vec(arb_op(), 0..24),
    ) {
        let mut state = TreeListState::new(root, true, LevelChangePolicy::Keep);
        check_invariants(&state);
        for op in &ops {
            apply(&mut state, op);
            check_invariants(&state);
        }
    }

    #[test]
    fn clear_policy_resets_specs_on_level_change(
        root in arb_root(),
        ops in prop::collection::vec(arb_op(), 0..24),
    ) {
        let mut state = TreeListState::new(root, true, LevelChangePolicy::Clear);
        for op in &ops {
            let depth = state.depth();
            apply(&mut state, op);
            check_invariants(&state);
            let level_changed = match op {
                Op::Descend(_) => state.depth() != depth,
                Op::Ascend(d) => *d <= depth,
                _ => false,
            };
            if level_changed {
                prop_assert!(state.sorts().is_empty());
                prop_assert!(state.filters().is_empty());
            }
        }
    }

    #[test]
    fn descend_then_ascend_restores_view(
        root in arb_root(),
        setup in prop::collection::vec(arb_op(), 0..12),
        target in 0usize..8,
    ) {
        let mut state = TreeListState::new(root, true, LevelChangePolicy::Keep);
        for op in &setup {
            apply(&mut state, op);
        }
        let depth = state.depth();
        let before = state.displayed_rows().to_vec();
        let descended = state.descend(target).expect("descend");
        prop_assert_eq!(state.depth(), depth + usize::from(descended));
        state.ascend(depth).expect("ascend");
        prop_assert_eq!(state.depth(), depth);
        prop_assert_eq!(state.displayed_rows(), before.as_slice());
    }

    #[test]
    fn toggling_sort_twice_reverses_unique_keys(len in 1usize..40) {
        let root: Arc<[Node]> = (0..len)
            .map(|i| Node::new().with("key", ((i * 7919) % 10007) as i64))
            .collect::<Vec<_>>()
            .into();
        let mut state = TreeListState::new(root, true, LevelChangePolicy::Keep);

        state.toggle_sort("key").expect("sort");
        let ascending: Vec<_> = state.displayed_rows().iter().map(|r| r.list_index).collect();
        state.toggle_sort("key").expect("sort");
        let mut descending: Vec<_> = state.displayed_rows().iter().map(|r| r.list_index).collect();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
        prop_assert_eq!(state.sorts().state_of("key"), Some((SortOrder::Descending, 1)));
    }
}

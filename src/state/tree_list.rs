// Tree list state - owns navigation, sort/filter, and everything derived from them
use super::entries::{build_entries, Entry, FlatEntry};
use super::navigation::NavigationState;
use super::pipeline::derive;
use super::{FilterSpec, SortSpec};
use crate::error::Result;
use crate::message::Action;
use crate::model::{annotate, HistoryEntry, Node, Row};
use std::sync::Arc;

/// What happens to sort and filter when the browsed level changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelChangePolicy {
    #[default]
    Keep,
    Clear,
}

pub struct TreeListState {
    navigation: NavigationState,
    sorts: SortSpec,
    filters: FilterSpec,
    policy: LevelChangePolicy,
    filter_bar_present: bool,
    displayed: Vec<Row>,
    entries: Vec<FlatEntry>,
    invalidated_from: Option<usize>,
}

impl TreeListState {
    pub fn new(root: Arc<[Node]>, filter_bar_present: bool, policy: LevelChangePolicy) -> Self {
        let navigation = NavigationState::new(root);
        // Without sorts or filters the derive is a plain copy.
        let displayed = navigation.current_level().to_vec();
        let entries = build_entries(navigation.history(), &displayed, filter_bar_present);
        Self {
            navigation,
            sorts: SortSpec::new(),
            filters: FilterSpec::new(),
            policy,
            filter_bar_present,
            displayed,
            entries,
            invalidated_from: Some(0),
        }
    }

    pub fn root(&self) -> &Arc<[Node]> {
        self.navigation.root()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.navigation.history()
    }

    pub fn current_level(&self) -> &[Row] {
        self.navigation.current_level()
    }

    pub fn depth(&self) -> usize {
        self.navigation.depth()
    }

    pub fn displayed_rows(&self) -> &[Row] {
        &self.displayed
    }

    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<Entry<'_>> {
        Some(match *self.entries.get(index)? {
            FlatEntry::History { hist_index } => Entry::History(self.history().get(hist_index)?),
            FlatEntry::FilterBar { present } => Entry::FilterBar { present },
            FlatEntry::Data { position, .. } => Entry::Data(self.displayed.get(position)?),
        })
    }

    pub fn sorts(&self) -> &SortSpec {
        &self.sorts
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn policy(&self) -> LevelChangePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LevelChangePolicy) {
        self.policy = policy;
    }

    pub fn filter_bar_present(&self) -> bool {
        self.filter_bar_present
    }

    pub fn set_filter_bar_present(&mut self, present: bool) {
        if self.filter_bar_present != present {
            self.filter_bar_present = present;
            self.rebuild_entries(self.depth());
        }
    }

    /// Lowest flat index whose size may have changed since the last call.
    pub fn take_invalidation(&mut self) -> Option<usize> {
        self.invalidated_from.take()
    }

    /// Reset only when `root` is a different dataset than the current one.
    pub fn set_data(&mut self, root: Arc<[Node]>) -> bool {
        if Arc::ptr_eq(self.root(), &root) {
            return false;
        }
        self.reset(root);
        true
    }

    pub fn reset(&mut self, root: Arc<[Node]>) {
        tracing::info!(roots = root.len(), "resetting tree list");
        self.navigation.reset(root);
        self.sorts.clear();
        self.filters.clear();
        self.displayed = self.navigation.current_level().to_vec();
        self.rebuild_entries(0);
    }

    /// Descend into the row at `list_index`. Leaves and bad indices are a no-op.
    pub fn descend(&mut self, list_index: usize) -> Result<bool> {
        let depth = self.depth();
        let Some(target) = self.current_level().get(list_index) else {
            tracing::debug!(list_index, "descend ignored: no such row");
            return Ok(false);
        };
        let Some(children) = target.children() else {
            tracing::debug!(list_index, "descend ignored: leaf row");
            return Ok(false);
        };
        let (sorts, filters) = self.specs_after_level_change();
        let displayed = derive(&annotate(children), &sorts, &filters)?;

        if !self.navigation.descend(list_index) {
            return Ok(false);
        }
        self.apply_level_change_policy();
        self.displayed = displayed;
        self.rebuild_entries(depth);
        tracing::debug!(depth = self.depth(), rows = self.displayed.len(), "descended");
        Ok(true)
    }

    /// Jump back so the history has `depth` entries. Depths past the end are a no-op.
    pub fn ascend(&mut self, depth: usize) -> Result<()> {
        if depth > self.depth() {
            tracing::debug!(depth, current = self.depth(), "ascend ignored: beyond history");
            return Ok(());
        }
        let level = match depth {
            0 => annotate(self.root()),
            d => match self.history()[d - 1].children() {
                Some(children) => annotate(children),
                None => Vec::new(),
            },
        };
        let (sorts, filters) = self.specs_after_level_change();
        let displayed = derive(&level, &sorts, &filters)?;

        self.navigation.ascend(depth);
        self.apply_level_change_policy();
        self.displayed = displayed;
        self.rebuild_entries(depth);
        tracing::debug!(depth, rows = self.displayed.len(), "ascended");
        Ok(())
    }

    pub fn toggle_sort(&mut self, column: &str) -> Result<()> {
        let mut sorts = self.sorts.clone();
        sorts.toggle(column);
        self.displayed = derive(self.current_level(), &sorts, &self.filters)?;
        self.sorts = sorts;
        self.rebuild_entries(self.depth() + 1);
        Ok(())
    }

    pub fn set_filter(&mut self, column: &str, pattern: &str) -> Result<()> {
        let mut filters = self.filters.clone();
        filters.set(column, pattern);
        self.displayed = derive(self.current_level(), &self.sorts, &filters)?;
        self.filters = filters;
        self.rebuild_entries(self.depth() + 1);
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Descend(list_index) => self.descend(list_index).map(|_| ()),
            Action::Ascend(depth) => self.ascend(depth),
            Action::ToggleSort(column) => self.toggle_sort(&column),
            Action::SetFilter { column, pattern } => self.set_filter(&column, &pattern),
        }
    }

    fn specs_after_level_change(&self) -> (SortSpec, FilterSpec) {
        match self.policy {
            LevelChangePolicy::Keep => (self.sorts.clone(), self.filters.clone()),
            LevelChangePolicy::Clear => (SortSpec::new(), FilterSpec::new()),
        }
    }

    fn apply_level_change_policy(&mut self) {
        if self.policy == LevelChangePolicy::Clear {
            self.sorts.clear();
            self.filters.clear();
        }
    }

    fn rebuild_entries(&mut self, changed_from: usize) {
        self.entries = build_entries(self.history(), &self.displayed, self.filter_bar_present);
        self.invalidated_from = Some(match self.invalidated_from {
            Some(prev) => prev.min(changed_from),
            None => changed_from,
        });
    }
}

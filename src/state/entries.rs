// Flat entry stream - the single index space the list scrolls over
use crate::model::{HistoryEntry, Row};

/// Kind of one logical row, decided once when the stream is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlatEntry {
    /// Breadcrumb at this depth.
    History { hist_index: usize },
    /// The filter bar slot. `present` is false when no column is sortable
    /// or filterable; the slot still keeps a thin height.
    FilterBar { present: bool },
    /// A displayed row: `position` in the displayed rows, `list_index` is
    /// the descent target in the current level.
    Data { position: usize, list_index: usize },
}

/// Resolved view of a [`FlatEntry`] against the state it was built from.
#[derive(Clone, Copy, Debug)]
pub enum Entry<'a> {
    History(&'a HistoryEntry),
    FilterBar { present: bool },
    Data(&'a Row),
}

pub fn build_entries(
    history: &[HistoryEntry],
    displayed: &[Row],
    filter_bar_present: bool,
) -> Vec<FlatEntry> {
    let mut entries = Vec::with_capacity(history.len() + 1 + displayed.len());
    entries.extend(history.iter().map(|h| FlatEntry::History {
        hist_index: h.hist_index,
    }));
    entries.push(FlatEntry::FilterBar {
        present: filter_bar_present,
    });
    entries.extend(
        displayed
            .iter()
            .enumerate()
            .map(|(position, row)| FlatEntry::Data {
                position,
                list_index: row.list_index,
            }),
    );
    entries
}

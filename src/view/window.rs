// Row measurement and windowing over the flat entry stream

use super::fenwick::FenwickTree;
use crate::state::FlatEntry;
use crate::style;
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightMode {
    /// Every data row is `row_height` tall.
    Fixed,
    /// Data rows start at `row_height` and take their measured height once rendered.
    Measured,
}

/// Reserved height per entry kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSizing {
    pub mode: HeightMode,
    pub row_height: f32,
    pub history_row_height: f32,
    pub filter_row_height: f32,
    pub collapsed_filter_height: f32,
}

impl Default for RowSizing {
    fn default() -> Self {
        Self {
            mode: HeightMode::Measured,
            row_height: style::ROW_HEIGHT,
            history_row_height: style::HISTORY_ROW_HEIGHT,
            filter_row_height: style::FILTER_ROW_HEIGHT,
            collapsed_filter_height: style::COLLAPSED_FILTER_HEIGHT,
        }
    }
}

impl RowSizing {
    /// Height reserved before any measurement.
    pub fn initial_height(&self, entry: &FlatEntry) -> f32 {
        match entry {
            FlatEntry::History { .. } => self.history_row_height,
            FlatEntry::FilterBar { present: true } => self.filter_row_height,
            FlatEntry::FilterBar { present: false } => self.collapsed_filter_height,
            FlatEntry::Data { .. } => self.row_height,
        }
    }

    /// Only data rows in measured mode take their rendered height.
    pub fn is_measured(&self, entry: &FlatEntry) -> bool {
        self.mode == HeightMode::Measured && matches!(entry, FlatEntry::Data { .. })
    }

    /// Height of the sticky overlay: breadcrumbs plus the filter bar slot.
    pub fn overlay_height(&self, depth: usize, filter_bar_present: bool) -> f32 {
        let filter = if filter_bar_present {
            self.filter_row_height
        } else {
            self.collapsed_filter_height
        };
        depth as f32 * self.history_row_height + filter
    }
}

/// Per-index heights and offsets for the whole entry stream.
#[derive(Debug, Clone, Default)]
pub struct RowMetrics {
    heights: FenwickTree,
    measured: Vec<bool>,
}

impl RowMetrics {
    pub fn new(entries: &[FlatEntry], sizing: &RowSizing) -> Self {
        let mut metrics = Self::default();
        metrics.reset_after(0, entries, sizing);
        metrics
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Forget sizes from `index` on and resize to the current stream.
    /// Heights before `index` are kept as they were.
    pub fn reset_after(&mut self, index: usize, entries: &[FlatEntry], sizing: &RowSizing) {
        let keep = index.min(self.len()).min(entries.len());
        let mut values: Vec<f32> = self.heights.values()[..keep].to_vec();
        values.extend(entries[keep..].iter().map(|e| sizing.initial_height(e)));
        self.measured.truncate(keep);
        self.measured.resize(entries.len(), false);
        self.heights.rebuild(&values);
    }

    /// Record a rendered height. Returns true when the stored height changed.
    pub fn record(&mut self, index: usize, height: f32) -> bool {
        if index >= self.len() || !height.is_finite() || height < 0.0 {
            return false;
        }
        self.measured[index] = true;
        if (self.heights.get(index) - height).abs() < 0.5 {
            return false;
        }
        self.heights.set(index, height);
        true
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn height_of(&self, index: usize) -> f32 {
        self.heights.get(index)
    }

    pub fn offset_of(&self, index: usize) -> f32 {
        self.heights.offset(index)
    }

    pub fn total_height(&self) -> f32 {
        self.heights.total()
    }

    pub fn index_at(&self, y: f32) -> Option<usize> {
        self.heights.find(y.max(0.0))
    }

    /// Indices intersecting `[top, bottom)` widened by `overscan` rows on each side.
    pub fn render_range(&self, top: f32, bottom: f32, overscan: usize) -> Range<usize> {
        let (Some(first), Some(last)) = (self.index_at(top), self.index_at(bottom)) else {
            return 0..0;
        };
        let start = first.saturating_sub(overscan);
        let end = (last + 1 + overscan).min(self.len());
        start..end
    }
}

// The list view: header, windowed body, sticky overlay

use super::columns::{column_strip, filter_bar_present, ColumnRow, ColumnSpec, HistoryRowRenderer, RowRenderer};
use super::overlay::{filter_input_id, FilterInputs, Overlay};
use super::window::{HeightMode, RowMetrics, RowSizing};
use crate::error::TreeListError;
use crate::message::{Action, Dispatcher, Select};
use crate::model::Node;
use crate::state::{Entry, TreeListState};
use crate::style;
use eframe::egui;
use std::sync::Arc;

/// What happened during one [`TreeListView::show`] call.
#[derive(Debug)]
pub struct TreeListResponse {
    /// Actions applied to the state, in order.
    pub actions: Vec<Action>,
    /// First failed action, if any. Later actions in the frame are still tried.
    pub error: Option<TreeListError>,
    /// Rows rendered in the body this frame.
    pub rendered_rows: usize,
    /// Visible part of the body on screen. The overlay is anchored at its top.
    pub viewport: egui::Rect,
}

impl Default for TreeListResponse {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            error: None,
            rendered_rows: 0,
            viewport: egui::Rect::NOTHING,
        }
    }
}

impl TreeListResponse {
    pub fn changed(&self) -> bool {
        !self.actions.is_empty()
    }
}

pub struct TreeListView {
    id_salt: egui::Id,
    columns: Arc<[ColumnSpec]>,
    sizing: RowSizing,
    overscan: usize,
    row_renderer: Box<dyn RowRenderer>,
    history_renderer: Box<dyn HistoryRowRenderer>,
    metrics: RowMetrics,
    inputs: FilterInputs,
    seen_root: Option<Arc<[Node]>>,
    pending_scroll: Option<f32>,
}

impl TreeListView {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        let columns: Arc<[ColumnSpec]> = columns.into();
        let sizing = RowSizing::default();
        let default_row = ColumnRow::new(columns.clone(), sizing.mode == HeightMode::Measured);
        Self {
            id_salt: egui::Id::new("tree_list"),
            columns,
            sizing,
            overscan: style::DEFAULT_OVERSCAN,
            row_renderer: Box::new(default_row.clone()),
            history_renderer: Box::new(default_row),
            metrics: RowMetrics::default(),
            inputs: FilterInputs::default(),
            seen_root: None,
            pending_scroll: None,
        }
    }

    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = egui::Id::new(salt);
        self
    }

    /// Replaces the sizing. The default renderers follow its height mode.
    pub fn sizing(mut self, sizing: RowSizing) -> Self {
        self.sizing = sizing;
        let default_row = ColumnRow::new(self.columns.clone(), sizing.mode == HeightMode::Measured);
        self.row_renderer = Box::new(default_row.clone());
        self.history_renderer = Box::new(default_row);
        self
    }

    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn row_renderer(mut self, renderer: impl RowRenderer + 'static) -> Self {
        self.row_renderer = Box::new(renderer);
        self
    }

    pub fn history_renderer(mut self, renderer: impl HistoryRowRenderer + 'static) -> Self {
        self.history_renderer = Box::new(renderer);
        self
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn filter_bar_present(&self) -> bool {
        filter_bar_present(&self.columns)
    }

    pub fn metrics(&self) -> &RowMetrics {
        &self.metrics
    }

    /// Id of the filter text box for `column`.
    pub fn filter_input_id(&self, column: &str) -> egui::Id {
        filter_input_id(self.id_salt, column)
    }

    /// Scroll the body so content offset `y` is at the top on the next frame.
    pub fn scroll_to_offset(&mut self, y: f32) {
        self.pending_scroll = Some(y.max(0.0));
    }

    /// Scroll so flat entry `index` is at the top on the next frame.
    pub fn scroll_to_entry(&mut self, index: usize) {
        self.scroll_to_offset(self.metrics.offset_of(index));
    }

    /// Show the list in exactly `size`.
    pub fn show_sized(&mut self, ui: &mut egui::Ui, size: egui::Vec2, state: &mut TreeListState) -> TreeListResponse {
        ui.allocate_ui(size, |ui| {
            ui.set_min_size(size);
            self.show(ui, state)
        })
        .inner
    }

    /// Show the list in the remaining space of `ui`, then apply whatever the
    /// rows, breadcrumbs and filter bar requested.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut TreeListState) -> TreeListResponse {
        self.sync(state);

        let dispatcher = Dispatcher::new();
        let mut response = TreeListResponse::default();

        let (header_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), style::HEADER_HEIGHT),
            egui::Sense::hover(),
        );
        let (viewport, rendered_rows) = self.body(ui, state, &dispatcher);
        response.rendered_rows = rendered_rows;
        response.viewport = viewport;
        // Header columns share the body's width so they line up with the rows.
        self.header(
            ui,
            egui::Rect::from_min_size(header_rect.min, egui::vec2(viewport.width(), header_rect.height())),
        );

        Overlay {
            id: self.id_salt,
            columns: &self.columns,
            sizing: &self.sizing,
            history_renderer: self.history_renderer.as_ref(),
            dispatcher: &dispatcher,
        }
        .show(ui, viewport, state, &mut self.inputs);

        for action in dispatcher.drain() {
            tracing::debug!(?action, "applying list action");
            if let Err(err) = state.apply(action.clone()) {
                tracing::warn!(error = %err, ?action, "list action failed");
                if response.error.is_none() {
                    response.error = Some(err);
                }
                continue;
            }
            response.actions.push(action);
        }
        if response.changed() {
            ui.ctx().request_repaint();
        }
        response
    }

    /// Bring the height cache in line with the state before laying anything out.
    fn sync(&mut self, state: &mut TreeListState) {
        state.set_filter_bar_present(self.filter_bar_present());

        let new_root = match &self.seen_root {
            Some(seen) => !Arc::ptr_eq(seen, state.root()),
            None => true,
        };
        if new_root {
            self.inputs.clear();
            self.seen_root = Some(state.root().clone());
        }

        let len = state.entries().len();
        let from = match state.take_invalidation() {
            Some(from) => Some(from),
            None if self.metrics.len() != len => Some(self.metrics.len().min(len)),
            None => None,
        };
        if let Some(from) = from {
            self.metrics.reset_after(from, state.entries(), &self.sizing);
        }
    }

    fn header(&self, ui: &mut egui::Ui, rect: egui::Rect) {
        ui.painter()
            .rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
            column_strip(ui, &self.columns, |ui, column| {
                ui.horizontal_centered(|ui| column.renderer.header(ui, &column.label));
            });
        });
    }

    /// Windowed body. Returns the visible content rect and how many rows were drawn.
    fn body(&mut self, ui: &mut egui::Ui, state: &TreeListState, dispatcher: &Dispatcher) -> (egui::Rect, usize) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt(self.id_salt)
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_scroll.take() {
            area = area.vertical_scroll_offset(offset);
        }
        let output = area.show_viewport(ui, |ui, viewport| {
            ui.set_height(self.metrics.total_height());
            let origin = ui.min_rect().min;
            let width = ui.available_width();

            let range = self
                .metrics
                .render_range(viewport.min.y, viewport.max.y, self.overscan);
            let mut rendered = 0;
            let mut resized = false;

            for index in range {
                // History and filter bar slots stay blank; the overlay draws them.
                let Some(Entry::Data(row)) = state.entry(index) else {
                    continue;
                };
                let measured = self.sizing.mode == HeightMode::Measured;
                let top = origin.y + self.metrics.offset_of(index);
                let height = if measured {
                    f32::INFINITY
                } else {
                    self.metrics.height_of(index)
                };
                let slot = egui::Rect::from_min_size(egui::pos2(origin.x, top), egui::vec2(width, height));

                let inner = ui.scope_builder(egui::UiBuilder::new().max_rect(slot), |ui| {
                    if !measured {
                        ui.set_clip_rect(slot.intersect(ui.clip_rect()));
                    }
                    self.row_renderer
                        .render(ui, row, Select::new(dispatcher, row.list_index));
                });
                rendered += 1;

                if measured && self.metrics.record(index, inner.response.rect.height()) {
                    resized = true;
                }
            }

            if resized {
                // Offsets below a re-measured row moved; lay out again next frame.
                ui.ctx().request_repaint();
            }
            rendered
        });
        (output.inner_rect, output.inner)
    }
}

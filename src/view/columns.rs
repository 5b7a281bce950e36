// Column specs and the renderers the list hands rows to

use crate::message::{Pop, Select};
use crate::model::{HistoryEntry, Row, Value};
use crate::style;
use eframe::egui;
use egui_extras::{Size, StripBuilder};
use std::sync::Arc;

/// Draws one column's value. Every method has a plain-text default.
pub trait CellRenderer: Send + Sync {
    fn cell(&self, ui: &mut egui::Ui, value: Option<&Value>) {
        style::truncated_label(ui, value.map(Value::to_string).unwrap_or_default());
    }

    fn history_cell(&self, ui: &mut egui::Ui, value: Option<&Value>) {
        let text = value.map(Value::to_string).unwrap_or_default();
        style::truncated_label(ui, egui::RichText::new(text).color(style::HISTORY_ACCENT));
    }

    fn header(&self, ui: &mut egui::Ui, label: &str) {
        style::truncated_label(ui, egui::RichText::new(label).strong());
    }
}

/// Single-line text, truncated with an ellipsis.
pub struct PlainCell;

impl CellRenderer for PlainCell {}

/// Text that wraps inside the column, so rows grow with their content.
pub struct WrappedCell;

impl CellRenderer for WrappedCell {
    fn cell(&self, ui: &mut egui::Ui, value: Option<&Value>) {
        style::wrapped_label(ui, value.map(Value::to_string).unwrap_or_default());
    }
}

#[derive(Clone)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    /// Relative weight; columns share the row width in proportion.
    pub width: f32,
    pub sortable: bool,
    pub filterable: bool,
    pub renderer: Arc<dyn CellRenderer>,
}

impl ColumnSpec {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width: 1.0,
            sortable: false,
            filterable: false,
            renderer: Arc::new(PlainCell),
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn renderer(mut self, renderer: impl CellRenderer + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }
}

/// The filter bar only has content if some column can be sorted or filtered.
pub fn filter_bar_present(columns: &[ColumnSpec]) -> bool {
    columns.iter().any(|c| c.sortable || c.filterable)
}

/// Pixel widths for `total` width, proportional to the column weights.
pub fn column_widths(columns: &[ColumnSpec], total: f32) -> Vec<f32> {
    let weight: f32 = columns.iter().map(|c| c.width.max(0.0)).sum();
    if weight <= 0.0 {
        let even = total / columns.len().max(1) as f32;
        return vec![even; columns.len()];
    }
    columns
        .iter()
        .map(|c| total * c.width.max(0.0) / weight)
        .collect()
}

/// Column widths for the space left in `ui`, after the spacing between cells.
/// Every column layout (header, strips, measured rows) goes through here so
/// cells line up.
pub fn cell_widths(ui: &egui::Ui, columns: &[ColumnSpec]) -> Vec<f32> {
    let spacing = ui.spacing().item_spacing.x;
    let available = ui.available_width() - spacing * columns.len().saturating_sub(1) as f32;
    column_widths(columns, available.max(0.0))
}

/// Lay columns out side by side in a fixed-height strip.
pub fn column_strip(
    ui: &mut egui::Ui,
    columns: &[ColumnSpec],
    mut cell: impl FnMut(&mut egui::Ui, &ColumnSpec),
) {
    let widths = cell_widths(ui, columns);
    let mut builder = StripBuilder::new(ui)
        .clip(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for width in &widths {
        builder = builder.size(Size::exact(*width));
    }
    builder.horizontal(|mut strip| {
        for column in columns {
            strip.cell(|ui| {
                ui.add_space(style::CELL_PADDING);
                cell(ui, column);
            });
        }
    });
}

/// Renders a displayed data row. `select` descends into the row.
pub trait RowRenderer {
    fn render(&self, ui: &mut egui::Ui, row: &Row, select: Select<'_>) -> egui::Response;
}

/// Renders a breadcrumb row. `pop` jumps back to that breadcrumb's level.
pub trait HistoryRowRenderer {
    fn render(&self, ui: &mut egui::Ui, entry: &HistoryEntry, pop: Pop<'_>) -> egui::Response;
}

/// Default renderer: one cell per column spec, the whole row clickable.
#[derive(Clone)]
pub struct ColumnRow {
    columns: Arc<[ColumnSpec]>,
    measured: bool,
}

impl ColumnRow {
    pub fn new(columns: Arc<[ColumnSpec]>, measured: bool) -> Self {
        Self { columns, measured }
    }

    fn clickable(
        ui: &mut egui::Ui,
        id: egui::Id,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) -> egui::Response {
        let background = ui.painter().add(egui::Shape::Noop);
        let inner = ui.scope(add_contents);
        let response = ui.interact(inner.response.rect, id, egui::Sense::click());
        if response.hovered() {
            let fill = ui.visuals().widgets.hovered.weak_bg_fill;
            ui.painter()
                .set(background, egui::Shape::rect_filled(response.rect, 2.0, fill));
        }
        response
    }

    /// Measured rows let each cell grow downwards instead of clipping it.
    fn measured_cells(&self, ui: &mut egui::Ui, mut cell: impl FnMut(&mut egui::Ui, &ColumnSpec)) {
        let widths = cell_widths(ui, &self.columns);
        ui.horizontal_top(|ui| {
            for (column, width) in self.columns.iter().zip(widths) {
                ui.allocate_ui_with_layout(
                    egui::vec2(width, 0.0),
                    egui::Layout::top_down(egui::Align::Min),
                    |ui| {
                        ui.set_width(width);
                        ui.add_space(style::CELL_PADDING);
                        ui.horizontal_top(|ui| {
                            ui.add_space(style::CELL_PADDING);
                            ui.set_max_width(width - 2.0 * style::CELL_PADDING);
                            cell(ui, column);
                        });
                        ui.add_space(style::CELL_PADDING);
                    },
                );
            }
        });
    }
}

impl RowRenderer for ColumnRow {
    fn render(&self, ui: &mut egui::Ui, row: &Row, select: Select<'_>) -> egui::Response {
        let id = ui.make_persistent_id(("data_row", row.list_index));
        let response = Self::clickable(ui, id, |ui| {
            if self.measured {
                self.measured_cells(ui, |ui, column| {
                    column.renderer.cell(ui, row.get(&column.key));
                });
            } else {
                column_strip(ui, &self.columns, |ui, column| {
                    column.renderer.cell(ui, row.get(&column.key));
                });
            }
        });
        if response.clicked() {
            select.select();
        }
        if row.is_leaf() {
            response
        } else {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        }
    }
}

impl HistoryRowRenderer for ColumnRow {
    fn render(&self, ui: &mut egui::Ui, entry: &HistoryEntry, pop: Pop<'_>) -> egui::Response {
        let id = ui.make_persistent_id(("history_row", entry.hist_index));
        let response = Self::clickable(ui, id, |ui| {
            column_strip(ui, &self.columns, |ui, column| {
                column.renderer.history_cell(ui, entry.get(&column.key));
            });
        });
        if response.clicked() {
            pop.pop();
        }
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

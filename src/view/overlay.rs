// Sticky overlay: breadcrumb rows and the filter bar, drawn over the top
// of the scroll area so they stay put while data rows scroll underneath.

use super::columns::{column_strip, ColumnSpec, HistoryRowRenderer};
use super::window::RowSizing;
use crate::message::{Action, Dispatcher, Pop};
use crate::state::{SortSpec, TreeListState};
use crate::style;
use eframe::egui;
use std::collections::BTreeMap;

/// Text typed into each filter box, applied only on submit.
#[derive(Default, Debug, Clone)]
pub struct FilterInputs {
    buffers: BTreeMap<String, String>,
}

impl FilterInputs {
    pub fn buffer_mut(&mut self, column: &str) -> &mut String {
        self.buffers.entry(column.to_string()).or_default()
    }

    pub fn get(&self, column: &str) -> &str {
        self.buffers.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.buffers.clear();
    }
}

/// Id of the filter text box for `column` in the list identified by `list`.
pub fn filter_input_id(list: egui::Id, column: &str) -> egui::Id {
    list.with(("filter_input", column))
}

pub struct Overlay<'a> {
    pub id: egui::Id,
    pub columns: &'a [ColumnSpec],
    pub sizing: &'a RowSizing,
    pub history_renderer: &'a dyn HistoryRowRenderer,
    pub dispatcher: &'a Dispatcher,
}

impl Overlay<'_> {
    /// Paint the overlay anchored at the top of `viewport`.
    pub fn show(&self, ui: &mut egui::Ui, viewport: egui::Rect, state: &TreeListState, inputs: &mut FilterInputs) {
        let height = self
            .sizing
            .overlay_height(state.depth(), state.filter_bar_present());
        let area = egui::Rect::from_min_size(viewport.min, egui::vec2(viewport.width(), height))
            .intersect(viewport);
        if area.height() <= 0.0 {
            return;
        }

        ui.scope_builder(egui::UiBuilder::new().max_rect(area), |ui| {
            ui.set_clip_rect(area);
            // Registered before the controls so they stay on top of it, and
            // after the rows so rows scrolled underneath never see the pointer.
            ui.interact(area, self.id.with("overlay"), egui::Sense::click());
            ui.painter()
                .rect_filled(area, 0.0, ui.visuals().panel_fill);

            for (index, entry) in state.history().iter().enumerate() {
                let rect = self.slot(area, index as f32 * self.sizing.history_row_height, self.sizing.history_row_height);
                ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                    ui.set_min_height(rect.height());
                    self.history_renderer
                        .render(ui, entry, Pop::new(self.dispatcher, entry.hist_index));
                });
            }

            let top = state.depth() as f32 * self.sizing.history_row_height;
            if state.filter_bar_present() {
                let rect = self.slot(area, top, self.sizing.filter_row_height);
                ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                    self.filter_bar(ui, rect, state.sorts(), inputs);
                });
            } else {
                let rect = self.slot(area, top, self.sizing.collapsed_filter_height);
                ui.painter()
                    .rect_filled(rect, 0.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
            }
        });
    }

    fn slot(&self, area: egui::Rect, top: f32, height: f32) -> egui::Rect {
        egui::Rect::from_min_size(area.min + egui::vec2(0.0, top), egui::vec2(area.width(), height))
    }

    fn filter_bar(&self, ui: &mut egui::Ui, rect: egui::Rect, sorts: &SortSpec, inputs: &mut FilterInputs) {
        ui.painter().rect_filled(rect, 0.0, ui.visuals().faint_bg_color);
        column_strip(ui, self.columns, |ui, column| {
            let cell = ui.max_rect();
            let mut right = cell.right() - style::CELL_PADDING;
            if column.sortable {
                self.sort_control(ui, control_rect(cell, right), column, sorts);
                right -= style::FILTER_BUTTON_WIDTH;
            }
            if column.filterable {
                let button = control_rect(cell, right);
                right -= style::FILTER_BUTTON_WIDTH + style::CELL_PADDING;
                let edit = egui::Rect::from_x_y_ranges(
                    (cell.left() + style::CELL_PADDING)..=right.max(cell.left() + style::CELL_PADDING),
                    button.y_range(),
                );
                self.filter_control(ui, edit, button, column, inputs);
            }
        });
    }

    fn filter_control(
        &self,
        ui: &mut egui::Ui,
        edit: egui::Rect,
        button: egui::Rect,
        column: &ColumnSpec,
        inputs: &mut FilterInputs,
    ) {
        let buffer = inputs.buffer_mut(&column.key);
        let response = ui.put(
            edit,
            egui::TextEdit::singleline(&mut *buffer)
                .id(filter_input_id(self.id, &column.key))
                .hint_text(format!("Filter {}", column.label)),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .put(button, egui::Button::new("🔍").small())
            .on_hover_text("Apply filter")
            .clicked();
        if submitted || clicked {
            self.dispatcher.dispatch(Action::SetFilter {
                column: column.key.clone(),
                pattern: buffer.clone(),
            });
        }
    }

    fn sort_control(&self, ui: &mut egui::Ui, rect: egui::Rect, column: &ColumnSpec, sorts: &SortSpec) {
        let (label, hover) = match sorts.state_of(&column.key) {
            Some((order, 1)) => (order.arrow().to_string(), "Primary sort key".to_string()),
            Some((order, priority)) => (
                format!("{}{}", order.arrow(), priority),
                format!("Sort key #{}", priority),
            ),
            None => ("⇅".to_string(), "Sort".to_string()),
        };
        let response = ui
            .put(rect, egui::Button::new(label).small())
            .on_hover_text(hover);
        if response.clicked() {
            self.dispatcher
                .dispatch(Action::ToggleSort(column.key.clone()));
        }
    }
}

/// Square control slot ending at `right`, centered in the cell.
pub fn control_rect(cell: egui::Rect, right: f32) -> egui::Rect {
    let size = style::FILTER_BUTTON_WIDTH;
    egui::Rect::from_center_size(
        egui::pos2(right - size / 2.0, cell.center().y),
        egui::vec2(size - 2.0, (size - 2.0).min(cell.height())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_rects_stack_from_the_right() {
        let cell = egui::Rect::from_min_size(egui::pos2(100.0, 40.0), egui::vec2(200.0, 40.0));
        let sort = control_rect(cell, 300.0 - style::CELL_PADDING);
        let filter = control_rect(cell, 300.0 - style::CELL_PADDING - style::FILTER_BUTTON_WIDTH);
        assert_eq!(sort.center().y, 60.0);
        assert!(sort.right() <= 300.0 - style::CELL_PADDING);
        assert!(filter.right() <= sort.left());
        assert!(cell.contains_rect(filter));
    }

    #[test]
    fn test_filter_input_ids_differ_per_column() {
        let list = egui::Id::new("tree_list");
        assert_ne!(filter_input_id(list, "name"), filter_input_id(list, "desc"));
        assert_eq!(filter_input_id(list, "name"), filter_input_id(list, "name"));
    }

    #[test]
    fn test_filter_inputs_buffers() {
        let mut inputs = FilterInputs::default();
        inputs.buffer_mut("name").push_str("ar");
        assert_eq!(inputs.get("name"), "ar");
        assert_eq!(inputs.get("desc"), "");
        inputs.clear();
        assert_eq!(inputs.get("name"), "");
    }
}

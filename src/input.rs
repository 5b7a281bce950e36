// Keyboard shortcuts for the tree list

use crate::app::TreeList;
use eframe::egui;

impl TreeList {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // Typing in a filter box owns the keyboard.
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::R) && i.modifiers.ctrl) || ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.request_load();
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
            self.ascend_to(0);
            return;
        }

        // Up one level
        if ctx.input(|i| {
            i.key_pressed(egui::Key::Backspace)
                || (i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft))
                || i.key_pressed(egui::Key::Minus)
        }) {
            if let Some(parent) = self.state.depth().checked_sub(1) {
                self.ascend_to(parent);
            }
        }
    }
}

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 30.0;
pub const HISTORY_ROW_HEIGHT: f32 = 30.0;
pub const FILTER_ROW_HEIGHT: f32 = 40.0;
pub const COLLAPSED_FILTER_HEIGHT: f32 = 3.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const CELL_PADDING: f32 = 6.0;
pub const FILTER_BUTTON_WIDTH: f32 = 24.0;

// --- Windowing ---
pub const DEFAULT_OVERSCAN: usize = 4;

// --- Timing ---
pub const RELOAD_DEBOUNCE_MS: u64 = 300;
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Colors ---
pub const HISTORY_ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

// --- Helper functions ---

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn wrapped_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).wrap())
}

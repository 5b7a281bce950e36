// Host application: one tree list over a JSON data file
use crate::config::Config;
use crate::io::{spawn_worker, watch_file, DataWatcher, IoCommand, IoResult};
use crate::model::{count_nodes, Node};
use crate::state::{TreeListState, UiState};
use crate::style::{self, Theme};
use crate::view::{ColumnSpec, TreeListView, WrappedCell};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

/// Where the tree comes from.
pub enum DataSource {
    /// Already parsed, e.g. the bundled sample.
    Bundled(Arc<[Node]>),
    /// Loaded by the io worker and reloaded when the file changes.
    File(PathBuf),
}

pub struct TreeList {
    pub config: Config,
    pub state: TreeListState,
    pub view: TreeListView,
    pub ui: UiState,
    pub data_path: Option<PathBuf>,
    pub io_tx: Sender<IoCommand>,
    pub io_rx: Receiver<IoResult>,
    pub watcher: Option<DataWatcher>,
    pub reload_rx: Option<Receiver<PathBuf>>,
}

/// Columns for the sample data shape: name, desc, key.
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").width(3.0).sortable().filterable(),
        ColumnSpec::new("desc", "Description")
            .width(6.0)
            .filterable()
            .renderer(WrappedCell),
        ColumnSpec::new("key", "Key").width(3.0).sortable(),
    ]
}

impl TreeList {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, source: DataSource) -> Self {
        let ctx = cc.egui_ctx.clone();
        let theme = Theme::from_name(&config.theme.mode);
        apply_style(&ctx, theme, config.font.font_size);

        let view = TreeListView::new(default_columns())
            .sizing(config.list.sizing())
            .overscan(config.list.overscan);
        let (io_tx, io_rx) = spawn_worker(ctx.clone());

        let (root, data_path): (Arc<[Node]>, _) = match source {
            DataSource::Bundled(nodes) => (nodes, None),
            DataSource::File(path) => (Vec::new().into(), Some(path)),
        };
        let state = TreeListState::new(root, view.filter_bar_present(), config.list.policy());

        let mut app = Self {
            config,
            state,
            view,
            ui: UiState::new(theme),
            data_path,
            io_tx,
            io_rx,
            watcher: None,
            reload_rx: None,
        };

        if let Some(path) = app.data_path.clone() {
            app.request_load();
            match watch_file(path, ctx) {
                Ok((watcher, reload_rx)) => {
                    app.watcher = Some(watcher);
                    app.reload_rx = Some(reload_rx);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "live reload disabled");
                    app.ui.set_error(e.to_string());
                }
            }
        }
        app
    }

    pub fn request_load(&mut self) {
        let Some(path) = self.data_path.clone() else {
            return;
        };
        tracing::debug!(path = %path.display(), "requesting data load");
        self.ui.is_loading = true;
        if self.io_tx.send(IoCommand::LoadData(path)).is_err() {
            self.ui.is_loading = false;
            self.ui.set_error("io worker is not running".into());
        }
    }

    pub fn process_async_results(&mut self) {
        while let Ok(result) = self.io_rx.try_recv() {
            self.ui.is_loading = false;
            match result {
                IoResult::DataLoaded { path, nodes } => {
                    let total = count_nodes(&nodes);
                    if self.state.set_data(nodes) {
                        self.ui.set_info(format!(
                            "Loaded {} ({} nodes)",
                            path.file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_default(),
                            total
                        ));
                    }
                }
                IoResult::Error(e) => self.ui.set_error(e),
            }
        }

        let reloads = self
            .reload_rx
            .as_ref()
            .map(|rx| rx.try_iter().count())
            .unwrap_or(0);
        if reloads > 0 {
            tracing::info!("data file changed, reloading");
            self.request_load();
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let reload = ui
                .add_enabled(self.data_path.is_some(), egui::Button::new("⟳"))
                .on_hover_text("Reload (Ctrl+R)");
            if reload.clicked() {
                self.request_load();
            }
            let home = ui
                .add_enabled(self.state.depth() > 0, egui::Button::new("⌂"))
                .on_hover_text("Back to the top level (Home)");
            if home.clicked() {
                self.ascend_to(0);
            }

            let source = match &self.data_path {
                Some(path) => path.display().to_string(),
                None => "bundled sample".to_string(),
            };
            ui.label(egui::RichText::new(source).monospace());
            if self.ui.is_loading {
                ui.spinner();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "depth {} | {} of {} rows",
                    self.state.depth(),
                    self.state.displayed_rows().len(),
                    self.state.current_level().len()
                ));
            });
        });
        ui.add_space(4.0);
    }

    fn bottom_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let sorts = self
                .state
                .sorts()
                .keys()
                .iter()
                .rev()
                .map(|k| format!("{}{}", k.column, k.order.arrow()))
                .collect::<Vec<_>>()
                .join(", ");
            if !sorts.is_empty() {
                ui.label(format!("sort: {}", sorts));
            }
            let filters = self
                .state
                .filters()
                .iter()
                .map(|(column, pattern)| format!("{}~{}", column, pattern))
                .collect::<Vec<_>>()
                .join(", ");
            if !filters.is_empty() {
                ui.label(format!("filter: {}", filters));
            }
            if let Some((err, _)) = &self.ui.error_message {
                ui.colored_label(egui::Color32::RED, err);
            } else if let Some((info, _)) = &self.ui.info_message {
                ui.colored_label(egui::Color32::GREEN, info);
            }
        });
    }

    pub fn ascend_to(&mut self, depth: usize) {
        if let Err(e) = self.state.ascend(depth) {
            self.ui.set_error(e.to_string());
        }
    }
}

fn apply_style(ctx: &egui::Context, theme: Theme, font_size: f32) {
    ctx.set_visuals(theme.visuals());
    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            font.size = match text_style {
                egui::TextStyle::Small => font_size * 0.8,
                egui::TextStyle::Heading => font_size * 1.4,
                _ => font_size,
            };
        }
    });
}

impl eframe::App for TreeList {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_async_results();
        self.handle_input(ctx);
        self.ui
            .clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| self.top_bar(ui));
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| self.bottom_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = self.view.show(ui, &mut self.state);
            if let Some(err) = response.error {
                self.ui.set_error(err.to_string());
            }
        });

        if self.ui.has_messages() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}

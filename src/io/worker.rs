use crate::model::{count_nodes, load_nodes, Node};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

pub enum IoCommand {
    LoadData(PathBuf),
}

pub enum IoResult {
    DataLoaded { path: PathBuf, nodes: Arc<[Node]> },
    Error(String),
}

/// Parse data files off the UI thread. The context is repainted after each result.
pub fn spawn_worker(ctx: eframe::egui::Context) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                IoCommand::LoadData(path) => match load_nodes(&path) {
                    Ok(nodes) => {
                        tracing::info!(
                            path = %path.display(),
                            top_level = nodes.len(),
                            total = count_nodes(&nodes),
                            "data loaded"
                        );
                        IoResult::DataLoaded { path, nodes }
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to load data");
                        IoResult::Error(e.to_string())
                    }
                },
            };
            if res_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        tracing::debug!("io worker stopped");
    });

    (cmd_tx, res_rx)
}

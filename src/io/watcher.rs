// Watches the loaded data file and asks for a reload when it changes

use crate::error::Result;
use crate::style::RELOAD_DEBOUNCE_MS;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Keeps the OS watch alive. Dropping it stops reload notifications.
pub struct DataWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
}

impl DataWatcher {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Start watching `path`. The receiver yields the path once per burst of
/// changes, after [`RELOAD_DEBOUNCE_MS`] of quiet.
pub fn watch_file(path: PathBuf, ctx: eframe::egui::Context) -> Result<(DataWatcher, Receiver<PathBuf>)> {
    let (raw_tx, raw_rx) = channel::<()>();
    let (reload_tx, reload_rx) = channel();

    let target = path.clone();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) if touches(&event, &target) => {
            let _ = raw_tx.send(());
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "file watcher error"),
    })?;

    // Editors often replace the file instead of writing in place, so watch the directory.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(path = %path.display(), "watching data file");

    let reload_path = path.clone();
    thread::spawn(move || {
        let quiet = Duration::from_millis(RELOAD_DEBOUNCE_MS);
        while raw_rx.recv().is_ok() {
            loop {
                match raw_rx.recv_timeout(quiet) {
                    Ok(()) => continue,
                    Err(RecvTimeoutError::Timeout) => break,
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
            if reload_tx.send(reload_path.clone()).is_err() {
                return;
            }
            ctx.request_repaint();
        }
    });

    Ok((
        DataWatcher {
            path,
            _watcher: watcher,
        },
        reload_rx,
    ))
}

fn touches(event: &Event, target: &Path) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    let name = target.file_name();
    event
        .paths
        .iter()
        .any(|p| p == target || (name.is_some() && p.file_name() == name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, ModifyKind};

    #[test]
    fn test_touches_matches_file_name() {
        let target = Path::new("/data/tree.json");
        let event = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(PathBuf::from("/data/tree.json"));
        assert!(touches(&event, target));

        let other = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(PathBuf::from("/data/other.json"));
        assert!(!touches(&other, target));
    }

    #[test]
    fn test_touches_ignores_access() {
        let target = Path::new("/data/tree.json");
        let event = Event::new(EventKind::Access(AccessKind::Any)).add_path(PathBuf::from("/data/tree.json"));
        assert!(!touches(&event, target));
    }
}

pub mod watcher;
pub mod worker;

pub use watcher::{watch_file, DataWatcher};
pub use worker::{spawn_worker, IoCommand, IoResult};

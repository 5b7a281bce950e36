pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod message;
pub mod model;
pub mod state;
pub mod style;
pub mod view;

pub use error::{Result, TreeListError};
pub use message::{Action, Dispatcher, Pop, Select};
pub use model::{HistoryEntry, Node, Row, Value};
pub use state::{Entry, FlatEntry, LevelChangePolicy, TreeListState};
pub use view::{ColumnSpec, HeightMode, RowSizing, TreeListView};

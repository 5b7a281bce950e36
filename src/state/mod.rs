pub mod entries;
pub mod filter;
pub mod navigation;
pub mod pipeline;
pub mod sort;
pub mod tree_list;
pub mod ui;

pub use entries::{build_entries, Entry, FlatEntry};
pub use filter::FilterSpec;
pub use navigation::NavigationState;
pub use pipeline::derive;
pub use sort::{SortKey, SortOrder, SortSpec};
pub use tree_list::{LevelChangePolicy, TreeListState};
pub use ui::UiState;

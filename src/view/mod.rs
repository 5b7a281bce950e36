pub mod columns;
pub mod fenwick;
pub mod list;
pub mod overlay;
pub mod window;

pub use columns::{
    filter_bar_present, CellRenderer, ColumnRow, ColumnSpec, HistoryRowRenderer, PlainCell, RowRenderer,
    WrappedCell,
};
pub use list::{TreeListResponse, TreeListView};
pub use overlay::FilterInputs;
pub use window::{HeightMode, RowMetrics, RowSizing};

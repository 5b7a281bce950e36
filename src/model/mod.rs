mod load;
mod node;
mod row;

pub use load::{count_nodes, load_nodes, parse_nodes};
pub use node::{Node, Value};
pub use row::{annotate, HistoryEntry, Row};

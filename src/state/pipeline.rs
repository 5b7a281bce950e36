// Sort and filter a sibling group into the rows actually displayed

use super::{FilterSpec, SortOrder, SortSpec};
use crate::error::{Result, TreeListError};
use crate::model::{Row, Value};
use std::cmp::Ordering;

fn column<'r>(row: &'r Row, column: &str) -> Result<&'r Value> {
    row.get(column).ok_or_else(|| TreeListError::MissingColumn {
        column: column.to_string(),
    })
}

/// Apply every sort key in list order as a full stable re-sort, so the last
/// key ends up primary and earlier keys break its ties. Then apply each
/// filter; a filter that would leave no rows is skipped.
pub fn derive(level: &[Row], sorts: &SortSpec, filters: &FilterSpec) -> Result<Vec<Row>> {
    let mut rows = level.to_vec();

    for key in sorts.keys() {
        // Check every row up front; the comparator itself cannot fail.
        for row in &rows {
            column(row, &key.column)?;
        }
        rows.sort_by(|a, b| {
            let ord = match (a.get(&key.column), b.get(&key.column)) {
                (Some(x), Some(y)) => x.loose_cmp(y),
                _ => Ordering::Equal,
            };
            match key.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    for (col, pattern) in filters.iter() {
        let mut kept = Vec::with_capacity(rows.len());
        for row in &rows {
            if column(row, col)?.to_string().contains(pattern) {
                kept.push(row.clone());
            }
        }
        if kept.is_empty() {
            tracing::debug!(column = col, pattern, "filter matched nothing, keeping rows");
        } else {
            rows = kept;
        }
    }

    Ok(rows)
}

// Reading node trees from JSON

use super::Node;
use crate::error::{Result, TreeListError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Node>),
    One(Node),
}

/// Parse a JSON array of nodes. A single object becomes a one-node root.
pub fn parse_nodes(json: &str) -> Result<Arc<[Node]>> {
    let nodes = match serde_json::from_str::<Document>(json)? {
        Document::Many(nodes) => nodes,
        Document::One(node) => vec![node],
    };
    Ok(nodes.into())
}

pub fn load_nodes(path: &Path) -> Result<Arc<[Node]>> {
    let contents = fs::read_to_string(path).map_err(|source| TreeListError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;
    parse_nodes(&contents)
}

/// Total node count, walking children with an explicit stack.
pub fn count_nodes(nodes: &[Node]) -> usize {
    let mut stack: Vec<&[Node]> = vec![nodes];
    let mut total = 0;
    while let Some(level) = stack.pop() {
        total += level.len();
        for node in level {
            if let Some(children) = node.children() {
                stack.push(children);
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let nodes = parse_nodes(r#"[{"name":"A","children":[{"name":"A1"}]},{"name":"B"}]"#)
            .expect("parse");
        assert_eq!(nodes.len(), 2);
        assert_eq!(count_nodes(&nodes), 3);
    }

    #[test]
    fn test_parse_single_object() {
        let nodes = parse_nodes(r#"{"name":"root","children":[]}"#).expect("parse");
        assert_eq!(nodes.len(), 1);
        assert!(!nodes[0].is_leaf());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_nodes("[{").unwrap_err();
        assert!(matches!(err, TreeListError::ParseData(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_nodes(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TreeListError::ReadData { .. }));
    }
}

// Tree nodes and the scalar values stored in their columns

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A scalar column value. `null` fields are kept as [`Value::Null`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Null, then numbers (bools count as 0/1), then text.
    fn class(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => 1,
            Value::Text(_) => 2,
        }
    }

    /// Breaks ties between numerically equal values of different kinds.
    fn kind(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::Text(_) => 4,
        }
    }

    fn number(&self) -> f64 {
        match self {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Null | Value::Text(_) => 0.0,
        }
    }

    /// Three-way compare: `Less` if `self < other`, `Greater` if `self > other`,
    /// otherwise `Equal`. Text compares lexicographically and numbers
    /// numerically. Across kinds the order is null < numbers < text, so the
    /// result is a total order even for columns that mix kinds.
    pub fn loose_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Null, Value::Null) => Ordering::Equal,
            _ if self.class() != other.class() => self.class().cmp(&other.class()),
            _ => self
                .number()
                .total_cmp(&other.number())
                .then_with(|| self.kind().cmp(&other.kind())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A record of caller-defined columns plus optional children.
///
/// Cloning is shallow: the field map is copied, `children` is shared.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Arc<[Node]>>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(column.to_string(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn children(&self) -> Option<&Arc<[Node]>> {
        self.children.as_ref()
    }

    /// Leaves have no `children` at all; an empty list is still navigable.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_cmp_same_kind() {
        assert_eq!(Value::from("A").loose_cmp(&Value::from("B")), Ordering::Less);
        assert_eq!(Value::from(10).loose_cmp(&Value::from(9)), Ordering::Greater);
        assert_eq!(Value::from(1.5).loose_cmp(&Value::from(1.5)), Ordering::Equal);
    }

    #[test]
    fn test_loose_cmp_mixed_kinds() {
        assert_eq!(Value::from(true).loose_cmp(&Value::from(0)), Ordering::Greater);
        assert_eq!(Value::from(2).loose_cmp(&Value::from(2.5)), Ordering::Less);
        assert_eq!(Value::from("abc").loose_cmp(&Value::from(3)), Ordering::Greater);
        assert_eq!(Value::from("9").loose_cmp(&Value::from(10)), Ordering::Greater);
        assert_eq!(Value::Null.loose_cmp(&Value::from(-5)), Ordering::Less);
        assert_eq!(Value::from(f64::NAN).loose_cmp(&Value::from(1.0)), Ordering::Greater);
    }

    #[test]
    fn test_loose_cmp_is_a_total_order() {
        let values = vec![
            Value::Null,
            Value::from(false),
            Value::from(true),
            Value::from(0),
            Value::from(1),
            Value::from(9),
            Value::from(10),
            Value::from(i64::MAX),
            Value::from(i64::MAX - 1),
            Value::from(1.0),
            Value::from(9.5),
            Value::from(9_223_372_036_854_775_807.0),
            Value::from(f64::NAN),
            Value::from(-0.0),
            Value::from(""),
            Value::from("10"),
            Value::from("9"),
            Value::from("abc"),
            Value::from("x789"),
        ];
        for a in &values {
            assert_eq!(a.loose_cmp(a), Ordering::Equal, "{:?}", a);
            for b in &values {
                assert_eq!(a.loose_cmp(b), b.loose_cmp(a).reverse(), "{:?} {:?}", a, b);
                for c in &values {
                    if a.loose_cmp(b) != Ordering::Greater && b.loose_cmp(c) != Ordering::Greater {
                        assert_ne!(a.loose_cmp(c), Ordering::Greater, "{:?} {:?} {:?}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_null_field_parses() {
        let node: Node = serde_json::from_str(r#"{"name":null,"key":1}"#).expect("parse");
        assert_eq!(node.get("name"), Some(&Value::Null));
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_display_matches_filter_text() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(2.0).to_string(), "2");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from("Arco").to_string(), "Arco");
    }

    #[test]
    fn test_node_json_shape() {
        let json = r#"{"name":"A","key":7,"children":[{"name":"A1"}]}"#;
        let node: Node = serde_json::from_str(json).expect("parse");
        assert_eq!(node.get("name"), Some(&Value::from("A")));
        assert_eq!(node.get("key"), Some(&Value::Int(7)));
        assert!(!node.is_leaf());
        let kids = node.children().expect("children");
        assert_eq!(kids.len(), 1);
        assert!(kids[0].is_leaf());
    }

    #[test]
    fn test_empty_children_is_not_leaf() {
        let node = Node::new().with("name", "A").with_children(vec![]);
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_clone_shares_children() {
        let node = Node::new().with_children(vec![Node::new().with("name", "x")]);
        let copy = node.clone();
        let (a, b) = (node.children().unwrap(), copy.children().unwrap());
        assert!(Arc::ptr_eq(a, b));
    }
}

// Per-column substring filters
use std::collections::BTreeMap;

/// Column → substring pattern. Iterated in column-key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    patterns: BTreeMap<String, String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pattern for `column`. Empty patterns are kept; they match everything.
    pub fn set(&mut self, column: &str, pattern: &str) {
        self.patterns.insert(column.to_string(), pattern.to_string());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.patterns.get(column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_pattern() {
        let mut spec = FilterSpec::new();
        spec.set("name", "ar");
        spec.set("name", "co");
        assert_eq!(spec.get("name"), Some("co"));
        assert_eq!(spec.iter().count(), 1);
    }

    #[test]
    fn test_empty_pattern_is_stored() {
        let mut spec = FilterSpec::new();
        spec.set("desc", "");
        assert_eq!(spec.get("desc"), Some(""));
        assert!(!spec.is_empty());
    }
}

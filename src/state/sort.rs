// Sort options for the displayed level

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub order: SortOrder,
}

/// Active column sorts in application order. The last key dominates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// New columns start ascending. A column already present is pulled out,
    /// its order flipped, and re-appended so it becomes the primary key.
    pub fn toggle(&mut self, column: &str) {
        let key = match self.keys.iter().position(|k| k.column == column) {
            Some(pos) => {
                let mut key = self.keys.remove(pos);
                key.order = key.order.toggle();
                key
            }
            None => SortKey {
                column: column.to_string(),
                order: SortOrder::Ascending,
            },
        };
        self.keys.push(key);
    }

    /// Order and priority (1 = primary) of `column`, if it is sorted.
    pub fn state_of(&self, column: &str) -> Option<(SortOrder, usize)> {
        let pos = self.keys.iter().position(|k| k.column == column)?;
        Some((self.keys[pos].order, self.keys.len() - pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_ascending() {
        let mut spec = SortSpec::new();
        spec.toggle("name");
        assert_eq!(
            spec.keys(),
            &[SortKey {
                column: "name".into(),
                order: SortOrder::Ascending
            }]
        );
    }

    #[test]
    fn test_toggle_flips_and_moves_to_end() {
        let mut spec = SortSpec::new();
        spec.toggle("name");
        spec.toggle("key");
        spec.toggle("name");
        let keys = spec.keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].column, "key");
        assert_eq!(keys[1].column, "name");
        assert_eq!(keys[1].order, SortOrder::Descending);
    }

    #[test]
    fn test_toggle_twice_restores_order() {
        let mut spec = SortSpec::new();
        spec.toggle("a");
        spec.toggle("b");
        spec.toggle("a");
        spec.toggle("a");
        assert_eq!(spec.keys()[1].column, "a");
        assert_eq!(spec.keys()[1].order, SortOrder::Ascending);
        assert_eq!(spec.keys().len(), 2);
    }

    #[test]
    fn test_state_of_reports_priority() {
        let mut spec = SortSpec::new();
        spec.toggle("a");
        spec.toggle("b");
        assert_eq!(spec.state_of("b"), Some((SortOrder::Ascending, 1)));
        assert_eq!(spec.state_of("a"), Some((SortOrder::Ascending, 2)));
        assert_eq!(spec.state_of("c"), None);
    }
}

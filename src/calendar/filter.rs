use std::collections::BTreeSet;

/// Category names that restrict which events are shown.
/// An empty filter lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: BTreeSet<String>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.selected.remove(name) {
            false
        } else {
            self.selected.insert(name.to_string());
            true
        }
    }

    pub fn allows(&self, category: &str) -> bool {
        self.selected.is_empty() || self.selected.contains(category)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_allows_everything() {
        let filter = CategoryFilter::new();
        assert!(filter.allows("Работа"));
        assert!(filter.allows("anything"));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut filter = CategoryFilter::new();
        assert!(filter.toggle("Личное"));
        assert!(filter.contains("Личное"));
        assert!(filter.allows("Личное"));
        assert!(!filter.allows("Работа"));

        assert!(!filter.toggle("Личное"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_contents() {
        let mut filter = CategoryFilter::new();
        filter.toggle("Спорт");
        filter.toggle("Учеба");
        let before = filter.clone();

        filter.toggle("Спорт");
        filter.toggle("Спорт");
        assert_eq!(filter, before);

        filter.toggle("Unknown");
        filter.toggle("Unknown");
        assert_eq!(filter, before);
    }

    #[test]
    fn test_unknown_name_never_matches() {
        let mut filter = CategoryFilter::new();
        filter.toggle("Unknown");
        assert!(!filter.allows("Работа"));
        assert_eq!(filter.iter().collect::<Vec<_>>(), vec!["Unknown"]);
    }
}

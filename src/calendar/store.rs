use std::collections::HashMap;

use chrono::NaiveDate;
use ratatui::style::Color;

use super::category::CategoryRegistry;
use super::event::Event;
use super::filter::CategoryFilter;
use crate::error::ValidationError;

/// What the day list shows for one date.
#[derive(Debug, PartialEq, Eq)]
pub enum DayEvents<'a> {
    /// Nothing was ever added for this date.
    Empty,
    /// Events that pass the filter, in insertion order. May be empty
    /// when the filter hides every event of the day.
    Listed { visible: Vec<&'a Event>, hidden: usize },
}

/// Append-only events, bucketed by calendar day.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    by_date: HashMap<NaiveDate, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to `date`. The title must be non-empty and the
    /// category must be registered; otherwise nothing is stored.
    pub fn add(
        &mut self,
        date: NaiveDate,
        title: &str,
        category: Option<&str>,
        categories: &CategoryRegistry,
    ) -> Result<&Event, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let category = match category {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ValidationError::NoCategory),
        };
        if !categories.contains(category) {
            return Err(ValidationError::UnknownCategory(category.to_string()));
        }

        let bucket = self.by_date.entry(date).or_default();
        bucket.push(Event::new(title, category));
        Ok(&bucket[bucket.len() - 1])
    }

    pub fn events_on(&self, date: NaiveDate) -> Option<&[Event]> {
        self.by_date.get(&date).map(Vec::as_slice)
    }

    pub fn day_events(&self, date: NaiveDate, filter: &CategoryFilter) -> DayEvents<'_> {
        match self.events_on(date) {
            None => DayEvents::Empty,
            Some(events) => {
                let visible: Vec<&Event> =
                    events.iter().filter(|e| filter.allows(&e.category)).collect();
                let hidden = events.len() - visible.len();
                DayEvents::Listed { visible, hidden }
            }
        }
    }

    /// Marker colors for one grid day: one per visible event whose
    /// category is still registered.
    pub fn markers_on(
        &self,
        date: NaiveDate,
        filter: &CategoryFilter,
        categories: &CategoryRegistry,
    ) -> Vec<Color> {
        self.by_date
            .get(&date)
            .map(|events| {
                events
                    .iter()
                    .filter(|e| filter.allows(&e.category))
                    .filter_map(|e| categories.color_of(&e.category))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn total_events(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_title_leaves_store_unchanged() {
        let categories = CategoryRegistry::with_defaults();
        let mut store = EventStore::new();

        for title in ["", "  "] {
            let err = store
                .add(date(2024, 6, 1), title, Some("Работа"), &categories)
                .unwrap_err();
            assert_eq!(err, ValidationError::EmptyTitle);
        }
        assert_eq!(store.total_events(), 0);
        assert!(store.events_on(date(2024, 6, 1)).is_none());
    }

    #[test]
    fn test_missing_or_unknown_category_is_rejected() {
        let categories = CategoryRegistry::with_defaults();
        let mut store = EventStore::new();
        let day = date(2024, 6, 1);

        assert_eq!(
            store.add(day, "Standup", None, &categories).unwrap_err(),
            ValidationError::NoCategory
        );
        assert_eq!(
            store.add(day, "Standup", Some(""), &categories).unwrap_err(),
            ValidationError::NoCategory
        );
        assert_eq!(
            store.add(day, "Standup", Some("Nope"), &categories).unwrap_err(),
            ValidationError::UnknownCategory("Nope".to_string())
        );
        assert_eq!(store.total_events(), 0);
    }

    #[test]
    fn test_add_appends_and_preserves_other_entries() {
        let categories = CategoryRegistry::with_defaults();
        let mut store = EventStore::new();
        let d1 = date(2024, 6, 1);
        let d2 = date(2024, 6, 2);

        store.add(d1, "First", Some("Работа"), &categories).unwrap();
        store.add(d2, "Other day", Some("Спорт"), &categories).unwrap();
        store.add(d1, "Second", Some("Личное"), &categories).unwrap();

        assert_eq!(
            store.events_on(d1).unwrap(),
            &[Event::new("First", "Работа"), Event::new("Second", "Личное")]
        );
        assert_eq!(store.events_on(d2).unwrap(), &[Event::new("Other day", "Спорт")]);
        assert_eq!(store.total_events(), 3);
    }

    #[test]
    fn test_day_events_applies_filter() {
        let categories = CategoryRegistry::with_defaults();
        let mut store = EventStore::new();
        let day = date(2024, 6, 1);
        store.add(day, "Standup", Some("Работа"), &categories).unwrap();
        store.add(day, "Gym", Some("Спорт"), &categories).unwrap();

        let mut filter = CategoryFilter::new();
        assert_eq!(store.day_events(date(2024, 6, 2), &filter), DayEvents::Empty);

        filter.toggle("Спорт");
        match store.day_events(day, &filter) {
            DayEvents::Listed { visible, hidden } => {
                assert_eq!(visible, vec![&Event::new("Gym", "Спорт")]);
                assert_eq!(hidden, 1);
            }
            DayEvents::Empty => panic!("day has events"),
        }

        filter.toggle("Спорт");
        filter.toggle("Учеба");
        assert_eq!(
            store.day_events(day, &filter),
            DayEvents::Listed { visible: vec![], hidden: 2 }
        );
    }

    #[test]
    fn test_markers_follow_filter_and_registry() {
        let categories = CategoryRegistry::with_defaults();
        let mut store = EventStore::new();
        let day = date(2024, 6, 1);
        store.add(day, "Standup", Some("Работа"), &categories).unwrap();
        store.add(day, "Run", Some("Спорт"), &categories).unwrap();

        let mut filter = CategoryFilter::new();
        assert_eq!(
            store.markers_on(day, &filter, &categories),
            vec![Color::Rgb(0xff, 0x57, 0x33), Color::Rgb(0x75, 0xff, 0x33)]
        );

        filter.toggle("Спорт");
        assert_eq!(
            store.markers_on(day, &filter, &categories),
            vec![Color::Rgb(0x75, 0xff, 0x33)]
        );
        assert!(store.markers_on(date(2024, 6, 2), &filter, &categories).is_empty());
    }

    #[test]
    fn test_markers_skip_unregistered_category() {
        let mut categories = CategoryRegistry::new();
        categories.add("Temp", "#abcdef").unwrap();
        let mut store = EventStore::new();
        let day = date(2024, 6, 1);
        store.add(day, "Orphan", Some("Temp"), &categories).unwrap();

        let other = CategoryRegistry::with_defaults();
        assert!(store
            .markers_on(day, &CategoryFilter::new(), &other)
            .is_empty());
    }
}

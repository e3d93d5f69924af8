use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Event, EventCategory};
use crate::store::Store;

/// Events filter: substring match across title/description/location AND
/// exact category AND exact year-month of the date.
pub fn filter_events<'a>(
    items: &'a [Event],
    search: &str,
    category: Option<EventCategory>,
    month: Option<&str>,
) -> Vec<&'a Event> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|event| {
            let text_match = needle.is_empty()
                || event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle);
            text_match
                && category.is_none_or(|c| event.category == c)
                && month.is_none_or(|m| event.month_key() == m)
        })
        .collect()
}

/// Chronologically ordered sections keyed by "YYYY-MM".
pub fn group_by_month(items: &[&Event]) -> Vec<MonthSection> {
    let mut sections: BTreeMap<String, Vec<Event>> = BTreeMap::new();
    for event in items {
        sections
            .entry(event.month_key())
            .or_default()
            .push((*event).clone());
    }
    sections
        .into_iter()
        .map(|(month, events)| MonthSection { month, events })
        .collect()
}

/// Distinct months across the whole loaded collection, sorted; drives the
/// month filter control.
pub fn available_months(items: &[Event]) -> Vec<String> {
    let mut months: Vec<String> = items.iter().map(Event::month_key).collect();
    months.sort();
    months.dedup();
    months
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthSection {
    pub month: String,
    pub events: Vec<Event>,
}

/// State behind the events listing: full collection plus the three
/// combinable filters, re-derived on every change.
pub struct EventsBoard {
    all: Vec<Event>,
    search: String,
    category: Option<EventCategory>,
    month: Option<String>,
}

impl EventsBoard {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            search: String::new(),
            category: None,
            month: None,
        }
    }

    pub async fn reload(&mut self, store: &Store) -> Result<(), sqlx::Error> {
        self.all = store.list_events().await?;
        Ok(())
    }

    pub fn loaded(&self) -> &[Event] {
        &self.all
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_category(&mut self, category: Option<EventCategory>) {
        self.category = category;
    }

    pub fn set_month(&mut self, month: Option<String>) {
        self.month = month;
    }

    pub fn sections(&self) -> Vec<MonthSection> {
        let filtered = filter_events(
            &self.all,
            &self.search,
            self.category,
            self.month.as_deref(),
        );
        group_by_month(&filtered)
    }

    /// Months are derived from the full collection, not the filtered one,
    /// so the filter control keeps showing every choice.
    pub fn months(&self) -> Vec<String> {
        available_months(&self.all)
    }
}

impl Default for EventsBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::EventStatus;

    fn event(title: &str, date: &str, category: EventCategory) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} na serra"),
            date: format!("{date}T19:00:00Z").parse().unwrap(),
            end_date: None,
            location: "Centro".to_string(),
            image_url: None,
            external_link: None,
            is_featured: false,
            category,
            status: EventStatus::Upcoming,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn events_group_by_year_month() {
        let items = vec![
            event("Natal Luz", "2025-12-01", EventCategory::Cultural),
            event("Réveillon", "2025-12-20", EventCategory::Cultural),
            event("Festival de Verão", "2026-01-05", EventCategory::Cultural),
        ];
        let filtered: Vec<&Event> = items.iter().collect();
        let sections = group_by_month(&filtered);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].month, "2025-12");
        assert_eq!(sections[0].events.len(), 2);
        assert_eq!(sections[1].month, "2026-01");
        assert_eq!(sections[1].events.len(), 1);
    }

    #[test]
    fn available_months_are_distinct_and_sorted() {
        let items = vec![
            event("B", "2026-01-05", EventCategory::Other),
            event("A", "2025-12-01", EventCategory::Other),
            event("C", "2025-12-20", EventCategory::Other),
        ];
        assert_eq!(available_months(&items), vec!["2025-12", "2026-01"]);
    }

    #[test]
    fn filters_combine() {
        let items = vec![
            event("Corrida da Serra", "2025-12-01", EventCategory::Sports),
            event("Corrida Noturna", "2026-01-10", EventCategory::Sports),
            event("Natal Luz", "2025-12-10", EventCategory::Cultural),
        ];

        let by_all = filter_events(&items, "corrida", Some(EventCategory::Sports), Some("2025-12"));
        assert_eq!(by_all.len(), 1);
        assert_eq!(by_all[0].title, "Corrida da Serra");
    }

    #[test]
    fn search_matches_description_and_location() {
        let mut with_location = event("Encontro", "2026-02-01", EventCategory::Networking);
        with_location.location = "Vinícola Santa Clara".to_string();
        let items = vec![
            with_location,
            event("Outro Encontro", "2026-02-02", EventCategory::Networking),
        ];
        assert_eq!(filter_events(&items, "vinícola", None, None).len(), 1);
        assert_eq!(filter_events(&items, "serra", None, None).len(), 2);
    }

    #[test]
    fn board_sections_follow_the_month_filter() {
        let mut board = EventsBoard::new();
        board.all = vec![
            event("Natal Luz", "2025-12-01", EventCategory::Cultural),
            event("Festival de Verão", "2026-01-05", EventCategory::Cultural),
        ];
        board.set_month(Some("2025-12".to_string()));

        let sections = board.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].month, "2025-12");
        // The month control still offers both choices.
        assert_eq!(board.months().len(), 2);
    }
}

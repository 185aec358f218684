//! Campus Event Entity
//!
//! Calendar events and the day/upcoming queries the calendar view runs.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::ParseError;

/// Kind of campus event, drives colouring and badge style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Academic,
    Cultural,
    Sports,
    Maintenance,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Academic,
        EventType::Cultural,
        EventType::Sports,
        EventType::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Academic => "academic",
            EventType::Cultural => "cultural",
            EventType::Sports => "sports",
            EventType::Maintenance => "maintenance",
        }
    }

    /// Badge variant class suffix
    pub fn badge_variant(&self) -> &'static str {
        match self {
            EventType::Academic => "default",
            EventType::Cultural => "secondary",
            EventType::Sports => "outline",
            EventType::Maintenance => "destructive",
        }
    }

    /// Class applied to a calendar day holding an event of this type
    pub fn day_class(&self) -> &'static str {
        match self {
            EventType::Academic => "day-event day-academic",
            EventType::Cultural => "day-event day-cultural",
            EventType::Sports => "day-event day-sports",
            EventType::Maintenance => "day-event day-maintenance",
        }
    }
}

impl FromStr for EventType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::new("event type", s))
    }
}

/// A dated campus event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub event_type: EventType,
}

impl CampusEvent {
    pub fn new(id: u32, title: &str, date: NaiveDate, event_type: EventType) -> Self {
        Self {
            id,
            title: title.to_string(),
            date,
            event_type,
        }
    }
}

impl Entity for CampusEvent {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Events falling on `day`, in list order
pub fn events_on(events: &[CampusEvent], day: NaiveDate) -> Vec<CampusEvent> {
    events.iter().filter(|event| event.date == day).cloned().collect()
}

/// Type of the first event on `day`, used to colour the calendar cell
pub fn day_event_type(events: &[CampusEvent], day: NaiveDate) -> Option<EventType> {
    events.iter().find(|event| event.date == day).map(|event| event.event_type)
}

/// The next `limit` events strictly after `today`, soonest first
pub fn upcoming(events: &[CampusEvent], today: NaiveDate, limit: usize) -> Vec<CampusEvent> {
    let mut later: Vec<CampusEvent> = events.iter().filter(|event| event.date > today).cloned().collect();
    later.sort_by_key(|event| event.date);
    later.truncate(limit);
    later
}

/// "Saturday, April 26, 2025"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Apr 26, 2025"
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_events_on_day() {
        let events = catalog::calendar_events();
        let hits = events_on(&events, date(2025, 4, 28));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Annual Sports Meet");
        assert!(events_on(&events, date(2025, 4, 27)).is_empty());
    }

    #[test]
    fn test_day_event_type() {
        let events = catalog::calendar_events();
        assert_eq!(day_event_type(&events, date(2025, 4, 30)), Some(EventType::Maintenance));
        assert_eq!(day_event_type(&events, date(2025, 1, 1)), None);
    }

    #[test]
    fn test_upcoming_is_strictly_after_today_sorted_and_limited() {
        let events = catalog::calendar_events();

        let next = upcoming(&events, date(2025, 4, 26), 3);
        let titles: Vec<_> = next.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Annual Sports Meet", "Library Maintenance", "Cultural Festival"]);

        assert_eq!(upcoming(&events, date(2025, 1, 1), 3).len(), 3);
        assert!(upcoming(&events, date(2026, 1, 1), 3).is_empty());
    }

    #[test]
    fn test_upcoming_sorts_unordered_input() {
        let events = vec![
            CampusEvent::new(1, "Late", date(2025, 6, 1), EventType::Sports),
            CampusEvent::new(2, "Early", date(2025, 5, 1), EventType::Cultural),
        ];
        let next = upcoming(&events, date(2025, 4, 1), 5);
        assert_eq!(next[0].title, "Early");
        assert_eq!(next[1].title, "Late");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_long(date(2025, 4, 26)), "Saturday, April 26, 2025");
        assert_eq!(format_short(date(2025, 5, 5)), "May 5, 2025");
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(EventType::Academic.badge_variant(), "default");
        assert_eq!(EventType::Maintenance.badge_variant(), "destructive");
        assert_eq!("sports".parse::<EventType>(), Ok(EventType::Sports));
    }
}

// Page data model
//
// Read-only records rendered by the home page: featured performers (supplied
// once from configuration) and schedule entries (supplied by the activities
// API). Neither is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A featured performer shown in the horizontal strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    pub name: String,
    pub image: String,
}

impl Performer {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// One bookable event in the schedule list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Event identifier, unique within a schedule (used as navigation target)
    pub id: i64,
    /// Display name: "{artist} - {activity_name}"
    pub name: String,
    /// Image reference: "{artist}.jpg"
    pub image: String,
    pub time: String,
    pub location: String,
}

impl ScheduleEntry {
    /// Link target for this entry's "Get" action
    pub fn route(&self) -> Route {
        Route::SeatSelection(self.id)
    }
}

/// Navigation targets the page can link to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Seat selection for an event: `/SeatSelection/{id}`
    SeatSelection(i64),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeatSelection(id) => write!(f, "/SeatSelection/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_selection_path() {
        assert_eq!(Route::SeatSelection(5).to_string(), "/SeatSelection/5");
        assert_eq!(Route::SeatSelection(-1).to_string(), "/SeatSelection/-1");
    }

    #[test]
    fn test_entry_route_uses_id() {
        let entry = ScheduleEntry {
            id: 42,
            name: "A - Show".to_string(),
            image: "A.jpg".to_string(),
            time: "2025-01-01".to_string(),
            location: "Hall".to_string(),
        };
        assert_eq!(entry.route(), Route::SeatSelection(42));
    }
}

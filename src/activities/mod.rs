//! Activities API boundary
//!
//! The backend exposes `GET {base}/activities`, returning a JSON array of
//! activity records. This module owns the wire schema and its conversion into
//! [`ScheduleEntry`] values. Records are checked one by one: a malformed
//! record or a repeated `activity_id` is skipped with a warning, the rest of
//! the schedule survives.

mod client;

pub use client::{load_schedule, ActivitiesClient, FetchError};

use crate::model::ScheduleEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Activity record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub activity_id: i64,
    pub artist: String,
    pub activity_name: String,
    pub activity_date: String,
    pub place: String,
}

impl From<Activity> for ScheduleEntry {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.activity_id,
            name: format!("{} - {}", activity.artist, activity.activity_name),
            image: format!("{}.jpg", activity.artist),
            time: activity.activity_date,
            location: activity.place,
        }
    }
}

/// Result of decoding an activities payload
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DecodedSchedule {
    /// Entries that passed the schema check, in payload order
    pub entries: Vec<ScheduleEntry>,
    /// Number of records dropped (malformed or duplicate id)
    pub skipped: usize,
}

/// Decode an activities payload into schedule entries
///
/// # Errors
/// Returns [`FetchError::Decode`] when the payload is not a JSON array.
/// Individual bad records never fail the whole payload.
pub fn decode_schedule(payload: Value) -> Result<DecodedSchedule, FetchError> {
    let Value::Array(records) = payload else {
        return Err(FetchError::Decode(format!(
            "expected a JSON array of activities, got {}",
            json_kind(&payload)
        )));
    };

    let mut decoded = DecodedSchedule::default();
    let mut seen_ids = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        let activity: Activity = match serde_json::from_value(record) {
            Ok(activity) => activity,
            Err(e) => {
                tracing::warn!("Skipping malformed activity at index {}: {}", index, e);
                decoded.skipped += 1;
                continue;
            }
        };

        if !seen_ids.insert(activity.activity_id) {
            tracing::warn!(
                "Skipping activity at index {}: duplicate activity_id {}",
                index,
                activity.activity_id
            );
            decoded.skipped += 1;
            continue;
        }

        decoded.entries.push(activity.into());
    }

    Ok(decoded)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_maps_to_schedule_entry() {
        let payload = json!([{
            "activity_id": 5,
            "artist": "A",
            "activity_name": "Show",
            "activity_date": "2025-01-01",
            "place": "Hall"
        }]);

        let decoded = decode_schedule(payload).unwrap();
        assert_eq!(decoded.skipped, 0);
        assert_eq!(decoded.entries.len(), 1);

        let entry = &decoded.entries[0];
        assert_eq!(entry.id, 5);
        assert_eq!(entry.name, "A - Show");
        assert_eq!(entry.image, "A.jpg");
        assert_eq!(entry.time, "2025-01-01");
        assert_eq!(entry.location, "Hall");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let payload = json!([
            { "activity_id": 1, "artist": "YOASOBI", "activity_name": "Tour",
              "activity_date": "2025-03-01", "place": "Taipei Arena" },
            // missing place
            { "activity_id": 2, "artist": "B", "activity_name": "X", "activity_date": "2025-03-02" },
            // id is a string
            { "activity_id": "3", "artist": "C", "activity_name": "Y",
              "activity_date": "2025-03-03", "place": "Dome" },
            "not an object",
            { "activity_id": 4, "artist": "蘇打綠", "activity_name": "Live",
              "activity_date": "2025-03-04", "place": "Zepp", "extra": true }
        ]);

        let decoded = decode_schedule(payload).unwrap();
        assert_eq!(decoded.skipped, 3);
        let ids: Vec<i64> = decoded.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(decoded.entries[1].name, "蘇打綠 - Live");
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let payload = json!([
            { "activity_id": 7, "artist": "A", "activity_name": "First",
              "activity_date": "d1", "place": "p1" },
            { "activity_id": 7, "artist": "B", "activity_name": "Second",
              "activity_date": "d2", "place": "p2" }
        ]);

        let decoded = decode_schedule(payload).unwrap();
        assert_eq!(decoded.skipped, 1);
        assert_eq!(decoded.entries.len(), 1);
        assert_eq!(decoded.entries[0].name, "A - First");
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        let result = decode_schedule(json!({ "activities": [] }));
        assert!(matches!(result, Err(FetchError::Decode(msg)) if msg.contains("an object")));
    }

    #[test]
    fn test_empty_array_is_empty_schedule() {
        let decoded = decode_schedule(json!([])).unwrap();
        assert!(decoded.entries.is_empty());
        assert_eq!(decoded.skipped, 0);
    }
}

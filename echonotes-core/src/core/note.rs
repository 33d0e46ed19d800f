use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-authored note.
///
/// Notes are immutable after creation: there is no update operation, only
/// delete and recreate. Serialized field names are camelCase with the
/// timestamp stored as `date`, matching the persisted browser format
/// (`createdAt` is accepted as an alias when reading older data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(alias = "createdAt")]
    pub date: DateTime<Utc>,
    pub content: String,
}

impl Note {
    /// Constructs a note with a fresh v4 UUID and the current timestamp.
    ///
    /// Content validation happens in the store, not here.
    pub(crate) fn new(content: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            content: content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_unique_id() {
        let a = Note::new("first");
        let b = Note::new("second");
        assert_ne!(a.id, b.id);
        assert_eq!(a.content, "first");
    }

    #[test]
    fn test_serializes_with_date_field() {
        let note = Note::new("hello");
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"date\""));
        assert!(json.contains("\"content\":\"hello\""));
    }

    #[test]
    fn test_deserializes_created_at_alias() {
        let json = r#"{"id":"abc","createdAt":"2024-02-05T12:30:00Z","content":"aliased"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "abc");
        assert_eq!(note.content, "aliased");
    }
}

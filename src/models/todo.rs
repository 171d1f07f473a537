//! The `Todo` entity and its identifier type.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Todo identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        TodoId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
///
/// Serializes to the wire shape `{id, text, completed, createdAt}`. The
/// `created_at` timestamp is zone-less local server time and renders as an
/// ISO-8601-like string (`2024-01-01T10:00:00`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Database ID; `None` until first persistence
    pub id: Option<TodoId>,
    /// Free-form item description; no length or emptiness constraint
    #[serde(default)]
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp, set once by the server and never reassigned
    pub created_at: NaiveDateTime,
}

impl Todo {
    /// Create a new, not-yet-persisted item from its text.
    ///
    /// New items start incomplete and are stamped with the current server
    /// clock. The id is assigned by the repository on first save.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            completed: false,
            created_at: Local::now().naive_local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let before = Local::now().naive_local();
        let todo = Todo::new("Buy milk");
        let after = Local::now().naive_local();

        assert_eq!(todo.id, None);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert!(todo.created_at >= before && todo.created_at <= after);
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo {
            id: Some(TodoId::new(1)),
            text: "Buy milk".to_string(),
            completed: false,
            created_at: NaiveDateTime::parse_from_str("2024-01-01T10:00:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "text": "Buy milk",
                "completed": false,
                "createdAt": "2024-01-01T10:00:00"
            })
        );
    }

    #[test]
    fn test_todo_deserializes_with_missing_fields() {
        let todo: Todo =
            serde_json::from_str(r#"{"createdAt": "2024-01-01T10:00:00"}"#).unwrap();
        assert_eq!(todo.id, None);
        assert_eq!(todo.text, "");
        assert!(!todo.completed);
    }

    #[test]
    fn test_todo_id_accessors() {
        let id = TodoId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }
}

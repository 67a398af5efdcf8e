//! Wire types for the todo API.
//!
//! # Design
//! Ids are server-assigned and opaque. Some backends hand out integers,
//! others UUID strings, so `TodoId` accepts any JSON number or string and
//! renders back to the same shape. Numbers are kept as `serde_json::Number`
//! so unsigned 64-bit and float ids survive. Extra fields on a todo object
//! are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Server-assigned todo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(Number::from(n))
    }
}

impl From<i32> for TodoId {
    fn from(n: i32) -> Self {
        TodoId::Number(Number::from(n))
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId::Text(s)
    }
}

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
}

impl TodoItem {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Body of both the create and the update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitlePayload {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_both_parse() {
        let a: TodoItem = serde_json::from_str(r#"{"id":1,"title":"A"}"#).unwrap();
        let b: TodoItem = serde_json::from_str(r#"{"id":"abc","title":"B"}"#).unwrap();
        assert_eq!(a.id, TodoId::from(1));
        assert_eq!(b.id, TodoId::Text("abc".to_string()));
    }

    #[test]
    fn large_and_float_ids_parse() {
        let items: Vec<TodoItem> = serde_json::from_str(
            r#"[{"id":18446744073709551615,"title":"big"},{"id":1.5,"title":"float"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id.to_string(), "18446744073709551615");
        assert_eq!(items[1].id.to_string(), "1.5");
        let json = serde_json::to_string(&items[0]).unwrap();
        assert_eq!(json, r#"{"id":18446744073709551615,"title":"big"}"#);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":7,"title":"x","completed":true}"#).unwrap();
        assert_eq!(item, TodoItem::new(7, "x"));
    }

    #[test]
    fn id_serializes_back_to_its_json_shape() {
        let json = serde_json::to_value(TodoItem::new(3, "t")).unwrap();
        assert_eq!(json["id"], 3);
        let json = serde_json::to_value(TodoItem::new("u-1", "t")).unwrap();
        assert_eq!(json["id"], "u-1");
    }

    #[test]
    fn missing_title_is_rejected() {
        let result: Result<TodoItem, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ContentError;

/// A single record from a content API endpoint.
///
/// Only `id` is known locally. Every other field is defined by the remote
/// schema and kept verbatim so templates can reach it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContentItem {
    pub id: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>) -> Self {
        ContentItem {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter, mostly handy for fixtures.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// The body of a list query. Ordering and paging are decided by the API.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentList {
    pub contents: Vec<ContentItem>,

    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub offset: u64,

    #[serde(default)]
    pub limit: u64,
}

impl ContentList {
    pub fn new(contents: Vec<ContentItem>) -> Self {
        let total_count = contents.len() as u64;
        ContentList {
            limit: total_count,
            contents,
            total_count,
            offset: 0,
        }
    }
}

/// Outcome of fetching one record by id.
#[derive(Debug)]
pub enum Fetched<T> {
    Found(T),
    /// The API answered 404 for this id.
    NotFound,
    /// Anything else went wrong: transport, unexpected status, bad body.
    Failed(ContentError),
}

impl<T> Fetched<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Fetched::Found(item) => Some(item),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_keeps_unknown_fields() {
        let item: ContentItem = serde_json::from_value(json!({
            "id": "a",
            "title": "Hello",
            "category": { "id": "tech", "name": "Tech" },
        }))
        .unwrap();

        assert_eq!(item.id, "a");
        assert_eq!(item.field("title"), Some(&json!("Hello")));
        assert_eq!(item.field("category").unwrap()["id"], json!("tech"));
        assert!(!item.fields.contains_key("id"));
    }

    #[test]
    fn test_item_without_id_is_rejected() {
        let result = serde_json::from_value::<ContentItem>(json!({ "title": "No id" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_paging_defaults() {
        let list: ContentList = serde_json::from_value(json!({
            "contents": [{ "id": "a" }, { "id": "b" }],
        }))
        .unwrap();

        assert_eq!(list.contents.len(), 2);
        assert_eq!(list.total_count, 0);
        assert_eq!(list.offset, 0);
    }

    #[test]
    fn test_list_reads_camel_case_paging() {
        let list: ContentList = serde_json::from_value(json!({
            "contents": [],
            "totalCount": 42,
            "offset": 10,
            "limit": 10,
        }))
        .unwrap();

        assert_eq!(list.total_count, 42);
        assert_eq!(list.offset, 10);
        assert_eq!(list.limit, 10);
    }

    #[test]
    fn test_item_serializes_flat() {
        let item = ContentItem::new("a").with_field("title", "Hello");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "id": "a", "title": "Hello" })
        );
    }
}

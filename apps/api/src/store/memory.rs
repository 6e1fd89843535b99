use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{
    ensure_object, new_document_id, Direction, Document, DocumentStore, FilterOp, Query,
    StoreError,
};

/// Process-local document store. Collections keep insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    #[cfg(test)]
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn add(&self, collection: &str, data: Value) -> Result<String, StoreError> {
        ensure_object(&data)?;
        let id = new_document_id();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data,
            });
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<Document> = docs
            .iter()
            .filter(|doc| matches_filters(doc, query))
            .cloned()
            .collect();

        if let Some((field, direction)) = &query.order_by {
            // Documents without the ordering field are excluded, as in the Postgres backend.
            matched.retain(|doc| doc.data.get(field).is_some());
            matched.sort_by(|a, b| {
                let ord = compare_values(&a.data[field.as_str()], &b.data[field.as_str()]);
                match direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        Ok(matched)
    }
}

fn matches_filters(doc: &Document, query: &Query) -> bool {
    query.filters.iter().all(|filter| {
        let field = doc.data.get(&filter.field);
        match filter.op {
            FilterOp::Eq => field == Some(&filter.value),
            // A missing field never satisfies `!=`.
            FilterOp::NotEq => field.is_some_and(|v| v != &filter.value),
        }
    })
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

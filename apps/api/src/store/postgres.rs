use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use super::{
    ensure_object, new_document_id, Direction, Document, DocumentStore, FilterOp, Query,
    StoreError,
};

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    data: Value,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            data: row.data,
        }
    }
}

/// Document store over a single PostgreSQL table (`documents`, see `db::ensure_schema`).
/// Append-only from the service's point of view: rows are never updated.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add(&self, collection: &str, data: Value) -> Result<String, StoreError> {
        ensure_object(&data)?;
        let id = new_document_id();

        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(&id)
            .bind(collection)
            .bind(&data)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Document::from))
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let rows = build_select(collection, query)
            .build_query_as::<DocumentRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }
}

/// Translates a `Query` into a parameterised SELECT. Field names are bound, never
/// interpolated.
fn build_select(collection: &str, query: &Query) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT id, data FROM documents WHERE collection = ");
    builder.push_bind(collection.to_string());

    for filter in &query.filters {
        builder.push(" AND data -> ");
        builder.push_bind(filter.field.clone());
        builder.push(match filter.op {
            FilterOp::Eq => " = ",
            FilterOp::NotEq => " <> ",
        });
        builder.push_bind(filter.value.clone());
    }

    match &query.order_by {
        Some((field, direction)) => {
            builder.push(" AND data -> ");
            builder.push_bind(field.clone());
            builder.push(" IS NOT NULL ORDER BY data -> ");
            builder.push_bind(field.clone());
            builder.push(match direction {
                Direction::Asc => " ASC, created_at ASC",
                Direction::Desc => " DESC, created_at DESC",
            });
        }
        None => {
            builder.push(" ORDER BY created_at ASC");
        }
    }

    if let Some(limit) = query.limit {
        builder.push(" LIMIT ");
        builder.push_bind(limit as i64);
    }

    builder
}

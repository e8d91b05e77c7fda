//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crudapp::{DomainError, Item, ItemRepository};

/// PostgreSQL implementation of ItemRepository
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        let rows =
            sqlx::query_as::<_, ItemRow>("SELECT id, name FROM items ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, item: &Item) -> Result<Item, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Item>, DomainError> {
        // A row deleted concurrently matches nothing here, so it is never re-created
        let row = sqlx::query_as::<_, ItemRow>(
            "UPDATE items SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

//! Item Repository Port
//!
//! Abstract interface for Item persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Item};

/// Repository interface for Item entities
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find all Items, oldest first
    async fn find_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Insert a new Item. Never overwrites an existing id.
    async fn insert(&self, item: &Item) -> Result<Item, DomainError>;

    /// Rename an Item in a single conditional write.
    /// Returns `None` when no row has this id.
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Item>, DomainError>;

    /// Delete an Item by ID. Returns `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

//! In-memory implementation of ItemRepository
//!
//! Keeps items in insertion order behind an async RwLock. Used by the
//! service and route tests in place of Postgres.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crudapp::{DomainError, Item, ItemRepository};

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn insert(&self, item: &Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(DomainError::Repository(format!(
                "duplicate item id {}",
                item.id
            )));
        }
        items.push(item.clone());
        Ok(item.clone())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Item>, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.iter_mut().find(|item| item.id == id).map(|item| {
            item.name = name.to_string();
            item.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_name_renames_in_place() {
        let repo = InMemoryItemRepository::new();
        let first = repo.insert(&Item::new("Milk")).await.unwrap();
        let second = repo.insert(&Item::new("Bread")).await.unwrap();

        let renamed = repo.update_name(first.id, "Eggs").await.unwrap();
        assert_eq!(renamed, Some(Item { id: first.id, name: "Eggs".to_string() }));

        let items = repo.find_all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first.id);
        assert_eq!(items[0].name, "Eggs");
        assert_eq!(items[1], second);
    }

    #[tokio::test]
    async fn test_insert_refuses_existing_id() {
        let repo = InMemoryItemRepository::new();
        let item = repo.insert(&Item::new("Milk")).await.unwrap();

        assert!(repo.insert(&item).await.is_err());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_name_after_delete_does_not_recreate() {
        let repo = InMemoryItemRepository::new();
        let item = repo.insert(&Item::new("Milk")).await.unwrap();

        assert!(repo.delete(item.id).await.unwrap());
        assert!(!repo.delete(item.id).await.unwrap());
        assert_eq!(repo.update_name(item.id, "Eggs").await.unwrap(), None);
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}

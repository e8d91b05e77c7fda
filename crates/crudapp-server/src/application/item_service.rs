//! Item Application Service (Use Case)
//!
//! Orchestrates domain operations for Item management.

use std::sync::Arc;
use uuid::Uuid;

use crudapp::{DomainError, Item, ItemRepository};

/// Application service for Item operations
pub struct ItemService<R: ItemRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Items
    pub async fn list_all(&self) -> Result<Vec<Item>, DomainError> {
        self.repo.find_all().await
    }

    /// Create a new Item with a store-assigned id
    pub async fn create(&self, name: String) -> Result<Item, DomainError> {
        let item = Item::new(name);
        let saved = self.repo.insert(&item).await?;

        tracing::info!("Created Item: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Rename an existing Item
    pub async fn update(&self, id: Uuid, name: String) -> Result<Item, DomainError> {
        let saved = self
            .repo
            .update_name(id, &name)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", id))?;

        tracing::info!("Updated Item: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete an Item
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Item", id));
        }

        tracing::info!("Deleted Item: {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryItemRepository;
    use async_trait::async_trait;
    use std::collections::HashSet;

    fn service() -> ItemService<InMemoryItemRepository> {
        ItemService::new(Arc::new(InMemoryItemRepository::new()))
    }

    /// Store where another client's delete always lands right before a rename
    struct DeleteBeforeRename {
        inner: InMemoryItemRepository,
    }

    #[async_trait]
    impl ItemRepository for DeleteBeforeRename {
        async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
            self.inner.find_all().await
        }

        async fn insert(&self, item: &Item) -> Result<Item, DomainError> {
            self.inner.insert(item).await
        }

        async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Item>, DomainError> {
            self.inner.delete(id).await?;
            self.inner.update_name(id, name).await
        }

        async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let service = service();
        let created = service.create("X".to_string()).await.unwrap();

        let items = service.list_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "X");
        assert_eq!(items[0].id, created.id);
    }

    #[tokio::test]
    async fn test_update_changes_only_target() {
        let service = service();
        let a = service.create("A".to_string()).await.unwrap();
        let b = service.create("B".to_string()).await.unwrap();

        let updated = service.update(a.id, "Y".to_string()).await.unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Y");

        let items = service.list_all().await.unwrap();
        assert_eq!(items, vec![Item { id: a.id, name: "Y".to_string() }, b]);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let service = service();
        let err = service
            .update(Uuid::new_v4(), "Y".to_string())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_racing_delete_does_not_resurrect() {
        let service = ItemService::new(Arc::new(DeleteBeforeRename {
            inner: InMemoryItemRepository::new(),
        }));
        let item = service.create("Milk".to_string()).await.unwrap();

        let err = service.update(item.id, "Eggs".to_string()).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeat_delete_is_not_found() {
        let service = service();
        let keep = service.create("keep".to_string()).await.unwrap();
        let gone = service.create("gone".to_string()).await.unwrap();

        service.delete(gone.id).await.unwrap();
        let err = service.delete(gone.id).await.unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(service.list_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_mixed_sequence_has_no_duplicate_ids() {
        let service = service();
        let mut created = Vec::new();
        for i in 0..6 {
            created.push(service.create(format!("item-{}", i)).await.unwrap());
        }
        service.update(created[1].id, "renamed".to_string()).await.unwrap();
        service.delete(created[2].id).await.unwrap();
        service.update(created[1].id, "again".to_string()).await.unwrap();
        service.delete(created[4].id).await.unwrap();
        let late = service.create("late".to_string()).await.unwrap();

        let items = service.list_all().await.unwrap();
        let ids: HashSet<Uuid> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(items.len(), 5);
        assert!(created.iter().all(|item| item.id != late.id));
    }
}

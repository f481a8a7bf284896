use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{PropertyError, PropertyResult};
use crate::models::{CreateProperty, Property};

/// Repository trait for Property persistence
///
/// Every listing operation returns properties ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_all(&self) -> PropertyResult<Vec<Property>>;

    async fn find_by_id(&self, id: i64) -> PropertyResult<Option<Property>>;

    /// Case-sensitive substring match on the address
    async fn find_by_address_containing(&self, fragment: &str) -> PropertyResult<Vec<Property>>;

    /// Inclusive on both ends
    async fn find_by_price_between(&self, min: f64, max: f64) -> PropertyResult<Vec<Property>>;

    /// Inclusive on both ends
    async fn find_by_size_between(&self, min: i32, max: i32) -> PropertyResult<Vec<Property>>;

    /// Store a new property and return it with its assigned id
    async fn insert(&self, input: CreateProperty) -> PropertyResult<Property>;

    /// Replace the stored row with the same id
    async fn update(&self, property: Property) -> PropertyResult<Property>;

    /// Returns false when no row had that id
    async fn delete(&self, id: i64) -> PropertyResult<bool>;
}

/// In-memory implementation of PropertyRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<BTreeMap<i64, Property>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self {
            properties: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    async fn filtered(&self, keep: impl Fn(&Property) -> bool) -> Vec<Property> {
        let properties = self.properties.read().await;
        properties.values().filter(|p| keep(p)).cloned().collect()
    }
}

impl Default for InMemoryPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find_all(&self) -> PropertyResult<Vec<Property>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_id(&self, id: i64) -> PropertyResult<Option<Property>> {
        let properties = self.properties.read().await;
        Ok(properties.get(&id).cloned())
    }

    async fn find_by_address_containing(&self, fragment: &str) -> PropertyResult<Vec<Property>> {
        Ok(self.filtered(|p| p.address.contains(fragment)).await)
    }

    async fn find_by_price_between(&self, min: f64, max: f64) -> PropertyResult<Vec<Property>> {
        Ok(self.filtered(|p| p.price >= min && p.price <= max).await)
    }

    async fn find_by_size_between(&self, min: i32, max: i32) -> PropertyResult<Vec<Property>> {
        Ok(self.filtered(|p| p.size >= min && p.size <= max).await)
    }

    async fn insert(&self, input: CreateProperty) -> PropertyResult<Property> {
        let mut properties = self.properties.write().await;

        let property = Property {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            address: input.address,
            price: input.price,
            size: input.size,
            description: input.description,
        };
        properties.insert(property.id, property.clone());

        tracing::info!(property_id = property.id, "Created property");
        Ok(property)
    }

    async fn update(&self, property: Property) -> PropertyResult<Property> {
        let mut properties = self.properties.write().await;

        match properties.get_mut(&property.id) {
            Some(stored) => {
                *stored = property.clone();
                tracing::info!(property_id = property.id, "Updated property");
                Ok(property)
            }
            None => Err(PropertyError::NotFound(property.id)),
        }
    }

    async fn delete(&self, id: i64) -> PropertyResult<bool> {
        let mut properties = self.properties.write().await;
        let removed = properties.remove(&id).is_some();

        if removed {
            tracing::info!(property_id = id, "Deleted property");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(address: &str, price: f64, size: i32) -> CreateProperty {
        CreateProperty {
            address: address.to_string(),
            price,
            size,
            description: None,
        }
    }

    async fn seeded() -> InMemoryPropertyRepository {
        let repo = InMemoryPropertyRepository::new();
        repo.insert(input("10 Main St", 100_000.0, 800)).await.unwrap();
        repo.insert(input("22 Oak Ave", 250_000.0, 1500)).await.unwrap();
        repo.insert(input("5 Main Rd", 400_000.0, 2200)).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = seeded().await;
        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = seeded().await;
        assert!(repo.delete(3).await.unwrap());

        let created = repo.insert(input("7 Pine Ct", 1.0, 1)).await.unwrap();
        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn test_find_by_address_is_case_sensitive() {
        let repo = seeded().await;

        let hits = repo.find_by_address_containing("Main").await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = repo.find_by_address_containing("main").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_range_queries_are_inclusive() {
        let repo = seeded().await;

        let hits = repo.find_by_price_between(100_000.0, 250_000.0).await.unwrap();
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        let hits = repo.find_by_size_between(1500, i32::MAX).await.unwrap();
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_update_replaces_stored_row() {
        let repo = seeded().await;
        let mut property = repo.find_by_id(2).await.unwrap().unwrap();
        property.price = 120_000.0;

        repo.update(property).await.unwrap();

        let stored = repo.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(stored.price, 120_000.0);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryPropertyRepository::new();
        let result = repo
            .update(Property {
                id: 9,
                address: "x".to_string(),
                price: 1.0,
                size: 1,
                description: None,
            })
            .await;

        assert!(matches!(result, Err(PropertyError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_missing_row_returns_false() {
        let repo = InMemoryPropertyRepository::new();
        assert!(!repo.delete(1).await.unwrap());
    }
}

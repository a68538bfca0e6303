//! In-memory implementation of CoffeeRepository
//!
//! Backs the repository trait with a `HashMap` behind an async `RwLock`.
//! Used as a swappable store backend in tests; behaves like the MongoDB
//! implementation for every operation the trait exposes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CoffeeResult;
use crate::models::Coffee;
use crate::repository::CoffeeRepository;

/// In-memory CoffeeRepository keyed by coffee ID
#[derive(Clone, Default)]
pub struct InMemoryCoffeeRepository {
    coffees: Arc<RwLock<HashMap<Uuid, Coffee>>>,
}

impl InMemoryCoffeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored coffees
    pub async fn len(&self) -> usize {
        self.coffees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.coffees.read().await.is_empty()
    }
}

#[async_trait]
impl CoffeeRepository for InMemoryCoffeeRepository {
    async fn find_all(&self) -> CoffeeResult<Vec<Coffee>> {
        Ok(self.coffees.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> CoffeeResult<Option<Coffee>> {
        Ok(self.coffees.read().await.get(&id).cloned())
    }

    async fn save(&self, coffee: Coffee) -> CoffeeResult<Coffee> {
        self.coffees.write().await.insert(coffee.id, coffee.clone());
        Ok(coffee)
    }

    async fn delete_all(&self) -> CoffeeResult<u64> {
        let mut coffees = self.coffees.write().await;
        let deleted = coffees.len() as u64;
        coffees.clear();
        Ok(deleted)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CoffeeResult;
use crate::models::Coffee;

/// Repository trait for Coffee persistence
///
/// This trait defines the data access interface for the coffee catalog.
/// Implementations can use different storage backends (MongoDB for the
/// service, an in-memory map for tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// List every coffee in the catalog, unordered
    async fn find_all(&self) -> CoffeeResult<Vec<Coffee>>;

    /// Get a coffee by ID; `None` when no record with that identifier exists
    async fn find_by_id(&self, id: Uuid) -> CoffeeResult<Option<Coffee>>;

    /// Upsert a coffee by ID and return the persisted value
    async fn save(&self, coffee: Coffee) -> CoffeeResult<Coffee>;

    /// Remove all coffees, returning the number of deleted records
    async fn delete_all(&self) -> CoffeeResult<u64>;
}

//! MongoDB implementation of CoffeeRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CoffeeResult;
use crate::models::Coffee;
use crate::repository::CoffeeRepository;

/// MongoDB implementation of the CoffeeRepository
pub struct MongoCoffeeRepository {
    collection: Collection<Coffee>,
}

impl MongoCoffeeRepository {
    /// Create a new MongoCoffeeRepository backed by the `coffees` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("coffee-service");
    /// let repo = MongoCoffeeRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Coffee>("coffees");
        Self { collection }
    }

    /// Create a new MongoCoffeeRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Coffee>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Coffee> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl CoffeeRepository for MongoCoffeeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> CoffeeResult<Vec<Coffee>> {
        let cursor = self.collection.find(doc! {}).await?;
        let coffees: Vec<Coffee> = cursor.try_collect().await?;
        Ok(coffees)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> CoffeeResult<Option<Coffee>> {
        let coffee = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(coffee)
    }

    #[instrument(skip(self, coffee), fields(coffee_name = %coffee.name))]
    async fn save(&self, coffee: Coffee) -> CoffeeResult<Coffee> {
        self.collection
            .replace_one(Self::id_filter(coffee.id), &coffee)
            .upsert(true)
            .await?;

        tracing::info!(coffee_id = %coffee.id, "Coffee saved");
        Ok(coffee)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> CoffeeResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;

        tracing::info!(deleted = result.deleted_count, "Coffee collection cleared");
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_targets_underscore_id() {
        let id = Uuid::new_v4();
        let filter = MongoCoffeeRepository::id_filter(id);
        assert!(filter.contains_key("_id"));
        assert_eq!(filter.get_str("_id").unwrap(), id.to_string());
    }
}

//! Coffee Service - catalog reads and the order-stream generator

use std::sync::Arc;
use std::time::Duration;

use futures::stream::BoxStream;
use tracing::instrument;
use uuid::Uuid;

use crate::error::CoffeeResult;
use crate::models::{Coffee, CoffeeOrder};
use crate::repository::CoffeeRepository;

/// Fixed delay between consecutive order emissions
pub const ORDER_INTERVAL: Duration = Duration::from_secs(1);

/// Coffee service providing the catalog operations and the synthetic
/// order stream.
///
/// Catalog reads delegate straight to the repository; the order stream is
/// generated locally and never touches the store.
pub struct CoffeeService<R: CoffeeRepository> {
    repository: Arc<R>,
}

impl<R: CoffeeRepository> CoffeeService<R> {
    /// Create a new CoffeeService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every coffee in the catalog
    #[instrument(skip(self))]
    pub async fn get_all_coffees(&self) -> CoffeeResult<Vec<Coffee>> {
        self.repository.find_all().await
    }

    /// Get a coffee by ID; `None` when absent
    #[instrument(skip(self))]
    pub async fn get_coffee_by_id(&self, id: Uuid) -> CoffeeResult<Option<Coffee>> {
        self.repository.find_by_id(id).await
    }

    /// Produce an unbounded stream of synthetic orders for the given coffee.
    ///
    /// Each element carries `coffee_id` and the wall-clock timestamp at the
    /// moment it was produced. The first order is emitted immediately; every
    /// subsequent one no earlier than [`ORDER_INTERVAL`] after the previous
    /// emission. The delay is measured between emissions, not against a
    /// wall-clock grid.
    ///
    /// The id is deliberately NOT validated against the catalog: an unknown
    /// id yields an endless stream of orders referencing it.
    ///
    /// The stream holds no resources beyond its timer; dropping it (e.g. on
    /// client disconnect) cancels production at the next await point.
    pub fn order_stream(&self, coffee_id: Uuid) -> BoxStream<'static, CoffeeOrder> {
        Box::pin(async_stream::stream! {
            loop {
                yield CoffeeOrder::new(coffee_id);
                tokio::time::sleep(ORDER_INTERVAL).await;
            }
        })
    }
}

impl<R: CoffeeRepository> Clone for CoffeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoffeeError;
    use crate::repository::MockCoffeeRepository;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_get_all_coffees_delegates_to_repository() {
        let mut repo = MockCoffeeRepository::new();
        let coffees = vec![Coffee::new("Americano"), Coffee::new("Java")];
        let expected = coffees.clone();
        repo.expect_find_all()
            .times(1)
            .return_once(move || Ok(coffees));

        let service = CoffeeService::new(repo);
        let result = service.get_all_coffees().await.unwrap();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_get_coffee_by_id_delegates_to_repository() {
        let coffee = Coffee::new("Esmeralda");
        let id = coffee.id;

        let mut repo = MockCoffeeRepository::new();
        let found = coffee.clone();
        repo.expect_find_by_id()
            .withf(move |requested| *requested == id)
            .times(1)
            .return_once(move |_| Ok(Some(found)));

        let service = CoffeeService::new(repo);
        let result = service.get_coffee_by_id(id).await.unwrap();
        assert_eq!(result, Some(coffee));
    }

    #[tokio::test]
    async fn test_get_coffee_by_id_absent_is_none_not_error() {
        let mut repo = MockCoffeeRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let service = CoffeeService::new(repo);
        assert_eq!(service.get_coffee_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut repo = MockCoffeeRepository::new();
        repo.expect_find_all()
            .return_once(|| Err(CoffeeError::Database("connection reset".to_string())));

        let service = CoffeeService::new(repo);
        assert!(service.get_all_coffees().await.is_err());
    }

    #[tokio::test]
    async fn test_order_stream_carries_requested_id_even_when_unknown() {
        // No repository expectations: the stream must never touch the store.
        let service = CoffeeService::new(MockCoffeeRepository::new());
        let unknown = Uuid::new_v4();

        let orders: Vec<CoffeeOrder> = service.order_stream(unknown).take(3).collect().await;

        assert_eq!(orders.len(), 3);
        for order in &orders {
            assert_eq!(order.coffee_id, unknown);
        }
    }

    #[tokio::test]
    async fn test_order_stream_paces_emissions_one_second_apart() {
        let service = CoffeeService::new(MockCoffeeRepository::new());
        let id = Uuid::new_v4();

        // First three events must arrive within ~3.5s and be spaced ~1s apart.
        let orders: Vec<CoffeeOrder> = tokio::time::timeout(
            Duration::from_millis(3500),
            service.order_stream(id).take(3).collect(),
        )
        .await
        .expect("stream stalled");

        for pair in orders.windows(2) {
            let gap = pair[1].date_ordered - pair[0].date_ordered;
            assert!(gap >= chrono::Duration::milliseconds(900), "gap was {gap}");
        }
    }

    #[tokio::test]
    async fn test_order_stream_emits_first_element_immediately() {
        let service = CoffeeService::new(MockCoffeeRepository::new());

        let first = tokio::time::timeout(
            Duration::from_millis(100),
            service.order_stream(Uuid::new_v4()).next(),
        )
        .await
        .expect("first element should not wait for the interval");
        assert!(first.is_some());
    }
}

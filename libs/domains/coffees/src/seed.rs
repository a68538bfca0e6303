//! Startup catalog seeding
//!
//! One-shot routine that resets the coffee catalog to a fixed product list.
//! Invoked once by the process entry point; callers decide whether to await
//! it or run it best-effort alongside the server.

use tracing::{debug, info, instrument};

use crate::error::CoffeeResult;
use crate::models::Coffee;
use crate::repository::CoffeeRepository;

/// The fixed product list, in insertion order
pub const CATALOG: [&str; 6] = [
    "Americano",
    "Esmeralda",
    "Kadis coffee",
    "Café Olé",
    "Delta",
    "Java",
];

/// Reset the catalog: delete every stored coffee, then insert the fixed list
/// with freshly generated identifiers, in name order.
///
/// Returns the newly inserted records. Running it again replaces the previous
/// six records with six new ones; the catalog never grows beyond the list.
///
/// No retries: the first failing operation aborts seeding and the error is
/// returned to the caller.
#[instrument(skip(repository))]
pub async fn seed_catalog<R: CoffeeRepository>(repository: &R) -> CoffeeResult<Vec<Coffee>> {
    let deleted = repository.delete_all().await?;
    debug!(deleted, "Cleared existing catalog");

    let mut seeded = Vec::with_capacity(CATALOG.len());
    for name in CATALOG {
        seeded.push(repository.save(Coffee::new(name)).await?);
    }

    info!(count = seeded.len(), "Coffee catalog seeded");

    // Observational re-read, mirrors what the service will serve
    for coffee in repository.find_all().await? {
        debug!(coffee_id = %coffee.id, name = %coffee.name, "Seeded coffee");
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCoffeeRepository;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_seeding_inserts_exactly_the_catalog() {
        let repo = InMemoryCoffeeRepository::new();
        let seeded = seed_catalog(&repo).await.unwrap();

        assert_eq!(seeded.len(), 6);

        let names: HashSet<&str> = seeded.iter().map(|c| c.name.as_str()).collect();
        let expected: HashSet<&str> = CATALOG.into_iter().collect();
        assert_eq!(names, expected);

        let ids: HashSet<_> = seeded.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 6, "identifiers must be distinct");
    }

    #[tokio::test]
    async fn test_seeded_ids_resolve_and_absent_ids_do_not() {
        let repo = InMemoryCoffeeRepository::new();
        let seeded = seed_catalog(&repo).await.unwrap();

        for coffee in &seeded {
            let found = repo.find_by_id(coffee.id).await.unwrap();
            assert_eq!(found.as_ref(), Some(coffee));
        }

        let absent = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert_eq!(absent, None);
    }

    #[tokio::test]
    async fn test_seeding_twice_leaves_six_records_with_fresh_ids() {
        let repo = InMemoryCoffeeRepository::new();

        let first = seed_catalog(&repo).await.unwrap();
        let second = seed_catalog(&repo).await.unwrap();

        assert_eq!(repo.len().await, 6, "second run must replace, not append");

        let first_ids: HashSet<_> = first.iter().map(|c| c.id).collect();
        for coffee in &second {
            assert!(!first_ids.contains(&coffee.id), "ids must be regenerated");
        }

        // Only the second run's records survive
        for coffee in &first {
            assert_eq!(repo.find_by_id(coffee.id).await.unwrap(), None);
        }
    }
}

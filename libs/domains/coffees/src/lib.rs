//! Coffees Domain
//!
//! This module provides a complete domain implementation for a coffee catalog
//! backed by MongoDB, plus a synthetic per-coffee order stream.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (JSON + SSE)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Catalog reads, order-stream generator
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Coffee, CoffeeOrder
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_coffees::{handlers, CoffeeService, MongoCoffeeRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("coffee-service");
//!
//! let repository = MongoCoffeeRepository::new(db);
//! let service = CoffeeService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{CoffeeError, CoffeeResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryCoffeeRepository;
pub use models::{Coffee, CoffeeOrder};
pub use mongodb::MongoCoffeeRepository;
pub use repository::CoffeeRepository;
pub use seed::{seed_catalog, CATALOG};
pub use service::{CoffeeService, ORDER_INTERVAL};

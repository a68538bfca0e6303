//! Coffees API routes
//!
//! This module wires up the coffees domain to HTTP routes.

use axum::Router;
use domain_coffees::{CoffeeService, MongoCoffeeRepository, handlers};

use crate::state::AppState;

/// Create coffees router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoCoffeeRepository::new(state.db.clone());

    // Create the service
    let service = CoffeeService::new(repository);

    // Return the domain's router
    handlers::router(service)
}

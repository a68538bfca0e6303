//! HTTP handlers for the coffees domain, including the SSE order stream

use axum::{
    Json, Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use axum_helpers::{
    UuidPath,
    errors::responses::{BadRequestUuidResponse, InternalServerErrorResponse, NotFoundResponse},
};
use futures::{StreamExt, stream::Stream};
use std::convert::Infallible;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CoffeeError, CoffeeResult};
use crate::models::{Coffee, CoffeeOrder};
use crate::repository::CoffeeRepository;
use crate::service::CoffeeService;

/// OpenAPI documentation for the Coffees API
#[derive(OpenApi)]
#[openapi(
    paths(list_coffees, get_coffee, coffee_orders),
    components(
        schemas(Coffee, CoffeeOrder),
        responses(
            NotFoundResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Coffees", description = "Coffee catalog and order stream endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the coffees router with all HTTP endpoints
pub fn router<R: CoffeeRepository + 'static>(service: CoffeeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_coffees))
        .route("/{id}", get(get_coffee))
        .route("/{id}/orders", get(coffee_orders))
        .with_state(shared_service)
}

/// List every coffee in the catalog
#[utoipa::path(
    get,
    path = "",
    tag = "Coffees",
    responses(
        (status = 200, description = "List of coffees", body = Vec<Coffee>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_coffees<R: CoffeeRepository>(
    State(service): State<Arc<CoffeeService<R>>>,
) -> CoffeeResult<Json<Vec<Coffee>>> {
    let coffees = service.get_all_coffees().await?;
    Ok(Json(coffees))
}

/// Get a coffee by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Coffees",
    params(
        ("id" = Uuid, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Coffee found", body = Coffee),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_coffee<R: CoffeeRepository>(
    State(service): State<Arc<CoffeeService<R>>>,
    UuidPath(id): UuidPath,
) -> CoffeeResult<Json<Coffee>> {
    let coffee = service
        .get_coffee_by_id(id)
        .await?
        .ok_or(CoffeeError::NotFound(id))?;
    Ok(Json(coffee))
}

/// Stream synthetic orders for a coffee as Server-Sent Events
///
/// Emits one `order` event immediately, then one per second until the client
/// disconnects. The id is not checked against the catalog; an unknown id
/// produces orders all the same.
#[utoipa::path(
    get,
    path = "/{id}/orders",
    tag = "Coffees",
    params(
        ("id" = Uuid, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "SSE stream of orders, one per second"),
        (status = 400, response = BadRequestUuidResponse)
    )
)]
async fn coffee_orders<R: CoffeeRepository + 'static>(
    State(service): State<Arc<CoffeeService<R>>>,
    UuidPath(id): UuidPath,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = service.order_stream(id).map(|order| {
        let event = Event::default()
            .event("order")
            .json_data(&order)
            .unwrap_or_else(|_| Event::default().event("order").data(order.coffee_id.to_string()));
        Ok(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

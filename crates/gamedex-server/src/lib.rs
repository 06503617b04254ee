//! Gamedex server — the GraphQL surface over the in-memory catalog.
//!
//! The catalog is built once at startup and shared with every resolver
//! through the schema's context data; resolvers read and write it directly,
//! recomputing relationship fields from the live collections on each
//! request.

pub mod graphql;
pub mod handlers;

use async_graphql_axum::GraphQL;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::graphql::CatalogSchema;

/// Build the HTTP router: GraphiQL on GET `/`, the GraphQL endpoint on
/// POST `/`, and a liveness probe on `/health`.
pub fn app(schema: CatalogSchema) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/",
            get(handlers::graphiql).post_service(GraphQL::new(schema)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

//! HTTP handlers outside the GraphQL schema.

use async_graphql::http::GraphiQLSource;
use axum::response::{Html, IntoResponse};

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Interactive GraphiQL playground for the endpoint at `/`.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

//! GraphQL schema over the catalog.
//!
//! Resolution is field-by-field: the query and mutation roots delegate to
//! the catalog, and the object types resolve their relationship fields by
//! scanning the live collections on every request — a review's `game` field
//! goes null the moment the game is deleted.

mod mutation;
mod objects;
mod query;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use gamedex_core::Catalog;

pub use mutation::{AddGameInput, EditGameInput, Mutation};
pub use objects::{Author, Game, Review};
pub use query::Query;

/// The complete GraphQL schema.
pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema with the given catalog as shared context data.
pub fn build_schema(catalog: Arc<Catalog>) -> CatalogSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(catalog)
        .finish()
}

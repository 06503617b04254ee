//! Query root.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use gamedex_core::Catalog;

use super::objects::{Author, Game, Review};

pub struct Query;

#[Object]
impl Query {
    /// Every game in the catalog.
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.games().into_iter().map(Game).collect())
    }

    /// A single game by id.
    async fn game(&self, ctx: &Context<'_>, id: String) -> Result<Option<Game>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.game(&id).map(Game))
    }

    /// Every author.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.authors().into_iter().map(Author).collect())
    }

    /// A single author by id.
    async fn author(&self, ctx: &Context<'_>, id: String) -> Result<Option<Author>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.author(&id).map(Author))
    }

    /// Every review.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.reviews().into_iter().map(Review).collect())
    }

    /// A single review by id.
    async fn review(&self, ctx: &Context<'_>, id: String) -> Result<Option<Review>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.review(&id).map(Review))
    }
}

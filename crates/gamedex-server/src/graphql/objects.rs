//! GraphQL object types wrapping the catalog records.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use gamedex_core::types::{Author as AuthorRecord, Game as GameRecord, Review as ReviewRecord};
use gamedex_core::Catalog;

/// A game and, on demand, its reviews.
pub struct Game(pub GameRecord);

#[Object]
impl Game {
    async fn id(&self) -> &str {
        &self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn platform(&self) -> &Vec<String> {
        &self.0.platform
    }

    /// Reviews of this game, resolved against the current review collection.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog
            .reviews_for_game(&self.0.id)
            .into_iter()
            .map(Review)
            .collect())
    }
}

/// A review author and, on demand, their reviews.
pub struct Author(pub AuthorRecord);

#[Object]
impl Author {
    async fn id(&self) -> &str {
        &self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn verified(&self) -> bool {
        self.0.verified
    }

    /// Reviews written by this author.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog
            .reviews_for_author(&self.0.id)
            .into_iter()
            .map(Review)
            .collect())
    }
}

/// A single review, with its game and author resolved live.
pub struct Review(pub ReviewRecord);

#[Object]
impl Review {
    async fn id(&self) -> &str {
        &self.0.id
    }

    async fn rating(&self) -> i32 {
        self.0.rating
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    /// The reviewed game. Null when the game has since been deleted.
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<Game>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.game_for_review(&self.0.game_id).map(Game))
    }

    /// The review's author. Null when the reference dangles.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.author_for_review(&self.0.author_id).map(Author))
    }
}

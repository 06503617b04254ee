//! Mutation root: create, update, and delete games.

use std::sync::Arc;

use async_graphql::{Context, InputObject, Object, Result};
use gamedex_core::{Catalog, GameChanges, NewGame};

use super::objects::Game;

/// Fields for a game to be created.
#[derive(InputObject)]
pub struct AddGameInput {
    pub title: String,
    pub platform: Vec<String>,
}

/// Partial edits to a game. Absent fields keep their current value.
#[derive(InputObject)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

pub struct Mutation;

#[Object]
impl Mutation {
    /// Delete the game with the given id and return the remaining games.
    /// Unknown ids are a no-op; reviews of the deleted game stay in place.
    async fn delete_game(&self, ctx: &Context<'_>, id: String) -> Result<Vec<Game>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog.delete_game(&id).into_iter().map(Game).collect())
    }

    /// Add a game with a freshly allocated id.
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Game> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(Game(catalog.add_game(NewGame {
            title: game.title,
            platform: game.platform,
        })))
    }

    /// Merge edits into the game with the given id. Returns null, leaving
    /// the catalog unchanged, when no game matches.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: String,
        edits: EditGameInput,
    ) -> Result<Option<Game>> {
        let catalog = ctx.data::<Arc<Catalog>>()?;
        Ok(catalog
            .update_game(
                &id,
                GameChanges {
                    title: edits.title,
                    platform: edits.platform,
                },
            )
            .map(Game))
    }
}

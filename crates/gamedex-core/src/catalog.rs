//! The in-memory record store and its relationship lookups.

use parking_lot::RwLock;
use tracing::debug;

use crate::id::{IdAllocator, RandomIdAllocator};
use crate::seed::SeedData;
use crate::types::{Author, Game, GameChanges, NewGame, Review};

/// The single source of truth for all three collections.
///
/// Collections preserve insertion order, and every lookup scans the live
/// collection at call time — relationship results are never cached, so they
/// always reflect the current contents of the related collection, including
/// records added or removed after the referencing record was created.
///
/// Games can be created, updated, and deleted; authors and reviews are
/// read-only once seeded. The locks keep each operation atomic under the
/// server's multi-threaded runtime.
pub struct Catalog {
    games: RwLock<Vec<Game>>,
    authors: RwLock<Vec<Author>>,
    reviews: RwLock<Vec<Review>>,
    ids: Box<dyn IdAllocator>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::with_seed(SeedData::default())
    }

    /// Create a catalog holding the given dataset.
    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            games: RwLock::new(seed.games),
            authors: RwLock::new(seed.authors),
            reviews: RwLock::new(seed.reviews),
            ids: Box::new(RandomIdAllocator),
        }
    }

    /// Replace the identifier allocator used by [`Catalog::add_game`].
    pub fn with_id_allocator(mut self, ids: Box<dyn IdAllocator>) -> Self {
        self.ids = ids;
        self
    }

    /// All games, in insertion order.
    pub fn games(&self) -> Vec<Game> {
        self.games.read().clone()
    }

    /// The game with the given id, if any.
    pub fn game(&self, id: &str) -> Option<Game> {
        self.games.read().iter().find(|g| g.id == id).cloned()
    }

    /// All authors, in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.authors.read().clone()
    }

    /// The author with the given id, if any.
    pub fn author(&self, id: &str) -> Option<Author> {
        self.authors.read().iter().find(|a| a.id == id).cloned()
    }

    /// All reviews, in insertion order.
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.read().clone()
    }

    /// The review with the given id, if any.
    pub fn review(&self, id: &str) -> Option<Review> {
        self.reviews.read().iter().find(|r| r.id == id).cloned()
    }

    /// Remove every game whose id matches and return the resulting
    /// collection. Unknown ids are a no-op; reviews referencing the deleted
    /// game are left in place.
    pub fn delete_game(&self, id: &str) -> Vec<Game> {
        let mut games = self.games.write();
        games.retain(|g| g.id != id);
        debug!("Deleted game {}, {} games remain", id, games.len());
        games.clone()
    }

    /// Create a game with a freshly allocated id, append it, and return it.
    pub fn add_game(&self, new: NewGame) -> Game {
        let game = Game {
            id: self.ids.allocate(),
            title: new.title,
            platform: new.platform,
        };
        debug!("Adding game {} ({})", game.id, game.title);
        self.games.write().push(game.clone());
        game
    }

    /// Merge the given changes into the game whose id matches, in place.
    /// Fields absent from `changes` keep their current value and the id is
    /// never touched. Returns the post-merge game, or `None` if no game
    /// matches (the collection is then left unchanged).
    pub fn update_game(&self, id: &str, changes: GameChanges) -> Option<Game> {
        let mut games = self.games.write();
        let game = games.iter_mut().find(|g| g.id == id)?;
        if let Some(title) = changes.title {
            game.title = title;
        }
        if let Some(platform) = changes.platform {
            game.platform = platform;
        }
        debug!("Updated game {}", id);
        Some(game.clone())
    }

    /// Reviews whose `game_id` matches, in collection order. Rescans on
    /// every call, so reviews referencing a deleted game still show up.
    pub fn reviews_for_game(&self, game_id: &str) -> Vec<Review> {
        self.reviews
            .read()
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect()
    }

    /// Reviews whose `author_id` matches, in collection order.
    pub fn reviews_for_author(&self, author_id: &str) -> Vec<Review> {
        self.reviews
            .read()
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect()
    }

    /// The game a review points at; `None` when the reference dangles.
    pub fn game_for_review(&self, game_id: &str) -> Option<Game> {
        self.game(game_id)
    }

    /// The author a review points at; `None` when the reference dangles.
    pub fn author_for_review(&self, author_id: &str) -> Option<Author> {
        self.author(author_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

//! Gamedex core — an in-memory game review catalog.
//!
//! Holds the three record collections (games, authors, reviews), the game
//! mutation operations, and the scan-based relationship lookups the GraphQL
//! layer resolves fields with. Nothing here touches the network; the
//! catalog is plain shared state threaded through the server by handle.

pub mod catalog;
pub mod error;
pub mod id;
pub mod seed;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use id::{IdAllocator, RandomIdAllocator};
pub use seed::SeedData;
pub use types::{Author, Game, GameChanges, NewGame, Review};

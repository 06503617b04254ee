//! Record types for the catalog.

use serde::{Deserialize, Serialize};

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub platform: Vec<String>,
}

/// A review author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub verified: bool,
}

/// A review of a game.
///
/// `game_id` and `author_id` name records in the other collections by id;
/// nothing enforces that those records exist, and deleting a game leaves
/// its reviews in place with a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub rating: i32,
    pub content: String,
    pub game_id: String,
    pub author_id: String,
}

/// Fields for a game to be created. The id is allocated by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub platform: Vec<String>,
}

/// Partial edits to a game. Absent fields keep their current value; the id
/// can never be edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameChanges {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

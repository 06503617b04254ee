//! Fixed startup dataset for the catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Author, Game, Review};

/// Initial contents for all three collections.
///
/// Deserializable so a JSON file can supply it; [`SeedData::demo`] is the
/// built-in default the server falls back to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl SeedData {
    /// Load a seed from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The built-in demo dataset: five games, three authors, seven reviews.
    pub fn demo() -> Self {
        Self {
            games: vec![
                game("1", "Zelda, Tears of the Kingdom", &["Switch"]),
                game("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"]),
                game("3", "Elden Ring", &["PS5", "Xbox", "PC"]),
                game("4", "Mario Kart", &["Switch"]),
                game("5", "Pokemon Scarlet and Violet", &["PS5", "Xbox", "PC"]),
            ],
            authors: vec![
                author("1", "mario", true),
                author("2", "yoshi", false),
                author("3", "peach", true),
            ],
            reviews: vec![
                review("1", 9, "lorem ipsum", "2", "1"),
                review("2", 10, "lorem ipsum", "1", "2"),
                review("3", 7, "lorem ipsum", "3", "3"),
                review("4", 5, "lorem ipsum", "4", "2"),
                review("5", 8, "lorem ipsum", "5", "2"),
                review("6", 7, "lorem ipsum", "2", "1"),
                review("7", 10, "lorem ipsum", "1", "3"),
            ],
        }
    }
}

fn game(id: &str, title: &str, platform: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        platform: platform.iter().map(|p| p.to_string()).collect(),
    }
}

fn author(id: &str, name: &str, verified: bool) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        verified,
    }
}

fn review(id: &str, rating: i32, content: &str, game_id: &str, author_id: &str) -> Review {
    Review {
        id: id.to_string(),
        rating,
        content: content.to_string(),
        game_id: game_id.to_string(),
        author_id: author_id.to_string(),
    }
}

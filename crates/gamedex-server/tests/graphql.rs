//! Executes operations against the built schema, no network involved:
//! every query and mutation, the nested relationship fields, and the
//! null-`game` behavior for reviews of a deleted game.

use std::sync::Arc;

use async_graphql::value;
use gamedex_core::{Catalog, IdAllocator, SeedData};
use gamedex_server::graphql::{build_schema, CatalogSchema};

/// Allocator returning a fixed id, for deterministic create tests.
struct FixedId(&'static str);

impl IdAllocator for FixedId {
    fn allocate(&self) -> String {
        self.0.to_string()
    }
}

fn demo_schema() -> CatalogSchema {
    build_schema(Arc::new(Catalog::with_seed(SeedData::demo())))
}

#[tokio::test]
async fn games_query_lists_the_collection() {
    let resp = demo_schema().execute("{ games { id title } }").await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let games = data["games"].as_array().unwrap();
    assert_eq!(games.len(), 5);
    assert_eq!(games[0]["id"], "1");
    assert_eq!(games[2]["title"], "Elden Ring");
}

#[tokio::test]
async fn game_query_by_id() {
    let resp = demo_schema()
        .execute(r#"{ game(id: "2") { id title platform } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "game": {
                "id": "2",
                "title": "Final Fantasy 7 Remake",
                "platform": ["PS5", "Xbox"],
            }
        })
    );
}

#[tokio::test]
async fn lookups_for_unknown_ids_are_null() {
    let resp = demo_schema()
        .execute(r#"{ game(id: "999") { id } author(id: "999") { id } review(id: "999") { id } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({ "game": null, "author": null, "review": null })
    );
}

#[tokio::test]
async fn review_resolves_game_and_author() {
    let resp = demo_schema()
        .execute(r#"{ review(id: "1") { rating content game { title } author { name verified } } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "review": {
                "rating": 9,
                "content": "lorem ipsum",
                "game": { "title": "Final Fantasy 7 Remake" },
                "author": { "name": "mario", "verified": true },
            }
        })
    );
}

#[tokio::test]
async fn author_and_game_resolve_their_reviews_in_order() {
    let resp = demo_schema()
        .execute(r#"{ author(id: "2") { reviews { id } } game(id: "2") { reviews { id } } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "author": { "reviews": [{ "id": "2" }, { "id": "4" }, { "id": "5" }] },
            "game": { "reviews": [{ "id": "1" }, { "id": "6" }] },
        })
    );
}

#[tokio::test]
async fn add_game_returns_the_new_record() {
    let catalog = Catalog::with_seed(SeedData::demo()).with_id_allocator(Box::new(FixedId("42")));
    let schema = build_schema(Arc::new(catalog));

    let resp = schema
        .execute(r#"mutation { addGame(game: { title: "Hades", platform: ["PC", "Switch"] }) { id title platform } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "addGame": { "id": "42", "title": "Hades", "platform": ["PC", "Switch"] }
        })
    );

    // The new game is queryable afterwards.
    let resp = schema.execute(r#"{ game(id: "42") { title } }"#).await;
    assert_eq!(resp.data, value!({ "game": { "title": "Hades" } }));
}

#[tokio::test]
async fn add_game_allocates_numeric_ids() {
    let resp = demo_schema()
        .execute(r#"mutation { addGame(game: { title: "X", platform: ["PC"] }) { id } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let id = data["addGame"]["id"].as_str().unwrap();
    assert!(id.chars().all(|c| c.is_ascii_digit()));
    assert!(id.parse::<u32>().unwrap() < 10_000);
}

#[tokio::test]
async fn delete_game_returns_remaining_games_and_orphans_reviews() {
    let schema = demo_schema();

    let resp = schema
        .execute(r#"mutation { deleteGame(id: "1") { id } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "deleteGame": [{ "id": "2" }, { "id": "3" }, { "id": "4" }, { "id": "5" }]
        })
    );

    // Reviews of the deleted game survive; their game field is now null.
    let resp = schema
        .execute(r#"{ review(id: "2") { id game { id } author { name } } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "review": { "id": "2", "game": null, "author": { "name": "yoshi" } }
        })
    );

    // Deleting again is a no-op with the same result.
    let resp = schema
        .execute(r#"mutation { deleteGame(id: "1") { id } }"#)
        .await;
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["deleteGame"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn update_game_merges_edits() {
    let schema = demo_schema();

    let resp = schema
        .execute(r#"mutation { updateGame(id: "2", edits: { title: "FF7 Rebirth" }) { id title platform } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(
        resp.data,
        value!({
            "updateGame": {
                "id": "2",
                "title": "FF7 Rebirth",
                // Untouched by the edit.
                "platform": ["PS5", "Xbox"],
            }
        })
    );
}

#[tokio::test]
async fn update_of_a_deleted_game_is_null() {
    let schema = demo_schema();
    schema
        .execute(r#"mutation { deleteGame(id: "3") { id } }"#)
        .await;

    let resp = schema
        .execute(r#"mutation { updateGame(id: "3", edits: { title: "New" }) { id } }"#)
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    assert_eq!(resp.data, value!({ "updateGame": null }));

    // Nothing was resurrected.
    let resp = schema.execute("{ games { id } }").await;
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["games"].as_array().unwrap().len(), 4);
}

//! Error types for gamedex.
//!
//! Catalog reads and writes cannot fail — a missing record is an `Option`,
//! not an error. Errors only arise on the seed-loading path.

use thiserror::Error;

/// Main error type for gamedex.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

//! Error types for level catalog loading.

use thiserror::Error;

/// Defects in level data, reported when a catalog is built.
///
/// These are configuration errors: a catalog that fails validation is never
/// handed to a session, so gameplay itself has no error path.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog contains no levels at all.
    #[error("level catalog is empty")]
    Empty,

    /// Level numbers must run 1, 2, 3, ... in catalog order.
    #[error("level at position {position} has number {found}, expected {expected}")]
    LevelNumbering {
        position: usize,
        expected: u32,
        found: u32,
    },

    /// A level without pairs could never be completed.
    #[error("level {level} has no character pairs")]
    NoPairs { level: u32 },

    /// Pair ids tag pool items and must be non-empty.
    #[error("level {level} has a pair with an empty id")]
    EmptyPairId { level: u32 },

    /// Pair ids must be unique within a level.
    #[error("level {level} repeats pair id '{pair_id}'")]
    DuplicatePairId { level: u32, pair_id: String },

    /// The composed character is missing.
    #[error("level {level} pair '{pair_id}' has an empty result character")]
    EmptyResult { level: u32, pair_id: String },

    /// Both fragments of a pair must be present.
    #[error("level {level} pair '{pair_id}' has an empty fragment at index {index}")]
    EmptyFragment {
        level: u32,
        pair_id: String,
        index: usize,
    },

    /// Catalog JSON could not be parsed into level records.
    #[error("failed to parse level catalog: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        CatalogError::Parse { source }
    }
}

//! Match evaluator: decides what a second click does to the pending selection.

use serde::Serialize;

use crate::pool::PoolItem;

/// The pending piece the player picked first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub id: String,
    pub content: String,
    pub pair_id: String,
}

impl Selection {
    pub fn new(id: impl Into<String>, content: impl Into<String>, pair_id: impl Into<String>) -> Self {
        Selection {
            id: id.into(),
            content: content.into(),
            pair_id: pair_id.into(),
        }
    }
}

impl From<&PoolItem> for Selection {
    fn from(item: &PoolItem) -> Self {
        Selection {
            id: item.id.clone(),
            content: item.content.clone(),
            pair_id: item.pair_id.clone(),
        }
    }
}

/// Result of clicking a piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was pending; the piece becomes the selection.
    Select,
    /// The pending piece was clicked again; selection is cancelled.
    Deselect,
    /// Both pieces come from this pair.
    Match { pair_id: String },
    /// Pieces from different pairs; selection is dropped.
    Miss,
}

/// Pure decision on a click. Which pool a piece came from does not matter,
/// only its id and pair id.
pub fn evaluate(pending: Option<&Selection>, picked: &Selection) -> Outcome {
    match pending {
        None => Outcome::Select,
        Some(first) if first.id == picked.id => Outcome::Deselect,
        Some(first) if first.pair_id == picked.pair_id => Outcome::Match {
            pair_id: first.pair_id.clone(),
        },
        Some(_) => Outcome::Miss,
    }
}

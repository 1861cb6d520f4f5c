//! Read-only view of a session handed to the presentation layer.

use serde::Serialize;

use crate::levels::{CharacterPair, GameLevel};
use crate::matching::Selection;
use crate::pool::{PoolItem, Side};
use crate::session::Phase;

/// Poem metadata for the level header, completion card and full-poem overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level_number: u32,
    pub grade: String,
    pub poem_title: String,
    pub poem_author: String,
    pub full_line: String,
    pub meaning: String,
    pub full_poem: Vec<String>,
}

impl From<&GameLevel> for LevelInfo {
    fn from(level: &GameLevel) -> Self {
        LevelInfo {
            level_number: level.level_number,
            grade: level.grade.clone(),
            poem_title: level.poem_title.clone(),
            poem_author: level.poem_author.clone(),
            full_line: level.full_line.clone(),
            meaning: level.meaning.clone(),
            full_poem: level.full_poem.clone(),
        }
    }
}

/// A pool piece plus the flags the renderer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceView {
    pub id: String,
    pub content: String,
    pub pair_id: String,
    pub selected: bool,
    /// Counterpart of the pending selection, shown only with hints on.
    pub hinted: bool,
    pub solved: bool,
}

impl PieceView {
    pub(crate) fn new(
        item: &PoolItem,
        selection: Option<&Selection>,
        hint_enabled: bool,
        solved: bool,
    ) -> Self {
        let selected = selection.is_some_and(|s| s.id == item.id);
        let hinted = hint_enabled
            && selection.is_some_and(|s| s.pair_id == item.pair_id && s.id != item.id);
        PieceView {
            id: item.id.clone(),
            content: item.content.clone(),
            pair_id: item.pair_id.clone(),
            selected,
            hinted,
            solved,
        }
    }
}

/// Everything the presentation layer reads, frozen at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub current_level: u32,
    pub total_levels: usize,
    pub level: Option<LevelInfo>,
    pub pairs: Vec<CharacterPair>,
    pub left: Vec<PieceView>,
    pub right: Vec<PieceView>,
    pub selection: Option<Selection>,
    pub selection_side: Option<Side>,
    pub solved_count: usize,
    pub total_pairs: usize,
    /// solved_count / total_pairs, 0.0 with no level loaded.
    pub progress: f64,
    pub hint_enabled: bool,
    pub hint_preview: Option<String>,
    pub show_full_poem: bool,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//! Level catalog: the ordered, read-only list of poem levels.
//!
//! Bundled level data lives in one file per poem (`level1.rs` .. `level6.rs`)
//! as `'static` descriptors. [`Catalog::builtin`] turns those into owned
//! [`GameLevel`] records, and [`Catalog::from_json`] accepts the same records
//! from JSON. Either way the catalog is validated once, up front; a session
//! only ever sees a well-formed catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

mod level1;
mod level2;
mod level3;
mod level4;
mod level5;
mod level6;

// --- Static descriptors -----------------------------------------------------

/// Compile-time pair definition used by the bundled levels.
#[derive(Clone, Copy, Debug)]
pub struct PairDesc {
    pub id: &'static str,
    pub result: &'static str,
    pub parts: [&'static str; 2],
}

/// Compile-time level definition (immutable).
#[derive(Debug)]
pub struct LevelDesc {
    pub level_number: u32,
    pub grade: &'static str,
    pub poem_title: &'static str,
    pub poem_author: &'static str,
    pub full_line: &'static str,
    pub meaning: &'static str,
    pub full_poem: &'static [&'static str],
    pub pairs: &'static [PairDesc],
}

/// Bundled levels in play order.
pub static BUILTIN_LEVELS: [&LevelDesc; 6] = [
    &level1::LEVEL1,
    &level2::LEVEL2,
    &level3::LEVEL3,
    &level4::LEVEL4,
    &level5::LEVEL5,
    &level6::LEVEL6,
];

// --- Runtime records ---------------------------------------------------------

/// Two fragments and the character they compose.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPair {
    pub id: String,
    pub result: String,
    pub parts: [String; 2],
    #[serde(default)]
    pub solved: bool,
}

impl From<&PairDesc> for CharacterPair {
    fn from(desc: &PairDesc) -> Self {
        CharacterPair {
            id: desc.id.to_owned(),
            result: desc.result.to_owned(),
            parts: [desc.parts[0].to_owned(), desc.parts[1].to_owned()],
            solved: false,
        }
    }
}

/// One poem level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLevel {
    pub level_number: u32,
    #[serde(default)]
    pub grade: String,
    pub pairs: Vec<CharacterPair>,
    pub poem_title: String,
    pub poem_author: String,
    pub full_line: String,
    pub meaning: String,
    pub full_poem: Vec<String>,
}

impl From<&LevelDesc> for GameLevel {
    fn from(desc: &LevelDesc) -> Self {
        GameLevel {
            level_number: desc.level_number,
            grade: desc.grade.to_owned(),
            pairs: desc.pairs.iter().map(CharacterPair::from).collect(),
            poem_title: desc.poem_title.to_owned(),
            poem_author: desc.poem_author.to_owned(),
            full_line: desc.full_line.to_owned(),
            meaning: desc.meaning.to_owned(),
            full_poem: desc.full_poem.iter().map(|line| (*line).to_owned()).collect(),
        }
    }
}

impl GameLevel {
    /// Pairs with every `solved` flag cleared, as used for a fresh attempt.
    pub fn fresh_pairs(&self) -> Vec<CharacterPair> {
        self.pairs
            .iter()
            .map(|p| CharacterPair {
                solved: false,
                ..p.clone()
            })
            .collect()
    }
}

// --- Catalog -------------------------------------------------------------------

/// Validated, ordered level list.
#[derive(Clone, Debug)]
pub struct Catalog {
    levels: Vec<GameLevel>,
}

impl Catalog {
    /// Validate and wrap a list of levels.
    pub fn new(levels: Vec<GameLevel>) -> Result<Self, CatalogError> {
        validate(&levels)?;
        Ok(Catalog { levels })
    }

    /// The bundled poem levels.
    pub fn builtin() -> Result<Self, CatalogError> {
        Catalog::new(BUILTIN_LEVELS.iter().map(|d| GameLevel::from(*d)).collect())
    }

    /// Parse a JSON array of level records (camelCase field names).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let levels: Vec<GameLevel> = serde_json::from_str(json)?;
        Catalog::new(levels)
    }

    /// Look up a level by its 1-based number.
    pub fn get_level(&self, level_number: u32) -> Option<&GameLevel> {
        self.levels.iter().find(|l| l.level_number == level_number)
    }

    pub fn count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[GameLevel] {
        &self.levels
    }
}

fn validate(levels: &[GameLevel]) -> Result<(), CatalogError> {
    if levels.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (position, level) in levels.iter().enumerate() {
        let expected = position as u32 + 1;
        if level.level_number != expected {
            return Err(CatalogError::LevelNumbering {
                position,
                expected,
                found: level.level_number,
            });
        }
        validate_pairs(level)?;
    }
    Ok(())
}

fn validate_pairs(level: &GameLevel) -> Result<(), CatalogError> {
    let number = level.level_number;
    if level.pairs.is_empty() {
        return Err(CatalogError::NoPairs { level: number });
    }
    let mut seen = HashSet::new();
    for pair in &level.pairs {
        if pair.id.is_empty() {
            return Err(CatalogError::EmptyPairId { level: number });
        }
        if !seen.insert(pair.id.as_str()) {
            return Err(CatalogError::DuplicatePairId {
                level: number,
                pair_id: pair.id.clone(),
            });
        }
        if pair.result.is_empty() {
            return Err(CatalogError::EmptyResult {
                level: number,
                pair_id: pair.id.clone(),
            });
        }
        if let Some(index) = pair.parts.iter().position(|part| part.is_empty()) {
            return Err(CatalogError::EmptyFragment {
                level: number,
                pair_id: pair.id.clone(),
                index,
            });
        }
    }
    Ok(())
}

//! Pool shuffler: splits a level's pairs into the two on-screen pools.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::levels::CharacterPair;

/// Which pool a piece sits in. Left holds `parts[0]`, right holds `parts[1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// One fragment piece in a pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolItem {
    /// `"<pairId>-0"` for left pieces, `"<pairId>-1"` for right pieces.
    pub id: String,
    pub content: String,
    pub pair_id: String,
}

impl PoolItem {
    fn from_pair(pair: &CharacterPair, side: Side) -> Self {
        let idx = side.index();
        PoolItem {
            id: format!("{}-{}", pair.id, idx),
            content: pair.parts[idx].clone(),
            pair_id: pair.id.clone(),
        }
    }
}

/// Both pools of the level currently being played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pools {
    pub left: Vec<PoolItem>,
    pub right: Vec<PoolItem>,
}

impl Pools {
    /// Build and independently shuffle both pools.
    pub fn shuffled<R: Rng + ?Sized>(pairs: &[CharacterPair], rng: &mut R) -> Self {
        let mut left: Vec<PoolItem> = pairs
            .iter()
            .map(|p| PoolItem::from_pair(p, Side::Left))
            .collect();
        let mut right: Vec<PoolItem> = pairs
            .iter()
            .map(|p| PoolItem::from_pair(p, Side::Right))
            .collect();
        left.shuffle(rng);
        right.shuffle(rng);
        Pools { left, right }
    }

    /// Find a piece by id in either pool.
    pub fn find(&self, id: &str) -> Option<(Side, &PoolItem)> {
        self.left
            .iter()
            .find(|item| item.id == id)
            .map(|item| (Side::Left, item))
            .or_else(|| {
                self.right
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| (Side::Right, item))
            })
    }

    pub fn side(&self, side: Side) -> &[PoolItem] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pairs(n: usize) -> Vec<CharacterPair> {
        (0..n)
            .map(|i| CharacterPair {
                id: format!("p{i}"),
                result: "休".into(),
                parts: [format!("a{i}"), format!("b{i}")],
                solved: false,
            })
            .collect()
    }

    #[test]
    fn ids_follow_side_suffix() {
        let mut rng = StdRng::seed_from_u64(7);
        let pools = Pools::shuffled(&pairs(3), &mut rng);
        assert!(pools.left.iter().all(|i| i.id == format!("{}-0", i.pair_id)));
        assert!(pools.right.iter().all(|i| i.id == format!("{}-1", i.pair_id)));
    }

    #[test]
    fn each_side_carries_its_own_fragment() {
        let mut rng = StdRng::seed_from_u64(1);
        let pools = Pools::shuffled(&pairs(4), &mut rng);
        for item in &pools.left {
            assert_eq!(item.content, format!("a{}", &item.pair_id[1..]));
        }
        for item in &pools.right {
            assert_eq!(item.content, format!("b{}", &item.pair_id[1..]));
        }
    }

    #[test]
    fn pools_are_permutations() {
        let input = pairs(8);
        let mut rng = StdRng::seed_from_u64(42);
        let pools = Pools::shuffled(&input, &mut rng);
        let expected: HashSet<String> = input.iter().map(|p| p.id.clone()).collect();
        for side in [Side::Left, Side::Right] {
            let got: HashSet<String> =
                pools.side(side).iter().map(|i| i.pair_id.clone()).collect();
            assert_eq!(pools.side(side).len(), input.len());
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn find_reports_side() {
        let mut rng = StdRng::seed_from_u64(3);
        let pools = Pools::shuffled(&pairs(2), &mut rng);
        assert_eq!(pools.find("p1-0").map(|(s, _)| s), Some(Side::Left));
        assert_eq!(pools.find("p1-1").map(|(s, _)| s), Some(Side::Right));
        assert!(pools.find("p9-0").is_none());
    }

    #[test]
    fn solved_flag_does_not_affect_pools() {
        let mut input = pairs(3);
        input[1].solved = true;
        let mut rng = StdRng::seed_from_u64(5);
        let pools = Pools::shuffled(&input, &mut rng);
        assert_eq!(pools.left.len(), 3);
        assert_eq!(pools.right.len(), 3);
    }
}

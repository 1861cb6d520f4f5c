//! Session state machine.
//!
//! A [`Session`] owns the catalog, the per-level working copy (pairs with
//! solved flags, shuffled pools) and the coarse [`Phase`]. Every inbound event
//! is a synchronous method; events that do not apply to the current phase are
//! no-ops. Pools are shuffled exactly once per level entry, never on read.
//!
//! ```text
//! Start --start--> Playing --last match--> LevelComplete --advance--> Playing (next)
//!                     ^                          |
//!                     |                          +--advance on last level--> GameOver
//!  any phase --exit--> Start           any phase --restart--> Playing (level 1)
//! ```

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::cue::{Cue, CueSink, Silent};
use crate::levels::{Catalog, CharacterPair};
use crate::matching::{Outcome, Selection, evaluate};
use crate::pool::{Pools, Side};
use crate::snapshot::{LevelInfo, PieceView, Snapshot};

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Start,
    Playing,
    LevelComplete,
    GameOver,
}

/// Scalar session state. `current_level` is the 1-based level number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub current_level: u32,
    pub selection: Option<Selection>,
    pub solved_count: usize,
    pub phase: Phase,
    pub hint_enabled: bool,
}

impl SessionState {
    fn initial(hint_enabled: bool) -> Self {
        SessionState {
            current_level: 1,
            selection: None,
            solved_count: 0,
            phase: Phase::Start,
            hint_enabled,
        }
    }
}

/// Working copy of the level being played; dropped when the level is left.
#[derive(Clone, Debug)]
struct ActiveLevel {
    pairs: Vec<CharacterPair>,
    pools: Pools,
}

impl ActiveLevel {
    fn is_solved(&self, pair_id: &str) -> bool {
        self.pairs.iter().any(|p| p.id == pair_id && p.solved)
    }

    fn mark_solved(&mut self, pair_id: &str) {
        if let Some(pair) = self.pairs.iter_mut().find(|p| p.id == pair_id) {
            pair.solved = true;
        }
    }

    fn result_of(&self, pair_id: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.id == pair_id)
            .map(|p| p.result.as_str())
    }
}

pub struct Session<R: Rng = StdRng> {
    catalog: Catalog,
    config: SessionConfig,
    state: SessionState,
    level: Option<ActiveLevel>,
    show_full_poem: bool,
    rng: R,
    cues: Box<dyn CueSink>,
}

impl Session<StdRng> {
    /// Session shuffling with an entropy-seeded RNG.
    pub fn new(catalog: Catalog, config: SessionConfig) -> Self {
        Session::with_rng(catalog, config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(catalog: Catalog, config: SessionConfig, rng: R) -> Self {
        let state = SessionState::initial(config.hint_enabled);
        Session {
            catalog,
            config,
            state,
            level: None,
            show_full_poem: false,
            rng,
            cues: Box::new(Silent),
        }
    }

    /// Attach a feedback sink. Ignored while `audio_cues` is off.
    pub fn with_cues(mut self, sink: impl CueSink + 'static) -> Self {
        self.cues = Box::new(sink);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pairs of the current level with their solved flags (empty at Start).
    pub fn pairs(&self) -> &[CharacterPair] {
        self.level.as_ref().map(|l| l.pairs.as_slice()).unwrap_or(&[])
    }

    pub fn pools(&self) -> Option<&Pools> {
        self.level.as_ref().map(|l| &l.pools)
    }

    pub fn total_pairs(&self) -> usize {
        self.pairs().len()
    }

    pub fn full_poem_visible(&self) -> bool {
        self.show_full_poem
    }

    /// Target character of the pending selection, if hints are on.
    pub fn hint_preview(&self) -> Option<&str> {
        if !self.state.hint_enabled {
            return None;
        }
        let selection = self.state.selection.as_ref()?;
        self.level.as_ref()?.result_of(&selection.pair_id)
    }

    // --- Events -------------------------------------------------------------

    pub fn start(&mut self) {
        if self.state.phase != Phase::Start {
            trace!("start ignored in {:?}", self.state.phase);
            return;
        }
        self.enter_level(1);
    }

    /// Click on a piece. Unknown, mismatched or already-solved pieces are ignored.
    /// `content` plays no part in matching; it is compared with the pool item
    /// only to reject stale events.
    pub fn select_fragment(&mut self, picked: Selection) {
        if self.state.phase != Phase::Playing {
            trace!("selection {} ignored in {:?}", picked.id, self.state.phase);
            return;
        }
        let Some(active) = self.level.as_mut() else {
            return;
        };
        let known = active.pools.find(&picked.id).is_some_and(|(_, item)| {
            item.pair_id == picked.pair_id && item.content == picked.content
        });
        if !known || active.is_solved(&picked.pair_id) {
            trace!("selection {} does not name a live piece", picked.id);
            return;
        }

        let cue = match evaluate(self.state.selection.as_ref(), &picked) {
            Outcome::Select => {
                self.state.selection = Some(picked);
                Cue::Select
            }
            Outcome::Deselect => {
                self.state.selection = None;
                Cue::Deselect
            }
            Outcome::Match { pair_id } => {
                active.mark_solved(&pair_id);
                self.state.solved_count += 1;
                self.state.selection = None;
                debug!(
                    "pair {} solved ({}/{})",
                    pair_id,
                    self.state.solved_count,
                    active.pairs.len()
                );
                if self.state.solved_count == active.pairs.len() {
                    self.state.phase = Phase::LevelComplete;
                    info!("level {} complete", self.state.current_level);
                    Cue::LevelComplete
                } else {
                    Cue::Match
                }
            }
            Outcome::Miss => {
                debug!("miss on {}", picked.id);
                self.state.selection = None;
                Cue::Miss
            }
        };
        self.notify(cue);
    }

    /// Click on a piece by id, taking content and pair id from the pools.
    pub fn select_by_id(&mut self, id: &str) {
        let picked = self
            .pools()
            .and_then(|pools| pools.find(id))
            .map(|(_, item)| Selection::from(item));
        match picked {
            Some(sel) => self.select_fragment(sel),
            None => trace!("no piece with id {id}"),
        }
    }

    pub fn toggle_hint(&mut self) {
        self.state.hint_enabled = !self.state.hint_enabled;
        debug!("hint assistant {}", if self.state.hint_enabled { "on" } else { "off" });
    }

    /// Leave the current game. Progress is dropped; the hint preference stays.
    pub fn exit_to_start(&mut self) {
        if self.state.phase == Phase::Start {
            return;
        }
        info!("exit to start from level {}", self.state.current_level);
        self.reset();
    }

    pub fn advance_level(&mut self) {
        if self.state.phase != Phase::LevelComplete {
            trace!("advance ignored in {:?}", self.state.phase);
            return;
        }
        self.show_full_poem = false;
        let current = self.state.current_level;
        if (current as usize) < self.catalog.count() {
            self.enter_level(current + 1);
        } else {
            self.game_over();
        }
    }

    /// Start over at level 1 from any phase.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    pub fn show_full_poem(&mut self) {
        if self.state.phase == Phase::LevelComplete {
            self.show_full_poem = true;
        }
    }

    pub fn hide_full_poem(&mut self) {
        self.show_full_poem = false;
    }

    // --- Projection ---------------------------------------------------------

    pub fn snapshot(&self) -> Snapshot {
        let selection = self.state.selection.as_ref();
        let hint = self.state.hint_enabled;
        let pieces = |side: Side| -> Vec<PieceView> {
            self.level
                .as_ref()
                .map(|active| {
                    active
                        .pools
                        .side(side)
                        .iter()
                        .map(|item| {
                            PieceView::new(item, selection, hint, active.is_solved(&item.pair_id))
                        })
                        .collect()
                })
                .unwrap_or_default()
        };
        let level = if self.state.phase == Phase::Start {
            None
        } else {
            self.catalog
                .get_level(self.state.current_level)
                .map(LevelInfo::from)
        };
        let total_pairs = self.total_pairs();
        let progress = if total_pairs == 0 {
            0.0
        } else {
            self.state.solved_count as f64 / total_pairs as f64
        };
        Snapshot {
            phase: self.state.phase,
            current_level: self.state.current_level,
            total_levels: self.catalog.count(),
            level,
            pairs: self.pairs().to_vec(),
            left: pieces(Side::Left),
            right: pieces(Side::Right),
            selection: selection.cloned(),
            selection_side: selection
                .and_then(|s| self.pools()?.find(&s.id))
                .map(|(side, _)| side),
            solved_count: self.state.solved_count,
            total_pairs,
            progress,
            hint_enabled: hint,
            hint_preview: self.hint_preview().map(str::to_owned),
            show_full_poem: self.show_full_poem,
        }
    }

    // --- Internals ----------------------------------------------------------

    /// The only place pools are shuffled.
    fn enter_level(&mut self, level_number: u32) {
        let Some(level) = self.catalog.get_level(level_number) else {
            self.game_over();
            return;
        };
        let pairs = level.fresh_pairs();
        let pools = Pools::shuffled(&pairs, &mut self.rng);
        info!(
            "entering level {} 《{}》 with {} pairs",
            level_number,
            level.poem_title,
            pairs.len()
        );
        self.level = Some(ActiveLevel { pairs, pools });
        self.state.current_level = level_number;
        self.state.solved_count = 0;
        self.state.selection = None;
        self.state.phase = Phase::Playing;
        self.show_full_poem = false;
    }

    fn game_over(&mut self) {
        info!("all levels cleared");
        self.level = None;
        self.state.selection = None;
        self.state.phase = Phase::GameOver;
        self.notify(Cue::GameOver);
    }

    fn reset(&mut self) {
        self.state = SessionState::initial(self.state.hint_enabled);
        self.level = None;
        self.show_full_poem = false;
    }

    fn notify(&self, cue: Cue) {
        if self.config.audio_cues {
            self.cues.notify(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::Recorder;
    use crate::levels::GameLevel;

    fn pair(id: &str, result: &str, a: &str, b: &str) -> CharacterPair {
        CharacterPair {
            id: id.into(),
            result: result.into(),
            parts: [a.into(), b.into()],
            solved: false,
        }
    }

    fn level(n: u32, pairs: Vec<CharacterPair>) -> GameLevel {
        GameLevel {
            level_number: n,
            grade: String::new(),
            pairs,
            poem_title: format!("诗{n}"),
            poem_author: "佚名".into(),
            full_line: "句".into(),
            meaning: "义".into(),
            full_poem: vec!["句".into()],
        }
    }

    fn session(levels: Vec<GameLevel>) -> Session<StdRng> {
        let catalog = Catalog::new(levels).unwrap();
        Session::with_rng(catalog, SessionConfig::default(), StdRng::seed_from_u64(9))
    }

    fn two_pair_session() -> Session<StdRng> {
        session(vec![level(
            1,
            vec![pair("p1", "休", "亻", "木"), pair("p2", "明", "日", "月")],
        )])
    }

    #[test]
    fn starts_in_start_phase_without_pools() {
        let s = two_pair_session();
        assert_eq!(s.phase(), Phase::Start);
        assert!(s.pools().is_none());
        assert!(s.snapshot().level.is_none());
    }

    #[test]
    fn events_before_start_are_noops() {
        let mut s = two_pair_session();
        s.select_by_id("p1-0");
        s.advance_level();
        s.exit_to_start();
        assert_eq!(s.state(), &SessionState::initial(true));
    }

    #[test]
    fn pools_do_not_reshuffle_on_read() {
        let mut s = two_pair_session();
        s.start();
        let before = s.pools().cloned();
        let _ = s.snapshot();
        let _ = s.snapshot();
        assert_eq!(s.pools().cloned(), before);
    }

    #[test]
    fn solved_pieces_cannot_be_selected_again() {
        let mut s = two_pair_session();
        s.start();
        s.select_by_id("p1-0");
        s.select_by_id("p1-1");
        s.select_by_id("p1-0");
        assert!(s.state().selection.is_none());
        assert_eq!(s.state().solved_count, 1);
    }

    #[test]
    fn forged_selection_is_ignored() {
        let mut s = two_pair_session();
        s.start();
        s.select_fragment(Selection::new("p1-0", "日", "p2"));
        assert!(s.state().selection.is_none());
        s.select_fragment(Selection::new("zz-0", "亻", "zz"));
        assert!(s.state().selection.is_none());
    }

    #[test]
    fn content_mismatch_alone_is_ignored() {
        let mut s = two_pair_session();
        s.start();
        s.select_fragment(Selection::new("p1-0", "木", "p1"));
        assert!(s.state().selection.is_none());
        s.select_fragment(Selection::new("p1-0", "亻", "p1"));
        assert!(s.state().selection.is_some());
    }

    #[test]
    fn game_over_discards_the_final_board() {
        let mut s = session(vec![level(1, vec![pair("p1", "休", "亻", "木")])]);
        s.start();
        s.select_by_id("p1-0");
        s.select_by_id("p1-1");
        s.advance_level();
        assert_eq!(s.phase(), Phase::GameOver);
        assert!(s.pools().is_none());
        assert!(s.pairs().is_empty());
        let snap = s.snapshot();
        assert!(snap.left.is_empty() && snap.right.is_empty());
        assert_eq!(snap.total_pairs, 0);
        assert_eq!(snap.progress, 0.0);
        assert_eq!(snap.level.map(|l| l.level_number), Some(1));
    }

    #[test]
    fn exit_keeps_hint_preference_only() {
        let mut s = two_pair_session();
        s.start();
        s.toggle_hint();
        s.select_by_id("p1-0");
        s.exit_to_start();
        let st = s.state();
        assert_eq!(st.phase, Phase::Start);
        assert_eq!(st.solved_count, 0);
        assert!(st.selection.is_none());
        assert!(!st.hint_enabled);
        assert!(s.pools().is_none());
    }

    #[test]
    fn full_poem_overlay_only_after_completion() {
        let mut s = session(vec![
            level(1, vec![pair("p1", "休", "亻", "木")]),
            level(2, vec![pair("p2", "明", "日", "月")]),
        ]);
        s.start();
        s.show_full_poem();
        assert!(!s.full_poem_visible());
        s.select_by_id("p1-0");
        s.select_by_id("p1-1");
        s.show_full_poem();
        assert!(s.full_poem_visible());
        s.advance_level();
        assert!(!s.full_poem_visible());
        assert_eq!(s.state().current_level, 2);
    }

    #[test]
    fn cues_follow_transitions() {
        let rec = Recorder::new();
        let mut s = two_pair_session().with_cues(rec.clone());
        s.start();
        s.select_by_id("p1-0");
        s.select_by_id("p1-0");
        s.select_by_id("p1-0");
        s.select_by_id("p2-1");
        s.select_by_id("p1-1");
        s.select_by_id("p1-0");
        s.select_by_id("p2-0");
        s.select_by_id("p2-1");
        s.advance_level();
        assert_eq!(
            rec.cues(),
            vec![
                Cue::Select,
                Cue::Deselect,
                Cue::Select,
                Cue::Miss,
                Cue::Select,
                Cue::Match,
                Cue::Select,
                Cue::LevelComplete,
                Cue::GameOver,
            ]
        );
    }

    #[test]
    fn audio_cues_off_silences_sink() {
        let rec = Recorder::new();
        let catalog = Catalog::new(vec![level(1, vec![pair("p1", "休", "亻", "木")])]).unwrap();
        let config = SessionConfig {
            audio_cues: false,
            ..SessionConfig::default()
        };
        let mut s = Session::with_rng(catalog, config, StdRng::seed_from_u64(1))
            .with_cues(rec.clone());
        s.start();
        s.select_by_id("p1-0");
        assert!(rec.cues().is_empty());
    }

    #[test]
    fn snapshot_marks_selection_side_and_hint() {
        let mut s = two_pair_session();
        s.start();
        s.select_by_id("p2-1");
        let snap = s.snapshot();
        assert_eq!(snap.selection_side, Some(Side::Right));
        assert_eq!(snap.hint_preview.as_deref(), Some("明"));
        let hinted: Vec<_> = snap.left.iter().filter(|p| p.hinted).map(|p| p.id.as_str()).collect();
        assert_eq!(hinted, vec!["p2-0"]);
        assert!(snap.right.iter().all(|p| !p.hinted));
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut s = two_pair_session();
        s.start();
        let json = s.snapshot().to_json().unwrap();
        assert!(json.contains("\"phase\":\"playing\""));
        assert!(json.contains("\"solvedCount\":0"));
        assert!(json.contains("\"hintPreview\":null"));
    }
}

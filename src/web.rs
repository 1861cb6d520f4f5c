//! Browser boundary: a `wasm-bindgen` handle around [`Session`] and Web Audio
//! feedback cues.
//!
//! Every event method returns the fresh snapshot as a JSON string, so the
//! page re-renders from the returned value instead of polling shared state.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, OscillatorType};

use crate::config::SessionConfig;
use crate::cue::{Cue, CueSink};
use crate::levels::Catalog;
use crate::matching::Selection;
use crate::session::Session;

// --- Audio cues --------------------------------------------------------------

/// Short oscillator blips via Web Audio. The context is created lazily on the
/// first cue (browsers only allow audio after a user gesture); any failure is
/// dropped and the game carries on silently.
#[derive(Default)]
pub struct WebAudioCues {
    ctx: RefCell<Option<AudioContext>>,
}

impl WebAudioCues {
    pub fn new() -> Self {
        Self::default()
    }

    fn tone(cue: Cue) -> (f32, f64, OscillatorType) {
        // (frequency Hz, duration s, waveform)
        match cue {
            Cue::Select => (660.0, 0.08, OscillatorType::Sine),
            Cue::Deselect => (440.0, 0.06, OscillatorType::Sine),
            Cue::Match => (880.0, 0.18, OscillatorType::Triangle),
            Cue::Miss => (180.0, 0.20, OscillatorType::Square),
            Cue::LevelComplete => (1046.5, 0.45, OscillatorType::Triangle),
            Cue::GameOver => (523.25, 0.80, OscillatorType::Triangle),
        }
    }

    fn play(&self, cue: Cue) -> Result<(), JsValue> {
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
        }
        let Some(ctx) = slot.as_ref() else {
            return Ok(());
        };
        let (freq, duration, kind) = Self::tone(cue);
        let now = ctx.current_time();
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(kind);
        osc.frequency().set_value(freq);
        gain.gain().set_value_at_time(0.15, now)?;
        gain.gain().linear_ramp_to_value_at_time(0.0, now + duration)?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(now)?;
        osc.stop_with_when(now + duration)?;
        Ok(())
    }
}

impl CueSink for WebAudioCues {
    fn notify(&self, cue: Cue) {
        let _ = self.play(cue);
    }
}

// --- Game handle -------------------------------------------------------------

#[wasm_bindgen]
pub struct GameHandle {
    session: Session,
}

#[wasm_bindgen]
impl GameHandle {
    /// Bundled levels with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GameHandle, JsError> {
        Ok(Self::build(Catalog::builtin()?, SessionConfig::default()))
    }

    /// Bundled levels with a JSON `SessionConfig`.
    pub fn with_config(config_json: &str) -> Result<GameHandle, JsError> {
        let config = SessionConfig::from_json(config_json)?;
        Ok(Self::build(Catalog::builtin()?, config))
    }

    /// Custom level catalog (JSON array of level records).
    pub fn from_catalog_json(catalog_json: &str) -> Result<GameHandle, JsError> {
        let catalog = Catalog::from_json(catalog_json)?;
        Ok(Self::build(catalog, SessionConfig::default()))
    }

    pub fn start(&mut self) -> Result<String, JsError> {
        self.session.start();
        self.snapshot()
    }

    pub fn select_fragment(
        &mut self,
        id: &str,
        content: &str,
        pair_id: &str,
    ) -> Result<String, JsError> {
        self.session
            .select_fragment(Selection::new(id, content, pair_id));
        self.snapshot()
    }

    pub fn select_by_id(&mut self, id: &str) -> Result<String, JsError> {
        self.session.select_by_id(id);
        self.snapshot()
    }

    pub fn toggle_hint(&mut self) -> Result<String, JsError> {
        self.session.toggle_hint();
        self.snapshot()
    }

    pub fn exit_to_start(&mut self) -> Result<String, JsError> {
        self.session.exit_to_start();
        self.snapshot()
    }

    pub fn advance_level(&mut self) -> Result<String, JsError> {
        self.session.advance_level();
        self.snapshot()
    }

    pub fn restart(&mut self) -> Result<String, JsError> {
        self.session.restart();
        self.snapshot()
    }

    pub fn show_full_poem(&mut self) -> Result<String, JsError> {
        self.session.show_full_poem();
        self.snapshot()
    }

    pub fn hide_full_poem(&mut self) -> Result<String, JsError> {
        self.session.hide_full_poem();
        self.snapshot()
    }

    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(self.session.snapshot().to_json()?)
    }
}

impl GameHandle {
    fn build(catalog: Catalog, config: SessionConfig) -> GameHandle {
        let session = Session::new(catalog, config).with_cues(WebAudioCues::new());
        GameHandle { session }
    }
}

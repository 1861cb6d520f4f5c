//! Poem Radicals core crate.
//!
//! Players pair character fragments (a radical and its remainder) into the
//! Hanzi of a classical poem line, one poem per level. The crate holds the
//! level catalog, the pool shuffler, the match evaluator and the session state
//! machine; [`web`] exposes them to the page through `wasm-bindgen`. Rendering
//! lives entirely on the JS side and reads [`Snapshot`]s.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod cue;
pub mod error;
pub mod levels;
pub mod matching;
pub mod pool;
pub mod session;
pub mod snapshot;
pub mod web;

pub use config::SessionConfig;
pub use cue::{Cue, CueSink};
pub use error::CatalogError;
pub use levels::{Catalog, CharacterPair, GameLevel};
pub use matching::{Outcome, Selection, evaluate};
pub use pool::{PoolItem, Pools, Side};
pub use session::{Phase, Session, SessionState};
pub use snapshot::Snapshot;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

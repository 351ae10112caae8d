//! Neuro Reactive core crate.
//!
//! A memory-matching ("concentration") game: flip two tiles, keep the pair if
//! the glyphs match, lose mind integrity if they don't. Clearing a board
//! advances the level, and every second level grows the grid.
//!
//! The game logic (`board`, `session`) is plain Rust driven by explicit
//! timestamps so it runs and tests natively. The `web` module wires it to a
//! canvas, DOM overlays, `localStorage` and Web Audio in the browser.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod feedback;
pub mod log;
pub mod rng;
pub mod session;
pub mod storage;
pub mod timer;
pub mod web;

pub use board::{Board, Resolution, Selection, Tile, TileId};
pub use config::GameConfig;
pub use error::{BoardError, GameError, StorageError};
pub use feedback::{Effect, Feedback, Silent};
pub use rng::TileRng;
pub use session::{GameStatus, Notice, SessionController, Snapshot, TileView};
pub use storage::{HighScoreStore, MemoryStore};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Glyph alphabet. Boards take a contiguous window of this list, sliding along
// it as the level rises. The largest board (8x8) needs 32 distinct glyphs.
// -----------------------------------------------------------------------------

pub const MEMORY_GLYPHS: &[&str] = &[
    "⏣", "⏢", "⏥", "⏤", "💡", "🧠", "🧩", "🎮", "⌘", "⌬", "⎊", "⍚",
    "🐱", "🐶", "🐸", "🐵", "🔥", "❄️", "⚡", "🌈", "🍎", "🍌", "🍇", "🍉",
    "🚀", "🛰️", "👾", "🤖", "🔮", "🧬", "🛸", "💾", "🔋", "🧲", "🎲", "🪐",
];

// -----------------------------------------------------------------------------
// Browser entry points
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Start with JSON overrides for any `GameConfig` field.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    web::start(config)
}

/// Begin / restart, for hosts that render their own button.
#[wasm_bindgen]
pub fn begin_game() -> Result<bool, JsValue> {
    web::begin()
}

#[wasm_bindgen]
pub fn select_tile(id: u32) -> Result<(), JsValue> {
    web::select(id)
}

/// Current session view as JSON, or `None` before `start_game`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn snapshot_json() -> Option<String> {
    web::snapshot().and_then(|s| serde_json::to_string(&s).ok())
}

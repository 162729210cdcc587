//! Word Strike core crate.
//!
//! Enemy ships carrying words drift down toward the player's ship; typing a
//! word fires a lead-pursuit shot at the first ship carrying it. The simulation
//! (`game`) is plain Rust and runs natively under `cargo test`; everything that
//! touches the browser lives in `web` behind the traits in `ports`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod entities;
pub mod events;
pub mod game;
pub mod ports;
pub mod words;

mod web;

pub use config::GameConfig;
pub use events::GameEvent;
pub use game::{Game, GameState, Phase};
pub use words::WordPool;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) returns Err; the first logger stays active.
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Page entrypoints
// -----------------------------------------------------------------------------

/// Start (or restart) a run with the default tuning.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Start (or restart) a run with a JSON object overriding parts of `GameConfig`.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("invalid game config: {e}")))?;
    web::start(config)
}

#[wasm_bindgen]
pub fn reset_high_score() -> Result<(), JsValue> {
    web::reset_high_score()
}

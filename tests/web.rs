// Browser-only checks; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage available in test browser")
}

#[wasm_bindgen_test]
fn reset_high_score_clears_local_storage() {
    let storage = local_storage();
    storage.set_item("highScore", "4200").unwrap();
    word_strike::reset_high_score().unwrap();
    assert_eq!(storage.get_item("highScore").unwrap(), None);
}

#[wasm_bindgen_test]
fn bad_config_is_reported_to_the_page() {
    let err = word_strike::start_game_with_config("{ \"canvas_widht\": 1 }").unwrap_err();
    let msg = err.as_string().unwrap_or_default();
    assert!(msg.starts_with("invalid game config"), "unexpected error: {msg}");
}

#[wasm_bindgen_test]
fn stalling_config_is_refused_before_a_run() {
    let err = word_strike::start_game_with_config("{ \"level_score_step\": 0 }").unwrap_err();
    let msg = err.as_string().unwrap_or_default();
    assert_eq!(msg, "invalid game config: level_score_step must not be 0");
}

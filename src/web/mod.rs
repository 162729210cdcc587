//! Browser shell: owns the `Game`, wires DOM input to it and runs the
//! `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, window};

use crate::config::{GameConfig, HIGH_SCORE_KEY};
use crate::events;
use crate::game::{Game, Phase};
use crate::ports::KeyValueStore;
use crate::words::WordPool;

mod audio;
mod canvas;
mod fetch;
mod hud;
mod storage;

use audio::DomAudio;
use canvas::CanvasSurface;
use hud::DomHud;
use storage::LocalStore;

const CANVAS_ID: &str = "gameCanvas";
const INPUT_ID: &str = "typedWord";

struct App {
    game: Game<StdRng>,
    surface: CanvasSurface,
    audio: DomAudio,
    store: LocalStore,
    hud: DomHud,
    /// A frame callback is queued; starting again must not queue a second one.
    looping: bool,
}

impl App {
    fn flush_events(&mut self) {
        let evs = self.game.take_events();
        events::dispatch(evs, &mut self.audio, &mut self.hud);
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub(crate) fn start(config: GameConfig) -> Result<(), JsValue> {
    let first = APP.with(|cell| -> Result<bool, JsValue> {
        let mut slot = cell.borrow_mut();
        let first = slot.is_none();
        let stale = slot.as_ref().is_some_and(|app| *app.game.config() != config);
        if first || stale {
            // Keep the pool and loop flag so an in-flight fetch or frame still lands here.
            let words = slot.as_ref().map(|app| app.game.words().clone()).unwrap_or_default();
            let looping = slot.as_ref().is_some_and(|app| app.looping);
            let mut app = build_app(config, words)?;
            app.looping = looping;
            *slot = Some(app);
        }
        Ok(first)
    })?;
    if first {
        register_input_listener()?;
    }

    let need_loop = APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(app) = slot.as_mut() else { return false };
        app.game.start(&app.store);
        app.hud.show_playing();
        app.flush_events();
        let cfg = app.game.config();
        fetch::spawn_word_fetch(cfg.word_source_url.clone(), cfg.max_word_len, app.game.words().clone());
        let idle = !app.looping;
        app.looping = true;
        idle
    });
    if need_loop {
        start_loop();
    }
    Ok(())
}

pub(crate) fn reset_high_score() -> Result<(), JsValue> {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => {
            app.game.reset_high_score(&mut app.store);
            app.flush_events();
        }
        // No run yet: nothing on screen to refresh.
        None => LocalStore::open().remove(HIGH_SCORE_KEY),
    });
    Ok(())
}

fn build_app(config: GameConfig, words: WordPool) -> Result<App, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let surface = CanvasSurface::attach(&doc, CANVAS_ID, config.canvas_width, config.canvas_height)?;
    Ok(App {
        game: Game::new(config, words, StdRng::from_entropy()),
        surface,
        audio: DomAudio::new(doc.clone()),
        store: LocalStore::open(),
        hud: DomHud::new(doc, INPUT_ID),
        looping: false,
    })
}

fn register_input_listener() -> Result<(), JsValue> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(el) = doc.get_element_by_id(INPUT_ID) else {
        log::warn!("#{INPUT_ID} missing; typing disabled");
        return Ok(());
    };
    let input: HtmlInputElement = el.dyn_into()?;
    let field = input.clone();
    // `input` events carry the whole field value, not per-key deltas.
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let typed = field.value();
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app.game.handle_input(&typed);
                app.flush_events();
            }
        });
    }) as Box<dyn FnMut(_)>);
    input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let keep_going = APP.with(|cell| {
            let mut slot = cell.borrow_mut();
            let Some(app) = slot.as_mut() else { return false };
            let phase = app.game.tick(&mut app.store);
            app.game.render(&mut app.surface);
            app.flush_events();
            app.looping = phase == Phase::Running;
            app.looping
        });
        if keep_going {
            request_frame(&f);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(f: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

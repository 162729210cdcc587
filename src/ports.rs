//! Seams between the simulation and the page.
//!
//! The core only talks to these traits; `crate::web` implements them on top of
//! the canvas, `<audio>` elements, `localStorage` and the DOM overlays.

use std::collections::HashMap;

/// Images the renderer can blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Shoot,
    Explosion,
    Music,
}

pub trait RenderSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64);
    /// Text horizontally centred on `x`, baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);
    /// Global alpha for subsequent fills, 0.0..=1.0.
    fn set_alpha(&mut self, alpha: f64);
}

/// Fire-and-forget playback. Effects restart from time zero; music resumes.
pub trait SoundTrigger {
    fn play(&mut self, sound: Sound);
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Text regions and screens around the canvas.
pub trait Hud {
    fn show_progress(&mut self, score: u64, level: u32, high_score: u64);
    fn show_lives(&mut self, lives: u32);
    fn set_level_up_flash(&mut self, visible: bool);
    fn show_game_over(&mut self, final_score: u64);
    fn clear_input(&mut self);
}

/// In-memory store; stands in for `localStorage` when the browser refuses it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

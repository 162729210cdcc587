//! Score, lives, levels and the persisted high score.

use super::GameState;
use crate::config::{GameConfig, HIGH_SCORE_KEY};
use crate::events::GameEvent;
use crate::ports::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    /// Frames between regular spawns.
    pub spawn_rate: u64,
    pub frame_count: u64,
}

impl Progression {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            score: 0,
            level: 1,
            lives: cfg.initial_lives,
            spawn_rate: cfg.initial_spawn_rate,
            frame_count: 0,
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Take one life; returns what is left. Saturates at zero.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Apply every level-up the current score has earned. Returns how many.
    /// A zero `level_score_step` never levels up (`GameConfig::validate`
    /// rejects it for pages).
    pub fn apply_level_ups(&mut self, cfg: &GameConfig) -> u32 {
        let mut gained = 0;
        if cfg.level_score_step == 0 {
            return gained;
        }
        while self.level < u32::MAX && self.score >= cfg.level_threshold(self.level) {
            self.level += 1;
            self.spawn_rate = self
                .spawn_rate
                .saturating_sub(cfg.spawn_rate_step)
                .max(cfg.min_spawn_rate)
                .min(self.spawn_rate);
            gained += 1;
        }
        gained
    }
}

/// Stored high score; missing or garbled values count as 0.
pub fn stored_high_score(store: &dyn KeyValueStore) -> u64 {
    store
        .get(HIGH_SCORE_KEY)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Persist `score` if it beats the stored value. Returns the high score to display.
pub fn record_high_score(score: u64, store: &mut dyn KeyValueStore) -> u64 {
    let stored = stored_high_score(store);
    if score > stored {
        store.set(HIGH_SCORE_KEY, &score.to_string());
    }
    stored.max(score)
}

/// End-of-frame bookkeeping: banner countdown, level-ups, high score, HUD.
pub fn update(
    state: &mut GameState,
    cfg: &GameConfig,
    store: &mut dyn KeyValueStore,
    events: &mut Vec<GameEvent>,
) {
    if state.level_up_flash > 0 {
        state.level_up_flash -= 1;
        if state.level_up_flash == 0 {
            events.push(GameEvent::LevelUpFlashEnded);
        }
    }

    let p = &mut state.progress;
    let before = p.level;
    if p.apply_level_ups(cfg) > 0 {
        for level in before + 1..=p.level {
            events.push(GameEvent::LevelUp { level });
        }
        state.level_up_flash = cfg.level_up_flash_frames;
        log::debug!("level {} reached, spawn every {} frames", p.level, p.spawn_rate);
    }

    let high_score = record_high_score(p.score, store);
    events.push(GameEvent::ProgressChanged { score: p.score, level: p.level, high_score });
}

//! Spawn cadence and enemy construction.

use rand::Rng;

use super::GameState;
use crate::config::GameConfig;
use crate::entities::Enemy;
use crate::words::WordPool;

/// Which spawns fire on a given frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnPlan {
    pub enemy: bool,
    pub boss: bool,
}

pub fn plan(frame_count: u64, spawn_rate: u64, level: u32, cfg: &GameConfig) -> SpawnPlan {
    let rate = spawn_rate.max(1);
    let boss_rate = rate.saturating_mul(cfg.boss_cadence.max(1));
    SpawnPlan {
        enemy: frame_count % rate == 0,
        boss: frame_count % boss_rate == 0 && level > cfg.boss_after_level,
    }
}

/// Run the cadence for the current frame. Returns what was actually spawned:
/// with an empty pool the regular spawn is skipped, the boss is not.
pub fn run(state: &mut GameState, cfg: &GameConfig, words: &WordPool, rng: &mut impl Rng) -> SpawnPlan {
    let p = &state.progress;
    let wanted = plan(p.frame_count, p.spawn_rate, p.level, cfg);
    let level = p.level;
    let mut spawned = SpawnPlan::default();

    if wanted.enemy && !words.is_empty() {
        if let Some(word) = words.choose(rng) {
            state.enemies.push(enemy(word, level, cfg, rng));
            spawned.enemy = true;
        }
    }
    if wanted.boss {
        state.enemies.push(boss(cfg, rng));
        spawned.boss = true;
    }
    spawned
}

pub fn enemy(word: String, level: u32, cfg: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let points = word.chars().count() as u64 * cfg.points_per_letter;
    Enemy {
        x: spawn_x(cfg.canvas_width - cfg.enemy_width, rng),
        y: -cfg.enemy_height,
        width: cfg.enemy_width,
        height: cfg.enemy_height,
        word,
        speed: cfg.enemy_speed(level),
        health: 1,
        max_health: 1,
        points,
        boss: false,
    }
}

pub fn boss(cfg: &GameConfig, rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: spawn_x(cfg.canvas_width - cfg.boss_width, rng),
        y: -cfg.boss_height,
        width: cfg.boss_width,
        height: cfg.boss_height,
        word: cfg.boss_word.clone(),
        speed: cfg.boss_speed,
        health: cfg.boss_health.max(1),
        max_health: cfg.boss_health.max(1),
        points: cfg.boss_points,
        boss: true,
    }
}

fn spawn_x(span: f64, rng: &mut impl Rng) -> f64 {
    if span > 0.0 { rng.gen_range(0.0..span) } else { 0.0 }
}

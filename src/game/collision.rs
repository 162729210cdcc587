//! Bullet/enemy hits, explosions, and enemies slipping past the bottom edge.
//!
//! Hits are resolved with spent/removed masks and compacted afterwards.
//! Enemies are scanned in spawn order; each takes at most one bullet per frame
//! (the first unspent overlapping bullet in firing order) and a bullet is
//! consumed by the first enemy it touches.

use rand::Rng;

use super::GameState;
use crate::config::GameConfig;
use crate::entities::Particle;
use crate::events::GameEvent;
use crate::ports::Sound;

/// Tally of one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hits: usize,
    pub destroyed: usize,
    pub escaped: usize,
    pub points: u64,
}

pub fn resolve(
    state: &mut GameState,
    cfg: &GameConfig,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let GameState { bullets, enemies, particles, progress, .. } = state;
    let mut report = CollisionReport::default();
    let mut spent = vec![false; bullets.len()];
    let mut removed = vec![false; enemies.len()];

    for (ei, enemy) in enemies.iter_mut().enumerate() {
        let bounds = enemy.bounds();
        let Some(bi) = bullets
            .iter()
            .enumerate()
            .find(|(bi, b)| !spent[*bi] && b.bounds().overlaps(&bounds))
            .map(|(bi, _)| bi)
        else {
            continue;
        };
        spent[bi] = true;
        report.hits += 1;
        enemy.health = enemy.health.saturating_sub(1);
        if enemy.health == 0 {
            removed[ei] = true;
            explode(particles, enemy.x, enemy.y, cfg, rng);
            events.push(GameEvent::Sound(Sound::Explosion));
            progress.add_points(enemy.points);
            report.destroyed += 1;
            report.points += enemy.points;
        }
    }

    // Strictly below the canvas; an enemy sitting exactly on the edge stays.
    for (ei, enemy) in enemies.iter().enumerate() {
        if !removed[ei] && enemy.y > cfg.canvas_height {
            removed[ei] = true;
            let lives = progress.lose_life();
            events.push(GameEvent::LivesChanged { lives });
            report.escaped += 1;
        }
    }

    compact(bullets, &spent);
    compact(enemies, &removed);
    report
}

/// Burst of debris at an enemy's top-left corner.
pub fn explode(particles: &mut Vec<Particle>, x: f64, y: f64, cfg: &GameConfig, rng: &mut impl Rng) {
    particles.reserve(cfg.explosion_particles);
    for _ in 0..cfg.explosion_particles {
        particles.push(Particle {
            x: x + rng.gen_range(0.0..20.0),
            y: y + rng.gen_range(0.0..20.0),
            size: rng.gen_range(2.0..8.0),
            hue: rng.gen_range(0.0..60.0),
            speed_x: rng.gen_range(-2.0..2.0),
            speed_y: rng.gen_range(-2.0..2.0),
            life: cfg.particle_life,
        });
    }
}

fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !removed[idx];
        idx += 1;
        keep
    });
}

//! Typed text to shots.
//!
//! Matching is first-match in spawn order: when two live enemies carry the
//! same word the older one is always targeted.

use super::GameState;
use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy};

pub fn normalize(typed: &str) -> String {
    typed.trim().to_lowercase()
}

pub fn find_target(enemies: &[Enemy], normalized: &str) -> Option<usize> {
    if normalized.is_empty() {
        return None;
    }
    enemies.iter().position(|e| e.answers_to(normalized))
}

/// Velocity for a shot at `speed` from `from` toward a target at `target`
/// falling at `target_speed_y`, leading it by the time the shot needs to cover
/// the vertical gap.
pub fn lead_velocity(from: (f64, f64), target: (f64, f64), target_speed_y: f64, speed: f64) -> (f64, f64) {
    let (sx, sy) = from;
    let (tx, ty) = target;
    let eta = ((ty - sy) / speed).abs();
    let lead_y = ty + target_speed_y * eta;
    let angle = (lead_y - sy).atan2(tx - sx);
    (angle.cos() * speed, angle.sin() * speed)
}

/// Fire at the first enemy answering to `typed`. Returns its index.
pub fn fire(state: &mut GameState, cfg: &GameConfig, typed: &str) -> Option<usize> {
    let idx = find_target(&state.enemies, &normalize(typed))?;
    let target = &state.enemies[idx];
    let from = (state.player.x, state.player.y);
    let (dx, dy) = lead_velocity(from, target.bounds().center(), target.speed, cfg.bullet_speed);
    state.bullets.push(Bullet { x: from.0, y: from.1, dx, dy, size: cfg.bullet_size });
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(word: &str, x: f64, y: f64) -> Enemy {
        Enemy {
            x,
            y,
            width: 50.0,
            height: 40.0,
            word: word.into(),
            speed: 1.0,
            health: 1,
            max_health: 1,
            points: word.len() as u64 * 10,
            boss: false,
        }
    }

    #[test]
    fn input_is_trimmed_and_case_folded() {
        let enemies = vec![enemy("Shell", 0.0, 0.0)];
        assert_eq!(find_target(&enemies, &normalize("  SHELL ")), Some(0));
    }

    #[test]
    fn partial_and_empty_input_do_not_match() {
        let enemies = vec![enemy("shell", 0.0, 0.0)];
        assert_eq!(find_target(&enemies, &normalize("she")), None);
        assert_eq!(find_target(&enemies, &normalize("   ")), None);
    }

    #[test]
    fn duplicates_resolve_to_oldest() {
        let enemies = vec![enemy("dog", 0.0, 0.0), enemy("cat", 10.0, 0.0), enemy("cat", 300.0, 0.0)];
        assert_eq!(find_target(&enemies, "cat"), Some(1));
    }

    #[test]
    fn stationary_target_straight_above() {
        let (dx, dy) = lead_velocity((100.0, 400.0), (100.0, 0.0), 0.0, 8.0);
        assert!(dx.abs() < 1e-9);
        assert!((dy + 8.0).abs() < 1e-9);
    }

    #[test]
    fn moving_target_is_led() {
        let from = (400.0, 420.0);
        let target = (600.0, 20.0);
        let (dx, dy) = lead_velocity(from, target, 1.0, 8.0);
        let lead_y = 20.0 + 1.0 * (400.0 / 8.0);
        let angle = f64::atan2(lead_y - 420.0, 200.0);
        assert!((dx - 8.0 * angle.cos()).abs() < 1e-9);
        assert!((dy - 8.0 * angle.sin()).abs() < 1e-9);
        assert!((dx.hypot(dy) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn fire_spawns_bullet_at_player() {
        let cfg = GameConfig::default();
        let mut st = GameState::new(&cfg);
        st.enemies.push(enemy("salvo", 200.0, 50.0));
        assert_eq!(fire(&mut st, &cfg, "salvo"), Some(0));
        assert_eq!(st.bullets.len(), 1);
        let b = &st.bullets[0];
        assert_eq!((b.x, b.y, b.size), (400.0, 420.0, 8.0));
        assert!(fire(&mut st, &cfg, "volley").is_none());
        assert_eq!(st.bullets.len(), 1);
    }
}

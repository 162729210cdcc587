//! Per-frame movement and expiry. Removal compacts in place with `retain_mut`,
//! so every entity is visited exactly once however many drop out.

use super::GameState;
use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy, Particle};

pub fn advance(state: &mut GameState, cfg: &GameConfig) {
    advance_bullets(&mut state.bullets, cfg.canvas_width, cfg.canvas_height);
    advance_enemies(&mut state.enemies);
    advance_particles(&mut state.particles);
}

pub fn advance_bullets(bullets: &mut Vec<Bullet>, width: f64, height: f64) {
    bullets.retain_mut(|b| {
        b.advance();
        b.inside(width, height)
    });
}

/// Enemies only fall; leaving the bottom is handled by the collision pass
/// because it costs a life.
pub fn advance_enemies(enemies: &mut [Enemy]) {
    for e in enemies {
        e.y += e.speed;
    }
}

pub fn advance_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.x += p.speed_x;
        p.y += p.speed_y;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(x: f64, y: f64, dx: f64, dy: f64) -> Bullet {
        Bullet { x, y, dx, dy, size: 8.0 }
    }

    fn particle(life: u32) -> Particle {
        Particle { x: 0.0, y: 0.0, speed_x: 1.0, speed_y: -1.0, size: 2.0, hue: 0.0, life }
    }

    #[test]
    fn adjacent_expired_bullets_are_all_removed() {
        let mut bullets = vec![
            bullet(5.0, 5.0, -10.0, 0.0),
            bullet(5.0, 5.0, 0.0, -10.0),
            bullet(100.0, 100.0, 1.0, 1.0),
            bullet(795.0, 5.0, 10.0, 0.0),
        ];
        advance_bullets(&mut bullets, 800.0, 500.0);
        assert_eq!(bullets.len(), 1);
        assert_eq!((bullets[0].x, bullets[0].y), (101.0, 101.0));
    }

    #[test]
    fn particles_expire_after_their_life() {
        let mut ps = vec![particle(1), particle(1), particle(3)];
        advance_particles(&mut ps);
        assert_eq!(ps.len(), 1);
        assert_eq!(ps[0].life, 2);
        assert_eq!((ps[0].x, ps[0].y), (1.0, -1.0));
        advance_particles(&mut ps);
        advance_particles(&mut ps);
        assert!(ps.is_empty());
    }
}

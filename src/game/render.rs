//! Draw commands for one frame, back to front: player, shots, enemies with
//! their words (and a health bar for bosses), then fading debris.

use super::GameState;
use crate::config::GameConfig;
use crate::ports::{RenderSurface, Sprite};

const BULLET_COLOR: &str = "#FFFF00";
const WORD_COLOR: &str = "#FFFFFF";
const WORD_FONT: &str = "16px Arial";
const BOSS_BAR_COLOR: &str = "red";

pub fn draw(state: &GameState, cfg: &GameConfig, surface: &mut dyn RenderSurface) {
    surface.clear(cfg.canvas_width, cfg.canvas_height);

    let pl = &state.player;
    surface.draw_sprite(Sprite::Player, pl.x - pl.width / 2.0, pl.y, pl.width, pl.height);

    for b in &state.bullets {
        surface.fill_rect(BULLET_COLOR, b.x, b.y, b.size, b.size);
    }

    for e in &state.enemies {
        surface.draw_sprite(Sprite::Enemy, e.x, e.y, e.width, e.height);
        surface.fill_text(&e.word, e.x + e.width / 2.0, e.y - 10.0, WORD_FONT, WORD_COLOR);
        if e.boss && e.max_health > 0 {
            let bar = e.width * e.health as f64 / e.max_health as f64;
            surface.fill_rect(BOSS_BAR_COLOR, e.x, e.y - 20.0, bar, 5.0);
        }
    }

    let life = cfg.particle_life.max(1) as f64;
    for p in &state.particles {
        surface.set_alpha(p.life as f64 / life);
        surface.fill_rect(&p.color(), p.x, p.y, p.size, p.size);
    }
    surface.set_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Enemy, Particle};

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl RenderSurface for Recorder {
        fn clear(&mut self, w: f64, h: f64) {
            self.0.push(format!("clear {w}x{h}"));
        }
        fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64, _w: f64, _h: f64) {
            self.0.push(format!("sprite {sprite:?} {x},{y}"));
        }
        fn fill_rect(&mut self, color: &str, _x: f64, _y: f64, w: f64, _h: f64) {
            self.0.push(format!("rect {color} w={w}"));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64, _font: &str, _color: &str) {
            self.0.push(format!("text {text} {x},{y}"));
        }
        fn set_alpha(&mut self, alpha: f64) {
            self.0.push(format!("alpha {alpha}"));
        }
    }

    #[test]
    fn frame_draws_in_layer_order() {
        let cfg = GameConfig::default();
        let mut st = GameState::new(&cfg);
        st.enemies.push(Enemy {
            x: 100.0,
            y: 50.0,
            width: 80.0,
            height: 60.0,
            word: "annihilation".into(),
            speed: 0.5,
            health: 2,
            max_health: 5,
            points: 500,
            boss: true,
        });
        st.particles.push(Particle { x: 0.0, y: 0.0, speed_x: 0.0, speed_y: 0.0, size: 3.0, hue: 30.0, life: 30 });

        let mut rec = Recorder::default();
        draw(&st, &cfg, &mut rec);
        assert_eq!(
            rec.0,
            vec![
                "clear 800x500",
                "sprite Player 370,420",
                "sprite Enemy 100,50",
                "text annihilation 140,40",
                "rect red w=32",
                "alpha 0.5",
                "rect hsl(30.0, 100%, 50%) w=3",
                "alpha 1",
            ]
        );
    }
}

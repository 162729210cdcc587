//! The simulation: one `Game` owns the playfield and drives it a frame at a
//! time.
//!
//! A tick runs the systems in a fixed order (spawn, physics, collision,
//! progression) and queues `GameEvent`s for the shell. Rendering is a separate
//! read-only pass so the shell can call it after every tick, including the one
//! that ends the run.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy, Particle, Player};
use crate::events::GameEvent;
use crate::ports::{KeyValueStore, RenderSurface, Sound};
use crate::words::WordPool;

pub mod collision;
pub mod physics;
pub mod progression;
pub mod render;
pub mod spawn;
pub mod targeting;

pub use progression::Progression;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

/// Everything a run mutates. Entity vectors keep spawn order; systems remove
/// by compaction so that order survives.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub progress: Progression,
    /// Frames left on the level-up banner; 0 when hidden.
    pub level_up_flash: u32,
}

impl GameState {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            player: Player {
                x: cfg.canvas_width / 2.0,
                y: cfg.canvas_height - cfg.player_bottom_offset,
                width: cfg.player_width,
                height: cfg.player_height,
            },
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            progress: Progression::new(cfg),
            level_up_flash: 0,
        }
    }
}

pub struct Game<R: Rng> {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    words: WordPool,
    rng: R,
    events: Vec<GameEvent>,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, words: WordPool, rng: R) -> Self {
        let state = GameState::new(&config);
        Self { config, state, phase: Phase::Idle, words, rng, events: Vec::new() }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios (placing enemies, forcing a score).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn words(&self) -> &WordPool {
        &self.words
    }

    /// Reset progression and entities and begin a run. Valid from any phase; a
    /// finished run passes back through `Idle` first.
    pub fn start(&mut self, store: &dyn KeyValueStore) {
        if self.phase == Phase::GameOver {
            self.phase = Phase::Idle;
        }
        let flash_was_up = self.state.level_up_flash > 0;
        self.state = GameState::new(&self.config);
        self.phase = Phase::Running;

        if flash_was_up {
            self.events.push(GameEvent::LevelUpFlashEnded);
        }
        let p = &self.state.progress;
        self.events.push(GameEvent::LivesChanged { lives: p.lives });
        self.events.push(GameEvent::ProgressChanged {
            score: p.score,
            level: p.level,
            high_score: progression::stored_high_score(store).max(p.score),
        });
        self.events.push(GameEvent::Sound(Sound::Music));
        if self.words.is_empty() {
            log::info!("run started; regular spawns wait for the word list");
        } else {
            log::info!("run started ({} words in pool)", self.words.len());
        }
    }

    /// Advance one frame. Returns the phase after the frame; ticks outside
    /// `Running` do nothing.
    pub fn tick(&mut self, store: &mut dyn KeyValueStore) -> Phase {
        if self.phase != Phase::Running {
            return self.phase;
        }
        let cfg = &self.config;
        let st = &mut self.state;

        st.progress.frame_count += 1;
        spawn::run(st, cfg, &self.words, &mut self.rng);
        physics::advance(st, cfg);
        collision::resolve(st, cfg, &mut self.rng, &mut self.events);
        progression::update(st, cfg, store, &mut self.events);

        if st.progress.lives == 0 {
            self.phase = Phase::GameOver;
            if st.level_up_flash > 0 {
                st.level_up_flash = 0;
                self.events.push(GameEvent::LevelUpFlashEnded);
            }
            self.events.push(GameEvent::GameOver { final_score: st.progress.score });
            log::info!(
                "game over: score {} at level {} after {} frames",
                st.progress.score,
                st.progress.level,
                st.progress.frame_count
            );
        }
        self.phase
    }

    /// Feed the full current contents of the input field. Returns the index of
    /// the targeted enemy when a shot was fired.
    pub fn handle_input(&mut self, typed: &str) -> Option<usize> {
        if self.phase != Phase::Running {
            return None;
        }
        let target = targeting::fire(&mut self.state, &self.config, typed)?;
        self.events.push(GameEvent::InputConsumed);
        self.events.push(GameEvent::Sound(Sound::Shoot));
        Some(target)
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        render::draw(&self.state, &self.config, surface);
    }

    pub fn reset_high_score(&mut self, store: &mut dyn KeyValueStore) {
        store.remove(crate::config::HIGH_SCORE_KEY);
        let p = &self.state.progress;
        self.events.push(GameEvent::ProgressChanged {
            score: p.score,
            level: p.level,
            high_score: p.score,
        });
    }

    /// Drain events queued since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(words: &[&str]) -> Game<StdRng> {
        let cfg = GameConfig::default();
        let pool = WordPool::with_words(words.iter().copied(), cfg.max_word_len);
        Game::new(cfg, pool, StdRng::seed_from_u64(11))
    }

    #[test]
    fn new_game_is_idle_and_ignores_ticks() {
        let mut g = game(&["tank"]);
        let mut store = MemoryStore::new();
        assert_eq!(g.tick(&mut store), Phase::Idle);
        assert_eq!(g.state().progress.frame_count, 0);
    }

    #[test]
    fn start_resets_and_announces_hud() {
        let mut g = game(&["tank"]);
        let mut store = MemoryStore::new();
        store.set("highScore", "900");
        g.start(&store);
        g.state_mut().progress.score = 50;
        g.state_mut().bullets.push(Bullet { x: 1.0, y: 1.0, dx: 0.0, dy: 0.0, size: 8.0 });
        g.take_events();

        g.start(&store);
        assert!(g.state().bullets.is_empty());
        assert_eq!(g.state().progress.score, 0);
        let events = g.take_events();
        assert!(events.contains(&GameEvent::LivesChanged { lives: 3 }));
        assert!(events.contains(&GameEvent::ProgressChanged { score: 0, level: 1, high_score: 900 }));
    }

    #[test]
    fn input_outside_running_never_fires() {
        let mut g = game(&["tank"]);
        let tank = spawn::enemy("tank".into(), 1, g.config(), &mut StdRng::seed_from_u64(1));
        g.state_mut().enemies.push(tank);
        assert_eq!(g.handle_input("tank"), None);
        assert!(g.state().bullets.is_empty());
    }
}

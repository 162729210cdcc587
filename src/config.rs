//! Tunable constants for a run.
//!
//! `GameConfig::default()` reproduces the arcade balance; pages can override
//! any subset through `start_game_with_config` with a JSON object.

use std::fmt;

use serde::Deserialize;

pub const HIGH_SCORE_KEY: &str = "highScore";
pub const DEFAULT_WORD_SOURCE: &str = "https://api.datamuse.com/words?rel_trg=war&max=100";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,

    pub player_width: f64,
    pub player_height: f64,
    /// Distance of the player's top edge from the bottom of the canvas.
    pub player_bottom_offset: f64,

    pub initial_lives: u32,
    /// Frames between regular spawns at level 1.
    pub initial_spawn_rate: u64,
    pub min_spawn_rate: u64,
    pub spawn_rate_step: u64,
    /// Score needed per level: level N ends at `N * level_score_step`.
    pub level_score_step: u64,

    pub bullet_speed: f64,
    pub bullet_size: f64,

    pub enemy_width: f64,
    pub enemy_height: f64,
    pub enemy_base_speed: f64,
    pub enemy_speed_per_level: f64,
    pub points_per_letter: u64,

    pub boss_word: String,
    pub boss_width: f64,
    pub boss_height: f64,
    pub boss_speed: f64,
    pub boss_health: u32,
    pub boss_points: u64,
    /// Bosses spawn every `spawn_rate * boss_cadence` frames.
    pub boss_cadence: u64,
    /// Bosses only appear above this level.
    pub boss_after_level: u32,

    pub explosion_particles: usize,
    pub particle_life: u32,

    pub level_up_flash_frames: u32,

    pub max_word_len: usize,
    pub word_source_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 500.0,
            player_width: 60.0,
            player_height: 50.0,
            player_bottom_offset: 80.0,
            initial_lives: 3,
            initial_spawn_rate: 120,
            min_spawn_rate: 30,
            spawn_rate_step: 10,
            level_score_step: 700,
            bullet_speed: 8.0,
            bullet_size: 8.0,
            enemy_width: 50.0,
            enemy_height: 40.0,
            enemy_base_speed: 0.5,
            enemy_speed_per_level: 0.15,
            points_per_letter: 10,
            boss_word: "annihilation".to_string(),
            boss_width: 80.0,
            boss_height: 60.0,
            boss_speed: 0.5,
            boss_health: 5,
            boss_points: 500,
            boss_cadence: 10,
            boss_after_level: 2,
            explosion_particles: 20,
            particle_life: 60,
            level_up_flash_frames: 60,
            max_word_len: 12,
            word_source_url: DEFAULT_WORD_SOURCE.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    /// A field is outside the range a run can work with.
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "{e}"),
            ConfigError::Invalid { field, reason } => write!(f, "{field} {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::Invalid { field, reason: "must be greater than 0" });
    }
    Ok(())
}

fn nonzero(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid { field, reason: "must not be 0" });
    }
    Ok(())
}

impl GameConfig {
    /// Parse a partial override and check it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would stall or break a tick: zero step sizes,
    /// zero-health bosses and empty geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("enemy_width", self.enemy_width)?;
        positive("enemy_height", self.enemy_height)?;
        positive("boss_width", self.boss_width)?;
        positive("boss_height", self.boss_height)?;
        positive("bullet_size", self.bullet_size)?;
        positive("bullet_speed", self.bullet_speed)?;

        nonzero("initial_lives", self.initial_lives.into())?;
        nonzero("initial_spawn_rate", self.initial_spawn_rate)?;
        nonzero("min_spawn_rate", self.min_spawn_rate)?;
        nonzero("level_score_step", self.level_score_step)?;
        nonzero("boss_health", self.boss_health.into())?;
        nonzero("boss_cadence", self.boss_cadence)?;
        Ok(())
    }

    /// Speed of a regular enemy spawned at `level`.
    pub fn enemy_speed(&self, level: u32) -> f64 {
        self.enemy_base_speed + level as f64 * self.enemy_speed_per_level
    }

    /// Score at which `level` is complete.
    pub fn level_threshold(&self, level: u32) -> u64 {
        (level as u64).saturating_mul(self.level_score_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "canvas_width": 1024, "boss_word": "doom" }"#).unwrap();
        assert_eq!(cfg.canvas_width, 1024.0);
        assert_eq!(cfg.boss_word, "doom");
        assert_eq!(cfg.canvas_height, 500.0);
        assert_eq!(cfg.initial_spawn_rate, 120);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(GameConfig::from_json(r#"{ "canvas_widht": 10 }"#).is_err());
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_ok());
    }

    fn rejected_field(json: &str) -> &'static str {
        match GameConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected a validation error for {json}, got {other:?}"),
        }
    }

    #[test]
    fn zero_level_step_is_rejected() {
        assert_eq!(rejected_field(r#"{ "level_score_step": 0 }"#), "level_score_step");
    }

    #[test]
    fn zero_health_boss_is_rejected() {
        assert_eq!(rejected_field(r#"{ "boss_health": 0 }"#), "boss_health");
    }

    #[test]
    fn zero_spawn_rates_are_rejected() {
        assert_eq!(rejected_field(r#"{ "min_spawn_rate": 0 }"#), "min_spawn_rate");
        assert_eq!(rejected_field(r#"{ "initial_spawn_rate": 0 }"#), "initial_spawn_rate");
        assert_eq!(rejected_field(r#"{ "boss_cadence": 0 }"#), "boss_cadence");
    }

    #[test]
    fn empty_geometry_is_rejected() {
        assert_eq!(rejected_field(r#"{ "canvas_width": 0 }"#), "canvas_width");
        assert_eq!(rejected_field(r#"{ "canvas_height": -5 }"#), "canvas_height");
        assert_eq!(rejected_field(r#"{ "enemy_width": 0 }"#), "enemy_width");
        assert_eq!(rejected_field(r#"{ "boss_height": 0 }"#), "boss_height");
        assert_eq!(rejected_field(r#"{ "player_width": 0 }"#), "player_width");
        assert_eq!(rejected_field(r#"{ "bullet_speed": 0 }"#), "bullet_speed");
    }

    #[test]
    fn huge_level_step_saturates_threshold() {
        let cfg = GameConfig { level_score_step: u64::MAX, ..GameConfig::default() };
        assert_eq!(cfg.level_threshold(3), u64::MAX);
    }

    #[test]
    fn enemy_speed_scales_with_level() {
        let cfg = GameConfig::default();
        assert!((cfg.enemy_speed(1) - 0.65).abs() < 1e-9);
        assert!((cfg.enemy_speed(4) - 1.1).abs() < 1e-9);
    }
}

//! Things that happened during a tick or an input event, queued by the core and
//! handed to the sound and HUD ports by the shell.

use crate::ports::{Hud, Sound, SoundTrigger};

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Sound(Sound),
    ProgressChanged { score: u64, level: u32, high_score: u64 },
    LivesChanged { lives: u32 },
    LevelUp { level: u32 },
    LevelUpFlashEnded,
    GameOver { final_score: u64 },
    /// A typed word fired a shot; the input field should be emptied.
    InputConsumed,
}

pub fn dispatch<I>(events: I, sound: &mut dyn SoundTrigger, hud: &mut dyn Hud)
where
    I: IntoIterator<Item = GameEvent>,
{
    for event in events {
        match event {
            GameEvent::Sound(s) => sound.play(s),
            GameEvent::ProgressChanged { score, level, high_score } => {
                hud.show_progress(score, level, high_score)
            }
            GameEvent::LivesChanged { lives } => hud.show_lives(lives),
            GameEvent::LevelUp { .. } => hud.set_level_up_flash(true),
            GameEvent::LevelUpFlashEnded => hud.set_level_up_flash(false),
            GameEvent::GameOver { final_score } => hud.show_game_over(final_score),
            GameEvent::InputConsumed => hud.clear_input(),
        }
    }
}

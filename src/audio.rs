//! Sound effect handles and playback
//!
//! The simulation only emits `SoundEffect` handles. Playback is fire-and-forget:
//! nothing in the game logic depends on a sound actually being heard.

use serde::{Deserialize, Serialize};

use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Any ball bounce (walls, paddles, bricks, other balls)
    BallCollision,
    /// Exploding brick going off
    Explosion,
}

impl SoundEffect {
    /// Asset path of the sample for this effect
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::BallCollision => "assets/blop.wav",
            SoundEffect::Explosion => "assets/explosion.wav",
        }
    }
}

/// Audio manager for the game
///
/// Native builds have no output device wired up; plays are logged and
/// counted so the headless runner can report them.
#[derive(Debug, Default)]
pub struct AudioManager {
    settings: AudioSettings,
    plays: u64,
}

impl AudioManager {
    pub fn new(settings: AudioSettings) -> Self {
        Self { settings, plays: 0 }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.settings.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.settings.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.settings.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.plays += 1;
        log::trace!("play {} at volume {:.2}", effect.asset_path(), vol);
    }

    /// Number of effects actually played (muted plays are not counted)
    pub fn plays(&self) -> u64 {
        self.plays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_plays_are_dropped() {
        let mut audio = AudioManager::new(AudioSettings::default());
        audio.play(SoundEffect::Explosion);
        assert_eq!(audio.plays(), 1);

        audio.set_muted(true);
        audio.play(SoundEffect::BallCollision);
        assert_eq!(audio.plays(), 1);

        audio.set_muted(false);
        audio.set_sfx_volume(0.0);
        audio.play(SoundEffect::BallCollision);
        assert_eq!(audio.plays(), 1);

        audio.set_sfx_volume(1.0);
        audio.set_master_volume(-3.0);
        audio.play(SoundEffect::BallCollision);
        assert_eq!(audio.plays(), 1);
    }
}

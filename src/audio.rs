//! Audio effect playback
//!
//! The simulation only raises `GameEvent`s. `AudioManager` maps them onto
//! clips and spreads rapid repeats over a few round-robin channels per clip,
//! so overlapping hits don't cut each other off. The actual sound output is
//! behind `AudioBackend`.

use crate::consts::AUDIO_CHANNELS;
use crate::settings::GameConfig;
use crate::sim::GameEvent;

/// Something that can play a clip on a numbered channel
pub trait AudioBackend {
    fn play(&mut self, clip: &'static str, channel: usize, volume: f32);
}

/// Backend that only logs what would have played
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, clip: &'static str, channel: usize, volume: f32) {
        log::debug!("play {} on channel {} at {:.2}", clip, channel, volume);
    }
}

/// Clip and base volume for each effect
pub fn clip_for(event: GameEvent) -> (&'static str, f32) {
    match event {
        GameEvent::HitBlock => ("hit_block", 0.5),
        GameEvent::HitPaddle => ("hit_paddle", 0.5),
        GameEvent::HitEdge => ("hit_edge", 0.5),
        GameEvent::LostAllBalls => ("lost_all_balls", 0.2),
    }
}

fn slot(event: GameEvent) -> usize {
    match event {
        GameEvent::HitBlock => 0,
        GameEvent::HitPaddle => 1,
        GameEvent::HitEdge => 2,
        GameEvent::LostAllBalls => 3,
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    /// Last channel used per effect
    channels: [usize; 4],
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            channels: [0; 4],
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with volumes taken from the config
    pub fn from_config(backend: B, config: &GameConfig) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(config.master_volume);
        audio.set_sfx_volume(config.sfx_volume);
        audio.set_muted(config.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the clip for one event
    pub fn play(&mut self, event: GameEvent) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let (clip, base_volume) = clip_for(event);
        let cursor = &mut self.channels[slot(event)];
        *cursor = (*cursor + 1) % AUDIO_CHANNELS;
        self.backend.play(clip, *cursor, base_volume * vol);
    }

    /// Play every event in order
    pub fn play_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.play(event);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

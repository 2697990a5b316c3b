/// Sound effect player
///
/// Owns the clip registry plus the master enabled flag and volume.
use std::collections::HashMap;

use serde::Serialize;

use super::assets::ClipAsset;
use super::backend::{AudioBackend, ClipHandle};
use super::source::SoundId;
use super::volume::VolumeLevel;
use crate::config::PlayerConfig;
use crate::error::SoundError;

/// What happened to a play request
///
/// Purely informational; nothing needs to be done with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayOutcome {
    /// Playback was requested from the platform
    Requested,

    /// Player is disabled (muted or failed to initialize)
    Disabled,

    /// No handle registered for the identifier
    NotLoaded,

    /// Platform refused the request
    Rejected,

    /// Name is not one of the known identifiers
    Unknown,
}

/// Log a playback refusal for `sound`
///
/// Shared by the synchronous path in [`EffectPlayer::play`] and by handles
/// whose platform reports refusals asynchronously.
pub fn report_rejection(sound: SoundId, error: &SoundError) {
    tracing::warn!(sound = %sound, "Sound effect playback failed: {}", error);
}

/// Sound effect player
pub struct EffectPlayer<B: AudioBackend> {
    backend: B,
    clips: HashMap<SoundId, B::Handle>,
    enabled: bool,
    volume: VolumeLevel,
}

impl<B: AudioBackend> EffectPlayer<B> {
    /// Create a player and preload every clip
    ///
    /// Never fails: if the backend cannot produce handles the player comes
    /// up disabled and every play request is a no-op.
    pub fn new(backend: B, config: &PlayerConfig) -> Self {
        let mut player = Self {
            backend,
            clips: HashMap::new(),
            enabled: config.enabled,
            volume: VolumeLevel::new(config.volume),
        };
        player.initialize(config.sample_rate);
        player
    }

    fn initialize(&mut self, sample_rate: u32) {
        match self.load_clips(sample_rate) {
            Ok(clips) => {
                self.clips = clips;
                tracing::info!(
                    "✓ Preloaded {} sound effects at volume {:.2}",
                    self.clips.len(),
                    self.volume.level()
                );
            }
            Err(e) => {
                tracing::warn!("Sound effect initialization failed, disabling sounds: {}", e);
                self.enabled = false;
            }
        }
    }

    /// Build every handle, committing nothing unless all succeed
    fn load_clips(&self, sample_rate: u32) -> Result<HashMap<SoundId, B::Handle>, SoundError> {
        let mut staged = HashMap::with_capacity(SoundId::ALL.len());
        for asset in ClipAsset::render_all(sample_rate)? {
            let mut handle = self.backend.create_handle(asset.sound(), &asset)?;
            handle.set_volume(self.volume.level());
            staged.insert(asset.sound(), handle);
        }
        Ok(staged)
    }

    /// Play a sound from the start (non-blocking)
    pub fn play(&mut self, sound: SoundId) -> PlayOutcome {
        if !self.enabled {
            return PlayOutcome::Disabled;
        }
        let Some(handle) = self.clips.get_mut(&sound) else {
            return PlayOutcome::NotLoaded;
        };

        tracing::debug!("Playing sound effect: {}", sound);
        handle.rewind();
        match handle.play() {
            Ok(()) => PlayOutcome::Requested,
            Err(e) => {
                report_rejection(sound, &e);
                PlayOutcome::Rejected
            }
        }
    }

    /// Play a sound by host name; unknown names are silently ignored
    pub fn play_named(&mut self, name: &str) -> PlayOutcome {
        match name.parse::<SoundId>() {
            Ok(sound) => self.play(sound),
            Err(_) => PlayOutcome::Unknown,
        }
    }

    pub fn play_correct(&mut self) -> PlayOutcome {
        self.play(SoundId::Correct)
    }

    pub fn play_wrong(&mut self) -> PlayOutcome {
        self.play(SoundId::Wrong)
    }

    pub fn play_button(&mut self) -> PlayOutcome {
        self.play(SoundId::Button)
    }

    pub fn play_start(&mut self) -> PlayOutcome {
        self.play(SoundId::Start)
    }

    pub fn play_spin(&mut self) -> PlayOutcome {
        self.play(SoundId::Spin)
    }

    /// Set master volume (clamped to 0.0-1.0) and apply it to every clip
    pub fn set_volume(&mut self, volume: f32) {
        if !self.volume.set_level(volume) {
            tracing::debug!("Ignoring NaN volume, keeping {:.2}", self.volume.level());
            return;
        }
        let level = self.volume.level();
        for handle in self.clips.values_mut() {
            handle.set_volume(level);
        }
        if self.volume.is_muted() {
            tracing::debug!("Sound effect volume at zero");
        } else {
            tracing::debug!("Sound effect volume set to {:.2}", level);
        }
    }

    /// Flip the enabled flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        tracing::debug!("Sound effects {}", if self.enabled { "enabled" } else { "muted" });
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Get number of loaded clips
    pub fn loaded_count(&self) -> usize {
        self.clips.len()
    }

    /// Registered handle for a sound
    pub fn handle(&self, sound: SoundId) -> Option<&B::Handle> {
        self.clips.get(&sound)
    }
}

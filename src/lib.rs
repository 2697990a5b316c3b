//! Quiz sound effects
//!
//! Preloads five short clips (`correct`, `wrong`, `button`, `start`,
//! `spin`) and exposes play, mute and volume controls to a host.
//!
//! Playback never raises errors to the caller: an unusable audio device
//! turns the player into a silent no-op, and refused playback is logged.
//!
//! Backends are chosen by feature:
//! - `native` (default): rodio on the default output device
//! - `web`: `HtmlAudioElement`, with `playSound` / `toggleSound` /
//!   `setSoundVolume` exported through wasm-bindgen

pub mod audio_system;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
#[cfg(feature = "web")]
pub mod web_api;

pub use audio_system::{
    AudioBackend, ClipAsset, ClipHandle, EffectPlayer, PlayOutcome, SoundId, VolumeLevel,
};
#[cfg(feature = "native")]
pub use audio_system::{NativeBackend, NativeClip};
#[cfg(feature = "web")]
pub use audio_system::{WebBackend, WebClip};
pub use config::PlayerConfig;
pub use error::{ConfigError, SoundError};
pub use host::{dispatch_json, HostCommand, HostReply};

/// Sound effect player on the default output device
#[cfg(feature = "native")]
pub type NativeEffectPlayer = EffectPlayer<NativeBackend>;

/// Open the default output device and preload every clip
///
/// Comes up disabled when the device or a clip fails.
#[cfg(feature = "native")]
pub fn native_player(config: &PlayerConfig) -> NativeEffectPlayer {
    EffectPlayer::new(NativeBackend::open(), config)
}

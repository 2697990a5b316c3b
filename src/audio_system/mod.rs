//! Audio system module
//!
//! Preloads the quiz sound effects and plays them on request:
//! - Fixed registry of five clips, built once
//! - Master volume and enabled flag shared by every clip
//! - Fire-and-forget playback; failures are logged, never raised
//!
//! ## Architecture
//!
//! ```text
//! EffectPlayer<B: AudioBackend>
//!   ├── enabled / VolumeLevel
//!   └── registry
//!       ├── Correct ─┐
//!       ├── Wrong   ─┤
//!       ├── Button  ─┤ B::Handle (ClipHandle)
//!       ├── Start   ─┤   NativeBackend → rodio Sink
//!       └── Spin    ─┘   WebBackend    → HtmlAudioElement
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quiz_sfx::{EffectPlayer, NativeBackend, PlayerConfig, SoundId};
//!
//! let mut player = EffectPlayer::new(NativeBackend::open(), &PlayerConfig::default());
//!
//! player.play(SoundId::Correct);
//! player.set_volume(0.8);
//! let enabled = player.toggle();
//! ```

pub mod assets;
pub mod backend;
#[cfg(feature = "native")]
pub mod native;
pub mod player;
pub mod source;
pub mod volume;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use assets::ClipAsset;
pub use backend::{AudioBackend, ClipHandle};
#[cfg(feature = "native")]
pub use native::{NativeBackend, NativeClip};
pub use player::{EffectPlayer, PlayOutcome};
pub use source::SoundId;
pub use volume::VolumeLevel;
#[cfg(feature = "web")]
pub use web::{WebBackend, WebClip};

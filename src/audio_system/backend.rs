/// Platform media seam
///
/// The player only ever talks to the host platform through these two
/// traits, so rodio, the browser and test doubles are interchangeable.
use super::assets::ClipAsset;
use super::source::SoundId;
use crate::error::SoundError;

/// Builds playable handles from clip payloads
pub trait AudioBackend {
    type Handle: ClipHandle;

    /// Construct one playable handle for `clip`
    fn create_handle(&self, sound: SoundId, clip: &ClipAsset) -> Result<Self::Handle, SoundError>;
}

/// A platform-level playable object with its own position and volume
pub trait ClipHandle {
    /// Set volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Current volume
    fn volume(&self) -> f32;

    /// Move playback position back to the start
    fn rewind(&mut self);

    /// Request playback without waiting for it to start or finish
    ///
    /// Refusals the platform reports later (after this returns) are the
    /// handle's own business and go through
    /// [`report_rejection`](super::player::report_rejection).
    fn play(&mut self) -> Result<(), SoundError>;
}

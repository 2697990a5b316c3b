/// Native audio backend
///
/// Plays clips through the default output device with rodio.
use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::assets::ClipAsset;
use super::backend::{AudioBackend, ClipHandle};
use super::source::SoundId;
use crate::error::SoundError;

/// rodio backend sharing one output stream across every clip
pub struct NativeBackend {
    // Dropping the stream silences every sink, so it lives as long as the backend
    _stream: Option<OutputStream>,
    stream_handle: Result<OutputStreamHandle, String>,
}

impl NativeBackend {
    /// Open the default output device
    ///
    /// A missing device is not an error here: the backend still builds and
    /// every `create_handle` reports the device failure instead.
    pub fn open() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                stream_handle: Ok(handle),
            },
            Err(e) => {
                tracing::warn!("No audio output device: {}", e);
                Self {
                    _stream: None,
                    stream_handle: Err(e.to_string()),
                }
            }
        }
    }
}

impl AudioBackend for NativeBackend {
    type Handle = NativeClip;

    fn create_handle(&self, sound: SoundId, clip: &ClipAsset) -> Result<NativeClip, SoundError> {
        let stream_handle = self
            .stream_handle
            .as_ref()
            .map_err(|reason| SoundError::StreamUnavailable {
                sound,
                reason: reason.clone(),
            })?;
        NativeClip::new(sound, stream_handle.clone(), clip.wav())
    }
}

/// One preloaded clip with its own sink
pub struct NativeClip {
    sound: SoundId,
    stream_handle: OutputStreamHandle,
    sink: Sink,
    audio_data: Arc<Vec<u8>>,
    volume: f32,
}

impl NativeClip {
    fn new(
        sound: SoundId,
        stream_handle: OutputStreamHandle,
        audio_data: Arc<Vec<u8>>,
    ) -> Result<Self, SoundError> {
        let sink = Sink::try_new(&stream_handle).map_err(|e| SoundError::HandleCreation {
            sound,
            reason: e.to_string(),
        })?;

        // Verify the payload decodes before anyone asks to play it
        let decoder = decode(sound, &audio_data)?;
        tracing::debug!(
            "Audio handle ready for {} ({} bytes, {:?})",
            sound,
            audio_data.len(),
            decoder.total_duration()
        );

        Ok(Self {
            sound,
            stream_handle,
            sink,
            audio_data,
            volume: 1.0,
        })
    }
}

// rodio's Decoder requires owned data with 'static lifetime, hence the clone
fn decode(
    sound: SoundId,
    audio_data: &Arc<Vec<u8>>,
) -> Result<Decoder<Cursor<Vec<u8>>>, SoundError> {
    Decoder::new(Cursor::new(audio_data.as_ref().clone())).map_err(|e| {
        SoundError::DecodeFailed {
            sound,
            reason: e.to_string(),
        }
    })
}

impl ClipHandle for NativeClip {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(self.volume);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn rewind(&mut self) {
        // Stop whatever is queued and start over with a fresh sink
        self.sink.stop();
        if let Ok(new_sink) = Sink::try_new(&self.stream_handle) {
            new_sink.set_volume(self.volume);
            self.sink = new_sink;
        }
    }

    fn play(&mut self) -> Result<(), SoundError> {
        let source = decode(self.sound, &self.audio_data)?;
        self.sink.set_volume(self.volume);
        self.sink.append(source);
        self.sink.play();
        Ok(())
    }
}

// Recording backend shared by the integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use quiz_sfx::{
    AudioBackend, ClipAsset, ClipHandle, EffectPlayer, PlayerConfig, SoundError, SoundId,
};

/// Everything a handle was asked to do, in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Rewind(SoundId),
    Play(SoundId),
}

#[derive(Default)]
pub struct Recorder {
    pub calls: RefCell<Vec<Call>>,
    pub volumes: RefCell<HashMap<SoundId, f32>>,
}

impl Recorder {
    pub fn plays(&self) -> Vec<SoundId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Play(sound) => Some(*sound),
                Call::Rewind(_) => None,
            })
            .collect()
    }
}

#[derive(Default)]
pub struct RecordingBackend {
    pub recorder: Rc<Recorder>,
    /// Fail handle construction for this clip
    pub fail_on: Option<SoundId>,
    /// Handles for these clips refuse to play
    pub reject: HashSet<SoundId>,
}

pub struct RecordingClip {
    sound: SoundId,
    volume: f32,
    rejects: bool,
    recorder: Rc<Recorder>,
}

impl AudioBackend for RecordingBackend {
    type Handle = RecordingClip;

    fn create_handle(&self, sound: SoundId, clip: &ClipAsset) -> Result<RecordingClip, SoundError> {
        assert_eq!(clip.sound(), sound);
        if self.fail_on == Some(sound) {
            return Err(SoundError::StreamUnavailable {
                sound,
                reason: "no audio device".to_string(),
            });
        }
        Ok(RecordingClip {
            sound,
            volume: 1.0,
            rejects: self.reject.contains(&sound),
            recorder: Rc::clone(&self.recorder),
        })
    }
}

impl ClipHandle for RecordingClip {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.recorder.volumes.borrow_mut().insert(self.sound, volume);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn rewind(&mut self) {
        self.recorder.calls.borrow_mut().push(Call::Rewind(self.sound));
    }

    fn play(&mut self) -> Result<(), SoundError> {
        self.recorder.calls.borrow_mut().push(Call::Play(self.sound));
        if self.rejects {
            return Err(SoundError::PlaybackRejected {
                sound: self.sound,
                reason: "NotAllowedError".to_string(),
            });
        }
        Ok(())
    }
}

/// Fresh player plus the recorder watching its handles
pub fn recording_player() -> (EffectPlayer<RecordingBackend>, Rc<Recorder>) {
    with_backend(RecordingBackend::default())
}

pub fn with_backend(backend: RecordingBackend) -> (EffectPlayer<RecordingBackend>, Rc<Recorder>) {
    let recorder = Rc::clone(&backend.recorder);
    (EffectPlayer::new(backend, &PlayerConfig::default()), recorder)
}

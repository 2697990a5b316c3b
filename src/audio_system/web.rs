/// Browser audio backend
///
/// One `<audio>` element per clip, fed from an inline data URI.
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use super::assets::ClipAsset;
use super::backend::{AudioBackend, ClipHandle};
use super::player::report_rejection;
use super::source::SoundId;
use crate::error::SoundError;

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// HTMLMediaElement backend
#[derive(Debug, Default, Clone, Copy)]
pub struct WebBackend;

impl AudioBackend for WebBackend {
    type Handle = WebClip;

    fn create_handle(&self, sound: SoundId, clip: &ClipAsset) -> Result<WebClip, SoundError> {
        let element = HtmlAudioElement::new_with_src(&clip.data_uri()).map_err(|e| {
            SoundError::HandleCreation {
                sound,
                reason: describe(&e),
            }
        })?;
        element.set_preload("auto");

        Ok(WebClip {
            sound,
            element,
            volume: 1.0,
        })
    }
}

pub struct WebClip {
    sound: SoundId,
    element: HtmlAudioElement,
    volume: f32,
}

impl ClipHandle for WebClip {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.element.set_volume(f64::from(self.volume));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }

    fn play(&mut self) -> Result<(), SoundError> {
        let sound = self.sound;
        let promise = self
            .element
            .play()
            .map_err(|e| SoundError::PlaybackRejected {
                sound,
                reason: describe(&e),
            })?;

        // Autoplay policy and busy devices reject the promise later
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                report_rejection(
                    sound,
                    &SoundError::PlaybackRejected {
                        sound,
                        reason: describe(&e),
                    },
                );
            }
        });

        Ok(())
    }
}

//! Browser exports
//!
//! `playSound`, `toggleSound` and `setSoundVolume` drive a page-lifetime
//! player created on first use. Pages that prefer to own the instance can
//! construct a `SoundEffects` object instead.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::audio_system::{EffectPlayer, WebBackend};
use crate::config::PlayerConfig;
use crate::host;

fn new_player() -> EffectPlayer<WebBackend> {
    console_error_panic_hook::set_once();
    crate::logging::init();
    EffectPlayer::new(WebBackend, &PlayerConfig::default())
}

thread_local! {
    static PAGE_PLAYER: RefCell<EffectPlayer<WebBackend>> = RefCell::new(new_player());
}

#[wasm_bindgen(js_name = playSound)]
pub fn play_sound(name: &str) {
    PAGE_PLAYER.with(|player| {
        host::play_sound(&mut *player.borrow_mut(), name);
    });
}

#[wasm_bindgen(js_name = toggleSound)]
pub fn toggle_sound() -> bool {
    PAGE_PLAYER.with(|player| host::toggle_sound(&mut *player.borrow_mut()))
}

#[wasm_bindgen(js_name = setSoundVolume)]
pub fn set_sound_volume(level: f32) {
    PAGE_PLAYER.with(|player| host::set_sound_volume(&mut *player.borrow_mut(), level));
}

/// Host-owned sound effect player
#[wasm_bindgen]
pub struct SoundEffects {
    inner: EffectPlayer<WebBackend>,
}

#[wasm_bindgen]
impl SoundEffects {
    /// Preload every clip; `config` is an optional JSON settings document
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<SoundEffects, JsValue> {
        let config = match config {
            Some(json) => {
                PlayerConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => PlayerConfig::default(),
        };

        console_error_panic_hook::set_once();
        crate::logging::init();
        Ok(Self {
            inner: EffectPlayer::new(WebBackend, &config),
        })
    }

    pub fn play(&mut self, name: &str) {
        self.inner.play_named(name);
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f32) {
        self.inner.set_volume(level);
    }

    pub fn toggle(&mut self) -> bool {
        self.inner.toggle()
    }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    #[wasm_bindgen(getter)]
    pub fn volume(&self) -> f32 {
        self.inner.volume()
    }

    #[wasm_bindgen(js_name = playCorrect)]
    pub fn play_correct(&mut self) {
        self.inner.play_correct();
    }

    #[wasm_bindgen(js_name = playWrong)]
    pub fn play_wrong(&mut self) {
        self.inner.play_wrong();
    }

    #[wasm_bindgen(js_name = playButton)]
    pub fn play_button(&mut self) {
        self.inner.play_button();
    }

    #[wasm_bindgen(js_name = playStart)]
    pub fn play_start(&mut self) {
        self.inner.play_start();
    }

    #[wasm_bindgen(js_name = playSpin)]
    pub fn play_spin(&mut self) {
        self.inner.play_spin();
    }
}

//! Tone-synth sound effects over Web Audio.
//!
//! The `AudioContext` is created lazily on the first effect (browsers only
//! allow it after a user gesture anyway). Any Web Audio failure switches the
//! sink off for the rest of the session.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::feedback::{Effect, Feedback};
use crate::log;

const PEAK_GAIN: f32 = 0.3;
const FLOOR_GAIN: f32 = 0.001;

pub struct WebAudioFeedback {
    ctx: RefCell<Option<AudioContext>>,
    enabled: Cell<bool>,
}

impl WebAudioFeedback {
    pub fn new() -> Self {
        Self { ctx: RefCell::new(None), enabled: Cell::new(true) }
    }

    fn context(&self) -> Option<AudioContext> {
        if !self.enabled.get() {
            return None;
        }
        let mut slot = self.ctx.borrow_mut();
        if slot.is_none() {
            match AudioContext::new() {
                Ok(ctx) => *slot = Some(ctx),
                Err(e) => {
                    log::warn("audio", &format!("AudioContext unavailable: {e:?}"));
                    self.enabled.set(false);
                    return None;
                }
            }
        }
        slot.clone()
    }

    fn try_play(&self, ctx: &AudioContext, effect: Effect) -> Result<(), JsValue> {
        let now = ctx.current_time();
        match effect {
            Effect::TileSelected => tone(ctx, &[500.0], 0.05, OscillatorType::Sine, now),
            Effect::MatchSuccess => tone(ctx, &[440.0, 554.0, 659.0], 0.2, OscillatorType::Square, now),
            Effect::GameOver => tone(ctx, &[330.0, 280.0], 0.2, OscillatorType::Sawtooth, now),
            Effect::GameStart => {
                tone(ctx, &[440.0], 0.1, OscillatorType::Square, now)?;
                tone(ctx, &[880.0], 0.1, OscillatorType::Square, now + 0.3)?;
                tone(ctx, &[220.0, 440.0, 880.0], 0.3, OscillatorType::Sine, now + 0.7)
            }
        }
    }
}

impl Default for WebAudioFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl Feedback for WebAudioFeedback {
    fn play(&self, effect: Effect) {
        let Some(ctx) = self.context() else {
            return;
        };
        if let Err(e) = self.try_play(&ctx, effect) {
            log::warn("audio", &format!("disabling sound after {effect:?} failed: {e:?}"));
            self.enabled.set(false);
        }
    }
}

/// Play `freqs` back to back, splitting `duration` (seconds) evenly between them.
fn tone(
    ctx: &AudioContext,
    freqs: &[f32],
    duration: f64,
    kind: OscillatorType,
    start: f64,
) -> Result<(), JsValue> {
    let step = duration / freqs.len() as f64;
    for (i, &freq) in freqs.iter().enumerate() {
        let from = start + i as f64 * step;
        let to = from + step;

        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(kind);
        osc.frequency().set_value_at_time(freq, from)?;
        gain.gain().set_value_at_time(PEAK_GAIN, from)?;
        gain.gain().exponential_ramp_to_value_at_time(FLOOR_GAIN, to)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(from)?;
        osc.stop_with_when(to)?;
    }
    Ok(())
}

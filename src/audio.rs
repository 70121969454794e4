//! Audio cues
//!
//! The game only ever asks for two cues, fire-and-forget. In the browser they
//! are synthesized with the Web Audio API, so no sound files are shipped.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A round begins
    RoundStart,
    /// The player hit an obstacle
    Death,
}

/// Plays cues from the start each time they are triggered
pub trait CuePlayer {
    fn play(&self, effect: SoundEffect);
}

/// Cue player that only logs (native builds)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl CuePlayer for SilentAudio {
    fn play(&self, effect: SoundEffect) {
        log::debug!("cue {:?} (silent)", effect);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{CuePlayer, SoundEffect};
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        sfx_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: settings.master_volume.clamp(0.0, 1.0),
                sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
                muted: settings.muted,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn effective_volume(&self) -> f32 {
            if self.muted {
                0.0
            } else {
                self.master_volume * self.sfx_volume
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Round start - two rising blips
        fn play_round_start(&self, ctx: &AudioContext, vol: f32) {
            for (i, (from, to)) in [(300.0, 600.0), (450.0, 900.0)].iter().enumerate() {
                let Some((osc, gain)) = self.create_osc(ctx, *from, OscillatorType::Square)
                else {
                    continue;
                };
                let t = ctx.current_time() + i as f64 * 0.09;

                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.frequency().set_value_at_time(*from, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(*to, t + 0.08)
                    .ok();

                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.15).ok();
            }
        }

        /// Death - sawtooth sweep from 400Hz down to 80Hz
        fn play_death(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .linear_ramp_to_value_at_time(0.0, t + 0.5)
                .ok();
            osc.frequency().set_value_at_time(400.0, t).ok();
            osc.frequency()
                .linear_ramp_to_value_at_time(80.0, t + 0.4)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.5).ok();
        }
    }

    impl CuePlayer for AudioManager {
        fn play(&self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::RoundStart => self.play_round_start(ctx, vol),
                SoundEffect::Death => self.play_death(ctx, vol),
            }
        }
    }
}

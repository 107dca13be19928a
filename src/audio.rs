//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::frontend::SoundEffects;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Snake ate the food
    Eat,
    /// Snake crashed
    GameOver,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    /// Master * SFX volume from settings
    volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.master_volume * settings.sfx_volume,
            muted: settings.muted,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.resume().ok();
        }
    }

    /// Mute/unmute all audio, returning the new state
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            ctx.resume().ok();
        }

        match effect {
            SoundEffect::Eat => self.eat_chirp(ctx, vol),
            SoundEffect::GameOver => self.game_over_tone(ctx, vol),
        }
    }

    // === Sound generators ===

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

    /// Frequency sweep with an exponential fade
    fn sweep(&self, ctx: &AudioContext, vol: f32, from: f32, to: f32, duration: f64) {
        let Some((osc, gain)) = self.create_osc(ctx, from, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        osc.frequency().set_value_at_time(from, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(to, t + duration)
            .ok();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + duration)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + duration).ok();
    }

    /// Eat - quick rising chirp
    fn eat_chirp(&self, ctx: &AudioContext, vol: f32) {
        self.sweep(ctx, vol, 800.0, 1200.0, 0.1);
    }

    /// Game over - falling tone
    fn game_over_tone(&self, ctx: &AudioContext, vol: f32) {
        self.sweep(ctx, vol, 400.0, 200.0, 0.3);
    }
}

impl SoundEffects for AudioManager {
    fn play_eat(&mut self) {
        self.play(SoundEffect::Eat);
    }

    fn play_game_over(&mut self) {
        self.play(SoundEffect::GameOver);
    }
}

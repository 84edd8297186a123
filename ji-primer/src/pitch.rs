//! Hertz to MIDI note numbers.
//!
//! [Interval::to_midi](crate::Interval::to_midi) goes through
//! [PitchConverter], so any tuning reference (or a plain closure) can be
//! plugged in instead of [EqualTemperament].

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::interval::{IntervalError, IntervalResult};

pub trait PitchConverter {
    /// Floating-point MIDI note of a positive frequency.
    fn hz_to_midi(&self, hz: f64) -> f64;
}
impl<F: Fn(f64) -> f64> PitchConverter for F {
    fn hz_to_midi(&self, hz: f64) -> f64 {
        self(hz)
    }
}

/// 12-tone equal temperament, A4 = 440Hz = MIDI 69 by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
pub struct EqualTemperament {
    #[derivative(Default(value = "440.0"))]
    pub reference_hz: f64,
    #[derivative(Default(value = "69.0"))]
    pub reference_midi: f64,
}
impl EqualTemperament {
    pub fn new(reference_hz: f64, reference_midi: f64) -> Self {
        Self {
            reference_hz,
            reference_midi,
        }
    }
    pub fn midi_to_hz(&self, midi: f64) -> f64 {
        self.reference_hz * 2.0_f64.powf((midi - self.reference_midi) / 12.0)
    }
}
impl PitchConverter for EqualTemperament {
    fn hz_to_midi(&self, hz: f64) -> f64 {
        self.reference_midi + 12.0 * (hz / self.reference_hz).log2()
    }
}

/// MIDI note in default [EqualTemperament].
///
/// Fails on non-positive frequency.
pub fn hz_to_midi(hz: f64) -> IntervalResult<f64> {
    if hz <= 0.0 || hz.is_nan() {
        return Err(IntervalError::DomainInput(hz));
    }
    Ok(EqualTemperament::default().hz_to_midi(hz))
}

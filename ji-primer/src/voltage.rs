//! Convert between Hertz and volt per octave.
//!
//! `V = v_ref + log2(f / f_ref)`, and back `f = f_ref * 2^(V - v_ref)`.

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::interval::{IntervalError, IntervalResult};

/// 0V at C0.
pub const C0_HZ: f64 = 16.351597831287414;
/// VCV rack uses C4 as the baseline voltage.
pub const C4_HZ: f64 = 261.6256;

/// Frequency that corresponds to `v_ref` volts. C4 = 0V by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
pub struct VoltageReference {
    #[derivative(Default(value = "C4_HZ"))]
    pub f_ref: f64,
    pub v_ref: f64,
}
impl VoltageReference {
    pub fn new(f_ref: f64, v_ref: f64) -> Self {
        Self { f_ref, v_ref }
    }
    pub fn hz_to_vpo(&self, hz: f64) -> IntervalResult<f64> {
        if hz <= 0.0 || hz.is_nan() {
            return Err(IntervalError::DomainInput(hz));
        }
        Ok(self.v_ref + (hz / self.f_ref).log2())
    }
    pub fn vpo_to_hz(&self, volts: f64) -> f64 {
        self.f_ref * 2.0_f64.powf(volts - self.v_ref)
    }
    /// Stops at the first non-positive frequency.
    pub fn hz_to_vpo_all(&self, freqs: &[f64]) -> IntervalResult<Vec<f64>> {
        freqs.iter().map(|hz| self.hz_to_vpo(*hz)).collect()
    }
    pub fn vpo_to_hz_all(&self, volts: &[f64]) -> Vec<f64> {
        volts.iter().map(|v| self.vpo_to_hz(*v)).collect()
    }
}

/// Volts against `reference`, or the default C4 = 0V.
pub fn hz_to_vpo(
    hz: f64,
    reference: impl Into<Option<VoltageReference>>,
) -> IntervalResult<f64> {
    reference.into().unwrap_or_default().hz_to_vpo(hz)
}

pub fn vpo_to_hz(
    volts: f64,
    reference: impl Into<Option<VoltageReference>>,
) -> f64 {
    reference.into().unwrap_or_default().vpo_to_hz(volts)
}

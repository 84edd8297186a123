//! Turning steps into absolute frequencies.
//!
//! # Examples
//!
//! ```
//! use ji_primer::{steps_to_sequence, Interval};
//!
//! let steps = Interval::octave().divide(7, None).unwrap();
//! let freqs = steps_to_sequence(&steps, 264.0, true, false);
//! assert_eq!(freqs.len(), 7);
//! assert_eq!(freqs[0], 264.0);
//! ```

use derivative::Derivative;
use fraction::Fraction;
use serde::{Deserialize, Serialize};

use crate::interval::ratio::{Interval, DEFAULT_BASE_HZ};

/// Anything with an exact frequency ratio.
pub trait AsRatio {
    fn as_ratio(&self) -> Fraction;
}
impl AsRatio for Interval {
    fn as_ratio(&self) -> Fraction {
        self.as_fraction()
    }
}
impl AsRatio for Fraction {
    fn as_ratio(&self) -> Fraction {
        *self
    }
}
impl<T: AsRatio + ?Sized> AsRatio for &T {
    fn as_ratio(&self) -> Fraction {
        (**self).as_ratio()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
pub struct SequenceSettings {
    #[derivative(Default(value = "DEFAULT_BASE_HZ as f64"))]
    pub base: f64,
    /// Prepend base frequency itself.
    #[derivative(Default(value = "true"))]
    pub include_root: bool,
    /// Keep the last frequency, usually the top of the divided interval.
    #[derivative(Default(value = "true"))]
    pub include_octave: bool,
}

/// Cumulative product of steps, scaled by `base`.
///
/// Products are exact while they fit in `u64`, the rest of the sequence is
/// multiplied in `f64`.
pub fn steps_to_sequence<I>(
    steps: I,
    base: f64,
    include_root: bool,
    include_octave: bool,
) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: AsRatio,
{
    let unison = Fraction::new(1_u64, 1_u64);
    let cumulative = steps.into_iter().scan(
        (Some(unison), 1.0_f64),
        |(exact, approx), step| {
            let ratio = step.as_ratio();
            *exact = exact.and_then(|acc| checked_product(acc, ratio));
            *approx = match exact {
                Some(acc) => fraction_to_f64(*acc),
                None => *approx * fraction_to_f64(ratio),
            };
            Some(*approx)
        },
    );
    let mut freqs = Vec::new();
    if include_root {
        freqs.push(base);
    }
    freqs.extend(cumulative.map(|ratio| base * ratio));
    if !include_octave {
        freqs.pop();
    }
    freqs
}

/// [steps_to_sequence] with options from settings.
pub fn realize<I>(steps: I, settings: &SequenceSettings) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: AsRatio,
{
    steps_to_sequence(
        steps,
        settings.base,
        settings.include_root,
        settings.include_octave,
    )
}

/// `None` once the product leaves positive `u64` ratios.
fn checked_product(acc: Fraction, ratio: Fraction) -> Option<Fraction> {
    let acc = Interval::try_from(acc).ok()?;
    let ratio = Interval::try_from(ratio).ok()?;
    acc.multiply(&ratio).ok().map(|product| product.as_fraction())
}

fn fraction_to_f64(frac: Fraction) -> f64 {
    match (frac.numer(), frac.denom()) {
        (Some(numer), Some(denom)) => {
            let value = *numer as f64 / *denom as f64;
            if frac.is_sign_negative() {
                -value
            } else {
                value
            }
        }
        _ => f64::NAN,
    }
}

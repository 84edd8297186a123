//! The [Interval] value type.
//!
//! # Examples
//!
//! ```
//! use ji_primer::Interval;
//!
//! let fifth = Interval::new(3, 2).unwrap();
//! let fourth = Interval::new(4, 3).unwrap();
//! assert_eq!(fifth.add(&fourth).unwrap(), Interval::octave());
//! assert_eq!(fifth.complement().unwrap(), fourth);
//! assert_eq!(Interval::new(6, 4).unwrap(), fifth);
//! assert_eq!(fifth.to_hz(None), 396);
//! ```

use std::{cmp::Ordering, fmt, str::FromStr};

use fraction::Fraction;
use once_cell::sync::Lazy;

use super::{smooth::greatest_prime_factor, IntervalError, IntervalResult};
use crate::pitch::{EqualTemperament, PitchConverter};

/// 264Hz, the C below A440.
pub const DEFAULT_BASE_HZ: u64 = 264;

/// 2/1. The ceiling of [Interval::subtract] and [Interval::complement].
pub static OCTAVE: Lazy<Interval> =
    Lazy::new(|| Interval::from_ratio(Fraction::new(2_u64, 1_u64)));

/// Frequency ratio of two positive integers, always in lowest terms.
///
/// Numerator and denominator are `u64`. Products are cross-reduced before
/// multiplying, and a result that still does not fit is an
/// [IntervalError::Overflow] instead of a wrapped ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    ratio: Fraction,
}
impl Interval {
    /// Reduces numerator and denominator by their gcd.
    pub fn new(numer: u64, denom: u64) -> IntervalResult<Self> {
        if numer == 0 || denom == 0 {
            return Err(IntervalError::InvalidArguments(format!(
                "interval needs positive numerator and denominator, got \
                {numer}/{denom}"
            )));
        }
        Ok(Self::from_ratio(Fraction::new(numer, denom)))
    }

    /// Caller guarantees `ratio` is a positive finite fraction.
    pub(crate) fn from_ratio(ratio: Fraction) -> Self {
        Self { ratio }
    }

    pub fn unison() -> Self {
        Self::from_ratio(Fraction::new(1_u64, 1_u64))
    }

    pub fn octave() -> Self {
        *OCTAVE
    }

    pub fn numer(&self) -> u64 {
        self.ratio.numer().copied().unwrap_or(1)
    }

    pub fn denom(&self) -> u64 {
        self.ratio.denom().copied().unwrap_or(1)
    }

    pub fn as_fraction(&self) -> Fraction {
        self.ratio
    }

    pub fn to_f64(&self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }

    /// True for n/(n-1).
    pub fn is_superparticular(&self) -> bool {
        self.numer() == self.denom() + 1
    }

    /// Is the interval above 1/1?
    pub fn above_1_1(&self) -> bool {
        self.numer() > self.denom()
    }

    /// True in `[1/1, 2/1)`, the domain of subtraction.
    pub fn is_within_octave(&self) -> bool {
        self.numer() >= self.denom() && *self < Self::octave()
    }

    /// Greatest prime found in numerator or denominator. 1 for unison.
    pub fn prime_limit(&self) -> u64 {
        greatest_prime_factor(self.numer())
            .max(greatest_prime_factor(self.denom()))
    }

    pub fn reverse(&self) -> Self {
        Self::from_ratio(Fraction::new(self.denom(), self.numer()))
    }

    /// # Errors
    ///
    /// [IntervalError::Overflow] if the reduced product does not fit in
    /// `u64`.
    pub fn multiply(&self, other: &Self) -> IntervalResult<Self> {
        let left = gcd(self.numer(), other.denom());
        let right = gcd(other.numer(), self.denom());
        let numer = (self.numer() / left).checked_mul(other.numer() / right);
        let denom = (self.denom() / right).checked_mul(other.denom() / left);
        match (numer, denom) {
            (Some(numer), Some(denom)) => Self::new(numer, denom),
            _ => Err(IntervalError::Overflow(format!("{self} * {other}"))),
        }
    }

    /// To add two just intervals, you actually multiply them.
    ///
    /// No range check: the sum can exceed an octave.
    pub fn add(&self, other: &Self) -> IntervalResult<Self> {
        self.multiply(other)
    }

    /// Interval stacked on itself `n` times. `pow(0)` is unison.
    pub fn pow(&self, n: u32) -> IntervalResult<Self> {
        // numerator and denominator stay coprime under powers
        match (self.numer().checked_pow(n), self.denom().checked_pow(n)) {
            (Some(numer), Some(denom)) => Self::new(numer, denom),
            _ => Err(IntervalError::Overflow(format!("({self})^{n}"))),
        }
    }

    /// Multiply by the reversed subtrahend.
    ///
    /// Only defined while `self` lies in `[1/1, 2/1)`. The result itself is
    /// not checked and can fall below unison.
    pub fn subtract(&self, other: &Self) -> IntervalResult<Self> {
        self.check_within_octave("subtract")?;
        difference(self, other)
    }

    /// What is left of the octave above `self`, so that
    /// `self.complement()?.add(&self) == Interval::octave()`.
    pub fn complement(&self) -> IntervalResult<Self> {
        self.check_within_octave("complement")?;
        difference(&Self::octave(), self)
    }

    fn check_within_octave(
        &self,
        operation: &'static str,
    ) -> IntervalResult<()> {
        if *self >= Self::octave() {
            return Err(IntervalError::InvalidOperand {
                operation,
                interval: *self,
                reason: "interval is not smaller than an octave",
            });
        }
        if self.numer() < self.denom() {
            return Err(IntervalError::InvalidOperand {
                operation,
                interval: *self,
                reason: "denominator is greater than numerator",
            });
        }
        Ok(())
    }

    /// Frequency in whole Hz, truncated. Base defaults to
    /// [DEFAULT_BASE_HZ].
    ///
    /// Saturates at `u64::MAX` Hz when the product does not fit.
    pub fn to_hz(&self, base: impl Into<Option<u64>>) -> u64 {
        let base = base.into().unwrap_or(DEFAULT_BASE_HZ) as u128;
        let hz = base * self.numer() as u128 / self.denom() as u128;
        u64::try_from(hz).unwrap_or(u64::MAX)
    }

    /// Floating-point MIDI note of [Interval::to_hz], in 12-TET around
    /// A440.
    pub fn to_midi(
        &self,
        base: impl Into<Option<u64>>,
    ) -> IntervalResult<f64> {
        self.to_midi_with(base, &EqualTemperament::default())
    }

    /// Same as [Interval::to_midi], but with a custom Hz → MIDI mapping.
    ///
    /// ```
    /// # use ji_primer::Interval;
    /// let fifth = Interval::new(3, 2).unwrap();
    /// let half = |hz: f64| hz / 2.0;
    /// assert_eq!(fifth.to_midi_with(None, &half).unwrap(), 198.0);
    /// ```
    pub fn to_midi_with<C: PitchConverter + ?Sized>(
        &self,
        base: impl Into<Option<u64>>,
        converter: &C,
    ) -> IntervalResult<f64> {
        let hz = self.to_hz(base);
        if hz == 0 {
            return Err(IntervalError::DomainInput(0.0));
        }
        Ok(converter.hz_to_midi(hz as f64))
    }

    pub fn to_cents(&self) -> f64 {
        let theta = 1200.0 / 2.0_f64.log10();
        self.to_f64().log10() * theta
    }
}

/// `minuend * reverse(subtrahend)`, without range checks.
fn difference(
    minuend: &Interval,
    subtrahend: &Interval,
) -> IntervalResult<Interval> {
    minuend.multiply(&subtrahend.reverse())
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Product of all intervals, in order. Unison for an empty input.
///
/// # Errors
///
/// [IntervalError::Overflow] as soon as a partial product does not fit.
pub fn stack<'a>(
    intervals: impl IntoIterator<Item = &'a Interval>,
) -> IntervalResult<Interval> {
    intervals
        .into_iter()
        .try_fold(Interval::unison(), |acc, interval| acc.multiply(interval))
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.numer() as u128 * other.denom() as u128;
        let right = other.numer() as u128 * self.denom() as u128;
        left.cmp(&right)
    }
}
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}
impl TryFrom<Fraction> for Interval {
    type Error = IntervalError;

    fn try_from(value: Fraction) -> Result<Self, Self::Error> {
        match (value.numer(), value.denom()) {
            (Some(numer), Some(denom)) if !value.is_sign_negative() => {
                Self::new(*numer, *denom)
            }
            _ => Err(IntervalError::InvalidArguments(format!(
                "{value} is not a positive ratio"
            ))),
        }
    }
}
/// Parses `3/2`, `3:2` or a bare harmonic like `5`.
impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (numer, denom) =
            match s.split_once(|c: char| c == '/' || c == ':') {
                Some((numer, denom)) => (numer, denom),
                None => (s, "1"),
            };
        let parse = |token: &str| {
            token.trim().parse::<u64>().map_err(|err| {
                IntervalError::InvalidArguments(format!(
                    "can not parse interval `{s}`: {err}"
                ))
            })
        };
        Self::new(parse(numer)?, parse(denom)?)
    }
}

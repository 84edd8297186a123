//! Reference intervals and difference tones.

use fraction::Fraction;

use super::{ratio::Interval, IntervalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialRelationship {
    pub interval: Interval,
    pub name: &'static str,
}

const SPECIAL_RELATIONSHIPS: [(u64, u64, &str); 19] = [
    (2, 1, "Octave"),
    (3, 2, "Perfect Fifth"),
    (4, 3, "Perfect Fourth"),
    (5, 3, "Major Sixth"),
    (5, 4, "Major Third"),
    (6, 5, "Minor Third"),
    (7, 4, "Harmonic or Septimal Major Seventh"),
    (7, 5, "Septimal Tritone"),
    (8, 5, "Minor Sixth"),
    (7, 6, "Subminor or Septimal Major Third"),
    // above an octave:
    (7, 3, "Septimal or Subminor Tenth"),
    (8, 3, "Octave Extension of Perfect Fourth"),
    (3, 1, "Perfect Twelfth"),
    (7, 2, "Octave Extension of Harmonic Seventh"),
    (4, 1, "Double Octave"),
    (5, 1, "Two octaves plus a perfect fifth"),
    (7, 1, "Two octaves plus a harmonic seventh"),
    (8, 1, "Triple octave"),
    (9, 4, "Major Ninth"),
];

/// Arthur Benade's "special relationships". Page 22.
pub fn special_relationships() -> Vec<SpecialRelationship> {
    SPECIAL_RELATIONSHIPS
        .iter()
        .map(|&(numer, denom, name)| SpecialRelationship {
            interval: Interval::from_ratio(Fraction::new(numer, denom)),
            name,
        })
        .collect()
}

/// First-order difference tone, `f1 - f2`. Page 16.
pub fn diff1(f1: &Interval, f2: &Interval) -> IntervalResult<Interval> {
    f1.subtract(f2)
}

/// `2·f1 - f2`, where `2·f1` is `f1` stacked twice.
pub fn diff2(f1: &Interval, f2: &Interval) -> IntervalResult<Interval> {
    f1.pow(2)?.subtract(f2)
}

/// `3·f1 - 2·f2`.
pub fn diff3(f1: &Interval, f2: &Interval) -> IntervalResult<Interval> {
    f1.pow(3)?.subtract(&f2.pow(2)?)
}

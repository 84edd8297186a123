//! Just Intonation intervals as exact frequency ratios.
//!
//! Based on "The Just Intonation Primer" by David B. Doty.
//!
//! Intervals are reduced fractions. "Adding" two just intervals multiplies
//! their ratios, "subtracting" multiplies by the reversed ratio and is only
//! defined inside one octave. Any interval above unison can be divided into
//! a number of smaller steps, optionally restricted to a prime limit, and the
//! steps can be realized as a sequence of frequencies.
//!
//! ```
//! use ji_primer::{steps_to_sequence, Interval};
//!
//! let steps = Interval::octave().divide(4, 5_u64).unwrap();
//! let freqs = steps_to_sequence(&steps, 264.0, true, true);
//! assert_eq!(freqs.len(), 5);
//! assert_eq!(freqs.last(), Some(&528.0));
//! ```

pub mod interval;
pub mod pitch;
pub mod sequence;
pub mod voltage;

pub use interval::{
    catalog::{diff1, diff2, diff3, special_relationships, SpecialRelationship},
    multiplier::{max_parts, minimal_multiplier, Ladder},
    ratio::{stack, Interval, DEFAULT_BASE_HZ, OCTAVE},
    smooth::{greatest_prime_factor, is_p_smooth, prime_factors},
    IntervalError, IntervalResult,
};
pub use pitch::{hz_to_midi, EqualTemperament, PitchConverter};
pub use sequence::{realize, steps_to_sequence, AsRatio, SequenceSettings};
pub use voltage::{hz_to_vpo, vpo_to_hz, VoltageReference, C0_HZ, C4_HZ};

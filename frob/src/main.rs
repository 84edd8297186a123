//! Divide an interval and print the resulting scale.
//!
//! `frob [interval] [parts] [prime-limit|none] [base-hz]`, by default the
//! octave in 4 parts of the 5-limit above 264Hz.

use std::{error::Error, str::FromStr};

use clap::Parser;
use itertools::Itertools;
use ji_primer::{
    realize, EqualTemperament, Interval, PitchConverter, SequenceSettings,
    VoltageReference, DEFAULT_BASE_HZ,
};

#[derive(Debug, thiserror::Error)]
#[error("expected a prime limit or `none`, got `{0}`")]
struct BadPrimeLimit(String);

/// Largest prime allowed in the steps. `none` divides without limit.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PrimeLimit(Option<u64>);
impl FromStr for PrimeLimit {
    type Err = BadPrimeLimit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self(None));
        }
        s.parse()
            .map(|limit| Self(Some(limit)))
            .map_err(|_| BadPrimeLimit(s.to_string()))
    }
}

/// Divide a just interval into steps and print them as frequencies.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about)]
struct Args {
    /// Interval to divide: `3/2`, `3:2` or a harmonic like `5`
    #[arg(default_value = "2/1")]
    interval: Interval,

    /// Number of steps
    #[arg(default_value_t = 4)]
    parts: u64,

    /// Prime limit of the steps, or `none`
    #[arg(default_value = "5")]
    prime_limit: PrimeLimit,

    /// Frequency of 1/1 in Hz
    #[arg(default_value_t = DEFAULT_BASE_HZ as f64)]
    base: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    log::info!("dividing {} into {} parts", args.interval, args.parts);

    let steps = args.interval.divide(args.parts, args.prime_limit.0)?;
    let settings = SequenceSettings {
        base: args.base,
        ..Default::default()
    };
    let freqs = realize(&steps, &settings);
    let et = EqualTemperament::default();
    let volts = VoltageReference::default().hz_to_vpo_all(&freqs)?;

    println!("steps: {}", steps.iter().join(" "));
    println!("{:>10} {:>10} {:>10} {:>8}", "step", "hz", "midi", "volts");
    let labels = std::iter::once(Interval::unison())
        .chain(steps.iter().copied())
        .map(|step| step.to_string());
    for ((label, hz), v) in labels.zip(&freqs).zip(&volts) {
        let midi = et.hz_to_midi(*hz);
        println!("{label:>10} {hz:>10.3} {midi:>10.3} {v:>8.4}");
    }
    Ok(())
}

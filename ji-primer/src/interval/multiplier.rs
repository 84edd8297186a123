//! Scaling an interval's integer ladder until it has enough smooth rungs.
//!
//! Interval `p:q` scaled by `M` spans the integers `M·q ..= M·p`. Every
//! two kept neighbours `a > b` on that ladder give a step `a/b`, and the
//! steps telescope back to `p/q`.

use log::{debug, trace};

use super::{smooth::is_p_smooth, IntervalError, IntervalResult};

/// Integers `bottom ..= top` of a scaled interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    top: u64,
    bottom: u64,
}
impl Ladder {
    pub fn new(
        multiplier: u64,
        numer: u64,
        denom: u64,
    ) -> IntervalResult<Self> {
        let scale = |value: u64| {
            value.checked_mul(multiplier).ok_or_else(|| {
                IntervalError::InvalidArguments(format!(
                    "ladder of {numer}:{denom} scaled by {multiplier} \
                    does not fit into u64"
                ))
            })
        };
        Ok(Self {
            top: scale(numer)?,
            bottom: scale(denom)?,
        })
    }
    pub fn top(&self) -> u64 {
        self.top
    }
    pub fn bottom(&self) -> u64 {
        self.bottom
    }
    /// From top down to bottom, inclusive.
    pub fn rungs(&self) -> impl Iterator<Item = u64> {
        (self.bottom..=self.top).rev()
    }
    /// [Ladder::rungs] that are `prime_limit`-smooth.
    pub fn smooth_rungs(
        &self,
        prime_limit: Option<u64>,
    ) -> impl Iterator<Item = u64> {
        self.rungs().filter(move |k| is_p_smooth(*k, prime_limit))
    }
}

/// Upper bound of parts for limits where scaling can not help.
///
/// Under the 2-limit only powers of two survive, and the log2-width of
/// `p:q` does not change with scaling, so any window holds at most
/// `floor(log2(p/q)) + 1` of them. Below 2 only the integer 1 survives.
///
/// # Returns
///
/// `None` if the amount of smooth rungs grows with the multiplier.
pub fn max_parts(p: u64, q: u64, prime_limit: u64) -> Option<u64> {
    match prime_limit {
        0 | 1 => Some(0),
        2 => Some(floor_log2_ratio(p, q)),
        _ => None,
    }
}

/// `floor(log2(p/q))` for `p > q > 0`, in integers.
fn floor_log2_ratio(p: u64, q: u64) -> u64 {
    let p = p as u128;
    let mut rung = q as u128 * 2;
    let mut exponent = 0;
    while rung <= p {
        exponent += 1;
        rung *= 2;
    }
    exponent
}

/// Smallest `M` such that the ladder `M·q ..= M·p` has at least
/// `parts + 1` integers whose prime factors are all <= `prime_limit`.
///
/// Without prime limit every integer counts, so `M = ceil(parts / (p - q))`.
///
/// # Example
///
/// ```
/// # use ji_primer::{minimal_multiplier, IntervalError};
/// assert_eq!(minimal_multiplier(2, 1, 4, None).unwrap(), 4);
/// // 5 6 8 9 10
/// assert_eq!(minimal_multiplier(2, 1, 4, 5_u64).unwrap(), 5);
/// assert!(matches!(
///     minimal_multiplier(5, 4, 5, 2_u64),
///     Err(IntervalError::Infeasible { max_parts: 0, .. })
/// ));
/// ```
pub fn minimal_multiplier(
    p: u64,
    q: u64,
    parts: u64,
    prime_limit: impl Into<Option<u64>>,
) -> IntervalResult<u64> {
    if q == 0 || p <= q {
        return Err(IntervalError::InvalidArguments(format!(
            "require positive integers with p > q, got {p}:{q}"
        )));
    }
    if parts < 1 {
        return Err(IntervalError::InvalidArguments(
            "parts must be >= 1".to_string(),
        ));
    }
    let lower_bound = ceil_div(parts, p - q).max(1);
    let prime_limit = match prime_limit.into() {
        None => return Ok(lower_bound),
        Some(limit) => limit,
    };
    if let Some(max_parts) = max_parts(p, q, prime_limit) {
        if parts > max_parts {
            return Err(IntervalError::Infeasible {
                numer: p,
                denom: q,
                parts,
                prime_limit,
                max_parts,
            });
        }
    }

    let mut multiplier = lower_bound;
    loop {
        let survivors = Ladder::new(multiplier, p, q)?
            .smooth_rungs(Some(prime_limit))
            .count() as u64;
        trace!("{p}:{q} scaled by {multiplier} has {survivors} smooth rungs");
        if survivors > parts {
            debug!(
                "minimal multiplier for {parts} parts of {p}:{q} in \
                {prime_limit}-limit: {multiplier}"
            );
            return Ok(multiplier);
        }
        multiplier += 1;
    }
}

fn ceil_div(a: u64, b: u64) -> u64 {
    a / b + u64::from(a % b != 0)
}

#[cfg(test)]
mod tests {
    use super::{max_parts, minimal_multiplier, Ladder};
    use crate::interval::IntervalError;

    #[test]
    fn ladder() {
        let ladder = Ladder::new(4, 3, 2).unwrap();
        assert_eq!((ladder.top(), ladder.bottom()), (12, 8));
        assert_eq!(ladder.rungs().collect::<Vec<_>>(), vec![12, 11, 10, 9, 8]);
        assert_eq!(
            ladder.smooth_rungs(Some(5)).collect::<Vec<_>>(),
            vec![12, 10, 9, 8]
        );
        assert!(Ladder::new(u64::MAX, 3, 2).is_err());
    }

    #[test]
    fn bounds() {
        assert_eq!(max_parts(2, 1, 2), Some(1));
        assert_eq!(max_parts(5, 4, 2), Some(0));
        assert_eq!(max_parts(8, 1, 2), Some(3));
        assert_eq!(max_parts(15, 1, 2), Some(3));
        assert_eq!(max_parts(3, 2, 1), Some(0));
        assert_eq!(max_parts(3, 2, 3), None);
    }

    #[test]
    fn unlimited() {
        assert_eq!(minimal_multiplier(2, 1, 4, None).unwrap(), 4);
        assert_eq!(minimal_multiplier(5, 3, 3, None).unwrap(), 2);
        assert_eq!(minimal_multiplier(7, 2, 2, None).unwrap(), 1);
    }

    #[test]
    fn limited() {
        assert_eq!(minimal_multiplier(2, 1, 4, 5_u64).unwrap(), 5);
        // 12 14 15 16 18
        assert_eq!(minimal_multiplier(3, 2, 4, 7_u64).unwrap(), 6);
        // 18 20 24 25 27
        assert_eq!(minimal_multiplier(3, 2, 4, 5_u64).unwrap(), 9);
        assert_eq!(minimal_multiplier(4, 1, 2, 2_u64).unwrap(), 1);
        // 216 225 240 243 250 256, ends 215 and 258 are not smooth
        assert_eq!(minimal_multiplier(6, 5, 5, 5_u64).unwrap(), 43);
    }

    #[test]
    fn infeasible() {
        assert_eq!(
            minimal_multiplier(5, 4, 5, 2_u64),
            Err(IntervalError::Infeasible {
                numer: 5,
                denom: 4,
                parts: 5,
                prime_limit: 2,
                max_parts: 0
            })
        );
        assert!(matches!(
            minimal_multiplier(8, 1, 4, 2_u64),
            Err(IntervalError::Infeasible { max_parts: 3, .. })
        ));
        assert!(matches!(
            minimal_multiplier(2, 1, 1, 1_u64),
            Err(IntervalError::Infeasible { max_parts: 0, .. })
        ));
    }

    #[test]
    fn invalid_arguments() {
        let cases = [(1, 2, 1), (2, 2, 1), (2, 0, 1), (0, 0, 1), (2, 1, 0)];
        for (p, q, parts) in cases {
            assert!(matches!(
                minimal_multiplier(p, q, parts, None),
                Err(IntervalError::InvalidArguments(_))
            ));
        }
    }

    #[test]
    fn non_decreasing_in_parts() {
        for (p, q) in [(2, 1), (3, 2), (5, 4), (7, 4)] {
            for limit in [None, Some(5_u64), Some(7)] {
                let multipliers = (1..=6)
                    .map(|parts| {
                        minimal_multiplier(p, q, parts, limit).unwrap()
                    })
                    .collect::<Vec<_>>();
                assert!(
                    multipliers.windows(2).all(|w| w[0] <= w[1]),
                    "{p}:{q} in {limit:?}-limit: {multipliers:?}"
                );
            }
        }
    }
}

//! Dividing an interval into smaller steps. Page 26.

use itertools::Itertools;
use log::debug;

use fraction::Fraction;

use super::{
    multiplier::{minimal_multiplier, Ladder},
    ratio::Interval,
    smooth::is_p_smooth,
    IntervalError, IntervalResult,
};

impl Interval {
    /// Divide the interval into `parts` steps, optionally limiting the
    /// prime factors of the resulting intervals.
    ///
    /// Steps are ordered from the top of the interval down, and stacking
    /// them gives back exactly `self`.
    ///
    /// With a prime limit, every step is built of `prime_limit`-smooth
    /// integers. This is impossible if the interval itself exceeds the
    /// limit, or if the limit is too low for the interval to hold that many
    /// steps (see [crate::max_parts]).
    ///
    /// # Example
    ///
    /// ```
    /// # use ji_primer::Interval;
    /// let iv = |n, d| Interval::new(n, d).unwrap();
    /// assert_eq!(
    ///     iv(3, 2).divide(4, None).unwrap(),
    ///     vec![iv(12, 11), iv(11, 10), iv(10, 9), iv(9, 8)]
    /// );
    /// assert_eq!(
    ///     Interval::octave().divide(4, 5_u64).unwrap(),
    ///     vec![iv(10, 9), iv(9, 8), iv(4, 3), iv(6, 5)]
    /// );
    /// ```
    pub fn divide(
        &self,
        parts: u64,
        prime_limit: impl Into<Option<u64>>,
    ) -> IntervalResult<Vec<Interval>> {
        let prime_limit = prime_limit.into();
        let (numer, denom) = (self.numer(), self.denom());
        if parts < 1 {
            return Err(IntervalError::InvalidArguments(
                "parts must be >= 1".to_string(),
            ));
        }
        if numer <= denom {
            return Err(IntervalError::InvalidArguments(format!(
                "only intervals above 1/1 can be divided, got {self}"
            )));
        }

        let rungs = match prime_limit {
            None => {
                select_rungs(Ladder::new(parts, numer, denom)?.rungs(), parts)
            }
            Some(limit) => self.smooth_ladder_rungs(parts, limit)?,
        };
        let rungs = rungs.ok_or_else(|| IntervalError::Infeasible {
            numer,
            denom,
            parts,
            prime_limit: prime_limit.unwrap_or_default(),
            max_parts: 0,
        })?;

        let steps = rungs
            .into_iter()
            .tuple_windows()
            .map(|(a, b)| Interval::from_ratio(Fraction::new(a, b)))
            .collect::<Vec<_>>();
        debug!("{self} divided into {parts} parts: {}", steps.iter().join(" "));
        debug_assert_eq!(super::ratio::stack(&steps), Ok(*self));
        Ok(steps)
    }

    /// Rungs of the first ladder, at or above the minimal multiplier, which
    /// has both ends and at least `parts + 1` rungs smooth.
    ///
    /// The ends are `M·numer` and `M·denom`, so with a smooth interval they
    /// are smooth exactly when `M` is.
    fn smooth_ladder_rungs(
        &self,
        parts: u64,
        prime_limit: u64,
    ) -> IntervalResult<Option<Vec<u64>>> {
        let (numer, denom) = (self.numer(), self.denom());
        if self.prime_limit() > prime_limit {
            return Err(IntervalError::Infeasible {
                numer,
                denom,
                parts,
                prime_limit,
                max_parts: 0,
            });
        }
        let mut multiplier =
            minimal_multiplier(numer, denom, parts, prime_limit)?;
        loop {
            if is_p_smooth(multiplier, prime_limit) {
                let ladder = Ladder::new(multiplier, numer, denom)?;
                let survivors =
                    ladder.smooth_rungs(Some(prime_limit)).collect_vec();
                if survivors.len() as u64 > parts {
                    debug!(
                        "{self} in {prime_limit}-limit uses multiplier \
                        {multiplier}, rungs: {survivors:?}"
                    );
                    return Ok(select_rungs(survivors, parts));
                }
            }
            multiplier += 1;
        }
    }
}

/// Keep the `parts` highest rungs and the lowest one.
///
/// # Returns
///
/// `None` if there are not `parts + 1` rungs to walk.
fn select_rungs(
    rungs: impl IntoIterator<Item = u64>,
    parts: u64,
) -> Option<Vec<u64>> {
    let mut rungs = rungs.into_iter();
    let mut selected = rungs.by_ref().take(parts as usize).collect_vec();
    let bottom = rungs.last()?;
    selected.push(bottom);
    Some(selected)
}

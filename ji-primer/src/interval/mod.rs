//! Interval algebra and division.
//!
//! The leaf is the smoothness predicate, which the multiplier search uses
//! to find how far an interval's integer ladder has to be scaled. The
//! divider walks that ladder to cut an interval into steps.

use thiserror;

pub mod catalog;
pub mod divide;
pub mod multiplier;
pub mod ratio;
pub mod smooth;

pub use self::ratio::Interval;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Can not {operation} interval {interval}: {reason}")]
    InvalidOperand {
        operation: &'static str,
        interval: Interval,
        reason: &'static str,
    },
    #[error(
        "Impossible in {prime_limit}-limit: interval {numer}:{denom} can \
        yield at most {max_parts} parts (needs {parts})"
    )]
    Infeasible {
        numer: u64,
        denom: u64,
        parts: u64,
        prime_limit: u64,
        max_parts: u64,
    },
    #[error("Ratio does not fit in u64: {0}")]
    Overflow(String),
    #[error("Frequency must be > 0, got {0}")]
    DomainInput(f64),
}
pub type IntervalResult<T> = Result<T, IntervalError>;

//! Prime factorization and the P-smooth predicate.

/// Factorize by trial division.
///
/// # Returns
///
/// `(prime, exponent)` pairs in ascending order of primes. Empty for 0 and 1.
///
/// # Example
///
/// ```
/// # use ji_primer::prime_factors;
/// assert_eq!(prime_factors(360), vec![(2, 3), (3, 2), (5, 1)]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(k: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if k < 2 {
        return factors;
    }
    let mut rest = k;
    let mut divisor = 2_u64;
    while divisor <= rest / divisor {
        if rest % divisor == 0 {
            let mut exponent = 0;
            while rest % divisor == 0 {
                rest /= divisor;
                exponent += 1;
            }
            factors.push((divisor, exponent));
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        factors.push((rest, 1));
    }
    factors
}

/// 1 if `k` has no prime factors.
pub fn greatest_prime_factor(k: u64) -> u64 {
    prime_factors(k)
        .last()
        .map(|(prime, _)| *prime)
        .unwrap_or(1)
}

/// True if no prime factor of `k` exceeds `prime_limit`.
///
/// Without limit every integer is smooth. With a limit below 2 no primes
/// are allowed, so only 1 qualifies. 0 is never smooth under a limit.
pub fn is_p_smooth(k: u64, prime_limit: impl Into<Option<u64>>) -> bool {
    match prime_limit.into() {
        None => true,
        Some(limit) if limit < 2 => k == 1,
        Some(_) if k == 0 => false,
        Some(limit) => greatest_prime_factor(k) <= limit,
    }
}

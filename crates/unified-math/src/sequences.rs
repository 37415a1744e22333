// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Sequences
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fibonacci numbers and primes indexed by an integer n.
//!
//! Fibonacci is exact (arbitrary precision) and iterative; primes come
//! from trial division against the primes already found.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use unified_types::error::{UnifiedError, UnifiedResult};

/// Largest binary exponent a finite f64 can carry.
const F64_MAX_BITS: u64 = 1024;

/// nth Fibonacci number: F(n ≤ 0) = 0, F(1) = F(2) = 1, F(3) = 2, ...
pub fn fibonacci(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::zero();
    }
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 1..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

/// Largest n with F(n)^n inside the f64 range: F(39)^39 ≈ 1.7e304,
/// F(40)^40 ≈ 1e320. F grows as φ^n, so every larger n overflows too.
const FIB_POWER_MAX_N: i64 = 39;

/// Cap on the up-front allocation of the prime list.
const PRIME_PREALLOC_MAX: usize = 1 << 16;

/// F(n)^n as f64, with F(0)^0 = 1.
///
/// Negative n is `InvalidArgument` (0 raised to a negative power). Fails
/// with `Overflow` for n > 39, decided from n alone before any Fibonacci
/// term is built.
pub fn fibonacci_power(n: i64) -> UnifiedResult<f64> {
    if n < 0 {
        return Err(UnifiedError::InvalidArgument(format!(
            "Fibonacci({n})^{n} is 0 raised to a negative power"
        )));
    }
    let overflow = || UnifiedError::Overflow(format!("Fibonacci({n})^{n} exceeds f64 range"));
    if n > FIB_POWER_MAX_N {
        return Err(overflow());
    }

    let base = fibonacci(n);
    // bits(F^k) ≥ k·(bits(F) − 1) + 1; F ≤ 1 never overflows.
    let bits = base.bits();
    if bits > 1 && (n as u64).saturating_mul(bits - 1) >= F64_MAX_BITS {
        return Err(overflow());
    }
    let exponent = u32::try_from(n).map_err(|_| overflow())?;
    let value = base.pow(exponent).to_f64().ok_or_else(overflow)?;
    if !value.is_finite() {
        return Err(overflow());
    }
    Ok(value)
}

/// First `count` primes in increasing order.
pub fn first_primes(count: usize) -> Vec<u64> {
    let mut primes: Vec<u64> = Vec::with_capacity(count.min(PRIME_PREALLOC_MAX));
    let mut candidate: u64 = 2;
    while primes.len() < count {
        let is_prime = primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0);
        if is_prime {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}

/// nth prime, 1-indexed: nth_prime(1) = 2.
///
/// n ≤ 0 has no meaning and is rejected with `InvalidArgument`.
pub fn nth_prime(n: i64) -> UnifiedResult<u64> {
    if n <= 0 {
        return Err(UnifiedError::InvalidArgument(format!(
            "prime index must be >= 1, got {n}"
        )));
    }
    let count = usize::try_from(n).map_err(|_| {
        UnifiedError::InvalidArgument(format!("prime index {n} too large"))
    })?;
    first_primes(count)
        .last()
        .copied()
        .ok_or_else(|| UnifiedError::InvalidArgument(format!("no prime at index {n}")))
}

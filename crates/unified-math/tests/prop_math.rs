// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Property-Based Tests (proptest) for unified-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for unified-math using proptest.
//!
//! Covers: Fibonacci recurrence, prime sequence ordering and primality,
//! closeness symmetry.

use num_bigint::BigUint;
use proptest::prelude::*;
use unified_math::compare::is_close;
use unified_math::sequences::{fibonacci, first_primes, nth_prime};

// ── Fibonacci Properties ─────────────────────────────────────────────

proptest! {
    /// F(n) = F(n−1) + F(n−2) for every n ≥ 2, including large n.
    #[test]
    fn fibonacci_recurrence(n in 2i64..400) {
        prop_assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
    }

    /// Cassini: |F(n+1)² − F(n)·F(n+2)| = 1.
    #[test]
    fn fibonacci_cassini(n in 1i64..200) {
        let a = fibonacci(n);
        let b = fibonacci(n + 1);
        let c = fibonacci(n + 2);
        let lhs = &b * &b;
        let rhs = &a * &c;
        let diff = if lhs > rhs { lhs - rhs } else { rhs - lhs };
        prop_assert_eq!(diff, BigUint::from(1u32));
    }
}

// ── Prime Properties ─────────────────────────────────────────────────

proptest! {
    /// Primes are strictly increasing and nth_prime agrees with the list.
    #[test]
    fn primes_increasing(n in 2usize..500) {
        let primes = first_primes(n);
        prop_assert_eq!(primes.len(), n);
        for i in 1..n {
            prop_assert!(primes[i] > primes[i - 1]);
        }
        prop_assert_eq!(nth_prime(n as i64).unwrap(), primes[n - 1]);
    }

    /// Every returned value has no divisor in 2..=√p.
    #[test]
    fn nth_prime_is_prime(n in 1i64..2000) {
        let p = nth_prime(n).unwrap();
        let mut d = 2u64;
        while d * d <= p {
            prop_assert!(p % d != 0, "{} divisible by {}", p, d);
            d += 1;
        }
    }
}

// ── Closeness ────────────────────────────────────────────────────────

proptest! {
    /// is_close is symmetric and reflexive for finite values.
    #[test]
    fn is_close_symmetric(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        prop_assert_eq!(is_close(a, b, 1e-9), is_close(b, a, 1e-9));
        prop_assert!(is_close(a, a, 1e-9));
    }
}

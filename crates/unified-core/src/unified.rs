// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Unified Quantities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unified force, unified frequency and the Euler relation check.
//!
//! Per-state term:
//!   T_i = φ · F(n)^n · P(n) · Ω_i · (1 / r_i²) · X_i
//! where Ω_i and X_i are both the state resistance, so Ω enters squared.
//!
//! Force uses r_i = meters · meter_scale_i and divides the sum by
//! seconds · second_scale of the *last* state only. Frequency uses
//! r_i = meters and takes √ of the sum.
//!
//! Multiplication order follows the formula left to right so results are
//! reproducible bit-for-bit.

use num_complex::Complex64;
use std::f64::consts::PI;
use unified_math::compare::is_close;
use unified_math::sequences::{fibonacci_power, nth_prime};
use unified_types::constants::{OMEGA_0, PHI_GOLDEN, Q_ELECTRON, REL_TOL};
use unified_types::error::{UnifiedError, UnifiedResult};
use unified_types::state::StateParameterStore;

use crate::resistance::{state_resistance, state_scaling};

/// φ · F(n)^n · P(n), shared by every state term.
///
/// F(n)^n is evaluated first: it rejects large `n` cheaply, before the
/// prime search would walk n primes.
fn sequence_weight(n: i64) -> UnifiedResult<f64> {
    let fib_power = fibonacci_power(n)?;
    let prime = nth_prime(n)?;
    Ok(PHI_GOLDEN * fib_power * prime as f64)
}

/// (Ω_i, X_i) for one state; both are the state resistance.
fn resistance_pair(store: &StateParameterStore, state: &str) -> UnifiedResult<(f64, f64)> {
    let omega = state_resistance(store, state)?;
    // X_i: the state's own contribution, same coefficient as Ω_i.
    let contribution = state_resistance(store, state)?;
    Ok((omega, contribution))
}

/// 1 / r² for r² ≠ 0. Underflow to zero counts as zero.
fn inverse_square(name: &str, r: f64) -> UnifiedResult<f64> {
    let squared = r * r;
    require_nonzero(name, squared)?;
    Ok(1.0 / squared)
}

fn require_nonzero(name: &str, value: f64) -> UnifiedResult<()> {
    if value == 0.0 {
        return Err(UnifiedError::InvalidArgument(format!(
            "{name} must be non-zero (division by zero)"
        )));
    }
    Ok(())
}

/// Unified force over an ordered list of states.
///
/// Fails with `InvalidArgument` on an empty list, an unknown state, a
/// non-positive `n`, or a zero divisor; with `Overflow` when F(n)^n does
/// not fit an f64 (n ≥ 40).
pub fn force_unified<S: AsRef<str>>(
    store: &StateParameterStore,
    states: &[S],
    meters: f64,
    seconds: f64,
    n: i64,
) -> UnifiedResult<f64> {
    let Some(last) = states.last() else {
        return Err(UnifiedError::InvalidArgument(
            "force_unified requires at least one state".to_string(),
        ));
    };
    let weight = sequence_weight(n)?;

    let mut sum = 0.0_f64;
    for state in states {
        let state = state.as_ref();
        let (omega, contribution) = resistance_pair(store, state)?;
        let (meter_scale, _) = state_scaling(state);
        let inv = inverse_square("meters * meter_scale", meters * meter_scale)?;
        sum += weight * omega * inv * contribution;
    }

    // Only the last state's time scale applies to the divisor.
    let (_, second_scale) = state_scaling(last.as_ref());
    let divisor = seconds * second_scale;
    require_nonzero("seconds * second_scale", divisor)?;
    Ok(sum / divisor)
}

/// Unified frequency: √ of the unscaled per-state sum.
///
/// An empty list gives 0.0. A negative sum is a `NumericDomain` error.
pub fn frequency_unified<S: AsRef<str>>(
    store: &StateParameterStore,
    states: &[S],
    meters: f64,
    n: i64,
) -> UnifiedResult<f64> {
    let weight = sequence_weight(n)?;

    let mut sum = 0.0_f64;
    for state in states {
        let (omega, contribution) = resistance_pair(store, state.as_ref())?;
        let inv = inverse_square("meters", meters)?;
        sum += weight * omega * inv * contribution;
    }
    if sum < 0.0 {
        return Err(UnifiedError::NumericDomain(format!(
            "frequency sum is negative ({sum}), square root undefined"
        )));
    }
    Ok(sum.sqrt())
}

/// Frequency implied by a force: √(force · meters · seconds).
pub fn force_to_frequency(force: f64, meters: f64, seconds: f64) -> UnifiedResult<f64> {
    let product = force * (meters * seconds);
    if product < 0.0 {
        return Err(UnifiedError::NumericDomain(format!(
            "force * meters * seconds is negative ({product}), square root undefined"
        )));
    }
    Ok(product.sqrt())
}

/// Static check: Re(e^{iπ}) ≈ −1 and Ω₀·e² ≈ 1.
///
/// With the built-in constants the second condition is false
/// (Ω₀·e² ≈ 2.57e-38), so this returns `false`.
pub fn euler_relation() -> bool {
    let euler = Complex64::new(0.0, PI).exp();
    is_close(euler.re, -1.0, REL_TOL) && is_close(OMEGA_0 * Q_ELECTRON.powi(2), 1.0, REL_TOL)
}

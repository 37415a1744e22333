// ─────────────────────────────────────────────────────────────────────
// Unified Force Framework — Resistance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! State resistance coefficient Ω and meter/second scaling factors.
//!
//! The two lookups deliberately differ on unknown names: resistance is
//! strict (`InvalidArgument`), scaling falls back to (1.0, 1.0).

use tracing::warn;
use unified_types::error::UnifiedResult;
use unified_types::state::{
    StateKind, StateParameterStore, PROP_CHARGE, PROP_ELECTRON_DENSITY, PROP_ELECTRON_MASS,
    PROP_KAPPA, PROP_PERMITTIVITY, PROP_RHO, PROP_SOUND_SPEED, PROP_YOUNG,
};

/// Scaling applied when a state name is not recognised.
pub const NO_SCALING: (f64, f64) = (1.0, 1.0);

/// Resistance coefficient from the state's current parameters.
///
/// - solid:  ρ·Y
/// - liquid: ρ·κ
/// - gas:    ρ·c_s²
/// - plasma: n_e·e² / (ε₀·m_e)
pub fn state_resistance(store: &StateParameterStore, state: &str) -> UnifiedResult<f64> {
    let kind: StateKind = state.parse()?;
    let p = |name: &str| store.property(kind, name);

    let omega = match kind {
        StateKind::Solid => p(PROP_RHO)? * p(PROP_YOUNG)?,
        StateKind::Liquid => p(PROP_RHO)? * p(PROP_KAPPA)?,
        StateKind::Gas => {
            let c_s = p(PROP_SOUND_SPEED)?;
            p(PROP_RHO)? * (c_s * c_s)
        }
        StateKind::Plasma => {
            let e = p(PROP_CHARGE)?;
            (p(PROP_ELECTRON_DENSITY)? * (e * e))
                / (p(PROP_PERMITTIVITY)? * p(PROP_ELECTRON_MASS)?)
        }
    };
    Ok(omega)
}

/// Scaling of a known state as (meter_scale, second_scale).
pub fn kind_scaling(kind: StateKind) -> (f64, f64) {
    match kind {
        StateKind::Solid => (1.0, 1.0),
        StateKind::Liquid => (0.9, 0.95),
        StateKind::Gas => (0.5, 0.01),
        StateKind::Plasma => (10.0, 1.0),
    }
}

/// Scaling lookup by name. Unknown names yield [`NO_SCALING`], never an error.
pub fn state_scaling(state: &str) -> (f64, f64) {
    match state.parse::<StateKind>() {
        Ok(kind) => kind_scaling(kind),
        Err(_) => {
            warn!(state, "unknown state, using unit scaling");
            NO_SCALING
        }
    }
}
